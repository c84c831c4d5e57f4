#![no_main]

use libfuzzer_sys::fuzz_target;
use lispform_compiler::{Converter, Query};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let converter = Converter::default();
    let query = Query::new(text);
    let rendered = converter.convert_or_sentinel(&query);
    match converter.convert(&query) {
        Ok(expression) => assert_eq!(expression.to_string(), rendered),
        Err(_) => assert_eq!(rendered, converter.config().sentinel),
    }
});
