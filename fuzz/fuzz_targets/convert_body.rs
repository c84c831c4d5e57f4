#![no_main]

use libfuzzer_sys::fuzz_target;
use lispform_compiler::{Converter, Query};

// Wraps the input into the query template so that the later stages are reached.
fuzz_target!(|data: &[u8]| {
    let Ok(body) = std::str::from_utf8(data) else {
        return;
    };
    let converter = Converter::default();
    let query = Query::new(format!(
        "PREFIX ns: <http://rdf.freebase.com/ns/>\nSELECT DISTINCT ?x\nWHERE {{\n{body}\n}}\n"
    ));
    let first = converter.convert(&query);
    assert_eq!(first, converter.convert(&query));
});
