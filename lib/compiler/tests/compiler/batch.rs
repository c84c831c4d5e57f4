use crate::test_utils::{plain_query, PREFIX};
use lispform_compiler::{Converter, Query};
use lispform_model::ConversionErrorKind;
use std::thread;

fn well_formed_queries(count: usize) -> Vec<Query> {
    (0..count)
        .map(|i| {
            let head = format!("?x ns:rel.a{i} ?y .");
            plain_query(&[head.as_str(), "?y ns:rel.b ns:ent.2 ."])
        })
        .collect()
}

#[test]
fn test_single_rejection_does_not_abort_batch() {
    let mut queries = well_formed_queries(9);
    queries.insert(
        4,
        Query::new(format!(
            "{PREFIX}\nSELECT DISTINCT ?x\n?x ns:rel.a ns:ent.1 .\n}}\n"
        )),
    );

    let report = Converter::default().convert_batch(&queries);
    assert_eq!(report.total(), 10);
    assert_eq!(report.converted(), 9);
    assert!((report.hit_rate() - 0.9).abs() < 1e-9);
    assert_eq!(
        report.rejections.get(&ConversionErrorKind::StructuralMismatch),
        Some(&1)
    );

    let rendered = report.rendered("null");
    assert_eq!(rendered[4], "null");
    assert_eq!(rendered[0], "(JOIN rel.a0 (JOIN rel.b ent.2))");
    assert_eq!(rendered[9], "(JOIN rel.a8 (JOIN rel.b ent.2))");
}

#[test]
fn test_rejections_are_counted_per_kind() {
    let queries = vec![
        plain_query(&["?x ns:rel.a ns:ent.1"]),
        plain_query(&["?x ns:rel.a ns:ent.1 .", "?w ns:rel.b ns:ent.2 ."]),
        plain_query(&["?x ns:rel.a ns:ent.1 .", "?w ns:rel.b ns:ent.2 ."]),
        Query::new("#MANUAL SPARQL\nSELECT DISTINCT ?x\nWHERE {\n?x ns:a ns:b .\n}"),
    ];

    let report = Converter::default().convert_batch(&queries);
    assert_eq!(report.converted(), 0);
    assert_eq!(
        report.rejections.get(&ConversionErrorKind::MalformedTriple),
        Some(&1)
    );
    assert_eq!(
        report.rejections.get(&ConversionErrorKind::DisconnectedGraph),
        Some(&2)
    );
    assert_eq!(
        report.rejections.get(&ConversionErrorKind::StructuralMismatch),
        Some(&1)
    );
}

#[test]
fn test_concurrent_conversion_matches_sequential() {
    let queries = well_formed_queries(32);
    let converter = Converter::default();
    let expected = converter.convert_batch(&queries).rendered("null");

    thread::scope(|scope| {
        let handles = queries
            .chunks(8)
            .map(|chunk| {
                let converter = &converter;
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|q| converter.convert_or_sentinel(q))
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();

        let actual = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(actual, expected);
    });
}
