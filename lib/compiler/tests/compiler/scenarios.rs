use crate::test_utils::{plain_query, range_query, superlative_query, PREFIX};
use lispform_compiler::{Converter, Query};
use lispform_model::{ConversionError, ConversionResult, Direction, Expression};

fn convert(query: &Query) -> ConversionResult<Expression> {
    Converter::default().convert(query)
}

#[test]
fn test_single_triplet() -> ConversionResult<()> {
    let expr = convert(&plain_query(&["?x ns:rel.a ns:ent.1 ."]))?;
    insta::assert_snapshot!(expr, @"(JOIN rel.a ent.1)");
    Ok(())
}

#[test]
fn test_chain_substitutes_inner_clause() -> ConversionResult<()> {
    let expr = convert(&plain_query(&["?x ns:rel.a ?y .", "?y ns:rel.b ns:ent.2 ."]))?;
    assert_eq!(
        expr,
        Expression::join("rel.a", Expression::join("rel.b", Expression::atom("ent.2")))
    );
    insta::assert_snapshot!(expr, @"(JOIN rel.a (JOIN rel.b ent.2))");
    Ok(())
}

#[test]
fn test_guards_and_multiple_constraints() -> ConversionResult<()> {
    let expr = convert(&plain_query(&[
        "FILTER (?x != ns:m.09c7w0)",
        "FILTER (!isLiteral(?x) OR lang(?x) = '' OR langMatches(lang(?x), 'en'))",
        "ns:m.09c7w0 ns:location.country.capital ?x .",
        "?x ns:common.topic.notable_types ns:m.01m9 .",
    ]))?;
    insta::assert_snapshot!(expr, @"(AND (JOIN common.topic.notable_types m.01m9) (JOIN (R location.country.capital) m.09c7w0))");
    Ok(())
}

#[test]
fn test_reverse_chain() -> ConversionResult<()> {
    let expr = convert(&plain_query(&[
        "?c ns:sports.sports_team.championships ns:m.0cc7hmp .",
        "?c ns:sports.sports_team.roster ?y .",
        "?y ns:sports.sports_team_roster.player ?x .",
    ]))?;
    insta::assert_snapshot!(expr, @"(JOIN (R sports.sports_team_roster.player) (JOIN (R sports.sports_team.roster) (JOIN sports.sports_team.championships m.0cc7hmp)))");
    Ok(())
}

#[test]
fn test_superlative_ascending() -> ConversionResult<()> {
    let expr = convert(&superlative_query(
        &[
            "FILTER (?x != ns:m.0443c)",
            "FILTER (!isLiteral(?x) OR lang(?x) = '' OR langMatches(lang(?x), 'en'))",
            "ns:m.0443c ns:sports.pro_athlete.teams ?y .",
            "?y ns:sports.sports_team_roster.team ?x .",
            "?y ns:sports.sports_team_roster.from ?sk0 .",
        ],
        false,
    ))?;
    insta::assert_snapshot!(expr, @"(JOIN (R sports.sports_team_roster.team) (ARGMIN (JOIN (R sports.pro_athlete.teams) m.0443c) sports.sports_team_roster.from))");
    Ok(())
}

#[test]
fn test_superlative_descending_wraps_pivot() -> ConversionResult<()> {
    let expr = convert(&superlative_query(
        &["?x ns:rel.to ?y .", "?y ns:rel.b ns:ent.2 .", "?y ns:rel.from ?sk0 ."],
        true,
    ))?;
    assert_eq!(
        expr,
        Expression::join(
            "rel.to",
            Expression::arg_extreme(
                Direction::Max,
                Expression::join("rel.b", Expression::atom("ent.2")),
                "rel.from"
            )
        )
    );
    Ok(())
}

#[test]
fn test_superlative_on_answer_variable() -> ConversionResult<()> {
    let expr = convert(&superlative_query(
        &[
            "ns:m.0d05w3 ns:location.location.contains ?x .",
            "?x ns:location.location.date_founded ?sk0 .",
        ],
        true,
    ))?;
    insta::assert_snapshot!(expr, @"(ARGMAX (JOIN (R location.location.contains) m.0d05w3) location.location.date_founded)");
    Ok(())
}

#[test]
fn test_range() -> ConversionResult<()> {
    let expr = convert(&range_query(
        &[
            "ns:m.04f_xd8 ns:government.government_office_or_title.office_holders ?y .",
            "?y ns:government.government_position_held.office_holder ?x .",
        ],
        "?y",
        "government.government_position_held",
    ))?;
    insta::assert_snapshot!(expr, @"(JOIN (R government.government_position_held.office_holder) (AND (JOIN government.government_position_held.time_macro 2009^^http://www.w3.org/2001/XMLSchema#date) (JOIN (R government.government_office_or_title.office_holders) m.04f_xd8)))");
    Ok(())
}

#[test]
fn test_conversion_is_deterministic() -> ConversionResult<()> {
    let query = plain_query(&[
        "ns:m.01 ns:a.b.c ?y .",
        "?y ns:a.b.d ?x .",
        "?z ns:a.b.e ns:m.03 .",
        "?z ns:a.b.f ?x .",
        "?x ns:a.b.g ns:m.02 .",
    ]);
    let first = convert(&query)?.to_string();
    for _ in 0..10 {
        assert_eq!(convert(&query)?.to_string(), first);
    }
    Ok(())
}

#[test]
fn test_missing_block_opening_is_structural_mismatch() {
    let query = Query::new(format!(
        "{PREFIX}\nSELECT DISTINCT ?x\n?x ns:rel.a ns:ent.1 .\n}}\n"
    ));
    assert!(matches!(
        convert(&query),
        Err(ConversionError::StructuralMismatch(_))
    ));
}

#[test]
fn test_other_answer_variable_is_structural_mismatch() {
    let headers = [
        "SELECT DISTINCT ?y",
        "SELECT DISTINCT ?xy",
        "SELECT DISTINCT ?x ?c",
        "SELECT DISTINCT",
    ];
    for header in headers {
        let query = Query::new(format!(
            "{header}\nWHERE {{\n?x ns:a.b.c ?c .\n?c ns:a.b.d ns:m.01 .\n}}"
        ));
        assert!(
            matches!(convert(&query), Err(ConversionError::StructuralMismatch(_))),
            "{header}"
        );
    }
}

#[test]
fn test_superlative_on_unreachable_variable_is_rejected() {
    let query = superlative_query(&["?x ns:rel.a ns:ent.1 .", "?z ns:rel.from ?sk0 ."], true);
    assert!(matches!(
        convert(&query),
        Err(ConversionError::DisconnectedGraph(_))
    ));
}

#[test]
fn test_range_on_unreachable_variable_is_rejected() {
    let query = range_query(&["?x ns:rel.a ns:ent.1 ."], "?z", "a.b");
    assert!(matches!(
        convert(&query),
        Err(ConversionError::DisconnectedGraph(_))
    ));
}

#[test]
fn test_variable_relation_is_malformed() {
    let query = plain_query(&["?x ?r ns:m.01 ."]);
    assert!(matches!(
        convert(&query),
        Err(ConversionError::MalformedTriple(_))
    ));
}

#[test]
fn test_unreachable_variable_is_disconnected() {
    let query = plain_query(&["?x ns:rel.a ns:ent.1 .", "?w ns:rel.b ns:ent.2 ."]);
    assert!(matches!(
        convert(&query),
        Err(ConversionError::DisconnectedGraph(_))
    ));
}

#[test]
fn test_malformed_line() {
    let query = plain_query(&["?x ns:rel.a ns:ent.1"]);
    assert!(matches!(
        convert(&query),
        Err(ConversionError::MalformedTriple(_))
    ));
}

#[test]
fn test_string_filter() {
    let query = plain_query(&[
        "?x ns:type.object.name ?n .",
        "FILTER (str(?n) = \"Paris\")",
    ]);
    assert_eq!(convert(&query), Err(ConversionError::UnsupportedFilter));
}
