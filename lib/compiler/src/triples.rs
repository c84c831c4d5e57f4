use crate::CompilerConfig;
use lispform_model::{ConversionError, ConversionResult, Token, Triplet};

/// Terminates every triple pattern in a query body.
pub const TERMINATOR: char = '.';

/// Converts normalized body lines into [Triplet]s, preserving the line order.
pub fn extract_triplets(lines: &[&str], config: &CompilerConfig) -> ConversionResult<Vec<Triplet>> {
    lines
        .iter()
        .map(|line| parse_triplet_line(line, config))
        .collect()
}

/// Parses a single `subject relation object .` line.
///
/// The line must end with a separate [TERMINATOR] token and consist of exactly three
/// whitespace-separated tokens before it. Namespace prefixes are stripped from all three tokens.
/// The relation must be a namespace-qualified name.
pub fn parse_triplet_line(line: &str, config: &CompilerConfig) -> ConversionResult<Triplet> {
    let line = line.trim();
    let Some(pattern) = line
        .strip_suffix(TERMINATOR)
        .filter(|pattern| pattern.ends_with(char::is_whitespace))
    else {
        return Err(ConversionError::MalformedTriple(format!(
            "missing terminator in '{line}'"
        )));
    };

    let mut tokens = pattern.split_whitespace();
    let (Some(subject), Some(relation), Some(object), None) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(ConversionError::MalformedTriple(format!(
            "expected three tokens in '{line}'"
        )));
    };

    let relation = Token::parse(relation, &config.namespace_prefix);
    if !matches!(relation, Token::Entity(_)) {
        return Err(ConversionError::MalformedTriple(format!(
            "'{relation}' is not a relation name in '{line}'"
        )));
    }
    Ok(Triplet::new(
        Token::parse(subject, &config.namespace_prefix),
        relation,
        Token::parse(object, &config.namespace_prefix),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_namespace_from_all_positions() {
        let config = CompilerConfig::default();
        let triplet =
            parse_triplet_line("ns:m.0443c ns:sports.pro_athlete.teams ?y .", &config).unwrap();
        assert_eq!(
            triplet,
            Triplet::new(
                Token::Entity("m.0443c".to_owned()),
                Token::Entity("sports.pro_athlete.teams".to_owned()),
                Token::variable("y"),
            )
        );
    }

    #[test]
    fn test_missing_terminator() {
        let config = CompilerConfig::default();
        let err = parse_triplet_line("?x ns:a ns:b", &config).unwrap_err();
        assert!(matches!(err, ConversionError::MalformedTriple(_)));
    }

    #[test]
    fn test_literal_with_spaces_is_rejected() {
        let config = CompilerConfig::default();
        let err = extract_triplets(&["?x ns:a \"New York\"@en ."], &config).unwrap_err();
        assert!(matches!(err, ConversionError::MalformedTriple(_)));
    }

    #[test]
    fn test_terminator_must_be_separate() {
        let config = CompilerConfig::default();
        let err = parse_triplet_line("?x ns:rel.a ns:ent.1.", &config).unwrap_err();
        assert!(matches!(err, ConversionError::MalformedTriple(_)));
        parse_triplet_line("?x ns:rel.a ns:ent.1\t.", &config).unwrap();
    }

    #[test]
    fn test_variable_relation_is_rejected() {
        let config = CompilerConfig::default();
        let err = parse_triplet_line("?x ?r ns:m.01 .", &config).unwrap_err();
        assert!(matches!(err, ConversionError::MalformedTriple(_)));
    }

    #[test]
    fn test_literal_relation_is_rejected() {
        let config = CompilerConfig::default();
        for line in ["?x \"rel\" ns:m.01 .", "?x rdf:type ns:m.01 ."] {
            let err = parse_triplet_line(line, &config).unwrap_err();
            assert!(matches!(err, ConversionError::MalformedTriple(_)), "{line}");
        }
    }

    #[test]
    fn test_keeps_line_order() {
        let config = CompilerConfig::default();
        let triplets = extract_triplets(&["?y ns:b ns:e2 .", "?x ns:a ?y ."], &config).unwrap();
        assert_eq!(triplets[0].relation, Token::Entity("b".to_owned()));
        assert_eq!(triplets[1].relation, Token::Entity("a".to_owned()));
    }
}
