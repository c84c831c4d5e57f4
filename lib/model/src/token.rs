use std::fmt::{Display, Formatter};

/// A single term of a triple pattern.
///
/// Namespace prefixes are stripped when a token is created. Only the local name of an entity or
/// relation is kept, which is also the name that appears in the emitted logical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    /// A query variable. The name is stored without the leading `?`.
    Variable(String),
    /// A namespace-qualified entity or relation, stored by its local name.
    Entity(String),
    /// Anything else, kept verbatim (e.g., typed literals).
    Literal(String),
}

impl Token {
    /// Classifies `raw` and strips `namespace_prefix` from qualified references.
    ///
    /// ```
    /// use lispform_model::Token;
    ///
    /// assert_eq!(Token::parse("?y", "ns:"), Token::Variable("y".to_owned()));
    /// assert_eq!(Token::parse("ns:m.0abc", "ns:"), Token::Entity("m.0abc".to_owned()));
    /// assert_eq!(Token::parse("\"1961\"", "ns:"), Token::Literal("\"1961\"".to_owned()));
    /// ```
    pub fn parse(raw: &str, namespace_prefix: &str) -> Self {
        if let Some(name) = raw.strip_prefix('?') {
            Token::Variable(name.to_owned())
        } else if let Some(local) = raw.strip_prefix(namespace_prefix) {
            Token::Entity(local.to_owned())
        } else {
            Token::Literal(raw.to_owned())
        }
    }

    /// Creates a variable token from its name (without `?`).
    pub fn variable(name: impl Into<String>) -> Self {
        Token::Variable(name.into())
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Token::Variable(_))
    }

    /// Returns the text of this token as it appears in a logical form.
    pub fn local_name(&self) -> &str {
        match self {
            Token::Variable(name) | Token::Entity(name) | Token::Literal(name) => name,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Variable(name) => write!(f, "?{name}"),
            Token::Entity(name) | Token::Literal(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_only_strips_configured_prefix() {
        assert_eq!(
            Token::parse("xsd:dateTime", "ns:"),
            Token::Literal("xsd:dateTime".to_owned())
        );
        assert_eq!(
            Token::parse("fb:people.person", "fb:"),
            Token::Entity("people.person".to_owned())
        );
    }

    #[test]
    fn test_display_keeps_variable_marker() {
        assert_eq!(Token::variable("x").to_string(), "?x");
        assert_eq!(Token::parse("ns:m.01", "ns:").to_string(), "m.01");
    }
}
