use lispform_model::vocab::xsd;
use lispform_model::Token;

/// The value recorded for a query that cannot be converted.
pub const DEFAULT_SENTINEL: &str = "null";

/// Holds the configuration of a [Converter](crate::Converter).
///
/// The defaults match the query template of the ComplexWebQuestions generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    /// The answer variable named in the `SELECT DISTINCT` header, including `?`.
    pub answer_variable: String,
    /// The variable that the ordering clause of a superlative query refers to, including `?`.
    pub auxiliary_variable: String,
    /// The namespace prefix stripped from entities and relations.
    pub namespace_prefix: String,
    /// The last segment of the time aggregate relation synthesized for range queries.
    pub time_macro_suffix: String,
    /// The first line of a manually authored query.
    pub manual_marker: String,
    /// The datatype IRI attached to the year literal of range queries.
    pub date_datatype: String,
    /// The value recorded for rejected queries.
    pub sentinel: String,
}

impl CompilerConfig {
    /// Returns the answer variable as a [Token].
    pub fn answer_token(&self) -> Token {
        Token::parse(&self.answer_variable, &self.namespace_prefix)
    }

    /// Strips the namespace prefix from `raw`, if present.
    pub fn strip_namespace<'raw>(&self, raw: &'raw str) -> &'raw str {
        raw.strip_prefix(self.namespace_prefix.as_str())
            .unwrap_or(raw)
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            answer_variable: "?x".to_owned(),
            auxiliary_variable: "?sk0".to_owned(),
            namespace_prefix: "ns:".to_owned(),
            time_macro_suffix: "time_macro".to_owned(),
            manual_marker: "#MANUAL SPARQL".to_owned(),
            date_datatype: xsd::DATE.as_str().to_owned(),
            sentinel: DEFAULT_SENTINEL.to_owned(),
        }
    }
}
