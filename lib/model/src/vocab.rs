/// Operator names of the logical form.
pub mod lf {
    pub const JOIN: &str = "JOIN";
    pub const AND: &str = "AND";
    pub const ARGMAX: &str = "ARGMAX";
    pub const ARGMIN: &str = "ARGMIN";
    /// Wraps a relation that is traversed from object to subject.
    pub const REVERSE: &str = "R";
}

/// The XSD vocabulary, re-exported from oxrdf.
pub mod xsd {
    pub use oxrdf::vocab::xsd::DATE;
}
