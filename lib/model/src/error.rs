use std::fmt::{Display, Formatter};

/// The result of a single conversion stage.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// An error that rejects a query.
///
/// A query that does not match the supported template family is never converted on a best-effort
/// basis. Every stage reports one of these errors instead and the caller decides whether to
/// propagate it or to record the query as unconvertible.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConversionError {
    /// The header, footer or block layout does not match any supported shape.
    #[error("Structural mismatch: {0}")]
    StructuralMismatch(String),
    /// The query contains a substring filter guard.
    #[error("Unsupported filter guard")]
    UnsupportedFilter,
    /// A body line does not decompose into subject, relation and object.
    #[error("Malformed triple: {0}")]
    MalformedTriple(String),
    /// The ordering clause does not single out exactly one body line.
    #[error("Expected exactly one line binding the ordering variable, found {candidates}")]
    AmbiguousSpecialClause { candidates: usize },
    /// Some triplets cannot be reached from the answer variable.
    #[error("Disconnected graph: {0}")]
    DisconnectedGraph(String),
    /// The resolution order and the synthesized clauses disagree.
    #[error("Internal inconsistency: {0}")]
    InternalInconsistency(String),
}

impl ConversionError {
    /// Creates a [ConversionError::StructuralMismatch] from a printable message.
    pub fn structural(msg: impl Into<String>) -> Self {
        Self::StructuralMismatch(msg.into())
    }

    /// Returns the kind of this error without its details.
    pub fn kind(&self) -> ConversionErrorKind {
        match self {
            ConversionError::StructuralMismatch(_) => ConversionErrorKind::StructuralMismatch,
            ConversionError::UnsupportedFilter => ConversionErrorKind::UnsupportedFilter,
            ConversionError::MalformedTriple(_) => ConversionErrorKind::MalformedTriple,
            ConversionError::AmbiguousSpecialClause { .. } => {
                ConversionErrorKind::AmbiguousSpecialClause
            }
            ConversionError::DisconnectedGraph(_) => ConversionErrorKind::DisconnectedGraph,
            ConversionError::InternalInconsistency(_) => {
                ConversionErrorKind::InternalInconsistency
            }
        }
    }
}

/// The detail-free counterpart of [ConversionError], used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConversionErrorKind {
    StructuralMismatch,
    UnsupportedFilter,
    MalformedTriple,
    AmbiguousSpecialClause,
    DisconnectedGraph,
    InternalInconsistency,
}

impl Display for ConversionErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConversionErrorKind::StructuralMismatch => "StructuralMismatch",
            ConversionErrorKind::UnsupportedFilter => "UnsupportedFilter",
            ConversionErrorKind::MalformedTriple => "MalformedTriple",
            ConversionErrorKind::AmbiguousSpecialClause => "AmbiguousSpecialClause",
            ConversionErrorKind::DisconnectedGraph => "DisconnectedGraph",
            ConversionErrorKind::InternalInconsistency => "InternalInconsistency",
        };
        f.write_str(name)
    }
}
