use crate::vocab::lf;
use crate::Token;
use std::fmt::{Display, Formatter};

/// The direction of a superlative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `ORDER BY DESC(...)`, i.e., the greatest binding wins.
    Max,
    /// `ORDER BY ASC(...)` or a bare ordering, i.e., the smallest binding wins.
    Min,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Max => f.write_str(lf::ARGMAX),
            Direction::Min => f.write_str(lf::ARGMIN),
        }
    }
}

/// An additional constraint that is attached to a single pivot variable.
///
/// At most one special condition exists per query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SpecialCondition {
    /// A plain query.
    #[default]
    None,
    /// The answer is the extremal binding of `pivot` under `relation`.
    Superlative {
        direction: Direction,
        pivot: Token,
        relation: String,
    },
    /// `pivot` must hold during the given year, expressed through a time aggregate `relation`.
    Range {
        pivot: Token,
        relation: String,
        year: String,
    },
}

impl SpecialCondition {
    /// Returns the pivot variable whose clause this condition augments.
    pub fn pivot(&self) -> Option<&Token> {
        match self {
            SpecialCondition::None => None,
            SpecialCondition::Superlative { pivot, .. } | SpecialCondition::Range { pivot, .. } => {
                Some(pivot)
            }
        }
    }
}
