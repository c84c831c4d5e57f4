use crate::vocab::lf;
use crate::Direction;
use std::fmt::{Display, Formatter};

/// A logical form, i.e., a tree of relational operators over knowledge-base names.
///
/// The tree is only rendered to text when it is displayed. Every operator node is wrapped in
/// parentheses, leaves are written verbatim.
///
/// # Example
///
/// ```
/// use lispform_model::Expression;
///
/// let expr = Expression::join(
///     "rel.a",
///     Expression::reverse_join("rel.b", Expression::atom("ent.2")),
/// );
/// assert_eq!(expr.to_string(), "(JOIN rel.a (JOIN (R rel.b) ent.2))");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// An entity, literal, or unresolved name.
    Atom(String),
    /// Follows `relation` from subject to object: `(JOIN relation arg)`.
    Join {
        relation: String,
        arg: Box<Expression>,
    },
    /// Follows `relation` from object to subject: `(JOIN (R relation) arg)`.
    ReverseJoin {
        relation: String,
        arg: Box<Expression>,
    },
    /// The intersection of two clauses: `(AND left right)`.
    And(Box<Expression>, Box<Expression>),
    /// The extremal binding of `body` under `relation`: `(ARGMAX body relation)`.
    ArgExtreme {
        direction: Direction,
        body: Box<Expression>,
        relation: String,
    },
}

impl Expression {
    pub fn atom(name: impl Into<String>) -> Self {
        Expression::Atom(name.into())
    }

    pub fn join(relation: impl Into<String>, arg: Expression) -> Self {
        Expression::Join {
            relation: relation.into(),
            arg: Box::new(arg),
        }
    }

    pub fn reverse_join(relation: impl Into<String>, arg: Expression) -> Self {
        Expression::ReverseJoin {
            relation: relation.into(),
            arg: Box::new(arg),
        }
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And(Box::new(left), Box::new(right))
    }

    pub fn arg_extreme(direction: Direction, body: Expression, relation: impl Into<String>) -> Self {
        Expression::ArgExtreme {
            direction,
            body: Box::new(body),
            relation: relation.into(),
        }
    }

    /// Returns the number of nodes in this tree.
    pub fn size(&self) -> usize {
        match self {
            Expression::Atom(_) => 1,
            Expression::Join { arg, .. } | Expression::ReverseJoin { arg, .. } => 1 + arg.size(),
            Expression::And(lhs, rhs) => 1 + lhs.size() + rhs.size(),
            Expression::ArgExtreme { body, .. } => 1 + body.size(),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Atom(name) => f.write_str(name),
            Expression::Join { relation, arg } => write!(f, "({} {relation} {arg})", lf::JOIN),
            Expression::ReverseJoin { relation, arg } => {
                write!(f, "({} ({} {relation}) {arg})", lf::JOIN, lf::REVERSE)
            }
            Expression::And(lhs, rhs) => write!(f, "({} {lhs} {rhs})", lf::AND),
            Expression::ArgExtreme {
                direction,
                body,
                relation,
            } => write!(f, "({direction} {body} {relation})"),
        }
    }
}
