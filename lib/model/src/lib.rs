//! The data model shared by the lispform crates: tokens and triplets taken from SPARQL query
//! bodies, the special conditions attached to them, and the logical forms they are compiled into.

mod condition;
mod error;
mod expression;
mod resolution;
mod token;
mod triplet;
pub mod vocab;

pub use condition::*;
pub use error::*;
pub use expression::*;
pub use resolution::*;
pub use token::*;
pub use triplet::*;
