use crate::Token;
use std::fmt::{Display, Formatter};

/// A `subject relation object` pattern taken from one body line of a query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triplet {
    pub subject: Token,
    pub relation: Token,
    pub object: Token,
}

impl Triplet {
    pub fn new(subject: Token, relation: Token, object: Token) -> Self {
        Self {
            subject,
            relation,
            object,
        }
    }

    /// Returns whether `variable` is the subject or the object of this triplet.
    pub fn is_incident_to(&self, variable: &Token) -> bool {
        self.subject == *variable || self.object == *variable
    }

    /// Returns the endpoint opposite to `variable`, if `variable` is an endpoint at all.
    ///
    /// If `variable` is both subject and object, the object is returned.
    pub fn other_endpoint(&self, variable: &Token) -> Option<&Token> {
        if self.subject == *variable {
            Some(&self.object)
        } else if self.object == *variable {
            Some(&self.subject)
        } else {
            None
        }
    }
}

impl Display for Triplet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.subject, self.relation, self.object)
    }
}
