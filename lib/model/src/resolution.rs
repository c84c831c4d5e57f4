use crate::{Token, Triplet};
use std::slice;

/// The triplets incident to a single variable, in the order they were taken from the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEntry {
    pub variable: Token,
    pub triplets: Vec<Triplet>,
}

impl DependencyEntry {
    pub fn new(variable: Token, triplets: Vec<Triplet>) -> Self {
        Self {
            variable,
            triplets,
        }
    }
}

/// A root-anchored partition of all triplets of a query.
///
/// The first entry always belongs to the answer variable. Every other variable appears after the
/// variable through which it was discovered, and every triplet belongs to exactly one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionOrder {
    entries: Vec<DependencyEntry>,
}

impl ResolutionOrder {
    /// Creates a new [ResolutionOrder].
    ///
    /// The caller is responsible for placing the root entry first.
    pub fn new(entries: Vec<DependencyEntry>) -> Self {
        Self { entries }
    }

    /// Returns the entry of the answer variable.
    pub fn root(&self) -> Option<&DependencyEntry> {
        self.entries.first()
    }

    pub fn iter(&self) -> slice::Iter<'_, DependencyEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of triplets over all entries.
    pub fn triplet_count(&self) -> usize {
        self.entries.iter().map(|e| e.triplets.len()).sum()
    }
}

impl<'order> IntoIterator for &'order ResolutionOrder {
    type Item = &'order DependencyEntry;
    type IntoIter = slice::Iter<'order, DependencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
