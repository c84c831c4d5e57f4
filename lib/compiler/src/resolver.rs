use lispform_model::{
    ConversionError, ConversionResult, DependencyEntry, ResolutionOrder, Token, Triplet,
};
use std::collections::{HashSet, VecDeque};
use tracing::trace;

/// Partitions `triplets` over the variables reachable from `root`.
///
/// Variables are visited breadth-first, starting at `root`. Each visited variable claims all
/// triplets from the remaining pool that it is an endpoint of, and every variable on the other end
/// of a claimed triplet is queued unless it has been seen before. Hence, a variable is always
/// resolved after the variable through which it was discovered.
///
/// Fails with [ConversionError::DisconnectedGraph] if a queued variable claims no triplet or if
/// triplets remain in the pool once the queue is exhausted.
pub fn resolve_dependencies(
    triplets: Vec<Triplet>,
    root: &Token,
) -> ConversionResult<ResolutionOrder> {
    let mut pool = triplets;
    let mut queue = VecDeque::from([root.clone()]);
    let mut seen = HashSet::from([root.clone()]);
    let mut entries = Vec::new();

    while let Some(variable) = queue.pop_front() {
        let (incident, rest): (Vec<_>, Vec<_>) = pool
            .into_iter()
            .partition(|triplet| triplet.is_incident_to(&variable));
        pool = rest;

        if incident.is_empty() {
            return Err(ConversionError::DisconnectedGraph(format!(
                "{variable} is not anchored by any triplet"
            )));
        }

        for triplet in &incident {
            let Some(other) = triplet.other_endpoint(&variable) else {
                continue;
            };
            if other.is_variable() && seen.insert(other.clone()) {
                queue.push_back(other.clone());
            }
        }

        trace!("Resolved {variable} with {} triplet(s)", incident.len());
        entries.push(DependencyEntry::new(variable, incident));
    }

    if !pool.is_empty() {
        let orphans = pool
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(ConversionError::DisconnectedGraph(format!(
            "unreachable triplets {orphans}"
        )));
    }

    Ok(ResolutionOrder::new(entries))
}
