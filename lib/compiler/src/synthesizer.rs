use lispform_model::{
    ConversionError, ConversionResult, Expression, ResolutionOrder, SpecialCondition, Token,
    Triplet,
};
use std::collections::HashMap;

/// The clauses synthesized so far, by variable.
type ClauseTable = HashMap<Token, Expression>;

/// Folds a [ResolutionOrder] into the logical form of its root variable.
///
/// Variables are processed in reverse resolution order, so every variable that a clause refers to
/// has been synthesized before. For a variable with incident triplets `t0, ..., tn`, the clause of
/// `t0` is the seed and every further triplet is prepended as the left operand of an `AND`.
/// Afterwards, `condition` is applied if the variable is its pivot.
///
/// Fails with [ConversionError::DisconnectedGraph] if the pivot of `condition` is not part of
/// `order`, as the condition would otherwise be lost.
pub fn synthesize(
    order: &ResolutionOrder,
    condition: &SpecialCondition,
) -> ConversionResult<Expression> {
    let root = order
        .root()
        .ok_or_else(|| {
            ConversionError::InternalInconsistency("empty resolution order".to_owned())
        })?
        .variable
        .clone();

    let mut table = ClauseTable::new();
    let mut condition_applied = false;
    for entry in order.iter().rev() {
        let variable = &entry.variable;
        let Some((first, rest)) = entry.triplets.split_first() else {
            return Err(ConversionError::InternalInconsistency(format!(
                "{variable} has no triplets"
            )));
        };

        let mut clause = triplet_to_clause(variable, first, &table)?;
        for triplet in rest {
            let next = triplet_to_clause(variable, triplet, &table)?;
            clause = Expression::and(next, clause);
        }

        if condition.pivot() == Some(variable) {
            clause = apply_condition(clause, condition);
            condition_applied = true;
        }
        table.insert(variable.clone(), clause);
    }

    if let Some(pivot) = condition.pivot() {
        if !condition_applied {
            return Err(ConversionError::DisconnectedGraph(format!(
                "{pivot} of the special condition is not reachable from {root}"
            )));
        }
    }

    table.remove(&root).ok_or_else(|| {
        ConversionError::InternalInconsistency(format!("no clause for {root}"))
    })
}

fn apply_condition(clause: Expression, condition: &SpecialCondition) -> Expression {
    match condition {
        SpecialCondition::None => clause,
        SpecialCondition::Superlative {
            direction,
            relation,
            ..
        } => Expression::arg_extreme(*direction, clause, relation.as_str()),
        SpecialCondition::Range { relation, year, .. } => Expression::and(
            Expression::join(relation.as_str(), Expression::atom(year.as_str())),
            clause,
        ),
    }
}

/// Builds the clause that `triplet` contributes to `variable`.
///
/// If `variable` is the subject, the triplet is joined in its natural direction; if it is the
/// object, the relation is reversed. The other endpoint is replaced by its clause if it is a
/// variable.
fn triplet_to_clause(
    variable: &Token,
    triplet: &Triplet,
    table: &ClauseTable,
) -> ConversionResult<Expression> {
    let relation = triplet.relation.local_name();
    if triplet.subject == *variable {
        Ok(Expression::join(relation, resolve(&triplet.object, table)?))
    } else if triplet.object == *variable {
        Ok(Expression::reverse_join(
            relation,
            resolve(&triplet.subject, table)?,
        ))
    } else {
        Err(ConversionError::InternalInconsistency(format!(
            "{triplet} is not incident to {variable}"
        )))
    }
}

fn resolve(token: &Token, table: &ClauseTable) -> ConversionResult<Expression> {
    match table.get(token) {
        Some(clause) => Ok(clause.clone()),
        None if token.is_variable() => Err(ConversionError::InternalInconsistency(format!(
            "{token} is referenced before its clause is synthesized"
        ))),
        None => Ok(Expression::atom(token.local_name())),
    }
}
