//! Recognizes the fixed query template and reduces a query to its triple pattern lines.
//!
//! Three body shapes are supported:
//!
//! ```text
//! Plain                     Superlative                        Range
//! WHERE {                   WHERE {                            WHERE {
//! <body>                    <body>                             <body>
//! }                         ?y ns:r.from ?sk0 .                FILTER(NOT EXISTS {?y ns:a.b.from ?sk0} ||
//!                           }                                  EXISTS {?y ns:a.b.from ?sk1 .
//!                           ORDER BY DESC(xsd:datetime(?sk0))  FILTER(xsd:datetime(?sk1) <= "2009-12-31"^^xsd:dateTime) })
//!                           LIMIT 1                            FILTER(NOT EXISTS {?y ns:a.b.to ?sk2} ||
//!                                                              EXISTS {?y ns:a.b.to ?sk3 .
//!                                                              FILTER(xsd:datetime(?sk3) >= "2009-01-01"^^xsd:dateTime) })
//!                                                              }
//! ```
//!
//! The shapes are recognized by the position of their trailing lines. The generator always emits
//! the same tail, so anything that deviates from it is rejected.

use crate::triples::parse_triplet_line;
use crate::CompilerConfig;
use lispform_model::{ConversionError, ConversionResult, Direction, SpecialCondition, Token};
use tracing::trace;

const PREFIX_KEYWORD: &str = "PREFIX";
const SELECT_KEYWORD: &str = "SELECT DISTINCT";
const BLOCK_OPEN: &str = "WHERE {";
const BLOCK_CLOSE: &str = "}";
const LIMIT_ONE: &str = "LIMIT 1";
const DESCENDING: &str = "DESC(";
const GUARD_KEYWORD: &str = "FILTER";
const STRING_FILTER: &str = "FILTER (str";
const RANGE_GUARD: &str = "FILTER(NOT EXISTS {?";

/// Number of lines between the range guards and the closing marker.
const RANGE_TAIL_LEN: usize = 6;

/// A query reduced to its triple pattern lines and its special condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery<'query> {
    pub body: Vec<&'query str>,
    pub condition: SpecialCondition,
}

/// The time macro of a range query: a relation prefix and the suffixes of its two bounds.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RangeTemplate {
    pub relation_prefix: String,
    pub start_suffix: String,
    pub end_suffix: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Plain,
    Superlative,
    Range,
}

/// Validates the template of `text` and extracts its body lines and special condition.
pub fn normalize<'query>(
    text: &'query str,
    config: &CompilerConfig,
) -> ConversionResult<NormalizedQuery<'query>> {
    let block = template_block(text, config)?;
    let shape = classify(&block);
    trace!("Classified query as {shape:?}");

    let (body, condition) = match shape {
        Shape::Plain => (block[1..block.len() - 1].to_vec(), SpecialCondition::None),
        Shape::Superlative => superlative_body(&block, config)?,
        Shape::Range => range_body(&block, config)?,
    };
    let body = strip_guards(body)?;

    if let Some(line) = body
        .iter()
        .find(|line| !line.starts_with('?') && !line.starts_with(config.namespace_prefix.as_str()))
    {
        return Err(ConversionError::structural(format!(
            "body line '{line}' does not start with a variable or a qualified name"
        )));
    }

    Ok(NormalizedQuery { body, condition })
}

/// Returns the time macro of `text` if it is a range query.
pub fn range_template(
    text: &str,
    config: &CompilerConfig,
) -> ConversionResult<Option<RangeTemplate>> {
    let block = template_block(text, config)?;
    if classify(&block) != Shape::Range {
        return Ok(None);
    }

    let clause = range_clause(&block, config)?;
    Ok(Some(RangeTemplate {
        relation_prefix: clause.relation_prefix,
        start_suffix: last_segment(clause.from_relation).to_owned(),
        end_suffix: last_segment(clause.to_relation).to_owned(),
    }))
}

/// Checks the header and footer and returns all lines from the block opening marker onwards.
fn template_block<'query>(
    text: &'query str,
    config: &CompilerConfig,
) -> ConversionResult<Vec<&'query str>> {
    let lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>();

    match lines.first() {
        None => return Err(ConversionError::structural("empty query")),
        Some(first) if *first == config.manual_marker => {
            return Err(ConversionError::structural("manually authored query"))
        }
        Some(_) => {}
    }

    let header = lines
        .iter()
        .position(|line| !line.starts_with(PREFIX_KEYWORD))
        .ok_or_else(|| ConversionError::structural("query consists of prefixes only"))?;

    let expected = [config.answer_variable.as_str()];
    let projection = lines[header]
        .strip_prefix(SELECT_KEYWORD)
        .map(|rest| rest.split_whitespace().collect::<Vec<_>>());
    if projection.as_deref() != Some(&expected[..]) {
        return Err(ConversionError::structural(format!(
            "expected '{SELECT_KEYWORD} {}' but found '{}'",
            config.answer_variable, lines[header]
        )));
    }
    if lines.get(header + 1) != Some(&BLOCK_OPEN) {
        return Err(ConversionError::structural(format!(
            "expected '{BLOCK_OPEN}' after the select clause"
        )));
    }
    match lines.last() {
        Some(&BLOCK_CLOSE | &LIMIT_ONE) => {}
        _ => {
            return Err(ConversionError::structural(format!(
                "expected '{BLOCK_CLOSE}' or '{LIMIT_ONE}' as the last line"
            )))
        }
    }

    let block = lines[header + 1..].to_vec();
    if block.iter().any(|line| line.contains(STRING_FILTER)) {
        return Err(ConversionError::UnsupportedFilter);
    }
    Ok(block)
}

fn classify(block: &[&str]) -> Shape {
    let len = block.len();
    if block.last() == Some(&LIMIT_ONE) {
        Shape::Superlative
    } else if len >= 4 && block[len - 4].starts_with(RANGE_GUARD) {
        Shape::Range
    } else {
        Shape::Plain
    }
}

fn superlative_body<'query>(
    block: &[&'query str],
    config: &CompilerConfig,
) -> ConversionResult<(Vec<&'query str>, SpecialCondition)> {
    let len = block.len();
    if len < 4 || block[len - 3] != BLOCK_CLOSE {
        return Err(ConversionError::structural(
            "expected the block to close before the ordering clause",
        ));
    }

    let order_line = block[len - 2];
    let auxiliary = config.auxiliary_variable.as_str();
    if !order_line.contains(auxiliary) {
        return Err(ConversionError::structural(format!(
            "ordering clause '{order_line}' does not refer to {auxiliary}"
        )));
    }
    let direction = if order_line.contains(DESCENDING) {
        Direction::Max
    } else {
        Direction::Min
    };

    let (candidates, body): (Vec<&str>, Vec<&str>) = block[1..len - 3]
        .iter()
        .copied()
        .partition(|line| line.contains(auxiliary));
    let [pivot_line] = candidates.as_slice() else {
        return Err(ConversionError::AmbiguousSpecialClause {
            candidates: candidates.len(),
        });
    };

    let triplet = parse_triplet_line(pivot_line, config)?;
    if triplet.object != Token::parse(auxiliary, &config.namespace_prefix) {
        return Err(ConversionError::structural(format!(
            "'{pivot_line}' does not bind {auxiliary} as its object"
        )));
    }
    if !triplet.subject.is_variable() {
        return Err(ConversionError::structural(format!(
            "'{pivot_line}' does not order a variable"
        )));
    }

    let condition = SpecialCondition::Superlative {
        direction,
        pivot: triplet.subject,
        relation: triplet.relation.local_name().to_owned(),
    };
    Ok((body, condition))
}

/// The two bounds of a range query.
struct RangeClause<'query> {
    pivot: &'query str,
    from_relation: &'query str,
    to_relation: &'query str,
    /// The first two segments shared by both relations, without the namespace prefix.
    relation_prefix: String,
}

fn range_clause<'query>(
    block: &[&'query str],
    config: &CompilerConfig,
) -> ConversionResult<RangeClause<'query>> {
    let len = block.len();
    if len < RANGE_TAIL_LEN + 2 {
        return Err(ConversionError::structural("range clause is truncated"));
    }
    let tail = &block[len - RANGE_TAIL_LEN - 1..len - 1];

    let (pivot, from_relation) = guarded_pattern(tail[0])?;
    let (to_pivot, to_relation) = guarded_pattern(tail[3])?;
    if pivot != to_pivot {
        return Err(ConversionError::structural(format!(
            "range bounds refer to different variables {pivot} and {to_pivot}"
        )));
    }

    let from_relation = config.strip_namespace(from_relation);
    let to_relation = config.strip_namespace(to_relation);
    let from_prefix = relation_prefix(from_relation)?;
    let to_prefix = relation_prefix(to_relation)?;
    if from_prefix != to_prefix {
        return Err(ConversionError::structural(format!(
            "range relations {from_relation} and {to_relation} do not share a prefix"
        )));
    }

    Ok(RangeClause {
        pivot,
        from_relation,
        to_relation,
        relation_prefix: from_prefix,
    })
}

fn range_body<'query>(
    block: &[&'query str],
    config: &CompilerConfig,
) -> ConversionResult<(Vec<&'query str>, SpecialCondition)> {
    let clause = range_clause(block, config)?;
    let len = block.len();
    let tail = &block[len - RANGE_TAIL_LEN - 1..len - 1];

    let start_year = year_of(quoted_literal(tail[2])?)?;
    let end_year = year_of(quoted_literal(tail[5])?)?;
    if start_year != end_year {
        return Err(ConversionError::structural(format!(
            "range spans the years {start_year} and {end_year}"
        )));
    }

    let pivot = Token::parse(clause.pivot, &config.namespace_prefix);
    if !pivot.is_variable() {
        return Err(ConversionError::structural(format!(
            "range guard does not constrain a variable: {}",
            clause.pivot
        )));
    }

    let condition = SpecialCondition::Range {
        pivot,
        relation: format!("{}.{}", clause.relation_prefix, config.time_macro_suffix),
        year: format!("{start_year}^^{}", config.date_datatype),
    };
    Ok((block[1..len - RANGE_TAIL_LEN - 1].to_vec(), condition))
}

/// Extracts the variable and relation from `FILTER(NOT EXISTS {?y ns:rel ?sk0} ||`.
fn guarded_pattern(line: &str) -> ConversionResult<(&str, &str)> {
    if !line.starts_with(RANGE_GUARD) {
        return Err(ConversionError::structural(format!(
            "expected a range guard but found '{line}'"
        )));
    }
    let pattern = line
        .split_once('{')
        .and_then(|(_, rest)| rest.split_once('}'))
        .map(|(pattern, _)| pattern)
        .ok_or_else(|| ConversionError::structural(format!("unbalanced range guard '{line}'")))?;

    let mut tokens = pattern.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(variable), Some(relation)) => Ok((variable, relation)),
        _ => Err(ConversionError::structural(format!(
            "range guard '{line}' has no relation"
        ))),
    }
}

fn relation_prefix(relation: &str) -> ConversionResult<String> {
    let segments = relation.split('.').collect::<Vec<_>>();
    if segments.len() < 3 {
        return Err(ConversionError::structural(format!(
            "relation {relation} has no domain and type"
        )));
    }
    Ok(segments[..2].join("."))
}

fn last_segment(relation: &str) -> &str {
    relation.rsplit('.').next().unwrap_or(relation)
}

/// Extracts `2009-12-31` from `FILTER(xsd:datetime(?sk1) <= "2009-12-31"^^xsd:dateTime) })`.
fn quoted_literal(line: &str) -> ConversionResult<&str> {
    line.split_once('"')
        .and_then(|(_, rest)| rest.split_once('"'))
        .map(|(literal, _)| literal)
        .ok_or_else(|| ConversionError::structural(format!("no date literal in '{line}'")))
}

fn year_of(date: &str) -> ConversionResult<&str> {
    match date.get(..4) {
        Some(year) if year.bytes().all(|b| b.is_ascii_digit()) => Ok(year),
        _ => Err(ConversionError::structural(format!(
            "'{date}' does not start with a year"
        ))),
    }
}

/// Removes the entity-inequality and language guards that precede the triple patterns.
fn strip_guards(body: Vec<&str>) -> ConversionResult<Vec<&str>> {
    match body.first() {
        None => Err(ConversionError::structural("empty body")),
        Some(first) if first.starts_with(GUARD_KEYWORD) => {
            if body.len() <= 2 {
                return Err(ConversionError::structural(
                    "guard pair is not followed by a triple pattern",
                ));
            }
            Ok(body[2..].to_vec())
        }
        Some(_) => Ok(body),
    }
}
