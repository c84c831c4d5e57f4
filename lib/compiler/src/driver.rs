use crate::normalizer::{normalize, range_template, RangeTemplate};
use crate::resolver::resolve_dependencies;
use crate::synthesizer::synthesize;
use crate::triples::extract_triplets;
use crate::CompilerConfig;
use lispform_model::{ConversionError, ConversionErrorKind, ConversionResult, Expression};
use std::collections::BTreeMap;
use tracing::{debug, info, trace};

/// A query to convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// The raw query text.
    pub text: String,
    /// The topic entity of the question, if known.
    pub topic_entity: Option<String>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            topic_entity: None,
        }
    }

    #[must_use]
    pub fn with_topic_entity(mut self, topic_entity: impl Into<String>) -> Self {
        self.topic_entity = Some(topic_entity.into());
        self
    }

    /// Returns the first Freebase entity (`m.` identifier) mentioned in `text`.
    ///
    /// ```
    /// use lispform_compiler::Query;
    ///
    /// let text = "WHERE {\nns:m.0443c ns:sports.pro_athlete.teams ?y .\n}";
    /// assert_eq!(Query::topic_entity_from_text(text, "ns:"), Some("m.0443c"));
    /// ```
    pub fn topic_entity_from_text<'text>(
        text: &'text str,
        namespace_prefix: &str,
    ) -> Option<&'text str> {
        text.split_whitespace()
            .filter_map(|token| token.strip_prefix(namespace_prefix))
            .find(|local| local.starts_with("m."))
    }

    /// Returns the given topic entity, or else the first entity mentioned in the query text.
    pub fn resolved_topic_entity(&self, namespace_prefix: &str) -> Option<&str> {
        self.topic_entity
            .as_deref()
            .or_else(|| Self::topic_entity_from_text(&self.text, namespace_prefix))
    }
}

/// Converts templated SPARQL queries into logical forms.
///
/// A [Converter] only holds its configuration. It can be shared freely between threads, and
/// converting one query never influences the conversion of another.
///
/// # Example
///
/// ```
/// use lispform_compiler::{Converter, Query};
///
/// let query = Query::new(
///     "PREFIX ns: <http://rdf.freebase.com/ns/>
/// SELECT DISTINCT ?x
/// WHERE {
/// ?x ns:rel.a ?y .
/// ?y ns:rel.b ns:ent.2 .
/// }",
/// );
/// let expr = Converter::default().convert(&query).unwrap();
/// assert_eq!(expr.to_string(), "(JOIN rel.a (JOIN rel.b ent.2))");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: CompilerConfig,
}

impl Converter {
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Converts a single query.
    ///
    /// Either the complete logical form is returned or the first error encountered. A partial
    /// expression is never produced.
    pub fn convert(&self, query: &Query) -> ConversionResult<Expression> {
        let normalized = normalize(&query.text, &self.config)?;
        let triplets = extract_triplets(&normalized.body, &self.config)?;
        let order = resolve_dependencies(triplets, &self.config.answer_token())?;
        trace!(
            "Resolved {} variable(s) over {} triplet(s)",
            order.len(),
            order.triplet_count()
        );
        let expression = synthesize(&order, &normalized.condition)?;
        trace!("Synthesized {} node(s)", expression.size());
        Ok(expression)
    }

    fn log_rejection(&self, query: &Query, error: &ConversionError) {
        let topic_entity = query
            .resolved_topic_entity(&self.config.namespace_prefix)
            .unwrap_or("unknown topic");
        debug!("Rejected query on {topic_entity} ({}): {error}", error.kind());
    }

    /// Converts a single query and renders it, or returns the sentinel if it is rejected.
    pub fn convert_or_sentinel(&self, query: &Query) -> String {
        match self.convert(query) {
            Ok(expr) => expr.to_string(),
            Err(error) => {
                self.log_rejection(query, &error);
                self.config.sentinel.clone()
            }
        }
    }

    /// Converts every query of a batch. Rejected queries do not affect the others.
    pub fn convert_batch<'query>(
        &self,
        queries: impl IntoIterator<Item = &'query Query>,
    ) -> BatchReport {
        let mut report = BatchReport::default();
        for query in queries {
            let outcome = self.convert(query);
            if let Err(error) = &outcome {
                self.log_rejection(query, error);
                *report.rejections.entry(error.kind()).or_default() += 1;
            }
            report.outcomes.push(outcome);
        }

        info!(
            "Converted {} of {} queries ({:.4})",
            report.converted(),
            report.total(),
            report.hit_rate()
        );
        report
    }

    /// Returns the time macro of `query` if it is a range query.
    pub fn range_template(&self, query: &Query) -> ConversionResult<Option<RangeTemplate>> {
        range_template(&query.text, &self.config)
    }
}

/// The outcome of converting a batch of queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// One outcome per query, in input order.
    pub outcomes: Vec<ConversionResult<Expression>>,
    /// The number of rejected queries per error kind.
    pub rejections: BTreeMap<ConversionErrorKind, usize>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    /// Returns the share of converted queries, or zero for an empty batch.
    #[allow(
        clippy::cast_precision_loss,
        reason = "Batches are far smaller than 2^52 queries"
    )]
    pub fn hit_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.converted() as f64 / self.total() as f64
    }

    /// Renders every outcome, using `sentinel` for rejected queries.
    pub fn rendered(&self, sentinel: &str) -> Vec<String> {
        self.outcomes
            .iter()
            .map(|outcome| match outcome {
                Ok(expr) => expr.to_string(),
                Err(_) => sentinel.to_owned(),
            })
            .collect()
    }
}
