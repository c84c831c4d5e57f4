//! Compiles the SPARQL queries of a templated KBQA benchmark into nested logical forms.
//!
//! Conversion runs in four stages, each consuming the output of the previous one:
//!
//! 1. [normalize] validates the query template and classifies its body shape.
//! 2. [extract_triplets] turns the body lines into [Triplet](lispform_model::Triplet)s.
//! 3. [resolve_dependencies] orders the triplets breadth-first from the answer variable.
//! 4. [synthesize] folds the resolution order into an [Expression](lispform_model::Expression).
//!
//! The [Converter] drives all four stages and turns every rejection into a sentinel, so a batch of
//! queries is never aborted by a single unsupported query.

mod config;
mod driver;
mod normalizer;
mod resolver;
mod synthesizer;
mod triples;

pub use config::{CompilerConfig, DEFAULT_SENTINEL};
pub use driver::{BatchReport, Converter, Query};
pub use normalizer::{normalize, range_template, NormalizedQuery, RangeTemplate};
pub use resolver::resolve_dependencies;
pub use synthesizer::synthesize;
pub use triples::{extract_triplets, parse_triplet_line, TERMINATOR};
