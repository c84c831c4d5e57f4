use clap::{Parser, Subcommand, ValueHint};
use lispform_compiler::{CompilerConfig, DEFAULT_SENTINEL};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "lispform")]
/// Compiles templated SPARQL queries into logical forms
pub struct Args {
    #[command(flatten)]
    pub options: CompilerOptions,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Args)]
pub struct CompilerOptions {
    /// The answer variable of the SELECT DISTINCT header
    #[arg(long, global = true, default_value = "?x")]
    pub answer_variable: String,
    /// The namespace prefix stripped from entities and relations
    #[arg(long, global = true, default_value = "ns:")]
    pub namespace_prefix: String,
    /// The value written for queries that cannot be converted
    #[arg(long, global = true, default_value = DEFAULT_SENTINEL)]
    pub sentinel: String,
}

impl CompilerOptions {
    pub fn into_config(self) -> CompilerConfig {
        CompilerConfig {
            answer_variable: self.answer_variable,
            namespace_prefix: self.namespace_prefix,
            sentinel: self.sentinel,
            ..CompilerConfig::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a single query into a logical form
    Convert {
        /// File containing the query
        ///
        /// If no file is given, stdin is read.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },
    /// Convert a batch of queries given as JSON Lines
    ///
    /// Every input line is an object with an "id", a "query" and an optional "topic_entity".
    /// Every output line is an object with the "id" and the converted "expression".
    Batch {
        /// File to read the queries from
        ///
        /// If no file is given, stdin is read.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        from_file: Option<PathBuf>,
        /// File to write the expressions to
        ///
        /// If no file is given, stdout is written.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        to_file: Option<PathBuf>,
    },
    /// List the time macros of the range queries of a batch with their number of occurrences
    Templates {
        /// File to read the queries from, in the format of the batch command
        ///
        /// If no file is given, stdin is read.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        from_file: Option<PathBuf>,
    },
}
