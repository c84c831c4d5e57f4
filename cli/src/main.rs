#![allow(clippy::print_stdout, reason = "Results are written to stdout")]
use crate::cli::{Args, Command};
use anyhow::Context;
use clap::Parser;
use lispform_compiler::{Converter, Query, RangeTemplate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, stdin, stdout, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;

/// A query of a batch.
#[derive(Deserialize)]
struct QueryRecord {
    id: String,
    query: String,
    #[serde(default)]
    topic_entity: Option<String>,
}

impl QueryRecord {
    fn to_query(&self) -> Query {
        let query = Query::new(self.query.as_str());
        match &self.topic_entity {
            Some(topic_entity) => query.with_topic_entity(topic_entity.as_str()),
            None => query,
        }
    }
}

/// The converted form of a [QueryRecord].
#[derive(Serialize)]
struct ExpressionRecord<'record> {
    id: &'record str,
    expression: &'record str,
}

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "lispform=info".into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let converter = Converter::new(args.options.into_config());
    match args.command {
        Command::Convert { file } => {
            let text = if let Some(file) = file {
                fs::read_to_string(&file)
                    .with_context(|| format!("Failed to read {}", file.display()))?
            } else {
                let mut text = String::new();
                stdin().read_to_string(&mut text)?;
                text
            };
            println!("{}", converter.convert_or_sentinel(&Query::new(text)));
            Ok(())
        }
        Command::Batch { from_file, to_file } => {
            let records = read_records(from_file.as_deref())?;
            if let Some(to_file) = to_file {
                close_file_writer(do_batch(
                    &converter,
                    &records,
                    BufWriter::new(File::create(to_file)?),
                )?)?;
            } else {
                do_batch(&converter, &records, stdout().lock())?.flush()?;
            }
            Ok(())
        }
        Command::Templates { from_file } => {
            let records = read_records(from_file.as_deref())?;
            for (template, count) in count_templates(&converter, &records) {
                println!(
                    "{}\t{}\t{}\t{count}",
                    template.relation_prefix, template.start_suffix, template.end_suffix
                );
            }
            Ok(())
        }
    }
}

fn read_records(from_file: Option<&Path>) -> anyhow::Result<Vec<QueryRecord>> {
    if let Some(from_file) = from_file {
        let file = File::open(from_file)
            .with_context(|| format!("Failed to open {}", from_file.display()))?;
        parse_records(BufReader::new(file))
    } else {
        parse_records(stdin().lock())
    }
}

fn parse_records(reader: impl BufRead) -> anyhow::Result<Vec<QueryRecord>> {
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line)
            .with_context(|| format!("Invalid query record on line {}", i + 1))?;
        records.push(record);
    }
    Ok(records)
}

fn do_batch<W: Write>(
    converter: &Converter,
    records: &[QueryRecord],
    mut writer: W,
) -> anyhow::Result<W> {
    let queries = records.iter().map(QueryRecord::to_query).collect::<Vec<_>>();
    let report = converter.convert_batch(&queries);
    let expressions = report.rendered(&converter.config().sentinel);
    for (record, expression) in records.iter().zip(&expressions) {
        serde_json::to_writer(
            &mut writer,
            &ExpressionRecord {
                id: &record.id,
                expression,
            },
        )?;
        writer.write_all(b"\n")?;
    }
    Ok(writer)
}

fn count_templates(
    converter: &Converter,
    records: &[QueryRecord],
) -> BTreeMap<RangeTemplate, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        match converter.range_template(&record.to_query()) {
            Ok(Some(template)) => *counts.entry(template).or_default() += 1,
            Ok(None) => (),
            Err(error) => debug!("Skipping {}: {error}", record.id),
        }
    }
    counts
}

fn close_file_writer(writer: BufWriter<File>) -> io::Result<()> {
    let mut file = writer
        .into_inner()
        .map_err(io::IntoInnerError::into_error)?;
    file.flush()?;
    file.sync_all()
}
