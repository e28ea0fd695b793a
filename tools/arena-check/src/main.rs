//! arena-check: import an arena payload and report coverage insights.
//!
//! Usage:
//!   arena-check --input arena.json --pretty
//!   cat arena.json | arena-check --input -
//!   arena-check --sample

use std::io;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use serde::Serialize;
use tracing::info;

use arena_core::state::{ArenaState, EnvelopeReport, Insights};
use arena_core::types::TargetId;
use arena_planner::envelope::evaluate_all;
use arena_planner::source::{FileSource, PayloadSource, ReaderSource};
use arena_planner::{compute_insights, layout, ArenaStore, PlannerConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Arena coverage and envelope checker", long_about = None)]
struct Cli {
    /// Payload JSON file to import; `-` reads from stdin.
    #[arg(long, conflicts_with = "sample")]
    input: Option<PathBuf>,
    /// Import the built-in sample payload instead of reading one.
    #[arg(long)]
    sample: bool,
    /// Seed for identifier generation and random placement.
    #[arg(long, env = "ARENA_SEED", default_value_t = 42)]
    seed: u64,
    /// Pretty-print the JSON report.
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    state: &'a ArenaState,
    insights: Insights,
    envelopes: Vec<EnvelopeEntry>,
}

#[derive(Serialize)]
struct EnvelopeEntry {
    id: TargetId,
    #[serde(flatten)]
    report: EnvelopeReport,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();
    let mut store = ArenaStore::new(PlannerConfig { seed: cli.seed });

    if cli.sample {
        store
            .import_payload(&layout::sample_payload())
            .wrap_err("built-in sample payload failed validation")?;
    } else if let Some(path) = &cli.input {
        let mut source: Box<dyn PayloadSource> = if path.as_os_str() == "-" {
            Box::new(ReaderSource::new("stdin", io::stdin().lock()))
        } else {
            Box::new(FileSource::new(path))
        };
        store
            .import_from(source.as_mut())
            .wrap_err_with(|| format!("failed to import {}", source.describe()))?;
    } else {
        info!("no payload given, reporting the default layout");
    }

    let state = store.state();
    let report = Report {
        state,
        insights: compute_insights(state),
        envelopes: evaluate_all(state)
            .into_iter()
            .map(|(id, report)| EnvelopeEntry { id, report })
            .collect(),
    };
    info!(
        health = ?report.insights.coverage.health,
        overlaps = report.insights.overlaps.count,
        "insights computed"
    );

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    Ok(())
}
