// File: crates/demo/src/main.rs
// Summary: Builds one c3 chart per measurement from the built-in log (or a CSV) and writes a page, script, or JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use measure_core::types::TICK_FORMAT;
use measure_core::{ChartOptions, Measurement, RecordSet, SeriesBuilder};
use measure_render_c3::{render_page, render_script, to_json_array, write_output, PageOptions};
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Standalone HTML page with a div per chart
    Html,
    /// `c3.generate(...)` statements only
    Script,
    /// Pretty-printed JSON array of chart configurations
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file with a `day` column and any of weight,abdomen,thigh,arm.
    /// Defaults to the built-in log.
    #[arg(long)]
    data: Option<PathBuf>,
    /// Measurements to chart, in order
    /// Example: weight,arm
    #[arg(long = "measure", value_delimiter = ',', num_args = 1..)]
    measures: Vec<Measurement>,
    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,
    /// Output file; stdout when omitted
    #[arg(long)]
    out: Option<PathBuf>,
    /// Reject empty data, malformed dates, and dates that do not strictly increase
    #[arg(long)]
    strict: bool,
    /// Display pattern for x axis ticks
    #[arg(long, default_value = TICK_FORMAT)]
    tick_format: String,
    /// Page title (html format only)
    #[arg(long)]
    title: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "measure_core=info,measure_render_c3=info,measure_charts=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = run(&cli)?;
    if cli.out.is_none() {
        print!("{output}");
    }
    Ok(())
}

/// Load, build, and render. Writes to `--out` when given; always returns the rendered text.
fn run(cli: &Cli) -> Result<String> {
    let records = match &cli.data {
        Some(path) => RecordSet::from_csv_path(path)
            .with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => RecordSet::builtin(),
    };
    info!(records = records.len(), source = ?cli.data, "record set ready");

    if cli.strict {
        records.validate().context("strict validation failed")?;
    } else if records.is_empty() {
        warn!("record set is empty; charts will have header-only columns");
    }

    let measures = if cli.measures.is_empty() { Measurement::ALL.to_vec() } else { cli.measures.clone() };
    let options = ChartOptions { tick_format: cli.tick_format.clone(), ..ChartOptions::default() };
    let configs = SeriesBuilder::with_options(&records, options).build_all(&measures);

    let output = match cli.format {
        Format::Html => {
            let mut page = PageOptions::default();
            if let Some(title) = &cli.title {
                page.title = title.clone();
            }
            render_page(&configs, &page)?
        }
        Format::Script => render_script(&configs)?,
        Format::Json => {
            let mut json = to_json_array(&configs, true)?;
            json.push('\n');
            json
        }
    };

    if let Some(path) = &cli.out {
        write_output(path, &output).with_context(|| format!("failed to write '{}'", path.display()))?;
        info!(charts = configs.len(), path = %path.display(), "wrote charts");
    }
    Ok(output)
}
