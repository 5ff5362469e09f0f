//! # chatstat CLI
//!
//! Parses one WhatsApp export and prints its statistics.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chatstat::ChatstatError;
use chatstat::analysis::{analyze, senders};
use chatstat::cli::Args;
use chatstat::format::{ReportFormat, write_to_format};
use chatstat::output::{OutputConfig, render_text, report_to_json};
use chatstat::parser::LogParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(&args);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_logging(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), ChatstatError> {
    let start = Instant::now();
    let analysis_config = args.analysis_config()?;
    let records_format = args.records_format()?;

    let parser = LogParser::with_config(args.parser_config());
    let content = chatstat::archive::load_export(&args.input)?;
    let parsed = parser
        .parse_detailed(&content)
        .map_err(|e| e.with_path(&args.input))?;
    let records = parsed.records;

    info!(
        input = %args.input.display(),
        records = records.len(),
        order = %parsed.stats.date_order,
        elapsed_ms = start.elapsed().as_millis(),
        "parsed export"
    );

    if args.list_senders {
        for sender in senders(&records) {
            println!("{sender}");
        }
        return Ok(());
    }

    if let (Some(path), Some(format)) = (&args.records, records_format) {
        let output_config = OutputConfig::new().with_system(!args.no_system);
        write_to_format(&records, path, format, &output_config)?;
        eprintln!("💾 Records written to {} ({format})", path.display());
    }

    let filter = args.filter();
    let report = analyze(&records, &filter, &analysis_config);

    match ReportFormat::from(args.report) {
        ReportFormat::Text => print!("{}", render_text(&report)),
        ReportFormat::Json => println!("{}", report_to_json(&report)?),
    }

    info!(elapsed_ms = start.elapsed().as_millis(), "done");
    Ok(())
}
