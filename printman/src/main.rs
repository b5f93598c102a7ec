//! # printman
//!
//! A CLI for printing columnar fixed-width ASCII reports with line-printer
//! pagination.
//!
//! ## Overview
//!
//! printman is built on top of printmanlib and renders bordered, paginated
//! tables from declarative JSON report definitions. Pages are 72 lines by 80
//! columns by default and end in a form feed, so output can be piped straight
//! to a line printer.
//!
//! ## Usage
//!
//! ```bash
//! # Render a report definition to stdout
//! printman render invoices.json
//!
//! # Render to a file instead
//! printman render invoices.json --output invoices.txt
//!
//! # Print a small built-in sample report
//! printman demo
//! ```

use std::fs;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use printmanlib::{Alignment, ColumnSpec, ReportDef, TableFormatter};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("printman")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Columnar fixed-width ASCII report printer")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(
            Command::new("render")
                .about("Render a JSON report definition")
                .arg(
                    Arg::new("file")
                        .required(true)
                        .help("Path to the report definition (JSON)"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Write the report to a file instead of stdout"),
                ),
        )
        .subcommand(Command::new("demo").about("Print a small built-in sample report"))
}

/// Handler for the render command
fn render_handler(matches: &ArgMatches) -> anyhow::Result<()> {
    let path = matches
        .get_one::<String>("file")
        .context("missing report definition path")?;

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read report definition '{path}'"))?;
    let report: ReportDef = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse report definition '{path}'"))?;
    log::debug!(
        "loaded '{}': {} columns, {} rows",
        report.title,
        report.columns.len(),
        report.rows.len()
    );

    match matches.get_one::<String>("output") {
        Some(out_path) => {
            let file = fs::File::create(out_path)
                .with_context(|| format!("failed to create output file '{out_path}'"))?;
            report.render(BufWriter::new(file))?;
            log::debug!("report written to '{out_path}'");
        }
        None => {
            let stdout = io::stdout();
            report.render(stdout.lock())?;
        }
    }

    Ok(())
}

/// Handler for the demo command: the classic five-column sample report
fn demo_handler() -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut report = TableFormatter::with_writer("Title", "Sub Title", stdout.lock());

    report.add_column(
        ColumnSpec::new("Col 1")
            .type_hint("d")
            .width(5)
            .align(Alignment::Right),
    )?;
    report.add_column(ColumnSpec::new("Col 2").width(10))?;
    report.add_column(ColumnSpec::new("Col 3").width(19).align(Alignment::Center))?;
    report.add_column(ColumnSpec::new("col 4").width(11).align(Alignment::Right))?;
    report.add_column(ColumnSpec::new("col 5").width(11).align(Alignment::Right))?;

    report.print_titles()?;
    report.print_headers()?;
    report.print_data(["1", "abcd", "lmnop", "xyz", "12345"], true)?;
    report.print_data(["2", "abcd", "lmnop", "xyz", "12345.55"], true)?;
    report.print_data(["3", "abcd", "", "", "5"], false)?;
    report.print_footers()?;

    Ok(())
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("render", sub_matches)) => render_handler(sub_matches),
        Some(("demo", _)) => demo_handler(),
        _ => unreachable!("subcommand_required guarantees a subcommand"),
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let level = if matches.get_flag("verbose") {
        microlog::LevelFilter::Debug
    } else {
        microlog::LevelFilter::Info
    };
    microlog::init(level);

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", Style::new().red().apply_to("error:"));
            ExitCode::FAILURE
        }
    }
}
