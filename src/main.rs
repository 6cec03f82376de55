//! logsift - CLI entry point

use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;

use logsift::{pipeline, CsvSink};

#[derive(Parser)]
#[command(name = "logsift")]
#[command(about = "Normalize a newline-delimited JSON activity log into a CSV file")]
#[command(version)]
struct Cli {
    /// Path to the JSON file to read (one record per line)
    json_file: PathBuf,
    /// Path for the CSV file to create or overwrite
    csv_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = parse_args();
    preflight(&cli);
    run(&cli)
}

/// Parse arguments, exiting 1 on usage errors (clap's default of 2 does
/// not match the tool's exit-code contract). Help and version still exit 0.
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            process::exit(0);
        }
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    }
}

/// Pre-flight checks: the input must exist and the output's directory must
/// be writable. Violations are diagnosed to stderr before any processing.
fn preflight(cli: &Cli) {
    if !cli.json_file.exists() {
        eprintln!("JSON file [{}] doesn't exist!", cli.json_file.display());
        process::exit(1);
    }

    let out_dir = output_dir(&cli.csv_file);
    if !dir_is_writable(&out_dir) {
        eprintln!(
            "Can't write to the directory [{}] to create the CSV file! Does the directory exist?",
            out_dir.display()
        );
        process::exit(1);
    }
}

/// Directory the CSV file will be created in. A bare file name writes to
/// the current directory.
fn output_dir(csv_file: &Path) -> PathBuf {
    match csv_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn dir_is_writable(dir: &Path) -> bool {
    fs::metadata(dir)
        .map(|m| m.is_dir() && !m.permissions().readonly())
        .unwrap_or(false)
}

fn run(cli: &Cli) -> Result<()> {
    let input = fs::File::open(&cli.json_file)
        .with_context(|| format!("Failed to open input file: {:?}", cli.json_file))?;
    let output = fs::File::create(&cli.csv_file)
        .with_context(|| format!("Failed to create CSV file: {:?}", cli.csv_file))?;

    let mut sink = CsvSink::new(BufWriter::new(output));
    let report = pipeline::run(BufReader::new(input), &mut sink)?;
    sink.into_inner()?;

    println!(
        "Metrics Output:\n{}",
        serde_json::to_string_pretty(&report).context("Failed to serialize metrics report")?
    );
    Ok(())
}
