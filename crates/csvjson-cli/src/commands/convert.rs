//! Convert command - convert a CSV file or a directory of CSV files.

use std::fs;
use std::path::Path;

use colored::Colorize;
use csvjson::{ConversionSummary, Converter};
use tracing::debug;

use crate::cli::Cli;
use crate::paths::{csv_files_in, directory_output_dir, file_output_path, json_file_name};

pub fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let converter = Converter::with_config(cli.converter_config());
    let output = cli.output.as_deref();

    if cli.input.is_file() {
        let output_path = file_output_path(&cli.input, output);
        let summary = converter.convert_to_file(&cli.input, &output_path)?;
        report(&summary, cli.verbose);
    } else if cli.input.is_dir() {
        convert_directory(&converter, &cli.input, output, cli.verbose)?;
    } else {
        return Err("Invalid input. Please provide a CSV file or directory.".into());
    }

    Ok(())
}

fn convert_directory(
    converter: &Converter,
    input: &Path,
    output: Option<&Path>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = directory_output_dir(input, output)?;
    fs::create_dir_all(&output_dir)
        .map_err(|e| format!("Failed to create directory '{}': {}", output_dir.display(), e))?;

    let files = csv_files_in(input)?;
    debug!(dir = %input.display(), files = files.len(), "scanned input directory");

    if files.is_empty() {
        println!(
            "{} No .csv files found in {}",
            "Warning:".yellow().bold(),
            input.display()
        );
        return Ok(());
    }

    for file in &files {
        let output_path = output_dir.join(json_file_name(file));
        let summary = converter.convert_to_file(file, &output_path)?;
        report(&summary, verbose);
    }

    if verbose {
        println!(
            "{} {} files into {}",
            "Done:".green().bold(),
            files.len().to_string().white().bold(),
            output_dir.display().to_string().cyan()
        );
    }

    Ok(())
}

fn report(summary: &ConversionSummary, verbose: bool) {
    println!(
        "{} {} to {}",
        "Converted".green().bold(),
        summary.input.display().to_string().white(),
        summary.output.display().to_string().white()
    );

    if verbose {
        println!(
            "  {} rows, {} records",
            summary.rows.to_string().white().bold(),
            summary.records.to_string().white().bold()
        );
        if summary.overwritten > 0 {
            println!(
                "  {} {} rows replaced an earlier row with the same key",
                "Note:".yellow(),
                summary.overwritten.to_string().yellow()
            );
        }
    }
}
