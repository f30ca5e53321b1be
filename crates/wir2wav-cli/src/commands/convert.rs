//! Convert command implementation
//!
//! Finds `.wir` files under a root and writes a `.wav` next to each one.
//! A failing file is reported and the batch continues unless `fail_fast`
//! is set.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use wir2wav_format::{convert, Conversion, FormatError, RemovalSkip, WirFile};

use super::json_output::{error_codes, ConvertReport, FileReport, FileStatus, JsonError};
use crate::config::ConvertConfig;
use crate::discovery::{find_wir_files, wav_path_for};
use crate::output::write_atomic;

/// Run the convert command
///
/// # Arguments
/// * `root` - Directory to scan, or a single `.wir` file
/// * `config` - Resolved conversion settings
/// * `dry_run` - Parse and encode without writing
/// * `json` - Print a JSON report instead of colored text
///
/// # Returns
/// Exit code: 0 if no file failed, 1 otherwise
pub fn run(root: &str, config: &ConvertConfig, dry_run: bool, json: bool) -> Result<ExitCode> {
    let report = if json {
        let report = json_report(Path::new(root), config, dry_run);
        let output =
            serde_json::to_string_pretty(&report).context("Failed to serialize JSON report")?;
        println!("{}", output);
        report
    } else {
        let report = convert_tree(Path::new(root), config, dry_run, true)?;
        print_summary(&report);
        report
    };

    Ok(if report.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Like [`convert_tree`] without console output; a run that cannot start
/// (missing root, non-`.wir` file) becomes a failed report.
pub fn json_report(root: &Path, config: &ConvertConfig, dry_run: bool) -> ConvertReport {
    convert_tree(root, config, dry_run, false).unwrap_or_else(|e| {
        ConvertReport::failure(
            dry_run,
            vec![JsonError::new(error_codes::DISCOVERY, format!("{:#}", e))],
        )
    })
}

/// Converts every `.wir` file under `root` and returns the report.
///
/// With `print_text` set, progress lines go to stdout as files are
/// processed.
pub fn convert_tree(
    root: &Path,
    config: &ConvertConfig,
    dry_run: bool,
    print_text: bool,
) -> Result<ConvertReport> {
    let inputs = find_wir_files(root, config.recursive)?;

    if print_text {
        println!(
            "{} {} .wir files under {}{}",
            "Found:".cyan().bold(),
            inputs.len(),
            root.display(),
            if config.recursive { "" } else { " (non-recursive)" }
        );
    }

    let mut files = Vec::with_capacity(inputs.len());
    for input in &inputs {
        let entry = convert_one(input, config, dry_run, print_text);
        let failed = entry.status == FileStatus::Failed;
        files.push(entry);

        if failed && config.fail_fast {
            if print_text {
                println!(
                    "{} stopping after first failure (fail_fast)",
                    "INFO".yellow().bold()
                );
            }
            break;
        }
    }

    Ok(ConvertReport::from_files(inputs.len(), dry_run, files))
}

/// Converts a single file, turning every failure into a report entry.
fn convert_one(input: &Path, config: &ConvertConfig, dry_run: bool, print_text: bool) -> FileReport {
    let output = wav_path_for(input);
    let entry = FileReport::new(
        input.display().to_string(),
        output.display().to_string(),
        FileStatus::Converted,
    );

    if config.skip_existing && output.exists() {
        if print_text {
            println!(
                "{} {} (output exists)",
                "SKIP".yellow().bold(),
                output.display()
            );
        }
        return FileReport {
            status: FileStatus::Skipped,
            ..entry
        };
    }

    let wir = match WirFile::open_with(input, config.header_options()) {
        Ok(wir) => wir,
        Err(e) => return fail(entry, input, format_error(&e), print_text),
    };

    let conversion = match convert(&wir, &config.convert_options()) {
        Ok(conversion) => conversion,
        Err(e) => return fail(entry, input, format_error(&e), print_text),
    };

    if print_text {
        print_conversion(&output, &wir, &conversion, dry_run);
    }

    if dry_run {
        return FileReport {
            status: FileStatus::DryRun,
            ..entry.with_conversion(&wir, &conversion)
        };
    }

    if let Err(e) = write_atomic(&output, &conversion.output.wav_data) {
        let error = JsonError::new(error_codes::FILE_WRITE, format!("{:#}", e));
        return fail(entry, input, error, print_text);
    }

    entry.with_conversion(&wir, &conversion)
}

fn format_error(e: &FormatError) -> JsonError {
    let code = match e {
        FormatError::Io(_) => error_codes::FILE_READ,
        other => other.code(),
    };
    JsonError::new(code, e.to_string())
}

fn fail(entry: FileReport, input: &Path, error: JsonError, print_text: bool) -> FileReport {
    if print_text {
        eprintln!(
            "{} {}: {}",
            "FAILED".red().bold(),
            input.display(),
            error.message
        );
    }
    entry.with_error(error)
}

/// Prints the per-file progress line.
fn print_conversion(output: &Path, wir: &WirFile, conversion: &Conversion, dry_run: bool) {
    let verb = if dry_run { "Would write" } else { "Writing" };
    println!(
        "{} wave file {} with {} channels for {} ...",
        verb,
        output.display(),
        conversion.output.channels,
        wir
    );

    if let Some(index) = conversion.removed_channel {
        println!("  {} removed additional mono channel {}", "-".dimmed(), index);
    }
    match conversion.skipped_removal {
        Some(RemovalSkip::SingleChannel) => println!(
            "  {} mono removal skipped: file has a single channel",
            "!".yellow()
        ),
        Some(RemovalSkip::IndexOutOfRange {
            index,
            channel_count,
        }) => println!(
            "  {} mono removal skipped: channel {} out of range for {} channels",
            "!".yellow(),
            index,
            channel_count
        ),
        None => {}
    }
}

fn print_summary(report: &ConvertReport) {
    println!();
    println!(
        "{} files found/converted.",
        report.converted.to_string().green().bold()
    );
    if report.skipped > 0 {
        println!(
            "{} {} skipped (output exists)",
            "INFO".yellow().bold(),
            report.skipped
        );
    }
    if report.failed > 0 {
        println!("{} {} failed", "ERROR".red().bold(), report.failed);
    }
}
