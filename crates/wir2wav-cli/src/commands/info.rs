//! Info command implementation
//!
//! Prints header details for `.wir` inputs and `.wav` outputs.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use wir2wav_format::wav::read_wav_info;
use wir2wav_format::{FormatError, HeaderOptions, WirFile};

use super::json_output::{error_codes, InfoEntry, JsonError};
use crate::discovery::{is_wir_path, WAV_EXTENSION};

/// Run the info command
///
/// # Arguments
/// * `paths` - `.wir` or `.wav` files to inspect
/// * `options` - Header options for `.wir` inputs
/// * `json` - Print JSON instead of colored text
///
/// # Returns
/// Exit code: 0 if every path was readable, 1 otherwise
pub fn run(paths: &[String], options: HeaderOptions, json: bool) -> Result<ExitCode> {
    let entries: Vec<InfoEntry> = paths
        .iter()
        .map(|p| inspect_with(Path::new(p), options))
        .collect();
    let all_ok = !entries.iter().any(|e| matches!(e, InfoEntry::Error { .. }));

    if json {
        let output =
            serde_json::to_string_pretty(&entries).context("Failed to serialize JSON output")?;
        println!("{}", output);
    } else {
        for entry in &entries {
            print_entry(entry);
        }
    }

    Ok(if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Inspects one path with default header options.
pub fn inspect(path: &Path) -> InfoEntry {
    inspect_with(path, HeaderOptions::default())
}

/// Inspects one path.
pub fn inspect_with(path: &Path, options: HeaderOptions) -> InfoEntry {
    let display = path.display().to_string();

    if is_wir_path(path) {
        return match WirFile::open_with(path, options) {
            Ok(wir) => InfoEntry::Wir {
                path: display,
                descriptor: wir.to_string(),
                header: *wir.header(),
                frames: wir.frame_count(),
                duration_seconds: wir.duration_seconds().ok(),
            },
            Err(e) => InfoEntry::Error {
                path: display,
                error: JsonError::new(code_for(&e), e.to_string()),
            },
        };
    }

    let is_wav = path
        .extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(WAV_EXTENSION));
    if !is_wav {
        return InfoEntry::Error {
            path: display,
            error: JsonError::new(
                error_codes::UNKNOWN_EXTENSION,
                "expected a .wir or .wav file",
            ),
        };
    }

    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            return InfoEntry::Error {
                path: display,
                error: JsonError::new(error_codes::FILE_READ, e.to_string()),
            }
        }
    };

    match read_wav_info(&data) {
        Ok(info) => InfoEntry::Wav {
            path: display,
            duration_seconds: info.duration_seconds(),
            info,
        },
        Err(e) => InfoEntry::Error {
            path: display,
            error: JsonError::new(code_for(&e), e.to_string()),
        },
    }
}

fn code_for(e: &FormatError) -> &'static str {
    match e {
        FormatError::Io(_) => error_codes::FILE_READ,
        other => other.code(),
    }
}

fn print_entry(entry: &InfoEntry) {
    match entry {
        InfoEntry::Wir {
            descriptor,
            header,
            frames,
            ..
        } => {
            println!("{}", descriptor);
            println!(
                "  {} {} Hz, {} {}, {} {:#06x}",
                "secondary rate:".dimmed(),
                header.secondary_rate,
                "frames:".dimmed(),
                frames,
                "mask:".dimmed(),
                header.channel_mask.bits()
            );
        }
        InfoEntry::Wav {
            path,
            info,
            duration_seconds,
        } => {
            let format = match info.audio_format {
                1 => "PCM".to_string(),
                3 => "IEEE float".to_string(),
                other => format!("format {}", other),
            };
            let duration = duration_seconds
                .map(|s| format!("{:.3} secs", s))
                .unwrap_or_else(|| "? secs".to_string());
            println!(
                "WAV[{}, {} channels, {} Hz, {} {}-bit, block align {}, {}]",
                path,
                info.channels,
                info.sample_rate,
                format,
                info.bits_per_sample,
                info.block_align,
                duration
            );
        }
        InfoEntry::Error { path, error } => {
            eprintln!(
                "{} {}: {} ({})",
                "FAILED".red().bold(),
                path,
                error.message,
                error.code
            );
        }
    }
}
