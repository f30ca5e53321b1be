//! wir2wav - converts WIR impulse-response files to WAV
//!
//! This binary provides commands for batch conversion and for inspecting
//! WIR and WAV headers.

use clap::{Parser, Subcommand};
use std::path::Path;
use std::process::ExitCode;

use wir2wav_cli::commands;
use wir2wav_cli::config::{ConfigOverrides, ConvertConfig};
use wir2wav_format::HeaderOptions;

/// wir2wav - WIR impulse response to WAV converter
#[derive(Parser)]
#[command(name = "wir2wav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every .wir file under a directory to .wav next to it
    Convert {
        /// Directory to scan, or a single .wir file
        #[arg(default_value = ".")]
        root: String,

        /// JSON config file with default settings
        #[arg(short, long)]
        config: Option<String>,

        /// Only scan the top level of the directory
        #[arg(long)]
        no_recursive: bool,

        /// Keep an additional mono channel instead of dropping it
        #[arg(long)]
        keep_mono: bool,

        /// Write block align 4 regardless of channel count (older converter output)
        #[arg(long)]
        legacy_block_align: bool,

        /// Do not overwrite existing .wav files
        #[arg(long)]
        skip_existing: bool,

        /// Stop at the first file that fails
        #[arg(long)]
        fail_fast: bool,

        /// Accept files whose header magic is not "wvIR"
        #[arg(long)]
        no_magic_check: bool,

        /// Parse and encode without writing any files
        #[arg(long)]
        dry_run: bool,

        /// Output machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print header details for .wir or .wav files
    Info {
        /// Files to inspect
        #[arg(required = true)]
        paths: Vec<String>,

        /// Accept .wir files whose header magic is not "wvIR"
        #[arg(long)]
        no_magic_check: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            root,
            config,
            no_recursive,
            keep_mono,
            legacy_block_align,
            skip_existing,
            fail_fast,
            no_magic_check,
            dry_run,
            json,
        } => {
            let overrides = ConfigOverrides {
                recursive: no_recursive.then_some(false),
                remove_leading_mono: keep_mono.then_some(false),
                legacy_block_align: legacy_block_align.then_some(true),
                skip_existing: skip_existing.then_some(true),
                fail_fast: fail_fast.then_some(true),
                verify_magic: no_magic_check.then_some(false),
            };
            ConvertConfig::resolve(config.as_deref().map(Path::new), overrides)
                .and_then(|config| commands::convert::run(&root, &config, dry_run, json))
        }
        Commands::Info {
            paths,
            no_magic_check,
            json,
        } => {
            let options = HeaderOptions {
                verify_magic: !no_magic_check,
            };
            commands::info::run(&paths, options, json)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
