//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on `convert` and `info`.

use serde::{Deserialize, Serialize};

use wir2wav_format::{Conversion, RemovalSkip, WavInfo, WirFile, WirHeader};

/// Error codes for CLI-level failures. Format errors carry their own
/// `WIR_XXX` codes.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Output could not be written
    pub const FILE_WRITE: &str = "CLI_002";
    /// Input has an extension `info` does not understand
    pub const UNKNOWN_EXTENSION: &str = "CLI_003";
    /// Convert root missing or not a `.wir` file
    pub const DISCOVERY: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "WIR_003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Outcome of one file in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// WAV written.
    Converted,
    /// Parsed and encoded, nothing written (`--dry-run`).
    DryRun,
    /// Output already present (`--skip-existing`).
    Skipped,
    /// Conversion failed.
    Failed,
}

/// Per-file entry in a convert report.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Input path.
    pub input: String,
    /// Output path.
    pub output: String,
    /// Outcome.
    pub status: FileStatus,
    /// Parsed header, when the header could be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<WirHeader>,
    /// Channels written to the WAV file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_channels: Option<u16>,
    /// Channel index dropped from each frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed_channel: Option<u16>,
    /// Why a mask-requested removal did not happen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped_removal: Option<RemovalSkip>,
    /// Duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    /// BLAKE3 hash of the written sample data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
    /// Failure details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

impl FileReport {
    /// Creates an entry with only paths and status filled in.
    pub fn new(input: impl Into<String>, output: impl Into<String>, status: FileStatus) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            status,
            header: None,
            output_channels: None,
            removed_channel: None,
            skipped_removal: None,
            duration_seconds: None,
            pcm_hash: None,
            error: None,
        }
    }

    /// Fills in details from a successful conversion.
    pub fn with_conversion(mut self, wir: &WirFile, conversion: &Conversion) -> Self {
        self.header = Some(*wir.header());
        self.output_channels = Some(conversion.output.channels);
        self.removed_channel = conversion.removed_channel;
        self.skipped_removal = conversion.skipped_removal;
        self.duration_seconds = wir.duration_seconds().ok();
        self.pcm_hash = Some(conversion.output.pcm_hash.clone());
        self
    }

    /// Marks the entry failed.
    pub fn with_error(mut self, error: JsonError) -> Self {
        self.status = FileStatus::Failed;
        self.error = Some(error);
        self
    }
}

/// Summary for a `convert` run.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertReport {
    /// Whether every file succeeded.
    pub success: bool,
    /// Files found.
    pub found: usize,
    /// Files written (or that would be written in a dry run).
    pub converted: usize,
    /// Files left alone because their output existed.
    pub skipped: usize,
    /// Files that failed.
    pub failed: usize,
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Per-file results, in processing order.
    pub files: Vec<FileReport>,
    /// Errors that stopped the run before any file was processed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

impl ConvertReport {
    /// Builds a report from per-file entries.
    pub fn from_files(found: usize, dry_run: bool, files: Vec<FileReport>) -> Self {
        let count = |status: FileStatus| files.iter().filter(|f| f.status == status).count();
        let converted = count(FileStatus::Converted) + count(FileStatus::DryRun);
        let skipped = count(FileStatus::Skipped);
        let failed = count(FileStatus::Failed);

        Self {
            success: failed == 0,
            found,
            converted,
            skipped,
            failed,
            dry_run,
            files,
            errors: Vec::new(),
        }
    }

    /// Builds a failed report for a run that never reached any file.
    pub fn failure(dry_run: bool, errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            found: 0,
            converted: 0,
            skipped: 0,
            failed: 0,
            dry_run,
            files: Vec::new(),
            errors,
        }
    }
}

/// `info` output for one path.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InfoEntry {
    /// A WIR input.
    Wir {
        path: String,
        descriptor: String,
        header: WirHeader,
        frames: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        duration_seconds: Option<f64>,
    },
    /// A WAV file.
    Wav {
        path: String,
        info: WavInfo,
        #[serde(skip_serializing_if = "Option::is_none")]
        duration_seconds: Option<f64>,
    },
    /// A path that could not be inspected.
    Error { path: String, error: JsonError },
}
