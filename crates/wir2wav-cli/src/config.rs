//! Conversion settings.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! an optional JSON config file (`--config`), and explicit command-line
//! flags.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use wir2wav_format::{BlockAlign, ChannelPolicy, ConvertOptions, HeaderOptions};

/// Settings for the `convert` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Descend into subdirectories when scanning for `.wir` files.
    pub recursive: bool,
    /// Drop a redundant leading mono channel when the mask advertises one.
    pub remove_leading_mono: bool,
    /// Write a flat block align of 4 like older converters.
    pub legacy_block_align: bool,
    /// Leave existing `.wav` outputs untouched.
    pub skip_existing: bool,
    /// Stop at the first file that fails.
    pub fail_fast: bool,
    /// Reject files whose magic is not `wvIR`.
    pub verify_magic: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            recursive: true,
            remove_leading_mono: true,
            legacy_block_align: false,
            skip_existing: false,
            fail_fast: false,
            verify_magic: true,
        }
    }
}

/// Command-line overrides. `None` leaves the configured value alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOverrides {
    pub recursive: Option<bool>,
    pub remove_leading_mono: Option<bool>,
    pub legacy_block_align: Option<bool>,
    pub skip_existing: Option<bool>,
    pub fail_fast: Option<bool>,
    pub verify_magic: Option<bool>,
}

impl ConvertConfig {
    /// Loads a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads the config file if given, otherwise the defaults, then applies
    /// the overrides.
    pub fn resolve(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let base = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(overrides))
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(v) = overrides.recursive {
            self.recursive = v;
        }
        if let Some(v) = overrides.remove_leading_mono {
            self.remove_leading_mono = v;
        }
        if let Some(v) = overrides.legacy_block_align {
            self.legacy_block_align = v;
        }
        if let Some(v) = overrides.skip_existing {
            self.skip_existing = v;
        }
        if let Some(v) = overrides.fail_fast {
            self.fail_fast = v;
        }
        if let Some(v) = overrides.verify_magic {
            self.verify_magic = v;
        }
        self
    }

    /// Header parsing options for these settings.
    pub fn header_options(&self) -> HeaderOptions {
        HeaderOptions {
            verify_magic: self.verify_magic,
        }
    }

    /// Core conversion options for these settings.
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            policy: ChannelPolicy {
                remove_leading_mono: self.remove_leading_mono,
                ..ChannelPolicy::default()
            },
            block_align: if self.legacy_block_align {
                BlockAlign::Legacy
            } else {
                BlockAlign::Frame
            },
        }
    }
}
