//! WAV format parameters for 32-bit float output.

use serde::{Deserialize, Serialize};

/// `fmt ` format tag for IEEE float samples.
pub const FORMAT_IEEE_FLOAT: u16 = 3;

/// Bits per sample of every emitted file.
pub const BITS_PER_SAMPLE: u16 = 32;

/// How the `fmt ` block-align field is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockAlign {
    /// Bytes per frame: `channels * 4`.
    #[default]
    Frame,
    /// Flat `4` regardless of channel count, matching files written by older
    /// WIR converters. Only correct for mono output.
    Legacy,
}

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of interleaved channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Block-align convention.
    pub block_align_mode: BlockAlign,
}

impl WavFormat {
    /// Creates a float format with frame-sized block alignment.
    pub fn float(channels: u16, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
            block_align_mode: BlockAlign::Frame,
        }
    }

    /// Returns the same format with a different block-align convention.
    pub fn with_block_align(mut self, mode: BlockAlign) -> Self {
        self.block_align_mode = mode;
        self
    }

    /// Bytes per sample (per channel).
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        BITS_PER_SAMPLE / 8
    }

    /// Value written to the block-align field.
    pub(crate) fn block_align(&self) -> u16 {
        match self.block_align_mode {
            BlockAlign::Frame => self.channels.wrapping_mul(self.bytes_per_sample()),
            BlockAlign::Legacy => self.bytes_per_sample(),
        }
    }

    /// Bytes per second: `channels * sample_rate * 4`.
    ///
    /// Independent of the block-align convention.
    pub(crate) fn byte_rate(&self) -> u32 {
        (self.channels as u32)
            .wrapping_mul(self.sample_rate)
            .wrapping_mul(self.bytes_per_sample() as u32)
    }
}
