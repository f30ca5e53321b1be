//! Encoded WAV output.

use super::format::WavFormat;
use super::writer::write_wav_to_vec;
use crate::error::FormatResult;

/// A complete WAV file produced by a conversion.
#[derive(Debug, Clone)]
pub struct WavOutput {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the `data` chunk payload only.
    pub pcm_hash: String,
    /// Number of channels in the output.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of frames.
    pub num_frames: usize,
}

impl WavOutput {
    /// Encodes interleaved float samples with the given format.
    pub fn encode(format: &WavFormat, samples: &[u8]) -> FormatResult<Self> {
        let wav_data = write_wav_to_vec(format, samples)?;
        let pcm_hash = blake3::hash(samples).to_hex().to_string();

        Ok(Self {
            wav_data,
            pcm_hash,
            channels: format.channels,
            sample_rate: format.sample_rate,
            num_frames: samples.len() / (format.channels as usize * 4),
        })
    }

    /// Payload size in bytes.
    pub fn data_len(&self) -> usize {
        self.wav_data.len() - super::writer::WAV_HEADER_SIZE
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames as f64 / self.sample_rate as f64
    }
}
