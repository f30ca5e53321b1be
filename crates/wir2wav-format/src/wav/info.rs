//! WAV header reader.
//!
//! Parses the RIFF/WAVE structure back into its `fmt ` fields and the
//! location of the `data` chunk. Used to inspect converted files.

use serde::Serialize;

use crate::error::{FormatError, FormatResult};

/// Information extracted from a WAV file header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WavInfo {
    /// Audio format code (1 = PCM, 3 = IEEE float).
    pub audio_format: u16,
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Byte rate as stored in the header.
    pub byte_rate: u32,
    /// Block alignment as stored in the header.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Offset of the first payload byte.
    pub data_offset: usize,
    /// Payload length in bytes, from the `data` chunk header.
    pub data_len: usize,
}

impl WavInfo {
    /// Number of frames, derived from the channel count and sample width
    /// rather than the stored block alignment.
    pub fn frame_count(&self) -> usize {
        let frame_size = self.channels as usize * (self.bits_per_sample as usize / 8);
        if frame_size == 0 {
            0
        } else {
            self.data_len / frame_size
        }
    }

    /// Duration in seconds, or `None` for a zero sample rate.
    pub fn duration_seconds(&self) -> Option<f64> {
        (self.sample_rate > 0).then(|| self.frame_count() as f64 / self.sample_rate as f64)
    }
}

/// Parses a WAV file buffer.
///
/// Chunks other than `fmt ` and `data` are skipped (word-aligned). The
/// `data` chunk must follow `fmt ` and fit inside the buffer.
pub fn read_wav_info(data: &[u8]) -> FormatResult<WavInfo> {
    const MIN_HEADER_SIZE: usize = 44;

    if data.len() < MIN_HEADER_SIZE {
        return Err(FormatError::malformed_wav(
            0,
            format!(
                "file too short: {} bytes (minimum {} required)",
                data.len(),
                MIN_HEADER_SIZE
            ),
        ));
    }

    if &data[0..4] != b"RIFF" {
        return Err(FormatError::malformed_wav(0, "expected 'RIFF'"));
    }
    if &data[8..12] != b"WAVE" {
        return Err(FormatError::malformed_wav(8, "expected 'WAVE'"));
    }

    let mut offset = 12;
    let mut fmt: Option<[u8; 16]> = None;

    while offset + 8 <= data.len() {
        let chunk_id = &data[offset..offset + 4];
        let chunk_size = u32::from_le_bytes([
            data[offset + 4],
            data[offset + 5],
            data[offset + 6],
            data[offset + 7],
        ]) as usize;
        let body = offset + 8;

        if chunk_id == b"fmt " {
            if chunk_size < 16 {
                return Err(FormatError::malformed_wav(
                    offset,
                    format!("fmt chunk too small: {} bytes", chunk_size),
                ));
            }
            let fields = data
                .get(body..body + 16)
                .ok_or_else(|| FormatError::malformed_wav(offset, "truncated fmt chunk"))?;
            let mut copy = [0u8; 16];
            copy.copy_from_slice(fields);
            fmt = Some(copy);
        }

        if chunk_id == b"data" {
            let fmt = fmt.ok_or_else(|| {
                FormatError::malformed_wav(offset, "data chunk found before fmt chunk")
            })?;
            if body + chunk_size > data.len() {
                return Err(FormatError::malformed_wav(
                    offset,
                    format!(
                        "data chunk declares {} bytes, only {} present",
                        chunk_size,
                        data.len() - body
                    ),
                ));
            }

            return Ok(WavInfo {
                audio_format: u16::from_le_bytes([fmt[0], fmt[1]]),
                channels: u16::from_le_bytes([fmt[2], fmt[3]]),
                sample_rate: u32::from_le_bytes([fmt[4], fmt[5], fmt[6], fmt[7]]),
                byte_rate: u32::from_le_bytes([fmt[8], fmt[9], fmt[10], fmt[11]]),
                block_align: u16::from_le_bytes([fmt[12], fmt[13]]),
                bits_per_sample: u16::from_le_bytes([fmt[14], fmt[15]]),
                data_offset: body,
                data_len: chunk_size,
            });
        }

        // Chunks are word-aligned
        let padded_size = (chunk_size + 1) & !1;
        offset = body + padded_size;
    }

    if fmt.is_none() {
        return Err(FormatError::malformed_wav(12, "missing fmt chunk"));
    }
    Err(FormatError::malformed_wav(12, "missing data chunk"))
}

/// Returns the `data` chunk payload of a WAV buffer.
pub fn data_chunk(data: &[u8]) -> FormatResult<&[u8]> {
    let info = read_wav_info(data)?;
    Ok(&data[info.data_offset..info.data_offset + info.data_len])
}
