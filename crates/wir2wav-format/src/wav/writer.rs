//! Core WAV writing functions.

use std::io::Write;

use super::format::{BlockAlign, WavFormat, BITS_PER_SAMPLE, FORMAT_IEEE_FLOAT};
use crate::error::{FormatError, FormatResult};

/// Size of the RIFF, `fmt ` and `data` headers in front of the payload.
pub const WAV_HEADER_SIZE: usize = 0x2c;

/// Checks that the format describes a meaningful, representable stream and
/// returns the `data` chunk size.
///
/// The frame-sized block align must fit a `u16`; the legacy flat value
/// always does.
pub(super) fn validate(format: &WavFormat, data_len: usize) -> FormatResult<u32> {
    let invalid = || FormatError::InvalidParameters {
        channels: format.channels,
        sample_rate: format.sample_rate,
    };

    if format.channels == 0 || format.sample_rate == 0 {
        return Err(invalid());
    }
    if format.block_align_mode == BlockAlign::Frame
        && format.channels as u64 * 4 > u16::MAX as u64
    {
        return Err(invalid());
    }
    if format.channels as u64 * format.sample_rate as u64 * 4 > u32::MAX as u64 {
        return Err(invalid());
    }

    data_len
        .checked_add(WAV_HEADER_SIZE - 8)
        .and_then(|riff_size| u32::try_from(riff_size).ok())
        .map(|_| data_len as u32)
        .ok_or(FormatError::PayloadTooLarge { len: data_len })
}

/// Writes a complete WAV file to a writer.
///
/// `samples` is written verbatim as the `data` chunk; it must already hold
/// interleaved little-endian 32-bit floats for `format.channels` channels.
///
/// # Errors
/// * [`FormatError::InvalidParameters`] for zero channels or sample rate, a
///   byte rate that overflows `u32`, or a frame-sized block align that
///   overflows `u16`
/// * [`FormatError::PayloadTooLarge`] if the RIFF size would overflow
/// * [`FormatError::Io`] if the writer fails
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, samples: &[u8]) -> FormatResult<()> {
    let data_size = validate(format, samples.len())?;
    let riff_size = data_size + (WAV_HEADER_SIZE as u32 - 8);

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?;
    writer.write_all(&FORMAT_IEEE_FLOAT.to_le_bytes())?;
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&BITS_PER_SAMPLE.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(samples)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, samples: &[u8]) -> FormatResult<Vec<u8>> {
    let mut buffer = Vec::with_capacity(WAV_HEADER_SIZE + samples.len());
    write_wav(&mut buffer, format, samples)?;
    Ok(buffer)
}

/// Encodes interleaved float samples as a WAV file with frame-sized block
/// alignment.
///
/// The encoder never drops channels; channel removal happens beforehand.
pub fn encode(channels: u16, sample_rate: u32, samples: &[u8]) -> FormatResult<Vec<u8>> {
    write_wav_to_vec(&WavFormat::float(channels, sample_rate), samples)
}
