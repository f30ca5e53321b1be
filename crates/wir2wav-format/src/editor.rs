//! Interleaved sample stream editing.

use crate::error::{FormatError, FormatResult};

/// Bytes per 32-bit float sample.
pub const BYTES_PER_SAMPLE: usize = 4;

/// Removes one channel from an interleaved stream of 32-bit samples.
///
/// The stream is walked in frames of `channel_count * 4` bytes; each output
/// frame is the input frame with the 4-byte span of `channel_index` cut out.
/// A trailing partial frame is edited on whatever bytes it has, the same way
/// slicing would treat it. Callers are expected to reject ragged payloads
/// before getting here.
///
/// # Errors
/// [`FormatError::InvalidChannelIndex`] if `channel_count` is zero or
/// `channel_index >= channel_count`.
pub fn remove_channel(
    samples: &[u8],
    channel_count: u16,
    channel_index: u16,
) -> FormatResult<Vec<u8>> {
    if channel_count == 0 || channel_index >= channel_count {
        return Err(FormatError::InvalidChannelIndex {
            index: channel_index,
            channel_count,
        });
    }

    let frame_size = channel_count as usize * BYTES_PER_SAMPLE;
    let cut_start = channel_index as usize * BYTES_PER_SAMPLE;
    let cut_end = cut_start + BYTES_PER_SAMPLE;

    let frames = samples.len() / frame_size;
    let mut out = Vec::with_capacity(frames * (frame_size - BYTES_PER_SAMPLE) + frame_size);

    for frame in samples.chunks(frame_size) {
        out.extend_from_slice(&frame[..cut_start.min(frame.len())]);
        out.extend_from_slice(&frame[cut_end.min(frame.len())..]);
    }

    Ok(out)
}
