//! WIR header parsing.
//!
//! The header is a fixed 40-byte little-endian structure:
//!
//! | Offset | Size | Field          | Notes                        |
//! |--------|------|----------------|------------------------------|
//! | 0      | 4    | magic          | `wvIR`                       |
//! | 4      | 4    | file size      | file length - 8              |
//! | 8      | 8    | version        | `ver1fmt `                   |
//! | 16     | 4    | header size    |                              |
//! | 20     | 2    | reserved       | observed `0x3`               |
//! | 22     | 2    | channel count  |                              |
//! | 24     | 4    | frame rate     | Hz                           |
//! | 28     | 4    | secondary rate | undocumented, kept as-is     |
//! | 32     | 2    | channel mask   | MONO=4, STEREO=8, TRUE_STEREO=16 |
//! | 34     | 2    | reserved       | observed `0x17`              |
//! | 36     | 4    | data tag       | `data`                       |
//!
//! Only the magic and the four fields needed for conversion are read.

use serde::Serialize;

use crate::channels::ChannelMask;
use crate::error::{FormatError, FormatResult};

/// Size of the WIR header in bytes.
pub const HEADER_SIZE: usize = 40;

/// Magic tag at offset 0.
pub const WIR_MAGIC: [u8; 4] = *b"wvIR";

/// Version tag at offset 8.
pub const WIR_VERSION: [u8; 8] = *b"ver1fmt ";

/// Data tag at offset 36.
pub const WIR_DATA_TAG: [u8; 4] = *b"data";

pub(crate) const CHANNEL_COUNT_OFFSET: usize = 22;
pub(crate) const FRAME_RATE_OFFSET: usize = 24;
pub(crate) const SECONDARY_RATE_OFFSET: usize = 28;
pub(crate) const CHANNEL_MASK_OFFSET: usize = 32;

/// Values extracted from a WIR header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WirHeader {
    /// Number of interleaved channels.
    pub channel_count: u16,
    /// Samples per second per channel.
    pub frame_rate: u32,
    /// Second rate-like field; not used for conversion.
    pub secondary_rate: u32,
    /// Channel-configuration flags.
    pub channel_mask: ChannelMask,
}

impl WirHeader {
    /// Size of one interleaved frame in bytes.
    pub fn frame_size(&self) -> usize {
        self.channel_count as usize * 4
    }
}

/// Header parsing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderOptions {
    /// Reject headers whose magic is not `wvIR`.
    pub verify_magic: bool,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self { verify_magic: true }
    }
}

/// Parses a WIR header with default options.
///
/// `data` may be the whole file; only the first [`HEADER_SIZE`] bytes are read.
pub fn parse_header(data: &[u8]) -> FormatResult<WirHeader> {
    parse_header_with(data, HeaderOptions::default())
}

/// Parses a WIR header.
///
/// # Errors
/// * [`FormatError::MalformedHeader`] if fewer than 40 bytes are supplied
/// * [`FormatError::UnrecognizedFormat`] if the magic is wrong and
///   `options.verify_magic` is set
pub fn parse_header_with(data: &[u8], options: HeaderOptions) -> FormatResult<WirHeader> {
    let header: &[u8; HEADER_SIZE] = data
        .get(..HEADER_SIZE)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(FormatError::MalformedHeader {
            len: data.len(),
            expected: HEADER_SIZE,
        })?;

    let magic = [header[0], header[1], header[2], header[3]];
    if options.verify_magic && magic != WIR_MAGIC {
        return Err(FormatError::UnrecognizedFormat { magic });
    }

    Ok(WirHeader {
        channel_count: read_u16(header, CHANNEL_COUNT_OFFSET),
        frame_rate: read_u32(header, FRAME_RATE_OFFSET),
        secondary_rate: read_u32(header, SECONDARY_RATE_OFFSET),
        channel_mask: ChannelMask::from_bits(read_u16(header, CHANNEL_MASK_OFFSET)),
    })
}

fn read_u16(header: &[u8; HEADER_SIZE], offset: usize) -> u16 {
    u16::from_le_bytes([header[offset], header[offset + 1]])
}

fn read_u32(header: &[u8; HEADER_SIZE], offset: usize) -> u32 {
    u32::from_le_bytes([
        header[offset],
        header[offset + 1],
        header[offset + 2],
        header[offset + 3],
    ])
}
