//! WIR to WAV conversion pipeline.
//!
//! Header values flow from [`WirFile`] through the optional channel removal
//! into the WAV encoder. Each step is a pure transformation.

use std::borrow::Cow;

use serde::Serialize;

use crate::channels::ChannelPolicy;
use crate::editor::remove_channel;
use crate::error::FormatResult;
use crate::wav::{BlockAlign, WavFormat, WavOutput};
use crate::wir::WirFile;

/// Conversion settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Mono-removal policy.
    pub policy: ChannelPolicy,
    /// Block-align convention for the `fmt ` chunk.
    pub block_align: BlockAlign,
}

/// Why a requested mono removal did not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum RemovalSkip {
    /// The configured mono index is not a channel of this file.
    IndexOutOfRange {
        /// Configured index.
        index: u16,
        /// Channels in the file.
        channel_count: u16,
    },
    /// The file has a single channel; removing it would leave nothing.
    SingleChannel,
}

/// Result of converting one WIR file.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Encoded WAV file.
    pub output: WavOutput,
    /// Channel index removed from every frame, if any.
    pub removed_channel: Option<u16>,
    /// Set when the mask asked for a removal that could not be applied.
    pub skipped_removal: Option<RemovalSkip>,
}

/// Plans the channel removal for a file.
///
/// Returns the index to drop, or the reason the mask-driven removal is
/// skipped. `Ok(None)` means nothing was requested.
pub fn plan_removal(wir: &WirFile, policy: &ChannelPolicy) -> Result<Option<u16>, RemovalSkip> {
    let header = wir.header();
    let Some(index) = policy.channel_to_remove(header.channel_mask) else {
        return Ok(None);
    };

    if header.channel_count < 2 {
        return Err(RemovalSkip::SingleChannel);
    }
    if index >= header.channel_count {
        return Err(RemovalSkip::IndexOutOfRange {
            index,
            channel_count: header.channel_count,
        });
    }
    Ok(Some(index))
}

/// Converts a WIR file to a WAV file in memory.
pub fn convert(wir: &WirFile, options: &ConvertOptions) -> FormatResult<Conversion> {
    let header = wir.header();

    let (removed_channel, skipped_removal) = match plan_removal(wir, &options.policy) {
        Ok(index) => (index, None),
        Err(skip) => (None, Some(skip)),
    };

    let (channels, samples) = match removed_channel {
        Some(index) => (
            header.channel_count - 1,
            Cow::Owned(remove_channel(wir.samples(), header.channel_count, index)?),
        ),
        None => (header.channel_count, Cow::Borrowed(wir.samples())),
    };

    let format = WavFormat::float(channels, header.frame_rate).with_block_align(options.block_align);
    let output = WavOutput::encode(&format, &samples)?;

    Ok(Conversion {
        output,
        removed_channel,
        skipped_removal,
    })
}
