//! Channel-configuration flags and the mono-removal policy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single channel configuration that a WIR file may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelLayout {
    /// One channel.
    Mono,
    /// Left/right pair.
    Stereo,
    /// Four channels with full left/right input-to-output cross-coupling.
    TrueStereo,
}

impl ChannelLayout {
    /// All layouts in ascending bit order.
    pub const ALL: [ChannelLayout; 3] = [
        ChannelLayout::Mono,
        ChannelLayout::Stereo,
        ChannelLayout::TrueStereo,
    ];

    /// The bit this layout occupies in the header's channel mask.
    pub const fn bit(self) -> u16 {
        match self {
            ChannelLayout::Mono => 0x4,
            ChannelLayout::Stereo => 0x8,
            ChannelLayout::TrueStereo => 0x10,
        }
    }

    /// Upper-case label used in descriptors.
    pub const fn label(self) -> &'static str {
        match self {
            ChannelLayout::Mono => "MONO",
            ChannelLayout::Stereo => "STEREO",
            ChannelLayout::TrueStereo => "TRUE_STEREO",
        }
    }
}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of [`ChannelLayout`] flags from the WIR header.
///
/// Several bits may be set at once; a file can carry a mono sub-stream
/// alongside a stereo one. Unknown bits are preserved but never reported as
/// layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelMask(u16);

impl ChannelMask {
    /// No layout bits set.
    pub const EMPTY: ChannelMask = ChannelMask(0);
    /// Mono only.
    pub const MONO: ChannelMask = ChannelMask(ChannelLayout::Mono.bit());
    /// Stereo only.
    pub const STEREO: ChannelMask = ChannelMask(ChannelLayout::Stereo.bit());
    /// True stereo only.
    pub const TRUE_STEREO: ChannelMask = ChannelMask(ChannelLayout::TrueStereo.bit());

    /// Wraps a raw mask value.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the raw mask value.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Returns true if the given layout's bit is set.
    pub const fn contains(self, layout: ChannelLayout) -> bool {
        self.0 & layout.bit() != 0
    }

    /// Returns the union of two masks.
    pub const fn union(self, other: ChannelMask) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns true when no bits are set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Known layouts present in the mask, in ascending bit order.
    pub fn layouts(self) -> impl Iterator<Item = ChannelLayout> {
        ChannelLayout::ALL
            .into_iter()
            .filter(move |layout| self.contains(*layout))
    }

    /// True when the mono bit is set and the mask is not mono alone.
    ///
    /// Such files carry a redundant mono channel next to another
    /// configuration.
    pub const fn has_additional_mono(self) -> bool {
        self.contains(ChannelLayout::Mono) && self.0 != ChannelMask::MONO.0
    }
}

impl From<ChannelLayout> for ChannelMask {
    fn from(layout: ChannelLayout) -> Self {
        Self(layout.bit())
    }
}

impl std::ops::BitOr for ChannelMask {
    type Output = ChannelMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for ChannelMask {
    /// Formats as `MONO + STEREO`; empty when no known layout is set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, layout) in self.layouts().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            f.write_str(layout.label())?;
        }
        Ok(())
    }
}

/// Controls removal of a redundant mono channel during conversion.
///
/// Producers of convolution-reverb captures sometimes store a legacy mono
/// channel in front of the stereo or true-stereo channels. When the header
/// mask advertises mono next to another layout the channel at
/// `mono_channel_index` is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChannelPolicy {
    /// Whether to drop the additional mono channel.
    pub remove_leading_mono: bool,
    /// Index of the mono channel within each frame.
    pub mono_channel_index: u16,
}

impl Default for ChannelPolicy {
    fn default() -> Self {
        Self {
            remove_leading_mono: true,
            mono_channel_index: 0,
        }
    }
}

impl ChannelPolicy {
    /// A policy that never removes channels.
    pub fn keep_all() -> Self {
        Self {
            remove_leading_mono: false,
            ..Self::default()
        }
    }

    /// Returns the channel index to remove for the given mask, if any.
    ///
    /// Only consults the mask; the caller checks the index against the
    /// actual channel count.
    pub fn channel_to_remove(&self, mask: ChannelMask) -> Option<u16> {
        (self.remove_leading_mono && mask.has_additional_mono()).then_some(self.mono_channel_index)
    }
}
