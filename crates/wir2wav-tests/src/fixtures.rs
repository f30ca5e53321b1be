//! Test fixture utilities for creating synthetic WIR files and trees.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use wir2wav_format::header::{HEADER_SIZE, WIR_DATA_TAG, WIR_MAGIC, WIR_VERSION};
use wir2wav_format::ChannelMask;

/// Builder for WIR file images.
///
/// Produces the full 40-byte header including the fields the parser ignores,
/// laid out the way real captures are.
#[derive(Debug, Clone)]
pub struct WirBuilder {
    magic: [u8; 4],
    channels: u16,
    frame_rate: u32,
    secondary_rate: u32,
    mask: ChannelMask,
    payload: Vec<u8>,
}

impl WirBuilder {
    /// Starts a builder with no payload.
    pub fn new(channels: u16, frame_rate: u32, mask: ChannelMask) -> Self {
        Self {
            magic: WIR_MAGIC,
            channels,
            frame_rate,
            secondary_rate: frame_rate,
            mask,
            payload: Vec::new(),
        }
    }

    /// Stereo builder at 44.1 kHz.
    pub fn stereo() -> Self {
        Self::new(2, 44100, ChannelMask::STEREO)
    }

    /// Mono + stereo builder (3 channels, mono first) at 44.1 kHz.
    pub fn mono_plus_stereo() -> Self {
        Self::new(3, 44100, ChannelMask::MONO | ChannelMask::STEREO)
    }

    /// Overrides the magic tag.
    pub fn magic(mut self, magic: [u8; 4]) -> Self {
        self.magic = magic;
        self
    }

    /// Overrides the secondary rate.
    pub fn secondary_rate(mut self, rate: u32) -> Self {
        self.secondary_rate = rate;
        self
    }

    /// Appends interleaved float samples.
    pub fn samples(mut self, samples: &[f32]) -> Self {
        self.payload
            .extend(samples.iter().flat_map(|s| s.to_le_bytes()));
        self
    }

    /// Appends `frames` frames whose samples encode their position:
    /// `frame * 100 + channel`.
    pub fn indexed_frames(self, frames: usize) -> Self {
        let channels = self.channels as usize;
        let samples: Vec<f32> = (0..frames)
            .flat_map(|frame| (0..channels).map(move |ch| (frame * 100 + ch) as f32))
            .collect();
        self.samples(&samples)
    }

    /// Appends `frames` frames of silence.
    pub fn silence(mut self, frames: usize) -> Self {
        let len = frames * self.channels as usize * 4;
        self.payload.resize(self.payload.len() + len, 0);
        self
    }

    /// Appends raw bytes, e.g. to build a ragged payload.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.payload.extend_from_slice(bytes);
        self
    }

    /// Returns the complete file image.
    pub fn build(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(HEADER_SIZE + self.payload.len());
        let file_size = (HEADER_SIZE + self.payload.len()) as u32 - 8;

        data.extend_from_slice(&self.magic);
        data.extend_from_slice(&file_size.to_le_bytes());
        data.extend_from_slice(&WIR_VERSION);
        data.extend_from_slice(&(HEADER_SIZE as u32).to_le_bytes());
        data.extend_from_slice(&0x3u16.to_le_bytes());
        data.extend_from_slice(&self.channels.to_le_bytes());
        data.extend_from_slice(&self.frame_rate.to_le_bytes());
        data.extend_from_slice(&self.secondary_rate.to_le_bytes());
        data.extend_from_slice(&self.mask.bits().to_le_bytes());
        data.extend_from_slice(&0x17u16.to_le_bytes());
        data.extend_from_slice(&WIR_DATA_TAG);
        data.extend_from_slice(&self.payload);

        data
    }
}

/// A temporary directory tree of WIR files.
pub struct WirTree {
    pub root: TempDir,
}

impl WirTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Writes a file at `relative`, creating parent directories.
    pub fn add(&self, relative: &str, builder: &WirBuilder) -> PathBuf {
        self.add_bytes(relative, &builder.build())
    }

    /// Writes raw bytes at `relative`, creating parent directories.
    pub fn add_bytes(&self, relative: &str, bytes: &[u8]) -> PathBuf {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture dir");
        }
        fs::write(&path, bytes).expect("Failed to write fixture");
        path
    }
}

impl Default for WirTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes little-endian float bytes.
pub fn floats(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}
