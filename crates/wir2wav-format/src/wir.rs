//! In-memory WIR file model.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::editor::BYTES_PER_SAMPLE;
use crate::error::{FormatError, FormatResult};
use crate::header::{parse_header_with, HeaderOptions, WirHeader, HEADER_SIZE};

/// A loaded WIR file: parsed header plus the raw sample payload.
///
/// The payload is always a whole number of frames; construction fails
/// otherwise.
#[derive(Debug, Clone)]
pub struct WirFile {
    path: Option<PathBuf>,
    header: WirHeader,
    samples: Vec<u8>,
}

impl WirFile {
    /// Reads and parses a WIR file from disk.
    pub fn open(path: impl AsRef<Path>) -> FormatResult<Self> {
        Self::open_with(path, HeaderOptions::default())
    }

    /// Reads and parses a WIR file from disk with explicit header options.
    pub fn open_with(path: impl AsRef<Path>, options: HeaderOptions) -> FormatResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let mut wir = Self::from_bytes_with(&bytes, options)?;
        wir.path = Some(path.to_path_buf());
        Ok(wir)
    }

    /// Parses a complete WIR file image.
    pub fn from_bytes(bytes: &[u8]) -> FormatResult<Self> {
        Self::from_bytes_with(bytes, HeaderOptions::default())
    }

    /// Parses a complete WIR file image with explicit header options.
    ///
    /// # Errors
    /// * header errors from [`parse_header_with`]
    /// * [`FormatError::InvalidParameters`] if the header declares zero channels
    /// * [`FormatError::UnexpectedPayloadLength`] if the payload is not a whole
    ///   number of frames
    pub fn from_bytes_with(bytes: &[u8], options: HeaderOptions) -> FormatResult<Self> {
        let header = parse_header_with(bytes, options)?;
        Self::from_parts(header, bytes[HEADER_SIZE..].to_vec())
    }

    /// Builds a WIR file from an already-parsed header and payload.
    pub fn from_parts(header: WirHeader, samples: Vec<u8>) -> FormatResult<Self> {
        if header.channel_count == 0 {
            return Err(FormatError::InvalidParameters {
                channels: 0,
                sample_rate: header.frame_rate,
            });
        }

        let frame_size = header.frame_size();
        let remainder = samples.len() % frame_size;
        if remainder != 0 {
            return Err(FormatError::UnexpectedPayloadLength {
                len: samples.len(),
                frame_size,
                remainder,
            });
        }

        Ok(Self {
            path: None,
            header,
            samples,
        })
    }

    /// Attaches a source path used in diagnostics.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Source path, if loaded from disk.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Parsed header.
    pub fn header(&self) -> &WirHeader {
        &self.header
    }

    /// Raw interleaved float payload.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Consumes the file and returns its payload.
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    /// Number of whole frames in the payload.
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.header.frame_size()
    }

    /// Duration in seconds.
    ///
    /// # Errors
    /// [`FormatError::InvalidParameters`] if the frame rate is zero.
    pub fn duration_seconds(&self) -> FormatResult<f64> {
        if self.header.frame_rate == 0 {
            return Err(FormatError::InvalidParameters {
                channels: self.header.channel_count,
                sample_rate: 0,
            });
        }
        Ok(self.samples.len() as f64
            / BYTES_PER_SAMPLE as f64
            / self.header.channel_count as f64
            / self.header.frame_rate as f64)
    }
}

impl fmt::Display for WirFile {
    /// `WIR[path, 3 channels [MONO + STEREO], 44100 Hz, 1.000 secs]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self
            .path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<memory>".to_string());

        write!(
            f,
            "WIR[{}, {} channels [{}], {} Hz, ",
            path, self.header.channel_count, self.header.channel_mask, self.header.frame_rate
        )?;
        match self.duration_seconds() {
            Ok(secs) => write!(f, "{:.3} secs]", secs),
            Err(_) => write!(f, "? secs]"),
        }
    }
}
