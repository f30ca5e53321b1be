//! Error types for WIR parsing and WAV encoding.

use thiserror::Error;

/// Result type for format operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors that can occur while reading a WIR file or emitting a WAV file.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Header shorter than the fixed 40-byte WIR header.
    #[error("malformed header: expected at least {expected} bytes, got {len}")]
    MalformedHeader {
        /// Number of bytes available.
        len: usize,
        /// Number of bytes required.
        expected: usize,
    },

    /// Magic tag at offset 0 is not `wvIR`.
    #[error("unrecognized format: expected magic \"wvIR\", found {magic:?}")]
    UnrecognizedFormat {
        /// The four bytes found at offset 0.
        magic: [u8; 4],
    },

    /// Payload is not a whole number of frames.
    #[error(
        "unexpected payload length: {len} bytes is not a multiple of the {frame_size}-byte frame \
         ({remainder} trailing bytes)"
    )]
    UnexpectedPayloadLength {
        /// Payload length in bytes.
        len: usize,
        /// Frame size in bytes (`channel_count * 4`).
        frame_size: usize,
        /// Bytes left over after the last whole frame.
        remainder: usize,
    },

    /// Channel index outside `[0, channel_count)`.
    #[error("invalid channel index {index} for a stream with {channel_count} channels")]
    InvalidChannelIndex {
        /// The requested index.
        index: u16,
        /// The number of channels in the stream.
        channel_count: u16,
    },

    /// Zero channel count or sample rate, or a combination whose byte rate
    /// (`u32`) or frame-sized block align (`u16`) does not fit the `fmt ` chunk.
    #[error("invalid parameters: {channels} channels at {sample_rate} Hz")]
    InvalidParameters {
        /// Channel count.
        channels: u16,
        /// Sample rate in Hz.
        sample_rate: u32,
    },

    /// Payload does not fit the 32-bit RIFF size fields.
    #[error("payload of {len} bytes does not fit in a RIFF container")]
    PayloadTooLarge {
        /// Payload length in bytes.
        len: usize,
    },

    /// A WAV buffer could not be parsed back.
    #[error("malformed WAV at offset {offset}: {message}")]
    MalformedWav {
        /// Byte offset of the problem.
        offset: usize,
        /// Description of the problem.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormatError {
    /// Creates a malformed WAV error.
    pub fn malformed_wav(offset: usize, message: impl Into<String>) -> Self {
        Self::MalformedWav {
            offset,
            message: message.into(),
        }
    }

    /// Stable error code for reporting.
    ///
    /// Codes are part of the JSON report format and must not be renumbered.
    pub fn code(&self) -> &'static str {
        match self {
            FormatError::MalformedHeader { .. } => "WIR_001",
            FormatError::UnrecognizedFormat { .. } => "WIR_002",
            FormatError::UnexpectedPayloadLength { .. } => "WIR_003",
            FormatError::InvalidChannelIndex { .. } => "WIR_004",
            FormatError::InvalidParameters { .. } => "WIR_005",
            FormatError::PayloadTooLarge { .. } => "WIR_006",
            FormatError::MalformedWav { .. } => "WIR_007",
            FormatError::Io(_) => "WIR_008",
        }
    }
}
