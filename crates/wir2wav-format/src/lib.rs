//! wir2wav core library
//!
//! Converts WIR impulse-response containers into IEEE-float WAV files.
//!
//! # Overview
//!
//! A WIR file is a 40-byte header followed by interleaved little-endian
//! 32-bit float frames. Conversion is three pure steps:
//!
//! 1. [`header`] - parse channel count, frame rate, secondary rate and the
//!    channel-configuration mask
//! 2. [`editor`] - optionally drop a redundant mono channel from every frame
//! 3. [`wav`] - wrap the samples in a RIFF/WAVE container (format tag 3)
//!
//! The crate performs no console output; callers decide how to report.
//!
//! # Example
//!
//! ```no_run
//! use wir2wav_format::{convert, ConvertOptions, WirFile};
//!
//! let wir = WirFile::open("hall.wir")?;
//! println!("{}", wir);
//!
//! let conversion = convert(&wir, &ConvertOptions::default())?;
//! std::fs::write("hall.wav", &conversion.output.wav_data)?;
//! # Ok::<(), wir2wav_format::FormatError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`channels`] - channel-mask flags and the mono-removal policy
//! - [`convert`](mod@convert) - the full pipeline
//! - [`editor`] - interleaved stream editing
//! - [`header`] - WIR header parser
//! - [`wav`] - WAV encoder and reader
//! - [`wir`] - loaded WIR file model

pub mod channels;
pub mod convert;
pub mod editor;
pub mod error;
pub mod header;
pub mod wav;
pub mod wir;

// Re-export main types at crate root
pub use channels::{ChannelLayout, ChannelMask, ChannelPolicy};
pub use convert::{convert, Conversion, ConvertOptions, RemovalSkip};
pub use editor::remove_channel;
pub use error::{FormatError, FormatResult};
pub use header::{parse_header, parse_header_with, HeaderOptions, WirHeader, HEADER_SIZE};
pub use wav::{encode, BlockAlign, WavFormat, WavInfo, WavOutput};
pub use wir::WirFile;
