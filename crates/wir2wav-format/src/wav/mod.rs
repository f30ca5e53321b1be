//! IEEE-float WAV encoder.
//!
//! Writes RIFF/WAVE containers with a 16-byte `fmt ` chunk (format tag 3,
//! 32 bits per sample) followed by a single `data` chunk. Output contains no
//! timestamps or variable metadata, so identical input yields identical
//! bytes.

mod format;
mod info;
mod result;
mod writer;


pub use format::{BlockAlign, WavFormat, BITS_PER_SAMPLE, FORMAT_IEEE_FLOAT};
pub use info::{data_chunk, read_wav_info, WavInfo};
pub use result::WavOutput;
pub use writer::{encode, write_wav, write_wav_to_vec, WAV_HEADER_SIZE};
