//! Property-based tests for stream editing and WAV encoding.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wir2wav-tests --test proptest_stream
//! ```

use proptest::prelude::*;

use wir2wav_format::wav::{data_chunk, read_wav_info};
use wir2wav_format::{encode, parse_header, remove_channel, FormatError, HEADER_SIZE};

/// Strategy for (channel_count, interleaved payload) with whole frames.
fn whole_frames() -> impl Strategy<Value = (u16, Vec<u8>)> {
    (1u16..=6, 0usize..32).prop_flat_map(|(channels, frames)| {
        let len = channels as usize * 4 * frames;
        (Just(channels), prop::collection::vec(any::<u8>(), len))
    })
}

proptest! {
    /// Removing one of C channels keeps (C-1)/C of the bytes.
    #[test]
    fn removal_length_law((channels, payload) in whole_frames(), pick in any::<u16>()) {
        let index = pick % channels;
        let out = remove_channel(&payload, channels, index).unwrap();
        let c = channels as usize;
        prop_assert_eq!(out.len(), payload.len() * (c - 1) / c);
    }

    /// Every kept sample appears in order; the removed column is gone.
    #[test]
    fn removal_keeps_other_columns((channels, payload) in whole_frames(), pick in any::<u16>()) {
        let index = (pick % channels) as usize;
        let c = channels as usize;
        let out = remove_channel(&payload, channels, index as u16).unwrap();

        let expected: Vec<u8> = payload
            .chunks(4)
            .enumerate()
            .filter(|(i, _)| i % c != index)
            .flat_map(|(_, s)| s.iter().copied())
            .collect();
        prop_assert_eq!(out, expected);
    }

    /// Out-of-range indices are always rejected.
    #[test]
    fn removal_rejects_bad_index(channels in 0u16..8, extra in 0u16..8) {
        let index = channels + extra;
        let result = remove_channel(&[0u8; 64], channels, index);
        let is_invalid_index = matches!(result, Err(FormatError::InvalidChannelIndex { .. }));
        prop_assert!(is_invalid_index);
    }

    /// The data size field always equals the payload length and the payload
    /// is copied verbatim.
    #[test]
    fn encode_data_chunk(
        channels in 1u16..=8,
        rate in 1u32..=192_000,
        payload in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        let wav = encode(channels, rate, &payload).unwrap();
        let info = read_wav_info(&wav).unwrap();
        prop_assert_eq!(info.data_len, payload.len());
        prop_assert_eq!(info.channels, channels);
        prop_assert_eq!(info.sample_rate, rate);
        prop_assert_eq!(info.audio_format, 3);
        prop_assert_eq!(info.block_align as usize, channels as usize * 4);
        prop_assert_eq!(data_chunk(&wav).unwrap(), payload.as_slice());
    }

    /// Arbitrary bytes never panic the header parser.
    #[test]
    fn header_parse_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..80)) {
        let result = parse_header(&bytes);
        if bytes.len() < HEADER_SIZE {
            let is_malformed = matches!(result, Err(FormatError::MalformedHeader { .. }));
            prop_assert!(is_malformed);
        }
    }
}
