//! End-to-End Conversion Tests for wir2wav
//!
//! Builds WIR trees on disk, runs the convert command's batch driver over
//! them and checks the resulting WAV files with an independent reader.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wir2wav-tests --test e2e_conversion
//! ```

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;

use wir2wav_cli::commands::convert::{convert_tree, json_report};
use wir2wav_cli::commands::info::{inspect, inspect_with};
use wir2wav_cli::commands::json_output::{FileStatus, InfoEntry};
use wir2wav_cli::config::ConvertConfig;
use wir2wav_format::wav::{data_chunk, read_wav_info};
use wir2wav_format::{ChannelMask, HeaderOptions, WirFile};
use wir2wav_tests::{floats, WirBuilder, WirTree};

fn run(root: &Path, config: &ConvertConfig) -> wir2wav_cli::commands::json_output::ConvertReport {
    convert_tree(root, config, false, false).expect("batch should run")
}

fn read_hound(path: &Path) -> (hound::WavSpec, Vec<f32>) {
    let mut reader = hound::WavReader::open(path).expect("hound should open output");
    let spec = reader.spec();
    let samples = reader
        .samples::<f32>()
        .collect::<Result<Vec<_>, _>>()
        .expect("float samples");
    (spec, samples)
}

// ============================================================================
// Mono removal policy
// ============================================================================

#[test]
fn mono_plus_stereo_becomes_stereo_by_default() {
    let tree = WirTree::new();
    let input = tree.add("hall.wir", &WirBuilder::mono_plus_stereo().indexed_frames(4));

    let report = run(tree.path(), &ConvertConfig::default());
    assert!(report.success);
    assert_eq!(report.converted, 1);
    assert_eq!(report.files[0].removed_channel, Some(0));
    assert_eq!(report.files[0].output_channels, Some(2));

    let (spec, samples) = read_hound(&input.with_extension("wav"));
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 32);
    assert_eq!(spec.sample_format, hound::SampleFormat::Float);
    assert_eq!(
        samples,
        vec![1.0, 2.0, 101.0, 102.0, 201.0, 202.0, 301.0, 302.0]
    );
}

#[test]
fn keep_mono_preserves_all_channels() {
    let tree = WirTree::new();
    let input = tree.add("hall.wir", &WirBuilder::mono_plus_stereo().indexed_frames(2));

    let config = ConvertConfig {
        remove_leading_mono: false,
        ..ConvertConfig::default()
    };
    let report = run(tree.path(), &config);
    assert!(report.success);
    assert_eq!(report.files[0].removed_channel, None);

    let (spec, samples) = read_hound(&input.with_extension("wav"));
    assert_eq!(spec.channels, 3);
    assert_eq!(samples, vec![0.0, 1.0, 2.0, 100.0, 101.0, 102.0]);
}

#[test]
fn mono_plus_true_stereo_drops_to_four_channels() {
    let tree = WirTree::new();
    let builder = WirBuilder::new(5, 48000, ChannelMask::MONO | ChannelMask::TRUE_STEREO)
        .indexed_frames(3);
    let input = tree.add("plate.wir", &builder);

    run(tree.path(), &ConvertConfig::default());

    let wav = fs::read(input.with_extension("wav")).unwrap();
    let info = read_wav_info(&wav).unwrap();
    assert_eq!(info.channels, 4);
    assert_eq!(info.sample_rate, 48000);
    assert_eq!(info.block_align, 16);
    assert_eq!(info.data_len, 3 * 4 * 4);
    assert_eq!(&floats(data_chunk(&wav).unwrap())[..4], &[1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn stereo_file_passes_through_unchanged() {
    let tree = WirTree::new();
    let builder = WirBuilder::stereo().samples(&[0.5, -0.5, 0.25, -0.25]);
    let input = tree.add("room.wir", &builder);

    run(tree.path(), &ConvertConfig::default());

    let wav = fs::read(input.with_extension("wav")).unwrap();
    let wir = WirFile::from_bytes(&builder.build()).unwrap();
    assert_eq!(data_chunk(&wav).unwrap(), wir.samples());
}

// ============================================================================
// Output format options
// ============================================================================

#[test]
fn legacy_block_align_is_flat_four() {
    let tree = WirTree::new();
    let input = tree.add("hall.wir", &WirBuilder::stereo().silence(10));

    let config = ConvertConfig {
        legacy_block_align: true,
        ..ConvertConfig::default()
    };
    run(tree.path(), &config);

    let wav = fs::read(input.with_extension("wav")).unwrap();
    let info = read_wav_info(&wav).unwrap();
    assert_eq!(info.block_align, 4);
    assert_eq!(info.byte_rate, 2 * 44100 * 4);
}

#[test]
fn one_second_of_silence() {
    let tree = WirTree::new();
    let input = tree.add("silence.wir", &WirBuilder::stereo().silence(44100));

    let wir = WirFile::open(&input).unwrap();
    assert!((wir.duration_seconds().unwrap() - 1.0).abs() < 1e-9);

    let report = run(tree.path(), &ConvertConfig::default());
    let duration = report.files[0].duration_seconds.unwrap();
    assert!((duration - 1.0).abs() < 1e-9);

    let wav = fs::read(input.with_extension("wav")).unwrap();
    assert_eq!(wav.len(), 44 + 44100 * 2 * 4);
}

// ============================================================================
// Failures and batch behaviour
// ============================================================================

#[test]
fn ragged_payload_fails_without_writing() {
    let tree = WirTree::new();
    let bad = tree.add(
        "bad.wir",
        &WirBuilder::mono_plus_stereo().indexed_frames(2).raw(&[0, 0, 0]),
    );
    let good = tree.add("good.wir", &WirBuilder::stereo().silence(4));

    let report = run(tree.path(), &ConvertConfig::default());
    assert!(!report.success);
    assert_eq!(report.found, 2);
    assert_eq!(report.converted, 1);
    assert_eq!(report.failed, 1);

    let failed = report
        .files
        .iter()
        .find(|f| f.status == FileStatus::Failed)
        .unwrap();
    assert_eq!(failed.error.as_ref().unwrap().code, "WIR_003");

    assert!(!bad.with_extension("wav").exists());
    assert!(good.with_extension("wav").exists());
}

#[test]
fn fail_fast_stops_batch() {
    let tree = WirTree::new();
    // Sorted order: a.wir fails first
    tree.add_bytes("a.wir", b"too short");
    let later = tree.add("b.wir", &WirBuilder::stereo().silence(1));

    let config = ConvertConfig {
        fail_fast: true,
        ..ConvertConfig::default()
    };
    let report = run(tree.path(), &config);
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].error.as_ref().unwrap().code, "WIR_001");
    assert!(!later.with_extension("wav").exists());
}

#[test]
fn wrong_magic_is_rejected_unless_disabled() {
    let tree = WirTree::new();
    let input = tree.add("odd.wir", &WirBuilder::stereo().magic(*b"wvIX").silence(1));

    let report = run(tree.path(), &ConvertConfig::default());
    assert_eq!(report.files[0].error.as_ref().unwrap().code, "WIR_002");
    assert!(!input.with_extension("wav").exists());

    let config = ConvertConfig {
        verify_magic: false,
        ..ConvertConfig::default()
    };
    let report = run(tree.path(), &config);
    assert!(report.success);
    assert!(input.with_extension("wav").exists());
}

#[test]
fn recursive_and_flat_discovery() {
    let tree = WirTree::new();
    tree.add("top.wir", &WirBuilder::stereo().silence(1));
    let nested = tree.add("halls/nested.wir", &WirBuilder::stereo().silence(1));

    let flat = ConvertConfig {
        recursive: false,
        ..ConvertConfig::default()
    };
    let report = run(tree.path(), &flat);
    assert_eq!(report.found, 1);
    assert!(!nested.with_extension("wav").exists());

    let report = run(tree.path(), &ConvertConfig::default());
    assert_eq!(report.found, 2);
    assert!(nested.with_extension("wav").exists());
}

#[test]
fn skip_existing_leaves_output_alone() {
    let tree = WirTree::new();
    let input = tree.add("hall.wir", &WirBuilder::stereo().silence(2));
    let output = input.with_extension("wav");
    fs::write(&output, b"keep me").unwrap();

    let config = ConvertConfig {
        skip_existing: true,
        ..ConvertConfig::default()
    };
    let report = run(tree.path(), &config);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.converted, 0);
    assert_eq!(fs::read(&output).unwrap(), b"keep me");

    // Default overwrites
    run(tree.path(), &ConvertConfig::default());
    assert_eq!(&fs::read(&output).unwrap()[..4], b"RIFF");
}

#[test]
fn dry_run_writes_nothing() {
    let tree = WirTree::new();
    let input = tree.add("hall.wir", &WirBuilder::mono_plus_stereo().silence(2));

    let report = convert_tree(tree.path(), &ConvertConfig::default(), true, false).unwrap();
    assert!(report.dry_run);
    assert_eq!(report.converted, 1);
    assert_eq!(report.files[0].status, FileStatus::DryRun);
    assert_eq!(report.files[0].output_channels, Some(2));
    assert!(!input.with_extension("wav").exists());
}

#[test]
fn conversion_is_deterministic() {
    let tree = WirTree::new();
    let input = tree.add("hall.wir", &WirBuilder::mono_plus_stereo().indexed_frames(16));

    let first = run(tree.path(), &ConvertConfig::default());
    let bytes = fs::read(input.with_extension("wav")).unwrap();
    let second = run(tree.path(), &ConvertConfig::default());

    assert_eq!(first.files[0].pcm_hash, second.files[0].pcm_hash);
    assert_eq!(bytes, fs::read(input.with_extension("wav")).unwrap());
}

#[test]
fn json_report_for_missing_root() {
    let tree = WirTree::new();
    let missing = tree.path().join("nowhere");

    let report = json_report(&missing, &ConvertConfig::default(), false);
    assert!(!report.success);
    assert_eq!(report.found, 0);
    assert_eq!(report.errors[0].code, "CLI_004");
    assert!(report.errors[0].message.contains("does not exist"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["errors"][0]["code"], "CLI_004");
}

#[test]
fn json_report_for_non_wir_file_root() {
    let tree = WirTree::new();
    let path = tree.add_bytes("notes.txt", b"hello");

    let report = json_report(&path, &ConvertConfig::default(), false);
    assert!(!report.success);
    assert_eq!(report.errors[0].code, "CLI_004");
}

#[test]
fn report_serializes_to_json() {
    let tree = WirTree::new();
    tree.add("hall.wir", &WirBuilder::mono_plus_stereo().silence(2));

    let report = run(tree.path(), &ConvertConfig::default());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["files"][0]["status"], "converted");
    assert_eq!(json["files"][0]["header"]["channel_mask"], 12);
    assert_eq!(json["files"][0]["removed_channel"], 0);
}

// ============================================================================
// Info
// ============================================================================

#[test]
fn info_describes_wir_and_wav() {
    let tree = WirTree::new();
    let input = tree.add(
        "hall.wir",
        &WirBuilder::mono_plus_stereo().silence(22050),
    );
    run(tree.path(), &ConvertConfig::default());

    match inspect(&input) {
        InfoEntry::Wir {
            descriptor, frames, ..
        } => {
            assert!(descriptor.contains("3 channels [MONO + STEREO]"));
            assert!(descriptor.ends_with("44100 Hz, 0.500 secs]"));
            assert_eq!(frames, 22050);
        }
        other => panic!("Expected WIR entry, got {:?}", other),
    }

    match inspect(&input.with_extension("wav")) {
        InfoEntry::Wav {
            info,
            duration_seconds,
            ..
        } => {
            assert_eq!(info.audio_format, 3);
            assert_eq!(info.channels, 2);
            assert_eq!(duration_seconds, Some(0.5));
        }
        other => panic!("Expected WAV entry, got {:?}", other),
    }
}

#[test]
fn info_reports_unknown_extension() {
    let tree = WirTree::new();
    let path = tree.add_bytes("notes.txt", b"hello");
    match inspect(&path) {
        InfoEntry::Error { error, .. } => assert_eq!(error.code, "CLI_003"),
        other => panic!("Expected error entry, got {:?}", other),
    }
}

#[test]
fn info_honours_magic_check_option() {
    let tree = WirTree::new();
    let path = tree.add("odd.wir", &WirBuilder::stereo().magic(*b"wvIX").silence(4));

    match inspect(&path) {
        InfoEntry::Error { error, .. } => assert_eq!(error.code, "WIR_002"),
        other => panic!("Expected error entry, got {:?}", other),
    }

    let options = HeaderOptions {
        verify_magic: false,
    };
    match inspect_with(&path, options) {
        InfoEntry::Wir { frames, header, .. } => {
            assert_eq!(frames, 4);
            assert_eq!(header.channel_count, 2);
        }
        other => panic!("Expected WIR entry, got {:?}", other),
    }
}
