//! End-to-end encoding tests.
//!
//! Every encoded file is checked with the strict canonical validator and,
//! where useful, read back through `hound` as an independent decoder.

use std::io::Cursor;

use pretty_assertions::assert_eq;
use voicewav_core::{decode_pcm16, encode_wav, DecodedAudioSignal, WavEncoder};
use voicewav_tests::fixtures::{ramp_signal, sine_signal};
use voicewav_tests::{validate_canonical_wav, verify_determinism};

fn encode(sample_rate: u32, channels: Vec<Vec<f32>>) -> Vec<u8> {
    let signal = DecodedAudioSignal::new(sample_rate, channels).expect("valid signal");
    encode_wav(&signal).expect("encode").into_vec()
}

fn read_with_hound(bytes: &[u8]) -> (hound::WavSpec, Vec<i16>) {
    let mut reader = hound::WavReader::new(Cursor::new(bytes)).expect("hound should parse");
    let spec = reader.spec();
    let samples = reader
        .samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .expect("hound should read samples");
    (spec, samples)
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn mono_reference_scenario() {
    let wav = encode(44100, vec![vec![0.0, 1.0, -1.0, 0.5]]);
    assert_eq!(wav.len(), 52);

    let parsed = validate_canonical_wav(&wav).expect("canonical");
    assert_eq!(parsed.samples, vec![0, 32767, -32768, 16384]);
    assert_eq!(u16::from_le_bytes([wav[22], wav[23]]), 1);
    assert_eq!(u16::from_le_bytes([wav[34], wav[35]]), 16);
}

#[test]
fn zero_length_signal() {
    let wav = encode(44100, vec![vec![]]);
    assert_eq!(wav.len(), 44);
    assert_eq!(u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]), 36);
    assert_eq!(u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]), 0);
    validate_canonical_wav(&wav).expect("canonical");
}

#[test]
fn clamping_matches_rails() {
    let wav = encode(8000, vec![vec![1.5, -1.5, 1.0, -1.0]]);
    let parsed = validate_canonical_wav(&wav).expect("canonical");
    assert_eq!(parsed.samples, vec![32767, -32768, 32767, -32768]);
}

#[test]
fn four_channels_truncate_to_first_two() {
    let four: Vec<Vec<f32>> = (0..4)
        .map(|c| (0..10).map(|i| ((c * 7 + i * 3) % 11) as f32 / 5.5 - 1.0).collect())
        .collect();
    let two = four[..2].to_vec();

    let wav_four = encode(32000, four);
    let wav_two = encode(32000, two);
    assert_eq!(wav_four, wav_two);

    let parsed = validate_canonical_wav(&wav_four).expect("canonical");
    assert_eq!(parsed.channels, 2);
    assert_eq!(parsed.frames, 10);
}

#[test]
fn endianness_is_fixed() {
    // 0x1234 = 4660 → 4660/32767 ≈ 0.14221
    let sample = 4660.0 / 32767.0;
    let wav = encode(0x0001_F400, vec![vec![sample]]);
    assert_eq!(&wav[44..46], &[0x34, 0x12]);
    // 128000 Hz = 0x0001F400
    assert_eq!(&wav[24..28], &[0x00, 0xF4, 0x01, 0x00]);
}

// ============================================================================
// Independent decoder
// ============================================================================

#[test]
fn hound_reads_stereo_output() {
    let signal = sine_signal(48000, 2, 4800, 440.0, 0.8);
    let wav = encode_wav(&signal).expect("encode");
    let (spec, samples) = read_with_hound(wav.as_bytes());

    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, 48000);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(samples.len(), 4800 * 2);

    let parsed = validate_canonical_wav(wav.as_bytes()).expect("canonical");
    assert_eq!(samples, parsed.samples);
}

#[test]
fn hound_reads_six_channel_source_as_stereo() {
    let signal = sine_signal(16000, 6, 160, 100.0, 0.5);
    let wav = encode_wav(&signal).expect("encode");
    let (spec, samples) = read_with_hound(wav.as_bytes());
    assert_eq!(spec.channels, 2);
    assert_eq!(samples.len(), 320);
}

#[test]
fn ramp_round_trips_within_one_step() {
    let signal = ramp_signal(22050, 1001);
    let wav = encode_wav(&signal).expect("encode");
    let decoded = decode_pcm16(wav.as_bytes()).expect("decode");

    let original = signal.channel(0).expect("channel 0");
    let back = decoded.channel(0).expect("channel 0");
    assert_eq!(original.len(), back.len());
    for (a, b) in original.iter().zip(back) {
        assert!((a - b).abs() <= 1.0 / 32768.0, "{a} decoded as {b}");
    }
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn repeated_encoding_is_byte_identical() {
    let signal = sine_signal(44100, 2, 2048, 1000.0, 0.9);
    let encoder = WavEncoder::new();
    let result = verify_determinism(
        || encoder.encode(&signal).expect("encode").into_vec(),
        5,
    );
    result.assert_deterministic();
    assert_eq!(result.output_size, 44 + 2048 * 4);
}

#[test]
fn pcm_hash_ignores_header_only_changes() {
    let samples = vec![0.1, -0.2, 0.3];
    let a = encode_wav(&DecodedAudioSignal::mono(8000, samples.clone()).expect("valid"))
        .expect("encode");
    let b = encode_wav(&DecodedAudioSignal::mono(16000, samples).expect("valid"))
        .expect("encode");
    assert_ne!(a.as_bytes(), b.as_bytes());
    assert_eq!(a.pcm_hash(), b.pcm_hash());
}
