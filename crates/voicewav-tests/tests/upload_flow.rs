//! Capture-to-upload flow: format selection, transcoding and fallback.

use pretty_assertions::assert_eq;
use voicewav_core::container::PREFERRED_RECORDING_MIME_TYPES;
use voicewav_core::{prepare_upload, select_recording_mime, RecordingFormat};
use voicewav_tests::fixtures::{broken_decoder, fixed_decoder, ragged_decoder, sine_signal};
use voicewav_tests::validate_canonical_wav;

const WEBM_MAGIC: [u8; 4] = [0x1A, 0x45, 0xDF, 0xA3];

#[test]
fn browser_without_wav_support_records_webm_and_uploads_wav() {
    // typical Chromium: no audio/wav or mpeg recording, opus in webm
    let supported = ["audio/webm;codecs=opus", "audio/webm"];
    let mime = select_recording_mime(|m| supported.contains(&m)).expect("webm supported");
    assert_eq!(mime, "audio/webm;codecs=opus");
    assert_eq!(
        RecordingFormat::from_mime_type(mime),
        RecordingFormat::WebM
    );

    let decoder = fixed_decoder(sine_signal(48000, 1, 4800, 220.0, 0.6));
    let upload = prepare_upload(mime, WEBM_MAGIC.to_vec(), &decoder);

    assert!(upload.transcoded);
    assert_eq!(upload.file_name, "recording.wav");
    assert_eq!(upload.mime_type, "audio/wav");
    let parsed = validate_canonical_wav(&upload.bytes).expect("canonical");
    assert_eq!(parsed.channels, 1);
    assert_eq!(parsed.sample_rate, 48000);
    assert_eq!(parsed.frames, 4800);
}

#[test]
fn decoder_failure_uploads_original_webm() {
    let upload = prepare_upload("audio/webm", WEBM_MAGIC.to_vec(), &broken_decoder);
    assert!(!upload.transcoded);
    assert_eq!(upload.file_name, "recording.webm");
    assert_eq!(upload.mime_type, "audio/webm");
    assert_eq!(upload.bytes, WEBM_MAGIC.to_vec());
}

#[test]
fn invalid_decoded_signal_uploads_original_webm() {
    let upload = prepare_upload("audio/webm;codecs=opus", WEBM_MAGIC.to_vec(), &ragged_decoder);
    assert!(!upload.transcoded);
    assert_eq!(upload.file_name, "recording.webm");
    assert_eq!(upload.bytes, WEBM_MAGIC.to_vec());
}

#[test]
fn stereo_recording_keeps_both_channels() {
    let decoder = fixed_decoder(sine_signal(44100, 2, 441, 440.0, 0.5));
    let upload = prepare_upload("audio/webm", WEBM_MAGIC.to_vec(), &decoder);
    let parsed = validate_canonical_wav(&upload.bytes).expect("canonical");
    assert_eq!(parsed.channels, 2);
    assert_ne!(parsed.channel(0), parsed.channel(1));
}

#[test]
fn every_preferred_type_has_an_upload_name() {
    for mime in PREFERRED_RECORDING_MIME_TYPES {
        let format = RecordingFormat::from_mime_type(mime);
        assert_ne!(format, RecordingFormat::Other, "{mime}");
        assert!(format.extension().starts_with('.'));
    }
}
