#![no_main]

use libfuzzer_sys::fuzz_target;
use voicewav_core::wav::{decode_pcm16, extract_pcm_data, inspect_wav};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must produce an error, never a panic.
    if let Ok(info) = inspect_wav(data) {
        let pcm = extract_pcm_data(data).expect("inspect succeeded");
        assert_eq!(pcm.len(), info.data_len);
    }
    let _ = decode_pcm16(data);
});
