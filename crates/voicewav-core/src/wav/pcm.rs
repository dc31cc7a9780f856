//! Float <-> 16-bit PCM sample conversion.

/// Converts one float sample to a signed 16-bit PCM value.
///
/// The sample is clamped to `[-1.0, 1.0]` first. Negative values scale by
/// 32768 and non-negative values by 32767, so `-1.0` maps to `i16::MIN` and
/// `1.0` to `i16::MAX`. NaN encodes as silence.
#[inline]
pub fn sample_to_i16(sample: f32) -> i16 {
    if sample.is_nan() {
        return 0;
    }
    let clamped = f64::from(sample).clamp(-1.0, 1.0);
    let scaled = if clamped < 0.0 {
        clamped * 32768.0
    } else {
        clamped * 32767.0
    };
    scaled.round() as i16
}

/// Inverse of [`sample_to_i16`].
#[inline]
pub fn i16_to_sample(value: i16) -> f32 {
    if value < 0 {
        f32::from(value) / 32768.0
    } else {
        f32::from(value) / 32767.0
    }
}

/// Appends interleaved little-endian PCM for the first `out_channels`
/// channels to `out`.
///
/// Frames are written in order; within a frame channels are written in
/// index order. Every channel must hold at least `frames` samples.
pub(crate) fn interleave_pcm16<C: AsRef<[f32]>>(
    out: &mut Vec<u8>,
    channels: &[C],
    out_channels: usize,
    frames: usize,
) {
    let kept = &channels[..out_channels];
    for frame in 0..frames {
        for channel in kept {
            let value = sample_to_i16(channel.as_ref()[frame]);
            out.extend_from_slice(&value.to_le_bytes());
        }
    }
}

/// Splits interleaved little-endian PCM bytes into per-channel floats.
///
/// A trailing partial frame is ignored.
pub(crate) fn deinterleave_pcm16(pcm: &[u8], channels: usize) -> Vec<Vec<f32>> {
    let block_align = channels * 2;
    let frames = pcm.len() / block_align;
    let mut out: Vec<Vec<f32>> = (0..channels).map(|_| Vec::with_capacity(frames)).collect();

    for frame in pcm.chunks_exact(block_align) {
        for (channel, bytes) in out.iter_mut().zip(frame.chunks_exact(2)) {
            channel.push(i16_to_sample(i16::from_le_bytes([bytes[0], bytes[1]])));
        }
    }

    out
}
