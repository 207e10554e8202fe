//! Silence generation for pause markers.

use tts_core::AudioBuffer;

/// Generate a silence buffer of the given duration at the given rate.
///
/// The sample count truncates toward zero, so sub-sample remainders of odd
/// durations are dropped. A zero-length pause yields an empty buffer.
pub fn silence(duration_ms: u64, sample_rate: u32) -> AudioBuffer {
    let num_samples = (duration_ms * sample_rate as u64 / 1000) as usize;
    AudioBuffer::new(vec![0.0; num_samples], sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silence_sample_count() {
        // 500ms at 24kHz = 12000 samples
        assert_eq!(silence(500, 24000).num_samples(), 12000);
        // 1s at 24kHz = 24000 samples
        assert_eq!(silence(1000, 24000).num_samples(), 24000);
    }

    #[test]
    fn test_silence_truncates() {
        // 1ms at 44.1kHz = 44.1 samples, truncated to 44
        assert_eq!(silence(1, 44100).num_samples(), 44);
    }

    #[test]
    fn test_zero_duration() {
        let buffer = silence(0, 24000);
        assert!(buffer.is_empty());
        assert_eq!(buffer.sample_rate, 24000);
    }

    #[test]
    fn test_samples_are_zero() {
        assert!(silence(10, 24000).pcm.iter().all(|&s| s == 0.0));
    }
}
