//! Ordered concatenation of audio buffers.

use tts_core::{AudioBuffer, TtsError, TtsResult};

/// Concatenate buffers along the time axis in list order.
///
/// All buffers must share one sample rate (the synthesizer's native rate);
/// no resampling, crossfading, or gain normalization is applied. An empty
/// input list is an error: the pipeline must never hand empty audio to the
/// encoder.
pub fn concatenate(buffers: &[AudioBuffer]) -> TtsResult<AudioBuffer> {
    let first = buffers
        .first()
        .ok_or_else(|| TtsError::invalid_input("cannot assemble an empty buffer list"))?;
    let sample_rate = first.sample_rate;

    let total: usize = buffers.iter().map(AudioBuffer::num_samples).sum();
    let mut pcm = Vec::with_capacity(total);

    for buffer in buffers {
        if buffer.sample_rate != sample_rate {
            return Err(TtsError::SampleRateMismatch {
                expected: sample_rate,
                actual: buffer.sample_rate,
            });
        }
        pcm.extend_from_slice(&buffer.pcm);
    }

    Ok(AudioBuffer::new(pcm, sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(samples: &[f32]) -> AudioBuffer {
        AudioBuffer::new(samples.to_vec(), 24000)
    }

    #[test]
    fn test_order_preserving() {
        let result = concatenate(&[buf(&[1.0]), buf(&[2.0]), buf(&[3.0])]).unwrap();
        assert_eq!(result.pcm, vec![1.0, 2.0, 3.0]);
        assert_eq!(result.sample_rate, 24000);
    }

    #[test]
    fn test_associative_in_effect() {
        let (a, b, c) = (buf(&[1.0, 1.5]), buf(&[2.0]), buf(&[3.0, 3.5]));

        let all_at_once = concatenate(&[a.clone(), b.clone(), c.clone()]).unwrap();
        let ab = concatenate(&[a, b]).unwrap();
        let stepwise = concatenate(&[ab, c]).unwrap();

        assert_eq!(all_at_once, stepwise);
    }

    #[test]
    fn test_empty_list_is_error() {
        let err = concatenate(&[]).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_sample_rate_mismatch() {
        let a = AudioBuffer::new(vec![1.0], 24000);
        let b = AudioBuffer::new(vec![2.0], 22050);
        let err = concatenate(&[a, b]).unwrap_err();
        assert!(matches!(
            err,
            TtsError::SampleRateMismatch {
                expected: 24000,
                actual: 22050
            }
        ));
    }

    #[test]
    fn test_single_buffer_passthrough() {
        let result = concatenate(&[buf(&[0.5, -0.5])]).unwrap();
        assert_eq!(result.pcm, vec![0.5, -0.5]);
    }
}
