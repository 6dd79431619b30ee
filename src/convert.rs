//! Conversion of interleaved sample buffers into channel-major tensors.
//!
//! Decoders deliver samples interleaved by frame (`[ch0_f0, ch1_f0, ...,
//! chN_f0, ch0_f1, ...]`) while numeric consumers want one contiguous row per
//! channel. The functions here perform that transpose into an
//! [`ndarray::Array2`], casting each raw 32-bit sample through an explicit
//! [`Sample`] policy.

use ndarray::Array2;

/// Element types a raw 32-bit sample can be converted into.
///
/// Decoders report every sample left-justified in an `i32` regardless of the
/// source bit depth. Implementations of this trait decide how that raw value
/// becomes a tensor element. The cast is a visible, swappable policy rather
/// than a coercion hidden inside the conversion loop, so callers with other
/// needs (normalization, dithering) can supply their own element type.
///
/// # Provided implementations
///
/// * `f32`, `f64` - widening cast, sample values kept at 32-bit full scale
/// * `i32` - identity
/// * `i16` - standard narrowing cast (low 16 bits)
pub trait Sample: Copy {
    /// Convert one raw sample into this element type.
    fn from_raw(raw: i32) -> Self;
}

impl Sample for f32 {
    fn from_raw(raw: i32) -> Self {
        raw as f32
    }
}

impl Sample for f64 {
    fn from_raw(raw: i32) -> Self {
        raw as f64
    }
}

impl Sample for i32 {
    fn from_raw(raw: i32) -> Self {
        raw
    }
}

impl Sample for i16 {
    fn from_raw(raw: i32) -> Self {
        raw as i16
    }
}

/// Failures produced by the conversion entry points.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The caller asked for a zero-channel layout.
    #[error("channel count must be at least 1")]
    NoChannels,
    /// Fewer samples than channels, so not even one complete frame exists.
    #[error("{samples_read} samples cannot fill one frame of {channels} channels")]
    EmptyInput { samples_read: usize, channels: usize },
    /// `samples_read` points past the end of the buffer.
    #[error("sample count {samples_read} exceeds buffer length {buffer_len}")]
    BufferTooShort {
        samples_read: usize,
        buffer_len: usize,
    },
    /// Strict conversion only: leftover samples that do not form a whole frame.
    #[error("{remainder} trailing samples do not form a complete frame")]
    TrailingSamples { remainder: usize },
}

/// Transpose an interleaved buffer into a `(channels, frames)` tensor.
///
/// The first `samples_read` entries of `buffer` are consumed. The frame count
/// is `samples_read / channels`, truncating; trailing samples that do not
/// fill a whole frame are silently dropped. Use [`deinterleave_strict`] to
/// reject such buffers instead.
///
/// # Errors
///
/// * [`ConvertError::NoChannels`] if `channels` is zero
/// * [`ConvertError::BufferTooShort`] if `samples_read` exceeds the buffer length
/// * [`ConvertError::EmptyInput`] if `samples_read` is smaller than `channels`
///
/// # Examples
///
/// ```rust
/// use audiotensor_rs::convert::deinterleave;
///
/// let tensor = deinterleave::<i32>(&[1, 2, 3, 4, 5, 6], 2, 6)?;
/// assert_eq!(tensor.row(0).to_vec(), vec![1, 3, 5]);
/// assert_eq!(tensor.row(1).to_vec(), vec![2, 4, 6]);
/// # Ok::<(), audiotensor_rs::convert::ConvertError>(())
/// ```
pub fn deinterleave<S: Sample>(
    buffer: &[i32],
    channels: usize,
    samples_read: usize,
) -> Result<Array2<S>, ConvertError> {
    let frames = checked_frame_count(buffer, channels, samples_read)?;
    Ok(fill(buffer, channels, frames))
}

/// Like [`deinterleave`], but fail instead of dropping trailing samples.
///
/// # Errors
///
/// Everything [`deinterleave`] reports, plus
/// [`ConvertError::TrailingSamples`] when `samples_read` is not a multiple of
/// `channels`.
pub fn deinterleave_strict<S: Sample>(
    buffer: &[i32],
    channels: usize,
    samples_read: usize,
) -> Result<Array2<S>, ConvertError> {
    let frames = checked_frame_count(buffer, channels, samples_read)?;
    let remainder = samples_read - frames * channels;
    if remainder != 0 {
        return Err(ConvertError::TrailingSamples { remainder });
    }
    Ok(fill(buffer, channels, frames))
}

fn checked_frame_count(
    buffer: &[i32],
    channels: usize,
    samples_read: usize,
) -> Result<usize, ConvertError> {
    if channels == 0 {
        return Err(ConvertError::NoChannels);
    }
    if samples_read > buffer.len() {
        return Err(ConvertError::BufferTooShort {
            samples_read,
            buffer_len: buffer.len(),
        });
    }
    if samples_read < channels {
        return Err(ConvertError::EmptyInput {
            samples_read,
            channels,
        });
    }
    Ok(samples_read / channels)
}

fn fill<S: Sample>(buffer: &[i32], channels: usize, frames: usize) -> Array2<S> {
    log::trace!(
        "deinterleaving {} samples into a {}x{} tensor",
        frames * channels,
        channels,
        frames
    );
    Array2::from_shape_fn((channels, frames), |(channel, frame)| {
        S::from_raw(buffer[frame * channels + channel])
    })
}
