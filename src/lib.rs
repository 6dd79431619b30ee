pub mod convert;
pub mod decoders;

use std::path::Path;

use ndarray::Array2;
use once_cell::sync::OnceCell;
use serde::Serialize;

pub use convert::{deinterleave, deinterleave_strict, ConvertError, Sample};
pub use decoders::{DecodeError, DecodedAudio, FileDecoder};

#[cfg(feature = "symphonia")]
use decoders::symphonia::SymphoniaDecoder as DefaultDecoder;
#[cfg(not(feature = "symphonia"))]
use decoders::wav::WavDecoder as DefaultDecoder;

/// Failures of the file-to-tensor load surface.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("decoding failed")]
    Decode(#[from] DecodeError),
    #[error("conversion failed")]
    Convert(#[from] ConvertError),
}

/// Stream facts derived once per load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AudioMetadata {
    /// Number of channels, at least 1.
    pub channels: u16,
    /// Frames per channel after conversion.
    pub frames: usize,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// `frames / sample_rate`, in seconds.
    pub duration_secs: f64,
}

/// A channel-major tensor together with the metadata describing it.
#[derive(Debug)]
pub struct AudioData<S> {
    /// Shape `(channels, frames)`; row `c` holds channel `c` in temporal order.
    pub tensor: Array2<S>,
    pub metadata: AudioMetadata,
}

impl<S: Sample> AudioData<S> {
    /// Convert raw decoder output, dropping trailing samples that do not
    /// form a whole frame.
    pub fn from_decoded(decoded: &DecodedAudio) -> Result<Self, ConvertError> {
        let tensor = deinterleave(
            &decoded.samples,
            decoded.channels as usize,
            decoded.samples_read(),
        )?;
        Ok(Self::with_tensor(tensor, decoded))
    }

    /// Convert raw decoder output, failing on trailing samples instead of
    /// dropping them.
    pub fn from_decoded_strict(decoded: &DecodedAudio) -> Result<Self, ConvertError> {
        let tensor = deinterleave_strict(
            &decoded.samples,
            decoded.channels as usize,
            decoded.samples_read(),
        )?;
        Ok(Self::with_tensor(tensor, decoded))
    }

    fn with_tensor(tensor: Array2<S>, decoded: &DecodedAudio) -> Self {
        let frames = tensor.ncols();
        let metadata = AudioMetadata {
            channels: decoded.channels,
            frames,
            sample_rate: decoded.sample_rate,
            duration_secs: frames as f64 / decoded.sample_rate as f64,
        };
        Self { tensor, metadata }
    }
}

static BACKENDS: OnceCell<()> = OnceCell::new();

/// Initialize the decoding backends.
///
/// The load functions call this on first use; explicit calls are optional
/// and repeat calls are no-ops.
pub fn init() {
    BACKENDS.get_or_init(|| {
        #[cfg(feature = "symphonia")]
        {
            // Force the lazy probe and codec registries so the first load
            // does not pay their construction cost.
            let _ = symphonia::default::get_probe();
            let _ = symphonia::default::get_codecs();
        }
        log::info!(
            "audio backends ready: wav{}",
            if cfg!(feature = "symphonia") {
                ", symphonia"
            } else {
                ""
            }
        );
    });
}

/// Load an audio file as a `(channels, frames)` tensor.
///
/// Uses the Symphonia backend when the `symphonia` feature is enabled and
/// the WAV backend otherwise.
///
/// # Examples
///
/// ```rust,no_run
/// let tensor = audiotensor_rs::load::<f32, _>("music.flac")?;
/// println!("shape: {:?}", tensor.dim());
/// # Ok::<(), audiotensor_rs::LoadError>(())
/// ```
pub fn load<S, P>(path: P) -> Result<Array2<S>, LoadError>
where
    S: Sample,
    P: AsRef<Path>,
{
    Ok(load_full(path)?.tensor)
}

/// Load an audio file as a tensor plus its [`AudioMetadata`].
///
/// # Examples
///
/// ```rust,no_run
/// let audio = audiotensor_rs::load_full::<f32, _>("music.flac")?;
/// println!(
///     "{} channels, {:.1}s at {} Hz",
///     audio.metadata.channels,
///     audio.metadata.duration_secs,
///     audio.metadata.sample_rate,
/// );
/// # Ok::<(), audiotensor_rs::LoadError>(())
/// ```
pub fn load_full<S, P>(path: P) -> Result<AudioData<S>, LoadError>
where
    S: Sample,
    P: AsRef<Path>,
{
    load_full_with(&DefaultDecoder, path)
}

/// Like [`load_full`], but fail when the decoded sample count is not a
/// multiple of the channel count.
pub fn load_full_strict<S, P>(path: P) -> Result<AudioData<S>, LoadError>
where
    S: Sample,
    P: AsRef<Path>,
{
    init();
    let decoded = DefaultDecoder.decode_file(path.as_ref())?;
    Ok(AudioData::from_decoded_strict(&decoded)?)
}

/// Like [`load_full`], but against an explicit decoding backend.
pub fn load_full_with<S, D, P>(decoder: &D, path: P) -> Result<AudioData<S>, LoadError>
where
    S: Sample,
    D: FileDecoder,
    P: AsRef<Path>,
{
    init();
    let decoded = decoder.decode_file(path.as_ref())?;
    Ok(AudioData::from_decoded(&decoded)?)
}
