//! Decoding backends wrapping external audio libraries.
//!
//! Each backend implements [`FileDecoder`]: open a file, drain every decoded
//! sample into one interleaved buffer, and report the stream facts the
//! container declared. The actual format parsing and codec work is owned by
//! the wrapped library; backends only marshal its output into
//! [`DecodedAudio`].
//!
//! # Available backends
//!
//! ## WAV
//!
//! [`wav::WavDecoder`], built on `hound`:
//! - **Formats**: PCM integer at 8/16/24/32 bits, 32-bit float
//! - **Always available**, no feature flag
//!
//! ## Symphonia
//!
//! [`symphonia::SymphoniaDecoder`], built on Symphonia's default probe and
//! codec registries (enabled by the `symphonia` feature, on by default):
//! - **Formats**: every container/codec pair the registries know
//!   (WAV, FLAC, OGG/Vorbis, MP3, ...)
//! - Tolerates corrupt packets by skipping them

use std::path::Path;

#[cfg(feature = "symphonia")]
pub mod symphonia;
pub mod wav;

#[cfg(feature = "symphonia")]
use ::symphonia::core::errors::Error as SymphoniaError;

/// Raw decoder output: every sample of the file, interleaved by frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    /// Interleaved samples, left-justified to 32-bit full scale regardless of
    /// the source bit depth.
    pub samples: Vec<i32>,
    /// Channel count declared by the container.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl DecodedAudio {
    /// Total number of samples actually read, summed over all channels.
    ///
    /// May be smaller than the container header promised when the stream ends
    /// early.
    pub fn samples_read(&self) -> usize {
        self.samples.len()
    }
}

/// Failures surfaced by the decoding backends.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("WAV error")]
    Wav(#[from] hound::Error),
    #[cfg(feature = "symphonia")]
    #[error("demux/decode error")]
    Codec(#[from] SymphoniaError),
    #[error("container has no decodable audio track")]
    NoAudioTrack,
    #[error("container does not declare a sample rate")]
    UnknownSampleRate,
    #[error("container does not declare a channel layout")]
    UnknownChannelLayout,
    #[error("unsupported sample format: {0}")]
    UnsupportedFormat(String),
}

/// File-reading capability every backend provides.
///
/// [`open`](FileDecoder::open) probes the container and prepares a decode
/// session; [`read_all`](FileDecoder::read_all) drains it. Dropping the
/// stream releases the underlying resources.
pub trait FileDecoder {
    /// Backend-specific handle to an opened file.
    type Stream;

    fn open(&self, path: &Path) -> Result<Self::Stream, DecodeError>;
    fn read_all(&self, stream: &mut Self::Stream) -> Result<DecodedAudio, DecodeError>;

    /// Open `path` and read every sample it contains.
    fn decode_file(&self, path: &Path) -> Result<DecodedAudio, DecodeError> {
        let mut stream = self.open(path)?;
        self.read_all(&mut stream)
    }
}
