use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use hound::{SampleFormat, WavReader};

use super::{DecodeError, DecodedAudio, FileDecoder};

/// PCM WAV decoder built on `hound`.
///
/// Integer samples are shifted up to 32-bit full scale, float samples are
/// scaled by `i32::MAX`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WavDecoder;

impl FileDecoder for WavDecoder {
    type Stream = WavReader<BufReader<File>>;

    fn open(&self, path: &Path) -> Result<Self::Stream, DecodeError> {
        Ok(WavReader::open(path)?)
    }

    fn read_all(&self, reader: &mut Self::Stream) -> Result<DecodedAudio, DecodeError> {
        let spec = reader.spec();
        if spec.channels == 0 {
            return Err(DecodeError::UnknownChannelLayout);
        }
        if spec.sample_rate == 0 {
            return Err(DecodeError::UnknownSampleRate);
        }

        let samples: Vec<i32> = match spec.sample_format {
            SampleFormat::Int => {
                if spec.bits_per_sample > 32 {
                    return Err(DecodeError::UnsupportedFormat(format!(
                        "{}-bit integer PCM",
                        spec.bits_per_sample
                    )));
                }
                let shift = 32 - spec.bits_per_sample;
                reader
                    .samples::<i32>()
                    .map(|sample| sample.map(|s| s << shift))
                    .collect::<hound::Result<_>>()?
            }
            SampleFormat::Float => {
                if spec.bits_per_sample != 32 {
                    return Err(DecodeError::UnsupportedFormat(format!(
                        "{}-bit float PCM",
                        spec.bits_per_sample
                    )));
                }
                reader
                    .samples::<f32>()
                    .map(|sample| sample.map(|s| (s * i32::MAX as f32) as i32))
                    .collect::<hound::Result<_>>()?
            }
        };

        log::info!(
            "decoded {} samples ({} channels at {} Hz)",
            samples.len(),
            spec.channels,
            spec.sample_rate
        );

        Ok(DecodedAudio {
            samples,
            channels: spec.channels,
            sample_rate: spec.sample_rate,
        })
    }
}
