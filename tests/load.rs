use std::io;
use std::path::{Path, PathBuf};

use audiotensor_rs::{
    load_full_with, AudioData, ConvertError, DecodeError, DecodedAudio, FileDecoder, LoadError,
};

struct FixedDecoder {
    decoded: DecodedAudio,
}

impl FileDecoder for FixedDecoder {
    type Stream = PathBuf;

    fn open(&self, path: &Path) -> Result<Self::Stream, DecodeError> {
        Ok(path.to_path_buf())
    }

    fn read_all(&self, _stream: &mut Self::Stream) -> Result<DecodedAudio, DecodeError> {
        Ok(self.decoded.clone())
    }
}

struct FailingDecoder;

impl FileDecoder for FailingDecoder {
    type Stream = ();

    fn open(&self, _path: &Path) -> Result<Self::Stream, DecodeError> {
        Err(DecodeError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            "no such file",
        )))
    }

    fn read_all(&self, _stream: &mut Self::Stream) -> Result<DecodedAudio, DecodeError> {
        unreachable!("open always fails")
    }
}

fn stereo_fixture() -> DecodedAudio {
    DecodedAudio {
        samples: vec![1, 2, 3, 4, 5, 6],
        channels: 2,
        sample_rate: 3,
    }
}

#[test]
fn load_builds_tensor_and_metadata() {
    let decoder = FixedDecoder {
        decoded: stereo_fixture(),
    };

    let audio: AudioData<i32> = load_full_with(&decoder, "fixture.wav").unwrap();

    assert_eq!(audio.tensor, ndarray::array![[1, 3, 5], [2, 4, 6]]);
    assert_eq!(audio.metadata.channels, 2);
    assert_eq!(audio.metadata.frames, 3);
    assert_eq!(audio.metadata.sample_rate, 3);
    assert!((audio.metadata.duration_secs - 1.0).abs() < f64::EPSILON);
}

#[test]
fn decoder_failures_surface_as_decode_errors() {
    let err = load_full_with::<f32, _, _>(&FailingDecoder, "missing.wav").unwrap_err();
    assert!(matches!(err, LoadError::Decode(DecodeError::Io(_))));
}

#[test]
fn empty_stream_is_a_conversion_error() {
    let decoder = FixedDecoder {
        decoded: DecodedAudio {
            samples: Vec::new(),
            channels: 2,
            sample_rate: 8_000,
        },
    };

    let err = load_full_with::<f32, _, _>(&decoder, "empty.wav").unwrap_err();
    assert!(matches!(
        err,
        LoadError::Convert(ConvertError::EmptyInput {
            samples_read: 0,
            channels: 2,
        })
    ));
}

#[test]
fn strict_conversion_rejects_ragged_buffers() {
    let decoded = DecodedAudio {
        samples: vec![1, 2, 3],
        channels: 2,
        sample_rate: 8_000,
    };

    let err = AudioData::<f32>::from_decoded_strict(&decoded).unwrap_err();
    assert_eq!(err, ConvertError::TrailingSamples { remainder: 1 });

    // The lossy path accepts the same buffer and drops the odd sample out.
    let audio = AudioData::<f32>::from_decoded(&decoded).unwrap();
    assert_eq!(audio.metadata.frames, 1);
}
