use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{Decoder, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use super::{DecodeError, DecodedAudio, FileDecoder};

/// Multi-format decoder built on Symphonia's default probe and codec
/// registries.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymphoniaDecoder;

/// Demuxer plus codec state for one opened file.
pub struct OpenedStream {
    format: Box<dyn FormatReader>,
    decoder: Box<dyn Decoder>,
    track_id: u32,
    channels: u16,
    sample_rate: u32,
}

impl FileDecoder for SymphoniaDecoder {
    type Stream = OpenedStream;

    fn open(&self, path: &Path) -> Result<Self::Stream, DecodeError> {
        let src = File::open(path)?;
        let mss = MediaSourceStream::new(Box::new(src), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|ext| ext.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe().format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )?;

        let format = probed.format;
        let track = format.default_track().ok_or(DecodeError::NoAudioTrack)?;
        let track_id = track.id;
        let channels = track
            .codec_params
            .channels
            .ok_or(DecodeError::UnknownChannelLayout)?
            .count() as u16;
        let sample_rate = track
            .codec_params
            .sample_rate
            .ok_or(DecodeError::UnknownSampleRate)?;
        let decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())?;

        Ok(OpenedStream {
            format,
            decoder,
            track_id,
            channels,
            sample_rate,
        })
    }

    fn read_all(&self, stream: &mut Self::Stream) -> Result<DecodedAudio, DecodeError> {
        let mut samples: Vec<i32> = Vec::new();

        loop {
            let packet = match stream.format.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::IoError(ref err))
                    if err.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(err) => return Err(err.into()),
            };

            if packet.track_id() != stream.track_id {
                continue;
            }

            match stream.decoder.decode(&packet) {
                Ok(decoded) => {
                    let spec = *decoded.spec();
                    let mut buf = SampleBuffer::<i32>::new(decoded.capacity() as u64, spec);
                    buf.copy_interleaved_ref(decoded);
                    samples.extend_from_slice(buf.samples());
                }
                // The demuxer already re-synced past a packet the codec
                // cannot make sense of, so keep going.
                Err(SymphoniaError::DecodeError(_)) | Err(SymphoniaError::IoError(_)) => continue,
                Err(err) => return Err(err.into()),
            }
        }

        log::info!(
            "decoded {} samples ({} channels at {} Hz)",
            samples.len(),
            stream.channels,
            stream.sample_rate
        );

        Ok(DecodedAudio {
            samples,
            channels: stream.channels,
            sample_rate: stream.sample_rate,
        })
    }
}
