use audiotensor_rs::convert::{deinterleave, deinterleave_strict, ConvertError, Sample};
use ndarray::array;

#[test]
fn splits_interleaved_stereo_into_channel_rows() {
    let tensor = deinterleave::<i32>(&[1, 2, 3, 4, 5, 6], 2, 6).unwrap();
    assert_eq!(tensor, array![[1, 3, 5], [2, 4, 6]]);
}

#[test]
fn drops_samples_short_of_a_whole_frame() {
    let tensor = deinterleave::<i32>(&[1, 2, 3], 2, 3).unwrap();
    assert_eq!(tensor, array![[1], [2]]);
}

#[test]
fn output_shape_is_channels_by_frames() {
    let buffer: Vec<i32> = (0..35).collect();
    let tensor = deinterleave::<f64>(&buffer, 3, 35).unwrap();
    assert_eq!(tensor.dim(), (3, 11));
}

#[test]
fn every_cell_maps_to_its_interleaved_source() {
    let buffer: Vec<i32> = (0..24).collect();
    let channels = 4;
    let tensor = deinterleave::<i32>(&buffer, channels, buffer.len()).unwrap();

    for channel in 0..channels {
        for frame in 0..tensor.ncols() {
            assert_eq!(
                tensor[[channel, frame]],
                buffer[frame * channels + channel]
            );
        }
    }
}

#[test]
fn reads_only_the_first_samples_read_entries() {
    let buffer = [10, 20, 30, 40, 50, 60];
    let tensor = deinterleave::<i32>(&buffer, 2, 4).unwrap();
    assert_eq!(tensor, array![[10, 30], [20, 40]]);
}

#[test]
fn zero_channels_is_invalid() {
    assert_eq!(
        deinterleave::<f32>(&[1, 2], 0, 2).unwrap_err(),
        ConvertError::NoChannels
    );
}

#[test]
fn fewer_samples_than_channels_is_empty_input() {
    assert_eq!(
        deinterleave::<f32>(&[7], 2, 1).unwrap_err(),
        ConvertError::EmptyInput {
            samples_read: 1,
            channels: 2,
        }
    );
}

#[test]
fn zero_samples_read_is_empty_input() {
    assert_eq!(
        deinterleave::<f32>(&[1, 2, 3], 1, 0).unwrap_err(),
        ConvertError::EmptyInput {
            samples_read: 0,
            channels: 1,
        }
    );
}

#[test]
fn sample_count_beyond_buffer_is_rejected() {
    assert_eq!(
        deinterleave::<f32>(&[1, 2, 3], 2, 4).unwrap_err(),
        ConvertError::BufferTooShort {
            samples_read: 4,
            buffer_len: 3,
        }
    );
}

#[test]
fn strict_mode_rejects_trailing_samples() {
    assert_eq!(
        deinterleave_strict::<i32>(&[1, 2, 3], 2, 3).unwrap_err(),
        ConvertError::TrailingSamples { remainder: 1 }
    );
}

#[test]
fn strict_mode_accepts_whole_frames() {
    let tensor = deinterleave_strict::<i32>(&[1, 2, 3, 4], 2, 4).unwrap();
    assert_eq!(tensor, array![[1, 3], [2, 4]]);
}

#[test]
fn float_cast_widens_full_scale_values() {
    let tensor = deinterleave::<f64>(&[i32::MAX, i32::MIN], 1, 2).unwrap();
    assert_eq!(tensor[[0, 0]], i32::MAX as f64);
    assert_eq!(tensor[[0, 1]], i32::MIN as f64);
}

#[test]
fn narrowing_cast_keeps_low_bits() {
    assert_eq!(<i16 as Sample>::from_raw(0x0001_2345), 0x2345);

    let tensor = deinterleave::<i16>(&[0x0001_2345, -1], 1, 2).unwrap();
    assert_eq!(tensor[[0, 0]], 0x2345);
    assert_eq!(tensor[[0, 1]], -1);
}
