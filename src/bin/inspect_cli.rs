use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use audiotensor_rs::{load_full, load_full_strict, AudioData, AudioMetadata};

#[derive(Parser, Debug)]
#[command(about = "Inspect an audio file as a channel-major tensor", version)]
struct Args {
    /// Audio file to load
    input: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Fail when trailing samples do not form a whole frame
    #[arg(long)]
    strict: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(serde::Serialize)]
struct Report {
    file: String,
    #[serde(flatten)]
    metadata: AudioMetadata,
    tensor_shape: [usize; 2],
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let audio: AudioData<f32> = if args.strict {
        load_full_strict(&args.input)?
    } else {
        load_full(&args.input)?
    };

    let report = Report {
        file: args.input.display().to_string(),
        metadata: audio.metadata,
        tensor_shape: [audio.tensor.nrows(), audio.tensor.ncols()],
    };

    match args.format {
        Format::Text => {
            println!("file: {}", report.file);
            println!("channels: {}", report.metadata.channels);
            println!("frames: {}", report.metadata.frames);
            println!("sample rate: {} Hz", report.metadata.sample_rate);
            println!("duration: {:.3}s", report.metadata.duration_secs);
            println!(
                "tensor shape: ({}, {})",
                report.tensor_shape[0], report.tensor_shape[1]
            );
        }
        Format::Json => {
            let mut stdout = io::stdout();
            serde_json::to_writer(&mut stdout, &report)?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
        }
    }

    Ok(())
}
