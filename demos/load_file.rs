use std::env;
use std::path::PathBuf;
use std::time::Instant;

use audiotensor_rs::load_full;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("samples/dots.wav"));

    println!("Loading file: {:?}", path);
    let load_start = Instant::now();
    let audio = load_full::<f32, _>(&path)?;
    let load_duration = load_start.elapsed();
    println!("Loaded in {:.2?}", load_duration);

    let meta = &audio.metadata;
    println!("Channels: {}", meta.channels);
    println!("Frames: {}", meta.frames);
    println!("Sample rate: {} Hz", meta.sample_rate);
    println!("Duration: {:.2}s", meta.duration_secs);

    let head: Vec<f32> = audio.tensor.row(0).iter().take(8).copied().collect();
    println!("Channel 0 head: {:?}", head);

    Ok(())
}
