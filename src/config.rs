use std::path::PathBuf;
use clap::Parser;
use crate::constants::*;

/// Image carousel: arrow keys, the on-screen buttons or a swipe move between slides.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Directory containing the slide images
    pub dir: PathBuf,

    /// Window width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: i32,

    /// Window height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: i32,

    /// Target frame rate
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Advance to the next slide every SECONDS (disabled when omitted)
    #[arg(long, value_name = "SECONDS", value_parser = parse_interval)]
    pub autoplay: Option<f32>,

    /// Shuffle slide order once at startup
    #[arg(long)]
    pub shuffle: bool,

    /// Index of the first slide shown (ignored when out of range)
    #[arg(long, default_value_t = 0)]
    pub start: usize,
}

fn parse_interval(s: &str) -> Result<f32, String> {
    let seconds: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if seconds.is_finite() && seconds > 0.0 {
        Ok(seconds)
    } else {
        Err(format!("interval must be a positive number of seconds, got {s}"))
    }
}
