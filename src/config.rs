// Command-line options for the demo host.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Live camera view with a gaze polyline overlay. The mouse pointer stands in for gaze.
#[derive(Parser, Debug)]
#[command(name = "gaze-polyline", version)]
pub struct Args {
    /// Camera index (0 = default webcam)
    #[arg(long, default_value_t = 0)]
    pub camera: u32,

    /// Requested capture width
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Requested capture height
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// Gaze samples below this confidence are not drawn
    #[arg(long, default_value_t = 0.6)]
    pub min_confidence: f32,

    /// How many seconds of gaze the polyline spans
    #[arg(long, default_value = "0.5", value_parser = parse_trail)]
    pub trail: Duration,

    /// Where the renderer's color/thickness are kept between runs
    #[arg(long, default_value = "gaze_polyline.json")]
    pub settings: PathBuf,
}

/// Seconds as a finite, non-negative duration; `inf`, NaN and negatives are rejected.
fn parse_trail(s: &str) -> Result<Duration, String> {
    let secs: f32 = s.parse().map_err(|e| format!("{e}"))?;
    Duration::try_from_secs_f32(secs).map_err(|e| format!("{secs}: {e}"))
}
