// Gaze polyline overlay for eye-tracking video.
// Visual: each frame gets a line connecting the most recent gaze points.

pub mod draw;
pub mod error;
pub mod plugin;
pub mod renderer;
pub mod settings;
pub mod types;
pub mod ui;

pub use error::Error;
pub use plugin::{Configurable, FrameConsumer, PluginChain};
pub use renderer::GazePolyline;
pub use settings::{Color, PolylineSettings};
pub use types::{Events, Frame, GazeDatum, PixelPoint, ScanPathDatum};
