// Crate error type. Every variant states *where* things went wrong.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed
    #[error("Camera init error: {0}")]
    CameraInit(String), // Opening/starting the camera failed
    #[error("Camera frame error: {0}")]
    CameraFrame(String), // Grabbing/decoding a frame failed
    #[error("Settings file {path:?}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Settings parse error: {0}")]
    SettingsParse(#[from] serde_json::Error),
    #[error("Unknown menu control: {0}")]
    UnknownControl(String), // A slider id this component does not expose
}
