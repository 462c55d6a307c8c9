// The two settings this renderer persists: line color and line thickness.
// Stored as `{"color": [r, g, b, a], "thickness": n}`.

use crate::error::Error;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// RGBA color, each channel in [0,1].
/// Serialized as a plain 4-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// 8-bit RGB for a 3-channel image. Alpha has no channel to land in.
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f32| (c * 255.0).round().clamp(0.0, 255.0) as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolylineSettings {
    pub color: Color,
    pub thickness: u32,
}

impl Default for PolylineSettings {
    fn default() -> Self {
        Self { color: Color::new(1.0, 0.0, 0.4, 1.0), thickness: 2 }
    }
}

impl PolylineSettings {
    /// Read settings saved by a previous session. A missing file means "first run".
    pub fn load(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            info!("no settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .map_err(|source| Error::SettingsIo { path: path.to_owned(), source })?;
        let settings = serde_json::from_str(&text)?;
        info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)
            .map_err(|source| Error::SettingsIo { path: path.to_owned(), source })?;
        info!("saved settings to {}", path.display());
        Ok(())
    }
}
