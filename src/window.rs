// Window + input for the demo host.
// Visual effects provided here:
// 1) A window that shows the annotated camera image.
// 2) Mouse position in image pixels, used as a stand-in gaze source.
// 3) Keys that drive the renderer's menu sliders.

use gaze_polyline::Error;
use image::RgbImage;
use minifb::{Key, KeyRepeat, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,   // the on-screen window you see
    packed: Vec<u32>, // 0x00RRGGBB per pixel, reused every frame
}

impl Drawer {
    /// Create a window sized to the camera feed.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window, packed: Vec::with_capacity(width * height) })
    }

    /// Push this frame's pixels to the screen.
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, img: &RgbImage) -> Result<(), Error> {
        self.packed.clear();
        self.packed.extend(
            img.pixels()
                .map(|p| ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | p[2] as u32),
        );
        self.window
            .update_with_buffer(&self.packed, img.width() as usize, img.height() as usize)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Mouse position in window pixels, or None while the pointer is outside the window.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Discard)
    }

    pub fn window_size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    /// Net thickness change requested this frame (Up = +1, Down = -1).
    pub fn thickness_delta(&self) -> i32 {
        let up = self.window.is_key_pressed(Key::Up, KeyRepeat::Yes) as i32;
        let down = self.window.is_key_pressed(Key::Down, KeyRepeat::Yes) as i32;
        up - down
    }

    /// Color channels whose key was pressed this frame ("r", "g", "b").
    pub fn channel_presses(&self) -> Vec<&'static str> {
        [(Key::R, "r"), (Key::G, "g"), (Key::B, "b")]
            .into_iter()
            .filter(|(k, _)| self.window.is_key_pressed(*k, KeyRepeat::No))
            .map(|(_, id)| id)
            .collect()
    }
}
