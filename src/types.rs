// Data handed to the renderer once per processing cycle.

use image::RgbImage;

/// One camera frame. The image is owned by the host; plugins draw into it in place.
/// Visual: whatever ends up in `img` is what the window shows this cycle.
pub struct Frame {
    pub index: u64,
    pub img: RgbImage, // width x height x 3, origin top-left
}

impl Frame {
    pub fn new(index: u64, img: RgbImage) -> Self {
        Self { index, img }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }
}

/// A gaze estimate in normalized coordinates (origin bottom-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GazeDatum {
    pub norm_pos: (f32, f32),
    pub confidence: f32, // 0 = no idea, 1 = certain
}

/// One point of an upstream-smoothed scan path. Already filtered, so no confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanPathDatum {
    pub norm_x: f32,
    pub norm_y: f32,
}

/// A point in frame pixel space (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    /// Integer pixel the drawing primitive receives (truncates toward zero).
    pub fn to_pixel(self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

/// Everything a plugin may look at during one cycle.
/// `None` means "nobody produced this"; `Some(vec![])` means "produced, but empty".
#[derive(Default)]
pub struct Events<'a> {
    pub frame: Option<&'a mut Frame>,
    pub gaze: Option<Vec<GazeDatum>>,
    pub scan_path_gaze: Option<Vec<ScanPathDatum>>,
}

impl<'a> Events<'a> {
    pub fn with_frame(frame: &'a mut Frame) -> Self {
        Self { frame: Some(frame), ..Self::default() }
    }
}

/// Map a normalized point (origin bottom-left) into pixel space (origin top-left).
pub fn denormalize(norm: (f32, f32), width: u32, height: u32) -> PixelPoint {
    let (w, h) = (width as f32, height as f32);
    PixelPoint { x: norm.0 * w, y: h - norm.1 * h }
}
