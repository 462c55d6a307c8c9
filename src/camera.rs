// Opens the default camera and hands out frames the plugins can draw into.
// Visual expectation: when main.rs calls `next_frame()`, you get an RGB image
// of what the camera sees right now, ready for overlays.

use gaze_polyline::{Error, Frame};
use image::RgbImage;
use log::info;

use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution},
};

// A small wrapper around nokhwa::Camera so our main loop stays clean.
pub struct CameraCapture {
    cam: Camera,
    width: u32,
    height: u32,
    frames: u64, // index handed to the next frame
}

impl CameraCapture {
    /// Open camera `index` near the requested resolution (falls back if not exact).
    pub fn new(index: u32, width: u32, height: u32) -> Result<Self, Error> {
        let idx = CameraIndex::Index(index);

        let fmt = CameraFormat::new(
            Resolution::new(width, height),
            FrameFormat::YUYV, // uncompressed; cheap to convert to RGB
            30,                // target FPS
        );
        let req = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(fmt));

        let mut cam = Camera::new(idx, req).map_err(|e| Error::CameraInit(format!("Create camera: {e}")))?;
        cam.open_stream()
            .map_err(|e| Error::CameraInit(format!("Open stream: {e}")))?;

        // The actual stream might choose a slightly different resolution.
        let actual = cam.resolution();
        info!("camera {index} streaming at {}x{}", actual.width(), actual.height());

        Ok(Self { cam, width: actual.width(), height: actual.height(), frames: 0 })
    }

    /// Grab one frame (blocks until the camera has one) and decode it to RGB.
    pub fn next_frame(&mut self) -> Result<Frame, Error> {
        let raw = self
            .cam
            .frame()
            .map_err(|e| Error::CameraFrame(format!("Fetch frame: {e}")))?;
        let decoded = raw
            .decode_image::<RgbFormat>()
            .map_err(|e| Error::CameraFrame(format!("Decode RGB: {e}")))?;

        // nokhwa pins its own `image` version; rewrap the raw bytes in ours.
        let (w, h) = decoded.dimensions();
        let img = RgbImage::from_raw(w, h, decoded.into_raw())
            .ok_or_else(|| Error::CameraFrame(format!("Decode RGB: short buffer for {w}x{h}")))?;

        let frame = Frame::new(self.frames, img);
        self.frames += 1;
        Ok(frame)
    }

    /// Report the actual resolution the camera is delivering.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
