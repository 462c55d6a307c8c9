// Gaze polyline: connects this cycle's gaze points with a line on top of the frame.
// Visual: a colored trail that follows where the wearer has just been looking.

use crate::draw::Canvas;
use crate::error::Error;
use crate::plugin::{Configurable, FrameConsumer};
use crate::settings::PolylineSettings;
use crate::types::{denormalize, Events, PixelPoint};
use crate::ui::{Element, Menu, Slider};
use log::trace;

pub const THICKNESS: Slider = Slider::new("thickness", "Line thickness", 1.0, 15.0, 1.0);
pub const RED: Slider = Slider::new("r", "Red", 0.0, 1.0, 0.05);
pub const GREEN: Slider = Slider::new("g", "Green", 0.0, 1.0, 0.05);
pub const BLUE: Slider = Slider::new("b", "Blue", 0.0, 1.0, 0.05);

pub struct GazePolyline {
    settings: PolylineSettings,
}

impl GazePolyline {
    pub fn new(settings: PolylineSettings) -> Self {
        Self { settings }
    }

    /// Pixel-space points to connect, in source order.
    /// A scan path (even an empty one) wins over raw gaze; raw gaze is confidence-filtered.
    pub fn point_selection(&self, frame_size: (u32, u32), events: &Events<'_>, min_data_confidence: f32) -> Vec<PixelPoint> {
        let (w, h) = frame_size;
        match &events.scan_path_gaze {
            Some(path) => path.iter().map(|d| denormalize((d.norm_x, d.norm_y), w, h)).collect(),
            None => events
                .gaze
                .iter()
                .flatten()
                .filter(|d| d.confidence >= min_data_confidence)
                .map(|d| denormalize(d.norm_pos, w, h))
                .collect(),
        }
    }

    /// Draw `points` onto `canvas`. Fewer than two points is a no-op (no dot for a lone sample).
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, points: &[PixelPoint]) {
        if points.len() < 2 {
            return;
        }
        let pts: Vec<(i32, i32)> = points.iter().map(|p| p.to_pixel()).collect();
        canvas.polyline(&pts, self.settings.color.to_rgb8(), self.settings.thickness);
    }

    pub fn menu(&self) -> Menu {
        Menu {
            label: "Gaze Polyline",
            items: vec![
                Element::Slider(THICKNESS),
                Element::Group {
                    label: "Color",
                    collapsed: true,
                    items: vec![
                        Element::Info("Set RGB color component values."),
                        Element::Slider(RED),
                        Element::Slider(GREEN),
                        Element::Slider(BLUE),
                    ],
                },
            ],
        }
    }

    /// Current value behind a menu slider.
    pub fn value(&self, id: &str) -> Result<f32, Error> {
        let c = &self.settings.color;
        match id {
            "thickness" => Ok(self.settings.thickness as f32),
            "r" => Ok(c.r),
            "g" => Ok(c.g),
            "b" => Ok(c.b),
            _ => Err(Error::UnknownControl(id.to_owned())),
        }
    }

    /// Apply a slider change. The slider's bounds and step are enforced here.
    pub fn set_value(&mut self, id: &str, value: f32) -> Result<(), Error> {
        let c = &mut self.settings.color;
        match id {
            "thickness" => self.settings.thickness = THICKNESS.snap(value) as u32,
            "r" => c.r = RED.snap(value),
            "g" => c.g = GREEN.snap(value),
            "b" => c.b = BLUE.snap(value),
            _ => return Err(Error::UnknownControl(id.to_owned())),
        }
        Ok(())
    }
}

impl Default for GazePolyline {
    fn default() -> Self {
        Self::new(PolylineSettings::default())
    }
}

impl Configurable for GazePolyline {
    type Settings = PolylineSettings;

    fn get_settings(&self) -> PolylineSettings {
        self.settings
    }
}

impl FrameConsumer for GazePolyline {
    fn name(&self) -> String {
        "Gaze Polyline".to_owned()
    }

    // Draw after the other annotations.
    fn order(&self) -> f32 {
        0.9
    }

    fn process(&mut self, events: &mut Events<'_>, min_data_confidence: f32) {
        let Some(frame) = events.frame.as_deref() else {
            return;
        };
        let size = (frame.width(), frame.height());
        let points = self.point_selection(size, events, min_data_confidence);
        trace!("polyline: {} points", points.len());
        if let Some(frame) = events.frame.as_deref_mut() {
            self.draw(&mut frame.img, &points);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Color;
    use crate::types::{Frame, GazeDatum, ScanPathDatum};
    use image::{Rgb, RgbImage};

    fn gaze(x: f32, y: f32, confidence: f32) -> GazeDatum {
        GazeDatum { norm_pos: (x, y), confidence }
    }

    fn pp(x: f32, y: f32) -> PixelPoint {
        PixelPoint { x, y }
    }

    /// Records draw calls instead of touching pixels.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<(Vec<(i32, i32)>, [u8; 3], u32)>,
    }

    impl Canvas for Recorder {
        fn polyline(&mut self, points: &[(i32, i32)], color: [u8; 3], thickness: u32) {
            self.calls.push((points.to_vec(), color, thickness));
        }
    }

    #[test]
    fn filters_by_confidence_inclusively_and_keeps_order() {
        let r = GazePolyline::default();
        let ev = Events {
            gaze: Some(vec![gaze(0.1, 0.0, 0.9), gaze(0.2, 0.0, 0.59), gaze(0.3, 0.0, 0.6), gaze(0.4, 0.0, 1.0)]),
            ..Events::default()
        };
        let pts = r.point_selection((100, 100), &ev, 0.6);
        let xs: Vec<i32> = pts.iter().map(|p| p.to_pixel().0).collect();
        assert_eq!(xs, [10, 30, 40]);
    }

    #[test]
    fn scan_path_wins_even_when_empty() {
        let r = GazePolyline::default();
        let mut ev = Events {
            gaze: Some(vec![gaze(0.5, 0.5, 1.0), gaze(0.6, 0.6, 1.0)]),
            scan_path_gaze: Some(Vec::new()),
            ..Events::default()
        };
        assert!(r.point_selection((100, 100), &ev, 0.0).is_empty());

        ev.scan_path_gaze = Some(vec![ScanPathDatum { norm_x: 0.25, norm_y: 0.75 }]);
        assert_eq!(r.point_selection((100, 200), &ev, 0.0), [pp(25.0, 50.0)]);
    }

    #[test]
    fn scan_path_is_not_confidence_filtered() {
        let r = GazePolyline::default();
        let ev = Events {
            scan_path_gaze: Some(vec![ScanPathDatum { norm_x: 0.0, norm_y: 0.0 }, ScanPathDatum { norm_x: 1.0, norm_y: 1.0 }]),
            ..Events::default()
        };
        assert_eq!(r.point_selection((10, 10), &ev, 1.0).len(), 2);
    }

    #[test]
    fn scan_path_keeps_source_order() {
        let r = GazePolyline::default();
        let path = [(0.75, 0.25), (0.25, 0.75), (0.5, 0.5), (0.0, 0.0)]
            .map(|(norm_x, norm_y)| ScanPathDatum { norm_x, norm_y });
        let ev = Events { scan_path_gaze: Some(path.to_vec()), ..Events::default() };
        let px: Vec<(i32, i32)> = r.point_selection((100, 100), &ev, 0.0).iter().map(|p| p.to_pixel()).collect();
        assert_eq!(px, [(75, 75), (25, 25), (50, 50), (0, 100)]);
    }

    #[test]
    fn infinite_gaze_is_clipped_to_the_frame() {
        let mut r = GazePolyline::default();
        let mut frame = Frame::new(0, RgbImage::new(640, 480));
        let mut ev = Events {
            gaze: Some(vec![gaze(0.5, 0.5, 1.0), gaze(f32::INFINITY, 0.5, 1.0)]),
            ..Events::with_frame(&mut frame)
        };
        r.process(&mut ev, 0.6);
        let color = Rgb(r.get_settings().color.to_rgb8());
        assert_eq!(*frame.img.get_pixel(320, 240), color);
        assert_eq!(*frame.img.get_pixel(639, 240), color);
        assert_eq!(*frame.img.get_pixel(100, 240), Rgb([0, 0, 0]));
    }

    #[test]
    fn missing_gaze_is_empty() {
        let r = GazePolyline::default();
        assert!(r.point_selection((10, 10), &Events::default(), 0.0).is_empty());
    }

    #[test]
    fn coordinate_mapping_is_exact() {
        let r = GazePolyline::default();
        let ev = Events {
            gaze: Some(vec![gaze(0.5, 0.0, 1.0), gaze(0.0, 1.0, 1.0), gaze(1.0, 1.0, 1.0)]),
            ..Events::default()
        };
        assert_eq!(r.point_selection((100, 200), &ev, 0.0), [pp(50.0, 200.0), pp(0.0, 0.0), pp(100.0, 0.0)]);
    }

    #[test]
    fn zero_or_one_point_leaves_frame_untouched() {
        let mut r = GazePolyline::default();
        for gaze_list in [vec![], vec![gaze(0.5, 0.5, 1.0)], vec![gaze(0.2, 0.2, 0.1), gaze(0.8, 0.8, 1.0)]] {
            let mut frame = Frame::new(0, RgbImage::new(10, 10));
            let mut ev = Events { gaze: Some(gaze_list), ..Events::with_frame(&mut frame) };
            r.process(&mut ev, 0.6);
            assert!(frame.img.pixels().all(|p| *p == Rgb([0, 0, 0])));
        }

        let mut rec = Recorder::default();
        r.draw(&mut rec, &[pp(3.0, 3.0)]);
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn no_frame_is_noop() {
        let mut r = GazePolyline::default();
        let mut ev = Events { gaze: Some(vec![gaze(0.0, 0.0, 1.0), gaze(1.0, 1.0, 1.0)]), ..Events::default() };
        r.process(&mut ev, 0.0);
        assert!(ev.frame.is_none());
    }

    #[test]
    fn diagonal_on_small_frame() {
        let settings = PolylineSettings { color: Color::new(0.0, 1.0, 0.0, 1.0), thickness: 2 };
        let mut r = GazePolyline::new(settings);

        let ev = Events { gaze: Some(vec![gaze(0.0, 0.0, 1.0), gaze(1.0, 1.0, 1.0)]), ..Events::default() };
        let pts = r.point_selection((10, 10), &ev, 0.5);
        let mut rec = Recorder::default();
        r.draw(&mut rec, &pts);
        assert_eq!(rec.calls, [(vec![(0, 10), (10, 0)], [0, 255, 0], 2)]);

        let mut frame = Frame::new(1, RgbImage::new(10, 10));
        let mut ev = Events { gaze: ev.gaze, ..Events::with_frame(&mut frame) };
        r.process(&mut ev, 0.5);
        assert_eq!(*frame.img.get_pixel(5, 5), Rgb([0, 255, 0]));
        assert_eq!(*frame.img.get_pixel(9, 1), Rgb([0, 255, 0]));
        assert_eq!(*frame.img.get_pixel(0, 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn thickness_change_only_affects_thickness() {
        let mut r = GazePolyline::default();
        let pts = [pp(1.0, 1.0), pp(8.0, 8.0)];
        let mut rec = Recorder::default();
        r.draw(&mut rec, &pts);
        r.set_value("thickness", 7.0).unwrap();
        r.draw(&mut rec, &pts);

        let (first, second) = (&rec.calls[0], &rec.calls[1]);
        assert_eq!(first.0, second.0);
        assert_eq!(first.1, second.1);
        assert_eq!((first.2, second.2), (2, 7));
    }

    #[test]
    fn settings_round_trip() {
        let mut r = GazePolyline::new(PolylineSettings { color: Color::new(0.2, 0.4, 0.6, 0.8), thickness: 5 });
        r.set_value("g", 0.9).unwrap();
        let restored = GazePolyline::new(r.get_settings());
        assert_eq!(restored.get_settings(), r.get_settings());

        let json = serde_json::to_string(&r.get_settings()).unwrap();
        let parsed: PolylineSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(GazePolyline::new(parsed).get_settings(), r.get_settings());
    }

    #[test]
    fn sliders_are_bounded() {
        let mut r = GazePolyline::default();
        r.set_value("thickness", 40.0).unwrap();
        r.set_value("r", -1.0).unwrap();
        r.set_value("b", 0.33).unwrap();
        assert_eq!(r.value("thickness").unwrap(), 15.0);
        assert_eq!(r.value("r").unwrap(), 0.0);
        assert!((r.value("b").unwrap() - 0.35).abs() < 1e-6);
        assert!(matches!(r.set_value("a", 0.5), Err(Error::UnknownControl(_))));
        assert_eq!(r.get_settings().color.a, 1.0);
    }

    #[test]
    fn menu_exposes_thickness_and_rgb_only() {
        let menu = GazePolyline::default().menu();
        assert_eq!(menu.label, "Gaze Polyline");
        for id in ["thickness", "r", "g", "b"] {
            assert!(menu.slider(id).is_some(), "{id}");
        }
        assert!(menu.slider("a").is_none());
        assert_eq!(menu.slider("thickness").map(|s| (s.min, s.max, s.step)), Some((1.0, 15.0, 1.0)));
    }
}
