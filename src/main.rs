// What you SEE:
// • Live camera is always the base image.
// • Move the mouse over the window: it plays the eye, and a polyline trails it.
// • Up/Down changes line thickness; R/G/B step that color channel (wraps at 1.0).
// • ESC quits; color/thickness are saved for next time.

mod camera;
mod config;
mod gaze_source;
mod window;

use camera::CameraCapture;
use clap::Parser;
use config::Args;
use gaze_polyline::renderer::{BLUE, GREEN, RED, THICKNESS};
use gaze_polyline::{Configurable, Error, Events, GazePolyline, PluginChain, PolylineSettings};
use gaze_source::MouseGaze;
use log::{debug, info, warn, LevelFilter};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};
use window::Drawer;

fn main() -> Result<(), Error> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    /* --- Renderer, restored from the last session --- */
    let settings = PolylineSettings::load(&args.settings)?;
    let polyline = Rc::new(RefCell::new(GazePolyline::new(settings)));
    let mut plugins = PluginChain::new();
    plugins.add(Box::new(polyline.clone()));
    info!("plugins: {:?}", plugins.names());

    /* --- Run until ESC/close or a camera/window failure ---
       Settings are saved either way. */
    let outcome = run(&args, &polyline, &mut plugins);
    let settings = polyline.borrow().get_settings();
    save_then_report(outcome, &settings, &args.settings)
}

/// Camera → events → plugins → window, once per frame.
fn run(args: &Args, polyline: &RefCell<GazePolyline>, plugins: &mut PluginChain) -> Result<(), Error> {
    /* --- Camera + window setup ---
       Visual: window opens with live camera feed. */
    let mut cam = CameraCapture::new(args.camera, args.width, args.height)?;
    let (w, h) = cam.resolution();
    let mut drawer = Drawer::new("Gaze Polyline", w as usize, h as usize)?;

    let mut gaze = MouseGaze::new(args.trail);

    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        /* 1) Grab a fresh live frame. */
        let mut frame = cam.next_frame()?;

        /* 2) Inputs: pointer → gaze, keys → menu sliders */
        gaze.push(now, drawer.mouse_pos(), drawer.window_size());
        apply_keys(&drawer, &mut polyline.borrow_mut());

        /* 3) Run the plugins. Visual: the polyline lands on top of the frame. */
        let mut events = Events { gaze: Some(gaze.recent(now)), ..Events::with_frame(&mut frame) };
        plugins.process_all(&mut events, args.min_confidence);

        /* 4) Present. */
        drawer.present(&frame.img)?;

        /* 5) FPS counter (log once per second) */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            debug!("FPS: {:.1} (frame {})", frames_this_second as f32 / secs, frame.index);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }
    Ok(())
}

/// Persist settings, then hand back the session's outcome.
/// A failed session keeps its own error; a failed save is only logged in that case.
fn save_then_report(outcome: Result<(), Error>, settings: &PolylineSettings, path: &Path) -> Result<(), Error> {
    let saved = settings.save(path);
    match outcome {
        Ok(()) => saved,
        Err(e) => {
            if let Err(save_err) = saved {
                warn!("{save_err}");
            }
            Err(e)
        }
    }
}

/// Map key presses onto the renderer's sliders, the way a menu would.
fn apply_keys(drawer: &Drawer, polyline: &mut GazePolyline) {
    let delta = drawer.thickness_delta();
    if delta != 0 {
        let current = polyline.value(THICKNESS.id).unwrap_or(THICKNESS.min);
        if let Err(e) = polyline.set_value(THICKNESS.id, current + delta as f32 * THICKNESS.step) {
            warn!("{e}");
        }
    }

    for id in drawer.channel_presses() {
        let slider = [RED, GREEN, BLUE].into_iter().find(|s| s.id == id).unwrap_or(RED);
        let current = polyline.value(slider.id).unwrap_or(slider.min);
        // Past the top of the range, wrap back to the bottom.
        let next = if current + slider.step > slider.max + 1e-4 { slider.min } else { current + slider.step };
        match polyline.set_value(slider.id, next) {
            Ok(()) => info!("{} = {:.2}", slider.label, polyline.value(slider.id).unwrap_or(next)),
            Err(e) => warn!("{e}"),
        }
    }
}
