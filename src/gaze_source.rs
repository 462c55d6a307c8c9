// Stand-in gaze producer for the demo: the mouse pointer plays the eye.
// Visual: the polyline trails the pointer and shrinks back when it stops being fed.

use gaze_polyline::GazeDatum;
use log::debug;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub struct MouseGaze {
    trail: Duration,                        // how far back samples are kept
    samples: VecDeque<(Instant, GazeDatum)>, // oldest first
    last_norm: Option<(f32, f32)>,          // where the pointer was last seen
}

impl MouseGaze {
    pub fn new(trail: Duration) -> Self {
        Self { trail, samples: VecDeque::new(), last_norm: None }
    }

    /// Record one pointer reading. `pos` is in window pixels, `None` when the pointer left.
    /// A lost pointer still produces a sample, at the last known spot with zero confidence.
    pub fn push(&mut self, now: Instant, pos: Option<(f32, f32)>, window: (usize, usize)) {
        let (w, h) = (window.0.max(1) as f32, window.1.max(1) as f32);
        let datum = match pos {
            Some((x, y)) => {
                // window origin is top-left; gaze origin is bottom-left
                let norm = ((x / w).clamp(0.0, 1.0), (1.0 - y / h).clamp(0.0, 1.0));
                self.last_norm = Some(norm);
                GazeDatum { norm_pos: norm, confidence: 1.0 }
            }
            None => match self.last_norm {
                Some(norm) => GazeDatum { norm_pos: norm, confidence: 0.0 },
                None => return, // never seen the pointer; nothing to say
            },
        };
        self.samples.push_back((now, datum));
        self.expire(now);
    }

    /// Samples from the last `trail`, oldest first.
    pub fn recent(&mut self, now: Instant) -> Vec<GazeDatum> {
        self.expire(now);
        self.samples.iter().map(|(_, d)| *d).collect()
    }

    fn expire(&mut self, now: Instant) {
        let before = self.samples.len();
        while let Some((t, _)) = self.samples.front() {
            if now.saturating_duration_since(*t) > self.trail {
                self.samples.pop_front();
            } else {
                break;
            }
        }
        let dropped = before - self.samples.len();
        if dropped > 0 {
            debug!("gaze trail: dropped {dropped} stale samples");
        }
    }
}
