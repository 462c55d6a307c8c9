// Software drawing into RGB frames.
// Visual effects provided here:
// 1) An open, anti-aliased polyline of any thickness (soft 1-pixel edge).
// 2) Segments share joints without double-darkening where they overlap.

use image::RgbImage;

/// Anything the renderer can draw a polyline onto.
pub trait Canvas {
    /// Draw an open polyline through `points` (pixel coordinates, origin top-left).
    /// Fewer than two points draws nothing.
    fn polyline(&mut self, points: &[(i32, i32)], color: [u8; 3], thickness: u32);
}

impl Canvas for RgbImage {
    fn polyline(&mut self, points: &[(i32, i32)], color: [u8; 3], thickness: u32) {
        draw_polyline_aa(self, points, color, thickness);
    }
}

/// Distance from pixel center (px,py) to the segment a→b.
/// f64 so an endpoint near i32::MAX still projects to the right pixel.
#[inline]
fn dist_to_segment(px: f64, py: f64, a: (f64, f64), b: (f64, f64)) -> f64 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len2 = dx * dx + dy * dy;
    let t = if len2 > 0.0 { (((px - a.0) * dx + (py - a.1) * dy) / len2).clamp(0.0, 1.0) } else { 0.0 };
    let (cx, cy) = (a.0 + t * dx, a.1 + t * dy);
    ((px - cx) * (px - cx) + (py - cy) * (py - cy)).sqrt()
}

/// Mix `color` over `old` by coverage `c` in [0,1].
#[inline]
fn blend(old: u8, new: u8, c: f32) -> u8 {
    (old as f32 * (1.0 - c) + new as f32 * c).round().clamp(0.0, 255.0) as u8
}

/// Draw each segment as a capsule `thickness` pixels wide.
/// Visual: a smooth line; its edge fades over one pixel instead of stair-stepping.
pub fn draw_polyline_aa(img: &mut RgbImage, points: &[(i32, i32)], color: [u8; 3], thickness: u32) {
    if points.len() < 2 {
        return;
    }
    let (w, h) = (img.width() as i32, img.height() as i32);
    if w == 0 || h == 0 {
        return;
    }
    let radius = (thickness.max(1) as f32) * 0.5;
    let reach = radius.ceil() as i32 + 1; // pixels beyond the centerline that may get coverage

    // Bounding box of the whole polyline, clipped to the image.
    // Saturating: far-away endpoints (e.g. from an infinite gaze value) sit at i32::MAX/MIN.
    let x0 = points.iter().map(|p| p.0).min().unwrap_or(0).saturating_sub(reach).max(0);
    let y0 = points.iter().map(|p| p.1).min().unwrap_or(0).saturating_sub(reach).max(0);
    let x1 = points.iter().map(|p| p.0).max().unwrap_or(0).saturating_add(reach).min(w - 1);
    let y1 = points.iter().map(|p| p.1).max().unwrap_or(0).saturating_add(reach).min(h - 1);
    if x0 > x1 || y0 > y1 {
        return; // entirely off-screen
    }

    // Coverage per pixel, max over segments (so joints don't get painted twice).
    let bw = (x1 - x0 + 1) as usize;
    let bh = (y1 - y0 + 1) as usize;
    let mut cover = vec![0.0f32; bw * bh];

    for seg in points.windows(2) {
        let a = (seg[0].0 as f64, seg[0].1 as f64);
        let b = (seg[1].0 as f64, seg[1].1 as f64);

        // Only scan this segment's own box
        let sx0 = seg[0].0.min(seg[1].0).saturating_sub(reach).max(x0);
        let sy0 = seg[0].1.min(seg[1].1).saturating_sub(reach).max(y0);
        let sx1 = seg[0].0.max(seg[1].0).saturating_add(reach).min(x1);
        let sy1 = seg[0].1.max(seg[1].1).saturating_add(reach).min(y1);

        for y in sy0..=sy1 {
            for x in sx0..=sx1 {
                let d = dist_to_segment(x as f64, y as f64, a, b) as f32;
                let c = (radius + 0.5 - d).clamp(0.0, 1.0);
                if c <= 0.0 {
                    continue;
                }
                let idx = (y - y0) as usize * bw + (x - x0) as usize;
                if c > cover[idx] {
                    cover[idx] = c;
                }
            }
        }
    }

    for by in 0..bh {
        for bx in 0..bw {
            let c = cover[by * bw + bx];
            if c <= 0.0 {
                continue;
            }
            let px = img.get_pixel_mut(x0 as u32 + bx as u32, y0 as u32 + by as u32);
            for ch in 0..3 {
                px[ch] = blend(px[ch], color[ch], c);
            }
        }
    }
}
