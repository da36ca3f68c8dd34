use crate::eval::evaluator::{EvaluatedShape, eval_frame};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FramepressError, FramepressResult};
use crate::scene::document::AnimationDocument;
use crate::scene::model::ColorDef;
use kurbo::{Affine, Point, Shape as _};

/// 2x2 supersampling grid, pixel-local offsets.
const SAMPLE_OFFSETS: [(f64, f64); 4] = [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)];

/// A rendered frame as premultiplied BGRA8 pixels.
///
/// Channel order is the renderer's native **B,G,R,A**, not RGBA. Consumers
/// that need RGBA must go through [`crate::rgba_rows`]; assuming RGBA here
/// silently corrupts colors without crashing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBGRA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Premultiplied BGRA8 bytes, tightly packed, row-major (`width * 4`
    /// byte stride).
    pub data: Vec<u8>,
}

impl FrameBGRA {
    /// The `[b, g, r, a]` bytes at `(x, y)`.
    ///
    /// Panics when the coordinate is outside the frame; intended for tests
    /// and debugging, not hot loops.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }
}

/// Rasterize one frame of `doc` into a `width x height` premultiplied BGRA8
/// buffer.
///
/// The document canvas is scaled uniformly to fit the requested surface
/// (aspect preserved, centered). Rendering is synchronous and a pure function
/// of `(doc, frame, width, height)`.
///
/// Errors:
/// - `FrameRange` when `frame >= doc.total_frames()`;
/// - `Allocation` when the pixel buffer cannot be allocated;
/// - `InvalidDimensions` when `width * height * 4` overflows `usize`.
pub fn render_frame(
    doc: &AnimationDocument,
    frame: FrameIndex,
    width: u32,
    height: u32,
) -> FramepressResult<FrameBGRA> {
    let total = doc.total_frames();
    if frame.0 >= total {
        return Err(FramepressError::frame_range(format!(
            "frame index {} out of range (total frames: {total})",
            frame.0
        )));
    }

    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(4))
        .ok_or_else(|| {
            FramepressError::invalid_dimensions(format!(
                "pixel buffer size overflows for {width}x{height}"
            ))
        })?;

    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| {
        FramepressError::allocation(format!(
            "failed to allocate frame buffer (width: {width}, height: {height})"
        ))
    })?;
    data.resize(len, 0);

    if let Some(bg) = doc.def().background {
        let px = premul_bgra8(&bg, 1.0);
        for chunk in data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    let viewport = viewport_transform(doc, width, height);
    let shapes = eval_frame(doc.def(), frame)?;
    for shape in &shapes {
        fill_shape(&mut data, width, height, shape, viewport);
    }

    Ok(FrameBGRA {
        width,
        height,
        data,
    })
}

/// Uniform scale-to-fit of the document canvas into the output surface,
/// centered on both axes.
fn viewport_transform(doc: &AnimationDocument, width: u32, height: u32) -> Affine {
    let canvas = doc.canvas();
    let cw = f64::from(canvas.width);
    let ch = f64::from(canvas.height);
    let scale = (f64::from(width) / cw).min(f64::from(height) / ch);
    let tx = (f64::from(width) - cw * scale) / 2.0;
    let ty = (f64::from(height) - ch * scale) / 2.0;
    Affine::translate((tx, ty)) * Affine::scale(scale)
}

fn fill_shape(data: &mut [u8], width: u32, height: u32, shape: &EvaluatedShape, viewport: Affine) {
    if shape.opacity <= 0.0 {
        return;
    }
    let mut path = shape.path.clone();
    path.apply_affine(viewport);

    let bbox = path.bounding_box();
    let x0 = bbox.x0.floor().max(0.0) as usize;
    let y0 = bbox.y0.floor().max(0.0) as usize;
    let x1 = (bbox.x1.ceil().max(0.0) as usize).min(width as usize);
    let y1 = (bbox.y1.ceil().max(0.0) as usize).min(height as usize);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let samples = SAMPLE_OFFSETS.len() as u32;
    for y in y0..y1 {
        for x in x0..x1 {
            let mut hits = 0u32;
            for (ox, oy) in SAMPLE_OFFSETS {
                if path.contains(Point::new(x as f64 + ox, y as f64 + oy)) {
                    hits += 1;
                }
            }
            if hits == 0 {
                continue;
            }
            let coverage = f64::from(hits) / f64::from(samples);
            let src = premul_bgra8(&shape.fill, shape.opacity * coverage);
            if src[3] == 0 {
                continue;
            }
            let idx = (y * width as usize + x) * 4;
            let dst = [data[idx], data[idx + 1], data[idx + 2], data[idx + 3]];
            data[idx..idx + 4].copy_from_slice(&over_premul(dst, src));
        }
    }
}

/// Premultiply a straight-alpha color into BGRA8, scaling alpha by
/// `extra_alpha` (opacity x coverage).
fn premul_bgra8(color: &ColorDef, extra_alpha: f64) -> [u8; 4] {
    let a = (color.a.clamp(0.0, 1.0) * extra_alpha.clamp(0.0, 1.0)).clamp(0.0, 1.0);
    let to = |ch: f64| (ch.clamp(0.0, 1.0) * a * 255.0).round() as u8;
    [
        to(color.b),
        to(color.g),
        to(color.r),
        (a * 255.0).round() as u8,
    ]
}

/// Premultiplied source-over. Channel-order agnostic apart from alpha living
/// at index 3.
fn over_premul(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = u16::from(src[3]);
    if sa == 0 {
        return dst;
    }
    let inv = 255u16 - sa;

    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
