use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FramepressError, FramepressResult};
use crate::scene::model::{ColorDef, DocumentDef, ShapeKindDef, ShapeNodeDef, TransformDef};
use kurbo::{Affine, BezPath, Ellipse, Rect, RoundedRect, Shape as _, Vec2};

/// Flatness tolerance when converting analytic shapes to bezier paths.
const PATH_TOLERANCE: f64 = 0.1;

/// One shape resolved at a single frame, ready to rasterize.
///
/// `path` is in document space (the shape's own transform already applied);
/// the renderer composes the viewport transform on top.
#[derive(Debug, Clone)]
pub(crate) struct EvaluatedShape {
    pub(crate) path: BezPath,
    pub(crate) fill: ColorDef,
    pub(crate) opacity: f64,
}

/// Evaluate every shape visible at `frame` into a back-to-front draw list.
///
/// Evaluation is pure in `(def, frame)`: the same inputs always produce the
/// same list. Shapes keep document order (painter's algorithm).
#[tracing::instrument(skip(def))]
pub(crate) fn eval_frame(
    def: &DocumentDef,
    frame: FrameIndex,
) -> FramepressResult<Vec<EvaluatedShape>> {
    let mut out = Vec::new();
    for shape in &def.shapes {
        if !visible_at(shape, def.duration, frame.0) {
            continue;
        }
        let affine = sample_transform(&shape.transform, frame.0)?;
        let mut path = base_path(&shape.kind)?;
        path.apply_affine(affine);

        out.push(EvaluatedShape {
            path,
            fill: shape.fill.sample(frame.0)?,
            opacity: shape.opacity.sample(frame.0)?.clamp(0.0, 1.0),
        });
    }
    Ok(out)
}

fn visible_at(shape: &ShapeNodeDef, duration: u64, frame: u64) -> bool {
    let [start, end] = shape.range.unwrap_or([0, duration]);
    start <= frame && frame < end
}

/// Compose the shape's animated placement: rotation and scale pivot around
/// `anchor`, which then lands at `translate` in document space.
fn sample_transform(t: &TransformDef, frame: u64) -> FramepressResult<Affine> {
    let translate = Vec2::new(t.translate.x.sample(frame)?, t.translate.y.sample(frame)?);
    let rotation = t.rotation_deg.sample(frame)?.to_radians();
    let scale = Vec2::new(t.scale.x.sample(frame)?, t.scale.y.sample(frame)?);
    let anchor = Vec2::new(t.anchor.x.sample(frame)?, t.anchor.y.sample(frame)?);

    Ok(Affine::translate(translate)
        * Affine::rotate(rotation)
        * Affine::scale_non_uniform(scale.x, scale.y)
        * Affine::translate(-anchor))
}

fn base_path(kind: &ShapeKindDef) -> FramepressResult<BezPath> {
    match kind {
        ShapeKindDef::Rect { width, height } => {
            Ok(Rect::new(0.0, 0.0, *width, *height).into_path(PATH_TOLERANCE))
        }
        ShapeKindDef::RoundedRect {
            width,
            height,
            radius,
        } => Ok(RoundedRect::new(0.0, 0.0, *width, *height, *radius).into_path(PATH_TOLERANCE)),
        ShapeKindDef::Ellipse { rx, ry } => {
            Ok(Ellipse::new((*rx, *ry), (*rx, *ry), 0.0).into_path(PATH_TOLERANCE))
        }
        ShapeKindDef::Path { svg_path_d } => BezPath::from_svg(svg_path_d.trim())
            .map_err(|e| FramepressError::load(format!("invalid svg_path_d: {e}"))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
