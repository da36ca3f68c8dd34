//! Boundary schema validation.
//!
//! Validates structural invariants on the boundary JSON model before any
//! rendering work happens. Errors accumulate with `$`-rooted paths so a bad
//! document reports everything wrong with it in one pass.

use crate::animation::anim::{AnimDef, Lerp};
use crate::scene::model::{DocumentDef, ShapeKindDef, ShapeNodeDef, Vec2AnimDef};
use std::collections::HashSet;
use std::fmt;

pub(crate) const DOCUMENT_VERSION_STR: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SchemaPathElem {
    Field(&'static str),
    Index(usize),
}

#[derive(Debug, Clone)]
pub(crate) struct SchemaError {
    pub(crate) path: Vec<SchemaPathElem>,
    pub(crate) message: String,
}

impl SchemaError {
    fn at(path: &[SchemaPathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message);
        }
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

fn format_path(path: &[SchemaPathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match *p {
            SchemaPathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            SchemaPathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

#[derive(Debug, Clone)]
pub(crate) struct SchemaErrors {
    pub(crate) errors: Vec<SchemaError>,
}

impl fmt::Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaErrors {}

pub(crate) fn validate_document(def: &DocumentDef) -> Result<(), SchemaErrors> {
    let mut errors = Vec::new();

    if def.version != DOCUMENT_VERSION_STR {
        errors.push(SchemaError::at(
            &[SchemaPathElem::Field("version")],
            format!("version must be \"{DOCUMENT_VERSION_STR}\""),
        ));
    }

    if def.canvas.width == 0 || def.canvas.height == 0 {
        errors.push(SchemaError::at(
            &[SchemaPathElem::Field("canvas")],
            "canvas dimensions must be > 0",
        ));
    }

    if def.fps.num == 0 || def.fps.den == 0 {
        errors.push(SchemaError::at(
            &[SchemaPathElem::Field("fps")],
            "fps num and den must be > 0",
        ));
    }

    if def.duration == 0 {
        errors.push(SchemaError::at(
            &[SchemaPathElem::Field("duration")],
            "duration must be > 0 frames",
        ));
    }

    let mut ids = HashSet::<&str>::new();
    for (i, shape) in def.shapes.iter().enumerate() {
        let base = [SchemaPathElem::Field("shapes"), SchemaPathElem::Index(i)];
        validate_shape(shape, def.duration, &base, &mut errors);

        if shape.id.is_empty() {
            errors.push(SchemaError::at(
                &with(&base, SchemaPathElem::Field("id")),
                "shape id must be non-empty",
            ));
        } else if !ids.insert(shape.id.as_str()) {
            errors.push(SchemaError::at(
                &with(&base, SchemaPathElem::Field("id")),
                format!("duplicate shape id \"{}\"", shape.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaErrors { errors })
    }
}

fn with(base: &[SchemaPathElem], elem: SchemaPathElem) -> Vec<SchemaPathElem> {
    let mut path = base.to_vec();
    path.push(elem);
    path
}

fn validate_shape(
    shape: &ShapeNodeDef,
    duration: u64,
    base: &[SchemaPathElem],
    errors: &mut Vec<SchemaError>,
) {
    match &shape.kind {
        ShapeKindDef::Rect { width, height } => {
            if *width <= 0.0 || *height <= 0.0 {
                errors.push(SchemaError::at(
                    &with(base, SchemaPathElem::Field("kind")),
                    "rect width and height must be > 0",
                ));
            }
        }
        ShapeKindDef::RoundedRect {
            width,
            height,
            radius,
        } => {
            if *width <= 0.0 || *height <= 0.0 {
                errors.push(SchemaError::at(
                    &with(base, SchemaPathElem::Field("kind")),
                    "rounded_rect width and height must be > 0",
                ));
            }
            if *radius < 0.0 {
                errors.push(SchemaError::at(
                    &with(base, SchemaPathElem::Field("kind")),
                    "rounded_rect radius must be >= 0",
                ));
            }
        }
        ShapeKindDef::Ellipse { rx, ry } => {
            if *rx <= 0.0 || *ry <= 0.0 {
                errors.push(SchemaError::at(
                    &with(base, SchemaPathElem::Field("kind")),
                    "ellipse radii must be > 0",
                ));
            }
        }
        ShapeKindDef::Path { svg_path_d } => {
            if let Err(e) = kurbo::BezPath::from_svg(svg_path_d.trim()) {
                errors.push(SchemaError::at(
                    &with(base, SchemaPathElem::Field("kind")),
                    format!("invalid svg_path_d: {e}"),
                ));
            }
        }
    }

    if let Some([start, end]) = shape.range {
        if start >= end || end > duration {
            errors.push(SchemaError::at(
                &with(base, SchemaPathElem::Field("range")),
                format!("range [{start}, {end}) must be non-empty and within [0, {duration})"),
            ));
        }
    }

    validate_anim(&shape.opacity, base, "opacity", errors);
    validate_anim(&shape.fill, base, "fill", errors);

    let t = &shape.transform;
    validate_vec2_anim(&t.translate, base, "transform.translate", errors);
    validate_anim(&t.rotation_deg, base, "transform.rotation_deg", errors);
    validate_vec2_anim(&t.scale, base, "transform.scale", errors);
    validate_vec2_anim(&t.anchor, base, "transform.anchor", errors);
}

fn validate_anim<T: Lerp + Clone>(
    anim: &AnimDef<T>,
    base: &[SchemaPathElem],
    field: &'static str,
    errors: &mut Vec<SchemaError>,
) {
    if let Err(e) = anim.validate() {
        // Strip the error-kind prefix; the schema path already locates it.
        let message = match e {
            crate::foundation::error::FramepressError::Load(m) => m,
            other => other.to_string(),
        };
        errors.push(SchemaError::at(&with(base, SchemaPathElem::Field(field)), message));
    }
}

fn validate_vec2_anim(
    v: &Vec2AnimDef,
    base: &[SchemaPathElem],
    field: &'static str,
    errors: &mut Vec<SchemaError>,
) {
    validate_anim(&v.x, base, field, errors);
    validate_anim(&v.y, base, field, errors);
}

#[cfg(test)]
#[path = "../../tests/unit/schema/validate.rs"]
mod tests;
