use crate::animation::anim::{AnimDef, Lerp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(crate) struct CanvasDef {
    pub(crate) width: u32,
    pub(crate) height: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(crate) struct FpsDef {
    pub(crate) num: u32,
    pub(crate) den: u32,
}

/// Straight-alpha color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct ColorDef {
    pub(crate) r: f64,
    pub(crate) g: f64,
    pub(crate) b: f64,
    pub(crate) a: f64,
}

impl ColorDef {
    pub(crate) fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

impl Lerp for ColorDef {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }
}

impl<'de> Deserialize<'de> for ColorDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::Arr(v) => {
                if v.len() == 3 {
                    Ok(Self::rgba(v[0], v[1], v[2], 1.0))
                } else if v.len() == 4 {
                    Ok(Self::rgba(v[0], v[1], v[2], v[3]))
                } else {
                    Err(serde::de::Error::custom(
                        "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                    ))
                }
            }
        }
    }
}

fn parse_hex(s: &str) -> Result<ColorDef, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    let (r, g, b, a) = match s.len() {
        6 => {
            let r = hex_byte(&s[0..2])?;
            let g = hex_byte(&s[2..4])?;
            let b = hex_byte(&s[4..6])?;
            (r, g, b, 255)
        }
        8 => {
            let r = hex_byte(&s[0..2])?;
            let g = hex_byte(&s[2..4])?;
            let b = hex_byte(&s[4..6])?;
            let a = hex_byte(&s[6..8])?;
            (r, g, b, a)
        }
        _ => {
            return Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned());
        }
    };

    Ok(ColorDef::rgba(
        (r as f64) / 255.0,
        (g as f64) / 255.0,
        (b as f64) / 255.0,
        (a as f64) / 255.0,
    ))
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Vec2AnimDef {
    pub(crate) x: AnimDef<f64>,
    pub(crate) y: AnimDef<f64>,
}

impl Vec2AnimDef {
    pub(crate) fn constant(x: f64, y: f64) -> Self {
        Self {
            x: AnimDef::Constant(x),
            y: AnimDef::Constant(y),
        }
    }
}

impl Default for Vec2AnimDef {
    fn default() -> Self {
        Self::constant(0.0, 0.0)
    }
}

impl<'de> Deserialize<'de> for Vec2AnimDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr([AnimDef<f64>; 2]),
            Obj { x: AnimDef<f64>, y: AnimDef<f64> },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Arr([x, y]) => Ok(Self { x, y }),
            Repr::Obj { x, y } => Ok(Self { x, y }),
        }
    }
}

/// Animated 2D placement: rotation and scale pivot around `anchor`, which
/// then lands at `translate` in document space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct TransformDef {
    #[serde(default)]
    pub(crate) translate: Vec2AnimDef,
    #[serde(default = "default_rotation")]
    pub(crate) rotation_deg: AnimDef<f64>,
    #[serde(default = "default_scale")]
    pub(crate) scale: Vec2AnimDef,
    #[serde(default)]
    pub(crate) anchor: Vec2AnimDef,
}

fn default_rotation() -> AnimDef<f64> {
    AnimDef::Constant(0.0)
}

fn default_scale() -> Vec2AnimDef {
    Vec2AnimDef::constant(1.0, 1.0)
}

impl Default for TransformDef {
    fn default() -> Self {
        Self {
            translate: Vec2AnimDef::default(),
            rotation_deg: default_rotation(),
            scale: default_scale(),
            anchor: Vec2AnimDef::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ShapeKindDef {
    Rect {
        width: f64,
        height: f64,
    },
    RoundedRect {
        width: f64,
        height: f64,
        radius: f64,
    },
    Ellipse {
        rx: f64,
        ry: f64,
    },
    Path {
        svg_path_d: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ShapeNodeDef {
    pub(crate) id: String,
    pub(crate) kind: ShapeKindDef,
    #[serde(default = "default_fill")]
    pub(crate) fill: AnimDef<ColorDef>,
    #[serde(default = "default_opacity")]
    pub(crate) opacity: AnimDef<f64>,
    #[serde(default)]
    pub(crate) transform: TransformDef,
    /// Half-open `[start, end)` visibility window in frames; `None` means the
    /// whole document duration.
    #[serde(default)]
    pub(crate) range: Option<[u64; 2]>,
}

fn default_fill() -> AnimDef<ColorDef> {
    AnimDef::Constant(ColorDef::rgba(1.0, 1.0, 1.0, 1.0))
}

fn default_opacity() -> AnimDef<f64> {
    AnimDef::Constant(1.0)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct DocumentDef {
    pub(crate) version: String,
    pub(crate) canvas: CanvasDef,
    pub(crate) fps: FpsDef,
    pub(crate) duration: u64,
    #[serde(default)]
    pub(crate) background: Option<ColorDef>,
    #[serde(default)]
    pub(crate) shapes: Vec<ShapeNodeDef>,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
