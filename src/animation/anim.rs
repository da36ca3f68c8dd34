use crate::animation::ease::Ease;
use crate::foundation::error::{FramepressError, FramepressResult};
use serde::{Deserialize, Serialize};

/// Interpolation contract for animatable value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// An animatable property: a bare constant or a keyframed curve.
///
/// JSON shorthand: a bare value deserializes as [`AnimDef::Constant`]; the
/// full form is `{"keys": [{"frame": .., "value": .., "ease": ..}, ..]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnimDef<T> {
    /// Value held for the whole timeline.
    Constant(T),
    /// Piecewise curve defined by explicit keyframes.
    Keyframed(KeyframesDef<T>),
}

/// Keyframed animation curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyframesDef<T> {
    /// Keyframes sorted by `frame`.
    pub keys: Vec<KeyframeDef<T>>,
}

/// One keyframe in a keyframed curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyframeDef<T> {
    /// Frame index for this key, in document timeline space.
    pub frame: u64,
    /// Value at `frame`.
    pub value: T,
    /// Easing applied toward the next keyframe.
    #[serde(default)]
    pub ease: Ease,
}

impl<T> AnimDef<T>
where
    T: Lerp + Clone,
{
    /// Build a constant animation that always returns `value`.
    pub fn constant(value: T) -> Self {
        Self::Constant(value)
    }

    /// Sample the animation value at `frame`.
    pub fn sample(&self, frame: u64) -> FramepressResult<T> {
        match self {
            Self::Constant(v) => Ok(v.clone()),
            Self::Keyframed(kf) => kf.sample(frame),
        }
    }

    /// Validate static invariants for this animation.
    pub fn validate(&self) -> FramepressResult<()> {
        match self {
            Self::Constant(_) => Ok(()),
            Self::Keyframed(kf) => kf.validate(),
        }
    }
}

impl<T> KeyframesDef<T>
where
    T: Lerp + Clone,
{
    /// Validate keyframe presence and ordering.
    pub fn validate(&self) -> FramepressResult<()> {
        if self.keys.is_empty() {
            return Err(FramepressError::load("keyframes must have at least one key"));
        }
        if !self.keys.windows(2).all(|w| w[0].frame <= w[1].frame) {
            return Err(FramepressError::load("keyframe keys must be sorted by frame"));
        }
        Ok(())
    }

    /// Sample the keyframed value at `frame`.
    ///
    /// Before the first key the first value holds; past the last key the last
    /// value holds; in between, values interpolate with the earlier key's ease.
    pub fn sample(&self, frame: u64) -> FramepressResult<T> {
        if self.keys.is_empty() {
            return Err(FramepressError::load("keyframes has no keys"));
        }

        let idx = self.keys.partition_point(|k| k.frame <= frame);
        if idx == 0 {
            return Ok(self.keys[0].value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.frame.saturating_sub(a.frame);
        if denom == 0 {
            return Ok(a.value.clone());
        }

        let t = ((frame - a.frame) as f64) / (denom as f64);
        Ok(T::lerp(&a.value, &b.value, a.ease.apply(t)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
