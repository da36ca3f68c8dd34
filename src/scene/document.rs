use crate::foundation::core::Canvas;
use crate::foundation::error::{FramepressError, FramepressResult};
use crate::scene::model::DocumentDef;
use crate::schema::validate::validate_document;

/// A parsed, validated vector animation document.
///
/// This is the JSON-facing boundary object: shapes with keyframed transform,
/// opacity, and fill over a fixed-duration timeline. Construction always
/// validates; no partially-built document is ever observable. All IO stays
/// with the caller: documents are built from in-memory bytes only.
#[derive(Debug, Clone)]
pub struct AnimationDocument {
    def: DocumentDef,
}

impl AnimationDocument {
    /// Parse and validate a document from raw UTF-8 JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> FramepressResult<Self> {
        if bytes.is_empty() {
            return Err(FramepressError::load("animation document is empty"));
        }
        let text = std::str::from_utf8(bytes)
            .map_err(|e| FramepressError::load(format!("animation document is not UTF-8: {e}")))?;
        Self::from_json(text)
    }

    /// Parse and validate a document from a JSON string.
    pub fn from_json(text: &str) -> FramepressResult<Self> {
        let def: DocumentDef = serde_json::from_str(text)
            .map_err(|e| FramepressError::load(format!("parse animation document JSON: {e}")))?;
        validate_document(&def)
            .map_err(|e| FramepressError::load(format!("schema validation failed: {e}")))?;
        Ok(Self { def })
    }

    /// Total number of renderable frames (the declared duration).
    ///
    /// Valid frame indices are `0..total_frames()`.
    pub fn total_frames(&self) -> u64 {
        self.def.duration
    }

    /// The document's intrinsic canvas size in pixels.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.def.canvas.width,
            height: self.def.canvas.height,
        }
    }

    pub(crate) fn def(&self) -> &DocumentDef {
        &self.def
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/document.rs"]
mod tests;
