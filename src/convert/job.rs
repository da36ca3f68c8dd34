use crate::convert::encoder::encode_rgba_png;
use crate::convert::reorder::rgba_rows;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FramepressError, FramepressResult};
use crate::render::raster::render_frame;
use crate::scene::document::AnimationDocument;
use serde::{Deserialize, Serialize};

/// Maximum accepted output dimension on either axis, in pixels.
pub const MAX_DIMENSION: u32 = 4096;

const DEFAULT_DIMENSION: u32 = 100;
const DEFAULT_QUALITY: u32 = 100;

/// Caller-facing export options.
///
/// Every field has a default, and deserialization ignores unknown fields, so
/// partial option objects from a host boundary round-trip cleanly. Values are
/// range-checked by [`ConversionRequest::new`], not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// 0-based frame index to render (default 0).
    #[serde(default)]
    pub frame: u64,
    /// Output width in pixels, `1..=4096` (default 100).
    #[serde(default = "default_dimension")]
    pub width: u32,
    /// Output height in pixels, `1..=4096` (default 100).
    #[serde(default = "default_dimension")]
    pub height: u32,
    /// Quality knob `1..=100` (default 100); 100 means least compression.
    #[serde(default = "default_quality")]
    pub quality: u32,
}

fn default_dimension() -> u32 {
    DEFAULT_DIMENSION
}

fn default_quality() -> u32 {
    DEFAULT_QUALITY
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            frame: 0,
            width: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
            quality: DEFAULT_QUALITY,
        }
    }
}

/// One validated conversion request: the immutable inputs of a single job.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub(crate) document: Vec<u8>,
    pub(crate) frame: FrameIndex,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) quality: f64,
}

impl ConversionRequest {
    /// Validate `options` and take ownership of the raw document bytes.
    ///
    /// Out-of-range width/height/quality are rejected here, before any job
    /// exists or any buffer is allocated. `quality` maps from the integer
    /// knob to `value / 100` in `(0, 1]`.
    pub fn new(document: Vec<u8>, options: &ExportOptions) -> FramepressResult<Self> {
        if options.width == 0 || options.width > MAX_DIMENSION {
            return Err(FramepressError::invalid_dimensions(format!(
                "width must be between 1 and {MAX_DIMENSION} (got {})",
                options.width
            )));
        }
        if options.height == 0 || options.height > MAX_DIMENSION {
            return Err(FramepressError::invalid_dimensions(format!(
                "height must be between 1 and {MAX_DIMENSION} (got {})",
                options.height
            )));
        }
        if options.quality == 0 || options.quality > 100 {
            return Err(FramepressError::invalid_quality(format!(
                "quality must be between 1 and 100 (got {})",
                options.quality
            )));
        }

        Ok(Self {
            document,
            frame: FrameIndex(options.frame),
            width: options.width,
            height: options.height,
            quality: f64::from(options.quality) / 100.0,
        })
    }
}

/// One conversion job: load, render, reorder, encode.
///
/// The job owns every intermediate buffer for the call's duration. At most
/// one document, one pixel buffer, and one sink are live at any time, and
/// each is dropped exactly once on the path that created it, on success and
/// on every failure exit alike. No stage is retried; any failure is terminal
/// for the job.
#[derive(Debug)]
pub struct ConversionJob {
    request: ConversionRequest,
}

impl ConversionJob {
    /// Wrap a validated request.
    pub fn new(request: ConversionRequest) -> Self {
        Self { request }
    }

    /// Run the pipeline to its terminal state, returning the encoded PNG.
    #[tracing::instrument(
        skip(self),
        fields(
            frame = self.request.frame.0,
            width = self.request.width,
            height = self.request.height,
        )
    )]
    pub fn run(self) -> FramepressResult<Vec<u8>> {
        let ConversionRequest {
            document,
            frame,
            width,
            height,
            quality,
        } = self.request;

        let doc = AnimationDocument::from_slice(&document)?;
        drop(document);
        tracing::debug!(total_frames = doc.total_frames(), "document loaded");

        let pixels = render_frame(&doc, frame, width, height)?;
        drop(doc);

        let encoded = encode_rgba_png(rgba_rows(&pixels), width, height, quality)?;
        tracing::debug!(bytes = encoded.len(), "frame encoded");
        Ok(encoded)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/convert/job.rs"]
mod tests;
