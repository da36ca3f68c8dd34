//! Framepress converts a single frame of a vector animation document into an
//! in-memory PNG.
//!
//! The pipeline is four stages composed linearly, each stateless with respect
//! to other jobs:
//!
//! 1. **Load**: raw UTF-8 JSON bytes -> [`AnimationDocument`] (parse + schema
//!    validation, total frame count)
//! 2. **Render**: one frame index -> [`FrameBGRA`] (premultiplied BGRA8
//!    pixels at caller-chosen dimensions)
//! 3. **Reorder**: BGRA rows -> strict RGBA rows, lazily ([`rgba_rows`])
//! 4. **Encode**: RGBA rows -> PNG bytes through a doubling [`GrowableSink`]
//!    ([`encode_rgba_png`])
//!
//! A [`ConversionJob`] owns all buffers for one request and is the unit of
//! concurrency: jobs share nothing, so no locks exist anywhere. Two entry
//! points wrap the same job, [`export_frame_sync`] (blocking) and
//! [`export_frame`] (worker thread + [`PendingExport`] handle).
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: rendering and encoding are pure in their inputs;
//!   identical requests produce byte-identical PNGs.
//! - **No IO in the core**: documents arrive as bytes, images leave as bytes.
//! - **Every buffer released on every path**: the job's document, pixel
//!   buffer, and sink are dropped exactly once, success or failure.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod convert;
mod eval;
mod foundation;
mod render;
mod scene;
mod schema;

pub use animation::anim::{AnimDef, KeyframeDef, KeyframesDef, Lerp};
pub use animation::ease::Ease;
pub use convert::encoder::encode_rgba_png;
pub use convert::export::{PendingExport, export_frame, export_frame_sync};
pub use convert::job::{ConversionJob, ConversionRequest, ExportOptions, MAX_DIMENSION};
pub use convert::reorder::rgba_rows;
pub use convert::sink::{GrowableSink, SINK_GROWTH_FACTOR, SINK_INITIAL_CAPACITY};
pub use foundation::core::{Canvas, FrameIndex};
pub use foundation::error::{FramepressError, FramepressResult};
pub use render::raster::{FrameBGRA, render_frame};
pub use scene::document::AnimationDocument;
