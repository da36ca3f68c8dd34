use crate::convert::sink::GrowableSink;
use crate::foundation::error::{FramepressError, FramepressResult};
use std::io::Write;

/// Deflate's highest compression setting.
pub(crate) const MAX_DEFLATE_LEVEL: u8 = 9;

/// Map the caller-facing quality knob in `(0, 1]` to a deflate level.
///
/// `level = round((1 - quality) * 9)`, ties rounding half-up: quality 1.0
/// gives level 0 (fastest, largest output), low quality gives level 9
/// (smallest, slowest). The inversion of quality against compression effort
/// is deliberate and load-bearing for callers tuning output size.
pub(crate) fn quality_to_level(quality: f64) -> u8 {
    ((1.0 - quality.clamp(0.0, 1.0)) * f64::from(MAX_DEFLATE_LEVEL)).round() as u8
}

/// Encode RGBA8 rows into a complete PNG byte stream.
///
/// Writes an 8-bit RGBA, non-interlaced PNG with the default filter strategy
/// through a fresh [`GrowableSink`]. Each row must be exactly `width * 4`
/// bytes and exactly `height` rows must be supplied; any mismatch, and any
/// encoder or sink failure, aborts with an `Encode` error. The partially
/// written sink is dropped, never observable by the caller. On success the
/// sink's bytes transfer to the caller by value.
pub fn encode_rgba_png<I>(rows: I, width: u32, height: u32, quality: f64) -> FramepressResult<Vec<u8>>
where
    I: IntoIterator<Item = Vec<u8>>,
{
    encode_rgba_png_into(GrowableSink::new(), rows, width, height, quality)
}

/// Encode into a caller-provided sink (pre-sized sinks skip growth entirely;
/// the bytes produced are identical either way).
pub(crate) fn encode_rgba_png_into<I>(
    mut sink: GrowableSink,
    rows: I,
    width: u32,
    height: u32,
    quality: f64,
) -> FramepressResult<Vec<u8>>
where
    I: IntoIterator<Item = Vec<u8>>,
{
    let level = quality_to_level(quality);

    let mut encoder = png::Encoder::new(&mut sink, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_deflate_compression(match level {
        0 => png::DeflateCompression::NoCompression,
        n => png::DeflateCompression::Level(n),
    });

    let mut writer = encoder
        .write_header()
        .map_err(|e| FramepressError::encode(format!("write PNG header: {e}")))?;
    let mut stream = writer
        .stream_writer()
        .map_err(|e| FramepressError::encode(format!("open PNG row stream: {e}")))?;

    let expected = width as usize * 4;
    let mut rows_written: u32 = 0;
    for row in rows {
        if row.len() != expected {
            return Err(FramepressError::encode(format!(
                "row {rows_written} is {} bytes, expected {expected} (width {width})",
                row.len()
            )));
        }
        stream
            .write_all(&row)
            .map_err(|e| FramepressError::encode(format!("write PNG row {rows_written}: {e}")))?;
        rows_written += 1;
    }
    if rows_written != height {
        return Err(FramepressError::encode(format!(
            "encoded {rows_written} rows, header declares {height}"
        )));
    }

    stream
        .finish()
        .map_err(|e| FramepressError::encode(format!("finish PNG stream: {e}")))?;

    // Finalize the header writer (writes IEND on drop) and release its borrow
    // on `sink` before transferring the bytes by value.
    drop(writer);

    Ok(sink.into_bytes())
}

#[cfg(test)]
#[path = "../../tests/unit/convert/encoder.rs"]
mod tests;
