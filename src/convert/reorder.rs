use crate::render::raster::FrameBGRA;

/// Reformat a premultiplied BGRA frame into strict R,G,B,A rows, lazily.
///
/// One `width * 4` byte row is produced per iteration so only a single
/// reformatted row is live while a streaming encoder consumes it. The mapping
/// is a fixed byte swap and a contract, not a color-space transform: the
/// renderer places blue first and red third, so `[b, g, r, a]` becomes
/// `[r, g, b, a]` (swap R and B, leave G and A in place). Getting this wrong
/// corrupts colors without crashing, which is why it is pinned by test.
///
/// Never fails: bounds derive from the frame's own dimensions.
pub fn rgba_rows(frame: &FrameBGRA) -> impl Iterator<Item = Vec<u8>> + '_ {
    let stride = frame.width as usize * 4;
    frame.data.chunks_exact(stride).map(|row| {
        let mut out = vec![0u8; row.len()];
        for (dst, px) in out.chunks_exact_mut(4).zip(row.chunks_exact(4)) {
            dst[0] = px[2];
            dst[1] = px[1];
            dst[2] = px[0];
            dst[3] = px[3];
        }
        out
    })
}

#[cfg(test)]
#[path = "../../tests/unit/convert/reorder.rs"]
mod tests;
