// Frame resampling: coverage-weighted area averaging.
// Each destination pixel averages the source pixels its back-projected box
// covers, with fractional edge pixels weighted by how much of them the box
// overlaps. Downscaling averages whole neighborhoods (no aliasing sparkle);
// upscaling degrades gracefully toward nearest-pixel.

use crate::types::{FrameBuffer, Size};

/// Resample `src` to `target`. Total function: a zero-width or zero-height
/// target (or source) yields an empty buffer rather than an error, which is
/// what the degenerate-canvas path expects.
pub fn resize_area(src: &FrameBuffer, target: Size) -> FrameBuffer {
    let dw = target.width as usize;
    let dh = target.height as usize;
    if dw == 0 || dh == 0 || src.width == 0 || src.height == 0 {
        return FrameBuffer { width: dw, height: dh, pixels: vec![0; dw * dh] };
    }
    if dw == src.width && dh == src.height {
        return src.clone(); // identity rescale, skip the arithmetic
    }

    let x_ratio = src.width as f64 / dw as f64; // source pixels per dest pixel
    let y_ratio = src.height as f64 / dh as f64;
    let box_area = x_ratio * y_ratio;

    let mut out = Vec::with_capacity(dw * dh);
    for dy in 0..dh {
        // Vertical extent of the source box for this destination row.
        let sy0 = dy as f64 * y_ratio;
        let sy1 = sy0 + y_ratio;
        let iy0 = sy0.floor() as usize;
        let iy1 = (sy1.ceil() as usize).min(src.height);

        for dx in 0..dw {
            let sx0 = dx as f64 * x_ratio;
            let sx1 = sx0 + x_ratio;
            let ix0 = sx0.floor() as usize;
            let ix1 = (sx1.ceil() as usize).min(src.width);

            // Accumulate each covered source pixel, weighted by overlap area.
            let (mut r, mut g, mut b) = (0.0f64, 0.0f64, 0.0f64);
            for iy in iy0..iy1 {
                let wy = (sy1.min((iy + 1) as f64) - sy0.max(iy as f64)).max(0.0);
                let row_ofs = iy * src.width;
                for ix in ix0..ix1 {
                    let wx = (sx1.min((ix + 1) as f64) - sx0.max(ix as f64)).max(0.0);
                    let w = wx * wy;
                    let p = src.pixels[row_ofs + ix];
                    r += w * (((p >> 16) & 0xFF) as f64);
                    g += w * (((p >> 8) & 0xFF) as f64);
                    b += w * ((p & 0xFF) as f64);
                }
            }

            let r8 = (r / box_area).round().clamp(0.0, 255.0) as u32;
            let g8 = (g / box_area).round().clamp(0.0, 255.0) as u32;
            let b8 = (b / box_area).round().clamp(0.0, 255.0) as u32;
            out.push((r8 << 16) | (g8 << 8) | b8); // pack back as 0x00RRGGBB
        }
    }

    FrameBuffer { width: dw, height: dh, pixels: out }
}
