// Software drawing primitives for the overlay pass.
// Everything here clips against the buffer bounds, so callers can hand in
// cursor coordinates near (or past) the canvas edge without checks.

use crate::types::FrameBuffer;

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Draw a filled circle of `radius` centered at (cx,cy).
/// Visual: a solid dot, the overlay's cursor and point markers.
pub fn draw_filled_circle(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32, color: u32) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                put_pixel(fb, cx + dx, cy + dy, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Size;

    #[test]
    fn circle_fills_center_and_skips_far_corners() {
        let mut fb = FrameBuffer::filled(Size::new(21, 21), 0);
        draw_filled_circle(&mut fb, 10, 10, 5, 0xFF0000);
        assert_eq!(fb.pixels[10 * 21 + 10], 0xFF0000); // center
        assert_eq!(fb.pixels[10 * 21 + 15], 0xFF0000); // on the radius
        assert_eq!(fb.pixels[0], 0); // far corner untouched
        // (4,4) from center is sqrt(32) > 5 away, outside the disc.
        assert_eq!(fb.pixels[6 * 21 + 6], 0);
    }

    #[test]
    fn circle_clips_at_edges_without_panicking() {
        let mut fb = FrameBuffer::filled(Size::new(8, 8), 0);
        draw_filled_circle(&mut fb, 0, 0, 4, 0x00FF00);
        draw_filled_circle(&mut fb, 7, 7, 4, 0x00FF00);
        draw_filled_circle(&mut fb, -10, -10, 4, 0x00FF00); // fully outside
        assert_eq!(fb.pixels[0], 0x00FF00);
        assert_eq!(fb.pixels[7 * 8 + 7], 0x00FF00);
    }
}
