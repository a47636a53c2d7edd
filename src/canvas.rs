// The canonical canvas: white background, four corner tags, and the last
// composited frame in the interior. This is the single source of truth for
// what the window shows; only `reallocate` and `write_interior` may mutate
// it, and overlay drawing always happens on a `snapshot` copy.

use crate::error::Error;
use crate::layout::CanvasGeometry;
use crate::marker;
use crate::types::{FrameBuffer, Point, Size};

const BACKGROUND: u32 = 0x00_FF_FF_FF; // white, (255,255,255)

pub struct CanvasBuffer {
    fb: FrameBuffer,
}

impl CanvasBuffer {
    /// Starts empty (0x0); nothing is displayable until the first reallocate.
    pub fn new() -> Self {
        Self { fb: FrameBuffer { width: 0, height: 0, pixels: Vec::new() } }
    }

    /// The current canvas contents, for handing to a display sink.
    pub fn buffer(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Throw away the old buffer and repaint from scratch: white background,
    /// then the four tags at their corner offsets. Whatever frame was
    /// composited before is lost; the caller re-composites afterwards.
    pub fn reallocate(&mut self, geometry: &CanvasGeometry, tag_size: u32) -> Result<(), Error> {
        let mut fb = FrameBuffer::filled(geometry.canvas_size, BACKGROUND);
        for (id, offset) in geometry.corner_offsets.iter().enumerate() {
            let tag = marker::generate_marker(id as u8, tag_size)?;
            blit_clipped(&mut fb, &tag, *offset);
        }
        self.fb = fb;
        Ok(())
    }

    /// Copy `frame` into the canvas starting at `offset`. The offset and
    /// frame size come from the same geometry computation, so running out of
    /// bounds means a layout bug; fail loudly rather than clip.
    pub fn write_interior(&mut self, frame: &FrameBuffer, offset: Point) -> Result<(), Error> {
        let x0 = offset.x as usize;
        let y0 = offset.y as usize;
        if x0 + frame.width > self.fb.width || y0 + frame.height > self.fb.height {
            return Err(Error::DimensionMismatch(format!(
                "interior {}x{} at ({x0},{y0}) exceeds canvas {}x{}",
                frame.width, frame.height, self.fb.width, self.fb.height
            )));
        }
        for row in 0..frame.height {
            let src = &frame.pixels[row * frame.width..(row + 1) * frame.width];
            let dst_start = (y0 + row) * self.fb.width + x0;
            self.fb.pixels[dst_start..dst_start + frame.width].copy_from_slice(src);
        }
        Ok(())
    }

    /// Independent deep copy of the canvas, for overlay drawing.
    pub fn snapshot(&self) -> FrameBuffer {
        self.fb.clone()
    }
}

/// Copy `src` onto `dst` at `offset`, silently dropping pixels that fall
/// outside. Only the tag painter uses this: on a degenerate canvas the
/// bottom tags clip instead of failing the whole repaint.
fn blit_clipped(dst: &mut FrameBuffer, src: &FrameBuffer, offset: Point) {
    for row in 0..src.height {
        let dy = offset.y as usize + row;
        if dy >= dst.height {
            break;
        }
        for col in 0..src.width {
            let dx = offset.x as usize + col;
            if dx >= dst.width {
                break;
            }
            dst.pixels[dy * dst.width + dx] = src.pixels[row * src.width + col];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{compute_geometry, LayoutConfig};

    fn geometry(frame_w: u32, frame_h: u32) -> CanvasGeometry {
        let config = LayoutConfig::new(100, 10, 1.0).unwrap();
        compute_geometry(&config, Size::new(frame_w, frame_h))
    }

    #[test]
    fn reallocate_paints_background_and_tags() {
        let g = geometry(640, 480);
        let mut canvas = CanvasBuffer::new();
        canvas.reallocate(&g, 100).unwrap();

        let fb = canvas.buffer();
        assert_eq!((fb.width, fb.height), (880, 500));
        // A border pixel outside every region stays white.
        assert_eq!(fb.pixels[5 * 880 + 5], BACKGROUND);
        // Each corner holds its own tag bitmap.
        for (id, ofs) in g.corner_offsets.iter().enumerate() {
            let tag = marker::generate_marker(id as u8, 100).unwrap();
            for row in [0usize, 50, 99] {
                let canvas_row = (ofs.y as usize + row) * 880 + ofs.x as usize;
                assert_eq!(
                    &fb.pixels[canvas_row..canvas_row + 100],
                    &tag.pixels[row * 100..row * 100 + 100],
                    "tag {id} row {row}"
                );
            }
        }
    }

    #[test]
    fn reallocate_discards_previous_contents() {
        let g = geometry(40, 300);
        let mut canvas = CanvasBuffer::new();
        canvas.reallocate(&g, 100).unwrap();
        let frame = FrameBuffer::filled(Size::new(40, 300), 0x00FF00);
        canvas.write_interior(&frame, g.frame_offset).unwrap();

        canvas.reallocate(&g, 100).unwrap();
        let idx = (g.frame_offset.y as usize) * canvas.buffer().width + g.frame_offset.x as usize;
        assert_eq!(canvas.buffer().pixels[idx], BACKGROUND);
    }

    #[test]
    fn write_interior_copies_frame_pixels() {
        let g = geometry(8, 210);
        let mut canvas = CanvasBuffer::new();
        canvas.reallocate(&g, 100).unwrap();
        let frame = FrameBuffer::filled(Size::new(8, 210), 0x123456);
        canvas.write_interior(&frame, g.frame_offset).unwrap();

        let fb = canvas.buffer();
        for row in 0..210usize {
            let start = (g.frame_offset.y as usize + row) * fb.width + g.frame_offset.x as usize;
            assert!(fb.pixels[start..start + 8].iter().all(|&p| p == 0x123456));
        }
        // One pixel left of the interior is still background.
        let left = (g.frame_offset.y as usize) * fb.width + g.frame_offset.x as usize - 1;
        assert_eq!(fb.pixels[left], BACKGROUND);
    }

    #[test]
    fn write_interior_rejects_out_of_bounds() {
        let g = geometry(8, 210);
        let mut canvas = CanvasBuffer::new();
        canvas.reallocate(&g, 100).unwrap();
        // Canvas is 248 wide; 129 columns starting at x=120 run one past the edge.
        let too_wide = FrameBuffer::filled(Size::new(129, 210), 0);
        assert!(matches!(
            canvas.write_interior(&too_wide, g.frame_offset),
            Err(Error::DimensionMismatch(_))
        ));
    }

    #[test]
    fn snapshot_is_independent() {
        let g = geometry(8, 210);
        let mut canvas = CanvasBuffer::new();
        canvas.reallocate(&g, 100).unwrap();
        let mut copy = canvas.snapshot();
        for p in &mut copy.pixels {
            *p = 0xDEAD;
        }
        assert!(canvas.buffer().pixels.iter().all(|&p| p != 0xDEAD));
    }

    #[test]
    fn degenerate_frame_still_reallocates() {
        let g = geometry(0, 0);
        let mut canvas = CanvasBuffer::new();
        canvas.reallocate(&g, 100).unwrap();
        assert_eq!((canvas.buffer().width, canvas.buffer().height), (240, 20));
        // Empty interior write succeeds and changes nothing.
        let empty = FrameBuffer { width: 0, height: 0, pixels: Vec::new() };
        canvas.write_interior(&empty, g.frame_offset).unwrap();
    }
}
