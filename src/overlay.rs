// Transient overlay pass: cursor dot plus detected-point dots, drawn on a
// snapshot of the canvas and shown directly. The canonical canvas is never
// touched, so repeated overlay calls can't accumulate artifacts.

use crate::canvas::CanvasBuffer;
use crate::display::DisplaySink;
use crate::draw::draw_filled_circle;
use crate::error::Error;

// Colors match the reference tool: blue cursor, cyan points.
const CURSOR_COLOR: u32 = 0x00_00_00_FF;
const POINT_COLOR: u32 = 0x00_00_FF_FF;
const CURSOR_RADIUS: i32 = 10;
const POINT_RADIUS: i32 = 4;

/// Holds the last cursor position handed in; ephemeral display state only.
pub struct OverlayRenderer {
    cursor: (i32, i32),
}

impl OverlayRenderer {
    pub fn new() -> Self {
        Self { cursor: (0, 0) }
    }

    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    /// Draw the cursor at (x, y) and a small dot per point, then present the
    /// copy. `base` is only read; the next `update` is unaffected.
    pub fn render_cursor(
        &mut self,
        base: &CanvasBuffer,
        x: f64,
        y: f64,
        points: &[(f64, f64)],
        sink: &mut impl DisplaySink,
    ) -> Result<(), Error> {
        self.cursor = (x.round() as i32, y.round() as i32);

        let mut disp = base.snapshot();
        draw_filled_circle(&mut disp, self.cursor.0, self.cursor.1, CURSOR_RADIUS, CURSOR_COLOR);
        for &(px, py) in points {
            draw_filled_circle(
                &mut disp,
                px.round() as i32,
                py.round() as i32,
                POINT_RADIUS,
                POINT_COLOR,
            );
        }
        sink.show(&disp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::testing::RecordingSink;
    use crate::layout::{compute_geometry, LayoutConfig};
    use crate::types::Size;

    fn canvas() -> CanvasBuffer {
        // tag 2, border 1, frame 20x20 -> canvas 28x22, lots of white space.
        let config = LayoutConfig::new(2, 1, 1.0).unwrap();
        let g = compute_geometry(&config, Size::new(20, 20));
        let mut canvas = CanvasBuffer::new();
        canvas.reallocate(&g, 2).unwrap();
        canvas
    }

    #[test]
    fn draws_cursor_and_points_on_the_copy() {
        let canvas = canvas();
        let mut sink = RecordingSink::default();
        let mut overlay = OverlayRenderer::new();
        overlay
            .render_cursor(&canvas, 14.0, 11.0, &[(6.4, 11.6)], &mut sink)
            .unwrap();

        let shown = &sink.shown[0];
        assert_eq!(shown.pixels[11 * 28 + 14], CURSOR_COLOR);
        // Point coordinates round to (6, 12).
        assert_eq!(shown.pixels[12 * 28 + 6], POINT_COLOR);
        assert_eq!(overlay.cursor(), (14, 11));
    }

    #[test]
    fn never_mutates_the_canvas() {
        let canvas = canvas();
        let before = canvas.snapshot();
        let mut sink = RecordingSink::default();
        let mut overlay = OverlayRenderer::new();
        for i in 0..5 {
            let fx = 4.0 + i as f64 * 3.0;
            overlay
                .render_cursor(&canvas, fx, 10.0, &[(20.0, 5.0)], &mut sink)
                .unwrap();
        }
        assert_eq!(before, canvas.snapshot());
    }

    #[test]
    fn repeated_calls_leave_no_trail() {
        let canvas = canvas();
        let mut sink = RecordingSink::default();
        let mut overlay = OverlayRenderer::new();
        overlay.render_cursor(&canvas, 14.0, 11.0, &[], &mut sink).unwrap();
        overlay.render_cursor(&canvas, 14.0, 11.0, &[], &mut sink).unwrap();
        // Second render from the same position is pixel-identical; no buildup.
        assert_eq!(sink.shown[0], sink.shown[1]);
    }
}
