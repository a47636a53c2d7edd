// Canvas layout: pure offset arithmetic, no drawing.
// Given the configured tag/border sizes and the current scaled frame size,
// this computes where everything sits on the output canvas:
//
//   +----------------------------------------------+
//   | b [UL tag] b          frame          b [UR] b |   b = tag_border
//   |   ........   (frame_offset anchors    ....   |
//   | b [BL tag] b   the interior here)    b [BR] b |
//   +----------------------------------------------+
//
// Width grows by one tag plus two borders on each side; height by one border
// top and bottom. Recomputed only when the scaled frame size changes.

use crate::error::Error;
use crate::types::{Point, Size};

/// Fixed construction parameters for the window. Immutable for its lifetime.
#[derive(Clone, Copy, Debug)]
pub struct LayoutConfig {
    pub tag_size: u32,   // side length of each corner tag (px)
    pub tag_border: u32, // white border around each tag (px)
    pub rescale: f64,    // factor applied to incoming frame dimensions
}

impl LayoutConfig {
    /// Validate once at construction; everything downstream may then assume
    /// `tag_size > 0` and a positive finite rescale factor.
    pub fn new(tag_size: u32, tag_border: u32, rescale: f64) -> Result<Self, Error> {
        if tag_size == 0 {
            return Err(Error::InvalidConfig("tag_size must be > 0".into()));
        }
        if !(rescale.is_finite() && rescale > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "rescale must be a positive finite number, got {rescale}"
            )));
        }
        Ok(Self { tag_size, tag_border, rescale })
    }

    /// Frame size after rescaling, rounded to whole pixels.
    pub fn scaled_size(&self, raw: Size) -> Size {
        Size::new(
            (raw.width as f64 * self.rescale).round() as u32,
            (raw.height as f64 * self.rescale).round() as u32,
        )
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { tag_size: 100, tag_border: 10, rescale: 1.0 }
    }
}

/// Everything derived from (config, frame size): canvas dimensions, where the
/// frame interior starts, and the four tag placements in UL/UR/BR/BL order
/// (matching marker ids 0..=3).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasGeometry {
    pub frame_size: Size,
    pub canvas_size: Size,
    pub frame_offset: Point,
    pub corner_offsets: [Point; 4],
}

/// Compute the full geometry for one frame size. Pure and total: any frame
/// size is legal, including (0, 0), which yields the degenerate
/// markers-plus-border canvas.
pub fn compute_geometry(config: &LayoutConfig, frame_size: Size) -> CanvasGeometry {
    let s = config.tag_size;
    let b = config.tag_border;

    // One tag + two borders added on the left and on the right; one border
    // added on the top and on the bottom.
    let canvas_size = Size::new(
        frame_size.width + 2 * s + 4 * b,
        frame_size.height + 2 * b,
    );

    // The interior sits just right of the left tag column.
    let frame_offset = Point::new(2 * b + s, b);

    // Saturate so degenerate frames (shorter than one tag) still yield a
    // total geometry; the bottom tags then clip against the top ones, the
    // same way the slice-based placement behaves.
    let right_x = canvas_size.width.saturating_sub(b + s);
    let bottom_y = canvas_size.height.saturating_sub(b + s);
    let corner_offsets = [
        Point::new(b, b),              // UL, id 0
        Point::new(right_x, b),        // UR, id 1
        Point::new(right_x, bottom_y), // BR, id 2
        Point::new(b, bottom_y),       // BL, id 3
    ];

    CanvasGeometry { frame_size, canvas_size, frame_offset, corner_offsets }
}
