// Frame compositing: rescale the incoming frame, re-layout the canvas when
// (and only when) the scaled size changes, write the frame into the interior,
// and present. The re-layout trigger is an explicit two-state machine so the
// reallocation condition can be tested on its own.

use crate::canvas::CanvasBuffer;
use crate::display::DisplaySink;
use crate::error::Error;
use crate::layout::{self, LayoutConfig};
use crate::scale;
use crate::types::{FrameBuffer, Point, Size};

/// Tracks the scaled frame size the canvas is currently laid out for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameState {
    Uninitialized,
    Ready(Size),
}

impl FrameState {
    /// Feed in the scaled size of the next frame. Returns true when the
    /// canvas must be re-laid-out: on the very first frame, and whenever the
    /// size differs from the one we are Ready for. Same size, no transition.
    pub fn observe(&mut self, scaled: Size) -> bool {
        match *self {
            FrameState::Ready(current) if current == scaled => false,
            _ => {
                *self = FrameState::Ready(scaled);
                true
            }
        }
    }
}

pub struct FrameCompositor {
    config: LayoutConfig,
    state: FrameState,
    frame_offset: Point,
    canvas: CanvasBuffer,
}

impl FrameCompositor {
    pub fn new(config: LayoutConfig) -> Self {
        // The interior anchor depends only on the config, never on the frame
        // size, so it is known before the first frame arrives.
        let frame_offset = layout::compute_geometry(&config, Size::new(0, 0)).frame_offset;
        Self { config, state: FrameState::Uninitialized, frame_offset, canvas: CanvasBuffer::new() }
    }

    /// The canonical canvas, for overlay rendering.
    pub fn canvas(&self) -> &CanvasBuffer {
        &self.canvas
    }

    /// Composite one incoming frame and present the result.
    /// After this returns, the sink has been shown the canvas with the most
    /// recent frame, correctly scaled and positioned, corners intact.
    pub fn update(
        &mut self,
        raw: &FrameBuffer,
        sink: &mut impl DisplaySink,
    ) -> Result<(), Error> {
        let scaled = self.config.scaled_size(raw.size());
        let resized = scale::resize_area(raw, scaled);

        if self.state.observe(scaled) {
            // Size changed (or first frame): repaint background and tags.
            let geometry = layout::compute_geometry(&self.config, scaled);
            self.canvas.reallocate(&geometry, self.config.tag_size)?;
            self.frame_offset = geometry.frame_offset;
        }

        self.canvas.write_interior(&resized, self.frame_offset)?;
        sink.show(self.canvas.buffer())
    }
}
