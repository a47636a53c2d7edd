// Core pixel and geometry value types shared by every module.

/// A packed RGB pixel buffer: each entry is 0x00RRGGBB, ready for minifb.
/// Used for input frames, marker bitmaps, the canvas, and display snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,     // how wide the buffer is (pixels)
    pub height: usize,    // how tall the buffer is (pixels)
    pub pixels: Vec<u32>, // length = width * height, row-major
}

impl FrameBuffer {
    /// Allocate a buffer of `size` filled with one color.
    /// Visual: a solid rectangle (white for the canvas background).
    pub fn filled(size: Size, color: u32) -> Self {
        Self {
            width: size.width as usize,
            height: size.height as usize,
            pixels: vec![color; (size.width as usize) * (size.height as usize)],
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

/// A width/height pair in pixels. Zero in either dimension is legal
/// (degenerate frames still get a markers-plus-border canvas).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A top-left placement on the canvas, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}
