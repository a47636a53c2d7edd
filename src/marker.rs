// Fiducial tag generation: the opaque image source for the four corners.
// Each tag is a 6x6 cell grid: a one-cell black border ring around a 4x4
// payload. The payload comes from a fixed dictionary of 16-bit code words,
// so the same id always rasterizes to the same bitmap and repainting the
// canvas reproduces pixel-identical corners.

use crate::error::Error;
use crate::types::{FrameBuffer, Size};

const BLACK: u32 = 0x00_00_00_00;
const WHITE: u32 = 0x00_FF_FF_FF;

/// Grid side in cells: 4 payload cells plus the border ring.
const GRID: usize = 6;

/// The four code words, row-major from the top-left payload cell, MSB first.
/// Chosen with pairwise Hamming distance >= 10 so a detector on the other
/// side can't confuse two corners even with a few misread cells.
const DICT_4X4: [u16; 4] = [
    0xECA7, // id 0, upper-left
    0x90D9, // id 1, upper-right
    0x7B14, // id 2, bottom-right
    0x076E, // id 3, bottom-left
];

/// Rasterize marker `id` as a `size` x `size` black-and-white bitmap.
/// Pixels map onto the 6x6 cell grid by integer scaling, so any positive
/// size works and the output depends only on (id, size).
pub fn generate_marker(id: u8, size: u32) -> Result<FrameBuffer, Error> {
    let code = *DICT_4X4
        .get(id as usize)
        .ok_or(Error::InvalidMarkerId(id))?;

    let side = size as usize;
    let mut tag = FrameBuffer::filled(Size::new(size, size), BLACK);
    for y in 0..side {
        let cy = y * GRID / side;
        for x in 0..side {
            let cx = x * GRID / side;
            // Border ring stays black; payload cells read from the code word.
            if cx == 0 || cy == 0 || cx == GRID - 1 || cy == GRID - 1 {
                continue;
            }
            let bit = 15 - ((cy - 1) * 4 + (cx - 1));
            if (code >> bit) & 1 == 1 {
                tag.pixels[y * side + x] = WHITE;
            }
        }
    }
    Ok(tag)
}
