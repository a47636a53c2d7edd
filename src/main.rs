// What you SEE:
// • A window with a white canvas, one fiducial tag in each corner, and your
//   sample image composited between them.
// • A blue cursor dot follows the mouse; left click drops a cyan point
//   marker (stand-in for externally detected corners). C clears the points.
// • ESC (or closing the window) quits.
//
// Pass an image path as the first argument to composite it; with no
// arguments a synthetic gradient test card is used instead.

mod canvas;
mod compositor;
mod display;
mod draw;
mod error;
mod layout;
mod marker;
mod overlay;
mod scale;
mod types;

use compositor::FrameCompositor;
use display::WindowSink;
use error::Error;
use layout::LayoutConfig;
use overlay::OverlayRenderer;
use types::{FrameBuffer, Size};

const TAG_SIZE: u32 = 100; // px
const TAG_BORDER: u32 = 10; // px
const IMAGE_RESCALE: f64 = 1.0;

fn main() -> Result<(), Error> {
    let config = LayoutConfig::new(TAG_SIZE, TAG_BORDER, IMAGE_RESCALE)?;

    /* --- Sample frame ---
       Either the image file from the command line or a built-in test card. */
    let frame = match std::env::args().nth(1) {
        Some(path) => load_frame(&path)?,
        None => test_card(640, 480),
    };

    /* --- Window + compositor setup ---
       Visual: the window opens already sized for the bordered canvas. */
    let geometry = layout::compute_geometry(&config, config.scaled_size(frame.size()));
    let mut sink = WindowSink::new(
        "ArucoWindow",
        geometry.canvas_size.width as usize,
        geometry.canvas_size.height as usize,
    )?;
    let mut compositor = FrameCompositor::new(config);
    let mut overlay = OverlayRenderer::new();

    // First composite: canvas allocated, tags painted, frame placed.
    compositor.update(&frame, &mut sink)?;

    /* ------------------------------ Main loop ------------------------------ */
    let mut points: Vec<(f64, f64)> = Vec::new();
    let mut was_down = false;
    while sink.is_open() && !sink.esc_pressed() {
        if sink.c_pressed_once() {
            points.clear(); // visual: cyan dots disappear
        }

        let down = sink.left_mouse_down();
        match sink.mouse_pos() {
            Some((mx, my)) => {
                if down && !was_down {
                    points.push((mx as f64, my as f64)); // visual: new cyan dot
                }
                // Overlay pass: cursor + points on a fresh snapshot, so the
                // composited canvas underneath never picks up the dots.
                overlay.render_cursor(
                    compositor.canvas(),
                    mx as f64,
                    my as f64,
                    &points,
                    &mut sink,
                )?;
            }
            None => sink.poll(), // keep input events flowing
        }
        was_down = down;
    }

    Ok(())
}

/// Decode an image file into the packed 0x00RRGGBB buffer the window expects.
fn load_frame(path: &str) -> Result<FrameBuffer, Error> {
    let img = image::open(path)
        .map_err(|e| Error::ImageLoad(format!("{path}: {e}")))?
        .to_rgb8();
    let (w, h) = img.dimensions();
    let mut out = Vec::with_capacity((w as usize) * (h as usize));
    for (_x, _y, pixel) in img.enumerate_pixels() {
        // Each `pixel` is Rgb<u8>. We pack it as 0x00RRGGBB.
        let r = pixel[0] as u32;
        let g = pixel[1] as u32;
        let b = pixel[2] as u32;
        out.push((r << 16) | (g << 8) | b);
    }
    Ok(FrameBuffer { width: w as usize, height: h as usize, pixels: out })
}

/// Gradient test card used when no sample image is supplied.
fn test_card(width: u32, height: u32) -> FrameBuffer {
    let mut fb = FrameBuffer::filled(Size::new(width, height), 0);
    for y in 0..height as usize {
        for x in 0..width as usize {
            let r = (x as u32 * 255 / width.max(1) as u32) & 0xFF;
            let g = (y as u32 * 255 / height.max(1) as u32) & 0xFF;
            fb.pixels[y * width as usize + x] = (r << 16) | (g << 8) | 0x80;
        }
    }
    fb
}
