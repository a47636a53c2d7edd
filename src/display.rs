// Window plumbing. The compositor and overlay renderer only ever talk to the
// `DisplaySink` trait and receive the handle explicitly, so there is no
// hidden process-wide window state and tests can substitute a recording sink.

use crate::error::Error;
use crate::types::FrameBuffer;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

/// Anything that can present a finished pixel buffer.
pub trait DisplaySink {
    fn show(&mut self, fb: &FrameBuffer) -> Result<(), Error>;
}

/// One named on-screen window backed by minifb. Creating it is the one-time
/// side effect; dropping it closes the window.
pub struct WindowSink {
    window: Window,
}

impl WindowSink {
    /// Open the window at an initial size. minifb windows are fixed-size, but
    /// `show` resizes on the fly via the resize window option.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let opts = WindowOptions { resize: true, ..WindowOptions::default() };
        let window = Window::new(title, width.max(1), height.max(1), opts)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (the demo exits on this).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current mouse position in window pixel coordinates (clamped).
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Clamp)
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// One event per press; the demo uses this to clear its dropped points.
    pub fn c_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    /// Pump events without pushing new pixels (keeps input responsive when
    /// nothing changed this iteration).
    pub fn poll(&mut self) {
        self.window.update();
    }
}

impl DisplaySink for WindowSink {
    /// Push the pixels to the screen. Visual: the window immediately shows
    /// the new canvas.
    fn show(&mut self, fb: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&fb.pixels, fb.width, fb.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Records every buffer it is shown; the tests' stand-in for the window.
    #[derive(Default)]
    pub struct RecordingSink {
        pub shown: Vec<FrameBuffer>,
    }

    impl DisplaySink for RecordingSink {
        fn show(&mut self, fb: &FrameBuffer) -> Result<(), Error> {
            self.shown.push(fb.clone());
            Ok(())
        }
    }
}
