// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    InvalidConfig(String),     // Bad layout parameters at construction
    InvalidMarkerId(u8),       // Asked for a marker the dictionary doesn't have
    DimensionMismatch(String), // Interior write would exceed canvas bounds (logic bug)
    WindowInit(String),        // Creating the window failed
    WindowUpdate(String),      // Updating the window buffer failed
    ImageLoad(String),         // Decoding the demo's sample image failed
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(s) => write!(f, "Invalid layout config: {s}"),
            Error::InvalidMarkerId(id) => {
                write!(f, "No marker with id {id} (dictionary holds 0..=3)")
            }
            Error::DimensionMismatch(s) => write!(f, "Dimension mismatch: {s}"),
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::ImageLoad(s) => write!(f, "Image load error: {s}"),
        }
    }
}

// We don't implement std::error::Error for now to keep things minimal.
// It's easy to add later when we wire in more components.
