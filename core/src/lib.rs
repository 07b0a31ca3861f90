//! Qrterm Core - QR codes as colored terminal blocks
//!
//! This library turns a content string into a QR module matrix (via
//! the `qrcode` crate) and renders it as ANSI-colored two-character
//! cells, with optional centering or right justification against a
//! known terminal width.

pub mod bitmap;
pub mod color;
pub mod justify;
pub mod level;
pub mod render;

mod error;

pub use error::{Error, Result};

pub use bitmap::Bitmap;
pub use color::Color;
pub use justify::Justify;
pub use level::Level;
pub use render::{render, RenderOptions};
