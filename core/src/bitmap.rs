//! QR bitmap generation.
//!
//! Encoding is delegated to the `qrcode` crate; this module only
//! reshapes its flat module list into a row-major boolean matrix and
//! frames it with the quiet zone the renderer expects to trim.

use qrcode::QrCode;
use tracing::debug;

use crate::level::Level;
use crate::Result;

/// Light modules of padding added on each edge of the encoded matrix.
pub const QUIET_ZONE: usize = 4;

/// A square boolean matrix of QR modules, quiet zone included.
/// `true` is a dark module. Immutable once built.
#[derive(Debug, Clone)]
pub struct Bitmap {
    rows: Vec<Vec<bool>>,
}

impl Bitmap {
    /// Encode `content` at the given error correction level.
    pub fn encode(content: &str, level: Level) -> Result<Self> {
        let code = QrCode::with_error_correction_level(content.as_bytes(), level.into())?;
        let width = code.width();
        let colors = code.to_colors();

        let size = width + 2 * QUIET_ZONE;
        let mut rows = vec![vec![false; size]; size];
        for y in 0..width {
            for x in 0..width {
                if colors[y * width + x] == qrcode::Color::Dark {
                    rows[y + QUIET_ZONE][x + QUIET_ZONE] = true;
                }
            }
        }

        debug!(modules = width, size, level = %level, "encoded qr code");
        Ok(Self { rows })
    }

    /// Matrix edge length, quiet zone included.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Whether the module at (row, col) is dark.
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        self.rows[row][col]
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }
}
