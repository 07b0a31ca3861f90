//! QR error correction levels.

use std::fmt;
use std::str::FromStr;

use qrcode::EcLevel;

use crate::{Error, Result};

/// Error correction strength, from weakest (L, ~7% recovery) to
/// strongest (H, ~30%).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Level {
    Low,
    #[default]
    Medium,
    Quartile,
    High,
}

impl Level {
    pub fn letter(&self) -> &'static str {
        match self {
            Level::Low => "L",
            Level::Medium => "M",
            Level::Quartile => "Q",
            Level::High => "H",
        }
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "L" => Ok(Level::Low),
            "M" => Ok(Level::Medium),
            "Q" => Ok(Level::Quartile),
            "H" => Ok(Level::High),
            _ => Err(Error::UnsupportedLevel(s.to_string())),
        }
    }
}

impl From<Level> for EcLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => EcLevel::L,
            Level::Medium => EcLevel::M,
            Level::Quartile => EcLevel::Q,
            Level::High => EcLevel::H,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}
