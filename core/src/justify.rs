//! Horizontal placement of the rendered code.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Where to place the code relative to the terminal width.
///
/// Center and Right only have an effect when the terminal width is
/// known; otherwise rendering falls back to Left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Justify {
    #[default]
    Left,
    Center,
    Right,
}

impl FromStr for Justify {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Justify::Left),
            "center" => Ok(Justify::Center),
            "right" => Ok(Justify::Right),
            _ => Err(Error::UnsupportedJustify(s.to_string())),
        }
    }
}

impl fmt::Display for Justify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Justify::Left => "left",
            Justify::Center => "center",
            Justify::Right => "right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("LEFT".parse::<Justify>().unwrap(), Justify::Left);
        assert_eq!("Center".parse::<Justify>().unwrap(), Justify::Center);
        assert_eq!("right".parse::<Justify>().unwrap(), Justify::Right);
    }

    #[test]
    fn test_unknown_justify_error_names_the_value() {
        let err = "top".parse::<Justify>().unwrap_err();
        assert!(err.to_string().contains("'top'"));
    }
}
