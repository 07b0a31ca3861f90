//! Block rendering of a QR bitmap.
//!
//! Trims the outer quiet zone down to a one-module margin, paints each
//! surviving module as a two-character colored cell, and left-pads rows
//! when the code is centered or right-justified.

use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::justify::Justify;

/// Rows and columns skipped on each edge of the bitmap.
///
/// One less than the encoder's quiet zone, so a single light module
/// still separates the code from surrounding text.
pub const TRIM: usize = 3;

/// Resolved rendering parameters.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub front: Color,
    pub back: Color,
    pub justify: Justify,
    /// Terminal width in character cells, 0 when unknown.
    pub columns: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            front: Color::Black,
            back: Color::White,
            justify: Justify::Left,
            columns: 0,
        }
    }
}

/// Render the bitmap as ANSI-colored lines, one per surviving row.
pub fn render(bitmap: &Bitmap, opts: &RenderOptions) -> String {
    let size = bitmap.size();
    if size <= 2 * TRIM {
        return String::new();
    }

    let trimmed = size - 2 * TRIM;
    let pad = padding(opts.justify, opts.columns, trimmed);

    let mut output = String::new();
    for row in bitmap.rows().skip(TRIM).take(trimmed) {
        for _ in 0..pad {
            output.push(' ');
        }
        for &dark in &row[TRIM..size - TRIM] {
            output.push_str(if dark {
                opts.front.block()
            } else {
                opts.back.block()
            });
        }
        output.push('\n');
    }
    output
}

/// Spaces to write before each row. Each cell is two characters wide;
/// saturates at zero so an unknown or too-narrow terminal degrades to
/// left-justified output.
fn padding(justify: Justify, columns: usize, trimmed: usize) -> usize {
    let rendered = 2 * trimmed;
    match justify {
        Justify::Left => 0,
        Justify::Center => columns.saturating_sub(rendered) / 2,
        Justify::Right => columns.saturating_sub(rendered),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A 9x9 bitmap whose only dark module is dead center, so the
    // trimmed 3x3 view has a dark cell in its middle.
    fn center_dot() -> Bitmap {
        let mut rows = vec![vec![false; 9]; 9];
        rows[4][4] = true;
        Bitmap::from_rows(rows)
    }

    #[test]
    fn test_trimmed_dimensions() {
        let output = render(&center_dot(), &RenderOptions::default());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 9 - 2 * TRIM);
        for line in &lines {
            assert_eq!(line.matches("\x1b[48;5;").count(), 9 - 2 * TRIM);
        }
    }

    #[test]
    fn test_front_and_back_cells() {
        let opts = RenderOptions {
            front: Color::Red,
            back: Color::Blue,
            ..Default::default()
        };
        let output = render(&center_dot(), &opts);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[1].matches(Color::Red.block()).count(), 1);
        assert_eq!(lines[1].matches(Color::Blue.block()).count(), 2);
        assert_eq!(lines[0].matches(Color::Blue.block()).count(), 3);
        assert!(!lines[0].contains(Color::Red.block()));
    }

    #[test]
    fn test_center_padding() {
        let opts = RenderOptions {
            justify: Justify::Center,
            columns: 80,
            ..Default::default()
        };
        let output = render(&center_dot(), &opts);

        // Trimmed width is 3 cells = 6 characters, so (80 - 6) / 2.
        for line in output.lines() {
            assert!(line.starts_with(&" ".repeat(37)));
            assert_ne!(line.as_bytes()[37], b' ');
        }
    }

    #[test]
    fn test_right_padding() {
        let opts = RenderOptions {
            justify: Justify::Right,
            columns: 80,
            ..Default::default()
        };
        let output = render(&center_dot(), &opts);

        for line in output.lines() {
            assert!(line.starts_with(&" ".repeat(74)));
            assert_ne!(line.as_bytes()[74], b' ');
        }
    }

    #[test]
    fn test_unknown_width_degrades_to_left() {
        let opts = RenderOptions {
            justify: Justify::Center,
            columns: 0,
            ..Default::default()
        };
        let output = render(&center_dot(), &opts);

        for line in output.lines() {
            assert!(line.starts_with('\x1b'));
        }
    }

    #[test]
    fn test_too_narrow_terminal_saturates() {
        assert_eq!(padding(Justify::Center, 4, 25), 0);
        assert_eq!(padding(Justify::Right, 4, 25), 0);
    }

    #[test]
    fn test_bitmap_smaller_than_trim_renders_nothing() {
        let tiny = Bitmap::from_rows(vec![vec![true; 5]; 5]);
        assert_eq!(render(&tiny, &RenderOptions::default()), "");
    }

    #[test]
    fn test_real_encode_line_count() {
        use crate::level::Level;

        let bitmap = Bitmap::encode("https://example.com", Level::Medium).unwrap();
        let output = render(&bitmap, &RenderOptions::default());

        assert_eq!(output.lines().count(), bitmap.size() - 2 * TRIM);
    }
}
