//! Drawing surface abstraction.
//!
//! Widgets draw through the narrow [`Surface`] trait: a character/attribute
//! grid addressed by column and row. The hosting application implements it
//! over its real display; [`CellBuffer`] is the bundled in-memory
//! implementation, used by the test suites and useful for headless
//! rendering.
//!
//! Writes outside the surface bounds are silently dropped, so widgets can
//! be laid out partially (or entirely) off the surface without guards at
//! every call site.

use unicode_width::UnicodeWidthChar;

use crate::error::{Error, Result};
use crate::style::Style;

/// A character/attribute grid that widgets draw onto.
pub trait Surface {
    /// The surface size as (width, height) in cells.
    fn size(&self) -> (i32, i32);

    /// Place a character with a style at the given cell.
    ///
    /// Out-of-bounds coordinates are ignored.
    fn set_cell(&mut self, x: i32, y: i32, ch: char, style: Style);
}

/// A single surface cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// The character occupying the cell.
    pub ch: char,
    /// The cell's style.
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

/// An in-memory [`Surface`] implementation.
pub struct CellBuffer {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl CellBuffer {
    /// Create a buffer of the given size, filled with blank cells.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); (width * height) as usize],
        })
    }

    /// The buffer width in cells.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// The buffer height in rows.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Reset every cell to a blank with the default style.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// The cell at the given position, or `None` when out of bounds.
    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get((y * self.width + x) as usize)
    }

    /// The characters of one row as a `String`.
    ///
    /// Returns an empty string for out-of-bounds rows.
    pub fn row_text(&self, y: i32) -> String {
        if y < 0 || y >= self.height {
            return String::new();
        }
        (0..self.width)
            .map(|x| self.cells[(y * self.width + x) as usize].ch)
            .collect()
    }
}

impl Surface for CellBuffer {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn set_cell(&mut self, x: i32, y: i32, ch: char, style: Style) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.cells[(y * self.width + x) as usize] = Cell { ch, style };
    }
}

/// Draw a string starting at (x, y), truncated to `max_width` cells.
///
/// Advances by the unicode display width of each character, so wide
/// characters consume two cells. Returns the number of cells written.
pub fn draw_str(
    surface: &mut dyn Surface,
    x: i32,
    y: i32,
    max_width: i32,
    s: &str,
    style: Style,
) -> i32 {
    let mut cx = x;
    let limit = x + max_width;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0) as i32;
        if w == 0 {
            continue;
        }
        if cx + w > limit {
            break;
        }
        surface.set_cell(cx, y, ch, style);
        cx += w;
    }
    cx - x
}

/// Fill a horizontal run of cells with one character.
pub fn fill(surface: &mut dyn Surface, x: i32, y: i32, width: i32, ch: char, style: Style) {
    for cx in x..x + width.max(0) {
        surface.set_cell(cx, y, ch, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{COLOR_BLACK, COLOR_GREEN};

    #[test]
    fn test_buffer_dimensions() {
        let buf = CellBuffer::new(40, 10).unwrap();
        assert_eq!(buf.size(), (40, 10));
        assert_eq!(buf.row_text(0).len(), 40);
    }

    #[test]
    fn test_buffer_rejects_degenerate_size() {
        assert!(CellBuffer::new(0, 10).is_err());
        assert!(CellBuffer::new(10, -1).is_err());
    }

    #[test]
    fn test_set_cell_and_clip() {
        let mut buf = CellBuffer::new(10, 2).unwrap();
        let style = Style::new(COLOR_GREEN, COLOR_BLACK);
        buf.set_cell(3, 1, 'x', style);
        assert_eq!(buf.cell(3, 1).unwrap().ch, 'x');
        assert_eq!(buf.cell(3, 1).unwrap().style, style);

        // Out-of-bounds writes are dropped, not errors.
        buf.set_cell(-1, 0, 'y', style);
        buf.set_cell(10, 0, 'y', style);
        buf.set_cell(0, 2, 'y', style);
        assert!(buf.row_text(0).chars().all(|c| c == ' '));
    }

    #[test]
    fn test_draw_str_truncates() {
        let mut buf = CellBuffer::new(10, 1).unwrap();
        let written = draw_str(&mut buf, 6, 0, 4, "overflow", Style::default());
        assert_eq!(written, 4);
        assert_eq!(&buf.row_text(0)[6..10], "over");
    }

    #[test]
    fn test_draw_str_wide_chars() {
        let mut buf = CellBuffer::new(5, 1).unwrap();
        // Each ideograph is two cells wide; only two fit in five cells
        // together with the leading ascii cell.
        let written = draw_str(&mut buf, 0, 0, 5, "a你好", Style::default());
        assert_eq!(written, 5);
        assert_eq!(buf.cell(0, 0).unwrap().ch, 'a');
        assert_eq!(buf.cell(1, 0).unwrap().ch, '你');
        assert_eq!(buf.cell(3, 0).unwrap().ch, '好');
    }
}
