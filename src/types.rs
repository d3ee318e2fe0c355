//! Core geometry types for termform.
//!
//! This module defines the shared vocabulary used by the layout engine,
//! the widgets, and the drawing surface: rectangles, border padding, and
//! alignment.

/// A rectangle in screen cells.
///
/// Coordinates may go negative while the form scrolls elements above the
/// visible band; width and height are kept as `i32` so degenerate layouts
/// (zero-width containers, over-clamped fields) stay representable without
/// wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Leftmost column.
    pub x: i32,
    /// Topmost row.
    pub y: i32,
    /// Width in cells.
    pub width: i32,
    /// Height in rows.
    pub height: i32,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Rect = Rect {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Create a rectangle from position and size.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column.
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the bottom row.
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Whether the rectangle covers no cells.
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Border padding around a widget's content, in cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Padding {
    /// Rows above the content.
    pub top: i32,
    /// Rows below the content.
    pub bottom: i32,
    /// Columns left of the content.
    pub left: i32,
    /// Columns right of the content.
    pub right: i32,
}

impl Padding {
    /// Create padding from the four sides.
    pub const fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }
}

/// Horizontal alignment of content within an available span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    /// Align to the left edge (the default).
    #[default]
    Left,
    /// Center within the span.
    Center,
    /// Align to the right edge.
    Right,
}
