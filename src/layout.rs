//! The geometry engine.
//!
//! Layout is two passes over plain data. The measurement pass computes
//! per-column label/field/total width maxima and stacked heights; the
//! placement pass turns those into absolute rectangles for every item
//! and visible button, honoring alignment, wrapping and the container
//! bounds. Nothing here touches widget state: the form feeds in
//! [`ItemMetrics`] snapshots and applies the resulting [`Placement`]
//! afterwards, so identical inputs always produce identical output.

use log::debug;

use crate::types::{Align, Padding, Rect};

/// Field width given to flexible fields in horizontal layouts when no
/// other value is configured.
pub const DEFAULT_FIELD_WIDTH: i32 = 10;

// ============================================================================
// Inputs and outputs
// ============================================================================

/// Sizing snapshot of one form item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemMetrics {
    /// Label width hint.
    pub label_width: i32,
    /// Field width hint, zero meaning flexible.
    pub field_width: i32,
    /// The item's field alignment.
    pub align: Align,
    /// Extra cells reserved around the item.
    pub padding: Padding,
    /// The item's height in rows.
    pub height: i32,
}

/// Layout tunables. All values are stored as configured; nonsensical
/// values are not rejected and simply produce degenerate geometry.
#[derive(Clone, Debug)]
pub struct LayoutConfig {
    /// Alignment of the whole content block within the container.
    pub align: Align,
    /// Empty rows (vertical) or cells (horizontal) between items.
    pub item_padding: i32,
    /// Empty cells between columns, in addition to the one-cell
    /// separator.
    pub column_padding: i32,
    /// Empty rows between the last field row and the button row.
    pub buttons_padding_top: i32,
    /// Empty cells between buttons.
    pub buttons_indent: i32,
    /// Lay items out left-to-right with wrapping instead of
    /// top-to-bottom.
    pub horizontal: bool,
    /// Alignment of the button row (vertical layouts only).
    pub buttons_align: Align,
    /// Width given to flexible fields in horizontal layouts.
    pub default_field_width: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            align: Align::Left,
            item_padding: 1,
            column_padding: 1,
            buttons_padding_top: 2,
            buttons_indent: 4,
            horizontal: false,
            buttons_align: Align::Left,
            default_field_width: DEFAULT_FIELD_WIDTH,
        }
    }
}

/// Per-column width maxima produced by the measurement pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnWidths {
    /// Reserved label width per column. Only center-aligned fields
    /// contribute, and one extra cell is reserved.
    pub label: Vec<i32>,
    /// Widest field per column, regardless of alignment.
    pub field: Vec<i32>,
    /// Declared total width per column.
    pub total: Vec<i32>,
}

/// One placed item: its rectangle plus the resolved label/field split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemSlot {
    /// The item's absolute rectangle, before viewport scrolling.
    pub rect: Rect,
    /// Label width after the column split.
    pub label_width: i32,
    /// Field width after the column split.
    pub field_width: i32,
}

/// Placement pass output. A zero rect marks a button that did not fit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Placement {
    /// One slot per item, in storage order.
    pub items: Vec<ItemSlot>,
    /// One rect per visible button, in display order.
    pub buttons: Vec<Rect>,
}

// ============================================================================
// Measurement pass
// ============================================================================

/// The number of columns spanned by the given assignments. Always at
/// least one.
pub fn column_count(columns: &[usize]) -> usize {
    let mut max = 0;
    for &column in columns {
        if column > max {
            max = column;
        }
    }
    max + 1
}

/// Compute the per-column width maxima.
///
/// Center-aligned fields take priority: a center-aligned field rewrites
/// its column's total to the center-based sum, and a later non-center
/// field only wins the total back by exceeding it.
///
/// `columns` must hold one entry per item.
pub fn measure_columns(items: &[ItemMetrics], columns: &[usize]) -> ColumnWidths {
    let count = column_count(columns);
    let mut label = vec![0; count];
    let mut field = vec![0; count];

    for (index, item) in items.iter().enumerate() {
        let column = columns[index];
        let label_width = item.label_width + item.padding.left;
        let field_width = item.field_width + item.padding.right;

        if label_width > 0 && label_width > label[column] - 1 && item.align == Align::Center {
            label[column] = label_width + 1;
        }
        if field_width > field[column] {
            field[column] = field_width;
        }
    }

    let mut total = vec![0; count];
    for (index, item) in items.iter().enumerate() {
        let column = columns[index];
        let label_width = item.label_width + item.padding.left;
        let field_width = item.field_width + item.padding.right;

        if label_width + field_width > total[column] {
            total[column] = label_width + field_width;
        }
        if item.align == Align::Center {
            total[column] = label[column] + field[column];
        }
    }

    ColumnWidths { label, field, total }
}

/// The stacked content height: per column, the summed item heights plus
/// inter-item padding (none after the last item); overall the maximum
/// across columns. Zero when there are no items.
pub fn stacked_height(items: &[ItemMetrics], columns: &[usize], item_padding: i32) -> i32 {
    if items.is_empty() {
        return 0;
    }
    let count = column_count(columns);
    let mut heights = vec![0; count];
    for (index, item) in items.iter().enumerate() {
        heights[columns[index]] += item.height + item_padding;
    }
    let mut height = 0;
    for &column_height in &heights {
        if height < column_height {
            height = column_height;
        }
    }
    height - item_padding
}

// ============================================================================
// Placement pass
// ============================================================================

/// Place all items and buttons within `bounds`.
///
/// `button_widths` holds the final width of each visible button in
/// display order (label width plus the fixed decoration). In vertical
/// layouts, a button that no longer fits stops placement and leaves the
/// remaining rects zero; horizontal layouts wrap instead.
pub fn place(
    items: &[ItemMetrics],
    columns: &[usize],
    button_widths: &[i32],
    bounds: Rect,
    config: &LayoutConfig,
) -> Placement {
    let count = column_count(columns);
    let widths = measure_columns(items, columns);

    debug!(
        "placing {} items in {} columns and {} buttons within {:?}",
        items.len(),
        count,
        button_widths.len(),
        bounds
    );

    let top_limit = bounds.y;
    let right_limit = bounds.x + bounds.width;
    let start_x = bounds.x;

    // Content width: column totals plus inter-column separators.
    let mut content_width = 0;
    let mut running = 0;
    for column in 0..count {
        running += widths.total[column];
        content_width = running;
        running += 1 + config.column_padding;
    }

    let mut x = bounds.x;
    match config.align {
        Align::Center => x += (bounds.width - content_width) / 2,
        Align::Right => x += bounds.width - content_width,
        Align::Left => {}
    }

    let mut col_x = Vec::with_capacity(count);
    let mut col_y = Vec::with_capacity(count);
    let mut offset = 0;
    for column in 0..count {
        col_x.push(x + offset);
        col_y.push(top_limit);
        offset += widths.total[column] + 1 + config.column_padding;
    }

    // Running cursor for horizontal layouts.
    let mut cursor_x = x;
    let mut cursor_y = top_limit;

    let mut slots = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let column = columns[index];
        let mut label_width = item.label_width;
        let mut field_width = item.field_width;

        let slot = if config.horizontal {
            if field_width == 0 {
                field_width = config.default_field_width;
            }
            let mut item_width = label_width + field_width;

            // Wrap when the label would cross the right boundary.
            if cursor_x + label_width + 1 >= right_limit {
                cursor_x = start_x;
                cursor_y += 2;
            }
            if cursor_x + item_width >= right_limit {
                item_width = right_limit - cursor_x;
            }

            let rect = Rect::new(cursor_x, cursor_y, item_width, item.height);
            cursor_x += item_width + config.item_padding;
            ItemSlot {
                rect,
                label_width,
                field_width,
            }
        } else {
            // The label/field split is recomputed from the column maxima
            // according to the item's own alignment.
            match item.align {
                Align::Center => {
                    label_width = widths.label[column] - item.padding.left;
                    field_width =
                        widths.total[column] - item.padding.left - label_width - item.padding.right;
                }
                Align::Right => {
                    label_width =
                        widths.total[column] - item.padding.left - field_width - item.padding.right;
                }
                Align::Left => {
                    field_width =
                        widths.total[column] - item.padding.left - label_width - item.padding.right;
                }
            }

            let item_x = col_x[column];
            let item_y = col_y[column];
            let mut item_width = widths.total[column];
            if item_x + item_width >= right_limit {
                item_width = right_limit - item_x;
            }
            col_y[column] = item_y + item.height + config.item_padding;

            ItemSlot {
                rect: Rect::new(item_x, item_y, item_width, item.height),
                label_width,
                field_width,
            }
        };
        slots.push(slot);
    }

    // Buttons start after the tallest column.
    let mut y = top_limit + stacked_height(items, columns, config.item_padding);

    let mut buttons_width = 0;
    for &width in button_widths {
        buttons_width += width + config.buttons_indent;
    }
    buttons_width -= 1;

    if !config.horizontal && x + buttons_width < right_limit {
        match config.buttons_align {
            Align::Right => x = right_limit - buttons_width,
            Align::Center => x = (bounds.width - buttons_width) / 2 + start_x,
            Align::Left => {}
        }
    }

    if !button_widths.is_empty() {
        y += config.buttons_padding_top;
    }

    let mut buttons = vec![Rect::ZERO; button_widths.len()];
    for (index, &width) in button_widths.iter().enumerate() {
        let mut space = right_limit - x;
        let mut button_width = width;
        if config.horizontal {
            if space < button_width - 4 {
                x = start_x;
                y += 2;
                space = bounds.width;
            }
        } else if space < 1 {
            // No space for this button anymore.
            break;
        }
        if button_width > space {
            button_width = space;
        }
        buttons[index] = Rect::new(x, y, button_width, 1);
        x += button_width + config.buttons_indent;
    }

    Placement {
        items: slots,
        buttons,
    }
}
