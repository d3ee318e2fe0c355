//! Drop-down selection list.
//!
//! Closed, the widget occupies a single row showing the current option.
//! Opened (Enter or Space), it paints its option list below its own
//! rectangle, overlapping whatever is there. The form draws the focused
//! item last for exactly this reason.

use unicode_width::UnicodeWidthStr;

use crate::item::{FinishedFn, FormItem, ItemAttributes, ItemCore, Widget, WidgetId};
use crate::key::Key;
use crate::style::{Attr, Style};
use crate::surface::{draw_str, fill, Surface};
use crate::types::{Align, Padding, Rect};

/// Callback invoked when an option is selected, with its position and
/// text.
pub type SelectedFn = Box<dyn FnMut(usize, &str)>;

/// A drop-down list of options.
pub struct DropDown {
    core: ItemCore,
    options: Vec<String>,
    current: Option<usize>,
    open: bool,
    /// Highlighted row while the list is open.
    list_index: usize,
    selected: Option<SelectedFn>,
}

impl DropDown {
    /// Create a new drop-down. `initial` of `None` starts with no option
    /// selected.
    pub fn new(label: &str, options: &[&str], initial: Option<usize>) -> Self {
        let options: Vec<String> = options.iter().map(|s| s.to_string()).collect();
        let current = initial.filter(|&i| i < options.len());
        Self {
            core: ItemCore::new(label),
            options,
            current,
            open: false,
            list_index: 0,
            selected: None,
        }
    }

    /// The currently selected option index.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// The currently selected option text.
    pub fn current_text(&self) -> Option<&str> {
        self.current.map(|i| self.options[i].as_str())
    }

    /// Whether the option list is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Replace the options. The current selection is dropped when it no
    /// longer exists.
    pub fn set_options(&mut self, options: &[&str]) {
        self.options = options.iter().map(|s| s.to_string()).collect();
        self.current = self.current.filter(|&i| i < self.options.len());
        self.open = false;
    }

    /// Select an option programmatically without running the callback.
    pub fn set_current(&mut self, index: Option<usize>) {
        self.current = index.filter(|&i| i < self.options.len());
    }

    /// Install or clear the selection callback.
    pub fn set_selected(&mut self, selected: Option<SelectedFn>) {
        self.selected = selected;
    }

    /// Replace the label text.
    pub fn set_label(&mut self, label: &str) {
        self.core.label = label.to_string();
    }

    /// Set an explicit label width, or zero to derive it from the label.
    pub fn set_label_width(&mut self, width: i32) {
        self.core.label_width = width;
    }

    /// Set the field width hint. Zero sizes the field to the longest
    /// option.
    pub fn set_field_width(&mut self, width: i32) {
        self.core.field_width = width;
    }

    /// Set the field alignment within its column.
    pub fn set_field_align(&mut self, align: Align) {
        self.core.field_align = align;
    }

    /// Reserve extra cells around the item.
    pub fn set_border_padding(&mut self, padding: Padding) {
        self.core.padding = padding;
    }

    /// Enable or disable the drop-down. Disabled items decline focus.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.core.disabled = disabled;
    }

    fn longest_option_width(&self) -> i32 {
        self.options
            .iter()
            .map(|option| UnicodeWidthStr::width(option.as_str()) as i32)
            .max()
            .unwrap_or(0)
    }

    fn commit(&mut self) {
        self.current = Some(self.list_index);
        self.open = false;
        if let Some(selected) = &mut self.selected {
            selected(self.list_index, &self.options[self.list_index]);
        }
    }

    fn effective_field_width(&self) -> i32 {
        let attrs = self.core.layout;
        if attrs.field_width > 0 {
            attrs.field_width
        } else {
            self.field_width()
        }
    }
}

impl Widget for DropDown {
    fn rect(&self) -> Rect {
        self.core.rect
    }

    fn set_rect(&mut self, rect: Rect) {
        self.core.rect = rect;
    }

    fn draw(&mut self, surface: &mut dyn Surface) {
        let rect = self.core.rect;
        if rect.width <= 0 || rect.height <= 0 {
            return;
        }
        let attrs = self.core.layout;
        let x = rect.x + self.core.padding.left;
        let y = rect.y;

        let label_width = self.core.draw_label_width();
        let label_style = Style::new(attrs.label_color, attrs.background_color);
        draw_str(surface, x, y, label_width, &self.core.label, label_style);

        let fx = x + label_width;
        let mut field_width = self.effective_field_width();
        if fx + field_width > rect.right() {
            field_width = rect.right() - fx;
        }
        if field_width <= 0 {
            return;
        }

        let mut field_style = Style::new(attrs.field_text_color, attrs.field_background_color);
        if self.core.focused && !self.open {
            field_style = field_style.with_attr(Attr::REVERSE);
        }
        fill(surface, fx, y, field_width, ' ', field_style);
        if let Some(text) = self.current_text() {
            draw_str(surface, fx, y, field_width, text, field_style);
        }

        // The open list paints below the rect, overlapping neighbors.
        if self.open {
            let list_style = Style::new(attrs.field_text_color, attrs.field_background_color);
            for (i, option) in self.options.iter().enumerate() {
                let row_style = if i == self.list_index {
                    list_style.with_attr(Attr::REVERSE)
                } else {
                    list_style
                };
                let row = y + 1 + i as i32;
                fill(surface, fx, row, field_width, ' ', row_style);
                draw_str(surface, fx, row, field_width, option, row_style);
            }
        }
    }
}

impl FormItem for DropDown {
    fn label(&self) -> &str {
        &self.core.label
    }

    fn label_width(&self) -> i32 {
        self.core.label_width()
    }

    fn field_width(&self) -> i32 {
        if self.core.field_width > 0 {
            self.core.field_width
        } else {
            self.longest_option_width()
        }
    }

    fn field_align(&self) -> Align {
        self.core.field_align
    }

    fn border_padding(&self) -> Padding {
        self.core.padding
    }

    fn set_layout_attributes(&mut self, attrs: ItemAttributes) {
        self.core.layout = attrs;
    }

    fn set_finished(&mut self, handler: Option<FinishedFn>) {
        self.core.finished = handler;
    }

    fn id(&self) -> WidgetId {
        self.core.id
    }

    fn has_focus(&self) -> bool {
        self.core.focused
    }

    fn focus(&mut self) {
        self.core.focus();
    }

    fn blur(&mut self) {
        self.core.blur();
        self.open = false;
    }

    fn is_disabled(&self) -> bool {
        self.core.disabled
    }

    fn handle_key(&mut self, key: Key) {
        if self.open {
            match key {
                Key::Up => self.list_index = self.list_index.saturating_sub(1),
                Key::Down => {
                    self.list_index = (self.list_index + 1).min(self.options.len() - 1)
                }
                Key::Enter => self.commit(),
                Key::Escape => self.open = false,
                _ => {}
            }
        } else {
            match key {
                Key::Enter | Key::Char(' ') => {
                    if !self.options.is_empty() {
                        self.open = true;
                        self.list_index = self.current.unwrap_or(0);
                    }
                }
                Key::Escape | Key::Tab | Key::BackTab | Key::Up | Key::Down => {
                    self.core.finish(key)
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::CellBuffer;

    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_open_move_select() {
        let mut dd = DropDown::new("Color", &["red", "green", "blue"], None);
        let picked = Rc::new(Cell::new(None));
        let sink = Rc::clone(&picked);
        dd.set_selected(Some(Box::new(move |index, _| sink.set(Some(index)))));

        dd.handle_key(Key::Enter);
        assert!(dd.is_open());
        dd.handle_key(Key::Down);
        dd.handle_key(Key::Down);
        dd.handle_key(Key::Enter);
        assert!(!dd.is_open());
        assert_eq!(dd.current(), Some(2));
        assert_eq!(dd.current_text(), Some("blue"));
        assert_eq!(picked.get(), Some(2));
    }

    #[test]
    fn test_escape_closes_without_selecting() {
        let mut dd = DropDown::new("Color", &["red", "green"], Some(0));
        dd.handle_key(Key::Enter);
        dd.handle_key(Key::Down);
        dd.handle_key(Key::Escape);
        assert!(!dd.is_open());
        assert_eq!(dd.current(), Some(0));
    }

    #[test]
    fn test_closed_terminators_finish() {
        let mut dd = DropDown::new("Color", &["red"], None);
        let seen = Rc::new(Cell::new(None));
        let slot = Rc::clone(&seen);
        dd.set_finished(Some(Box::new(move |key| slot.set(Some(key)))));

        dd.handle_key(Key::Tab);
        assert_eq!(seen.get(), Some(Key::Tab));
        // Enter opens instead of finishing.
        seen.set(None);
        dd.handle_key(Key::Enter);
        assert_eq!(seen.get(), None);
        assert!(dd.is_open());
    }

    #[test]
    fn test_open_list_draws_below_rect() {
        let mut dd = DropDown::new("C:", &["red", "green"], Some(0));
        dd.set_layout_attributes(ItemAttributes {
            label_width: 2,
            field_width: 5,
            ..ItemAttributes::default()
        });
        dd.set_rect(Rect::new(0, 0, 7, 1));
        dd.focus();
        dd.handle_key(Key::Enter);

        let mut buf = CellBuffer::new(7, 3).unwrap();
        dd.draw(&mut buf);
        assert_eq!(buf.row_text(0), "C:red  ");
        assert_eq!(buf.row_text(1), "  red  ");
        assert_eq!(buf.row_text(2), "  green");
    }
}
