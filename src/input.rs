//! Single-line text entry.
//!
//! [`InputField`] supports cursor editing, an optional mask character for
//! password entry, and an optional acceptance predicate consulted before
//! every insertion. The free functions [`integers`], [`max_length`] and
//! (with the `regex` feature) [`pattern`] build common predicates.

use unicode_width::UnicodeWidthStr;

use crate::item::{FinishedFn, FormItem, ItemAttributes, ItemCore, Widget, WidgetId};
use crate::key::Key;
use crate::style::{Attr, Style};
use crate::surface::{draw_str, fill, Surface};
use crate::types::{Align, Padding, Rect};

/// Predicate deciding whether an edited text is acceptable. Receives the
/// candidate text and the character that was just typed.
pub type AcceptFn = Box<dyn Fn(&str, char) -> bool>;

/// Callback invoked whenever the field's text changes.
pub type ChangedFn = Box<dyn FnMut(&str)>;

/// A single-line text entry field.
pub struct InputField {
    core: ItemCore,
    text: String,
    /// Cursor position in characters.
    cursor: usize,
    /// First visible character, adjusted while drawing so the cursor
    /// stays inside the field.
    offset: usize,
    mask: Option<char>,
    accept: Option<AcceptFn>,
    changed: Option<ChangedFn>,
}

impl InputField {
    /// Create a new input field. A `field_width` of zero lets the field
    /// expand to the available space.
    pub fn new(label: &str, text: &str, field_width: i32) -> Self {
        let mut core = ItemCore::new(label);
        core.field_width = field_width;
        Self {
            core,
            text: text.to_string(),
            cursor: text.chars().count(),
            offset: 0,
            mask: None,
            accept: None,
            changed: None,
        }
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, moving the cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.chars().count();
        self.offset = 0;
        self.fire_changed();
    }

    /// Set the mask character shown instead of the real text, or `None`
    /// to show the text as typed.
    pub fn set_mask(&mut self, mask: Option<char>) {
        self.mask = mask;
    }

    /// Install or clear the acceptance predicate.
    pub fn set_accept(&mut self, accept: Option<AcceptFn>) {
        self.accept = accept;
    }

    /// Install or clear the changed callback.
    pub fn set_changed(&mut self, changed: Option<ChangedFn>) {
        self.changed = changed;
    }

    /// Replace the label text.
    pub fn set_label(&mut self, label: &str) {
        self.core.label = label.to_string();
    }

    /// Set an explicit label width, or zero to derive it from the label.
    pub fn set_label_width(&mut self, width: i32) {
        self.core.label_width = width;
    }

    /// Set the field width hint. Zero means flexible.
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

    /// Enable or disable the field. Disabled fields decline focus.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.core.disabled = disabled;
    }

    /// The cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_at(&self, index: usize) -> usize {
        self.text
            .char_indices()
            .nth(index)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }

    fn fire_changed(&mut self) {
        if let Some(changed) = &mut self.changed {
            changed(&self.text);
        }
    }

    fn insert_char(&mut self, ch: char) {
        let mut candidate = self.text.clone();
        candidate.insert(self.byte_at(self.cursor), ch);
        if let Some(accept) = &self.accept {
            if !accept(&candidate, ch) {
                return;
            }
        }
        self.text = candidate;
        self.cursor += 1;
        self.fire_changed();
    }

    fn delete_before_cursor(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let byte = self.byte_at(self.cursor - 1);
        self.text.remove(byte);
        self.cursor -= 1;
        self.fire_changed();
    }

    fn delete_at_cursor(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let byte = self.byte_at(self.cursor);
        self.text.remove(byte);
        self.fire_changed();
    }
}

impl Widget for InputField {
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
        let mut field_width = if attrs.field_width > 0 {
            attrs.field_width
        } else {
            self.core.field_width
        };
        if field_width <= 0 {
            field_width = rect.width - self.core.padding.left - label_width - self.core.padding.right;
        }
        if fx + field_width > rect.right() {
            field_width = rect.right() - fx;
        }
        if field_width <= 0 {
            return;
        }

        let field_style = Style::new(attrs.field_text_color, attrs.field_background_color);
        fill(surface, fx, y, field_width, ' ', field_style);

        // Keep the cursor inside the visible window.
        let window = field_width as usize;
        if self.cursor < self.offset {
            self.offset = self.cursor;
        }
        if self.cursor >= self.offset + window {
            self.offset = self.cursor + 1 - window;
        }

        let visible: String = self.text.chars().skip(self.offset).take(window).collect();
        let shown: String = match self.mask {
            Some(mask) => visible.chars().map(|_| mask).collect(),
            None => visible,
        };
        draw_str(surface, fx, y, field_width, &shown, field_style);

        if self.core.focused {
            let before: String = shown.chars().take(self.cursor - self.offset).collect();
            let cx = fx + UnicodeWidthStr::width(before.as_str()) as i32;
            if cx < fx + field_width {
                let under = shown.chars().nth(self.cursor - self.offset).unwrap_or(' ');
                surface.set_cell(cx, y, under, field_style.with_attr(Attr::REVERSE));
            }
        }
    }
}

impl FormItem for InputField {
    fn label(&self) -> &str {
        &self.core.label
    }

    fn label_width(&self) -> i32 {
        self.core.label_width()
    }

    fn field_width(&self) -> i32 {
        self.core.field_width
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
    }

    fn is_disabled(&self) -> bool {
        self.core.disabled
    }

    fn handle_key(&mut self, key: Key) {
        match key {
            Key::Char(ch) => self.insert_char(ch),
            Key::Backspace => self.delete_before_cursor(),
            Key::Delete => self.delete_at_cursor(),
            Key::Left => self.cursor = self.cursor.saturating_sub(1),
            Key::Right => self.cursor = (self.cursor + 1).min(self.char_count()),
            Key::Home => self.cursor = 0,
            Key::End => self.cursor = self.char_count(),
            Key::Enter | Key::Escape | Key::Tab | Key::BackTab | Key::Up | Key::Down => {
                self.core.finish(key)
            }
        }
    }
}

// ============================================================================
// Acceptance helpers
// ============================================================================

/// Accept only texts that parse as (possibly signed, possibly empty)
/// integers.
pub fn integers() -> AcceptFn {
    Box::new(|text, _| {
        text.is_empty() || text == "-" || text == "+" || text.parse::<i64>().is_ok()
    })
}

/// Accept texts up to `limit` characters long.
pub fn max_length(limit: usize) -> AcceptFn {
    Box::new(move |text, _| text.chars().count() <= limit)
}

/// Accept texts matching a regular expression.
#[cfg(feature = "regex")]
pub fn pattern(re: regex::Regex) -> AcceptFn {
    Box::new(move |text, _| re.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::CellBuffer;

    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_editing() {
        let mut field = InputField::new("Name", "ab", 10);
        field.handle_key(Key::Char('c'));
        assert_eq!(field.text(), "abc");

        field.handle_key(Key::Home);
        field.handle_key(Key::Char('x'));
        assert_eq!(field.text(), "xabc");

        field.handle_key(Key::Delete);
        assert_eq!(field.text(), "xbc");

        field.handle_key(Key::End);
        field.handle_key(Key::Backspace);
        assert_eq!(field.text(), "xb");
    }

    #[test]
    fn test_acceptance_blocks_insert() {
        let mut field = InputField::new("Age", "", 5);
        field.set_accept(Some(integers()));
        field.handle_key(Key::Char('4'));
        field.handle_key(Key::Char('x'));
        field.handle_key(Key::Char('2'));
        assert_eq!(field.text(), "42");

        let mut field = InputField::new("Code", "", 5);
        field.set_accept(Some(max_length(2)));
        for ch in "abcdef".chars() {
            field.handle_key(Key::Char(ch));
        }
        assert_eq!(field.text(), "ab");
    }

    #[test]
    fn test_changed_callback() {
        let mut field = InputField::new("Name", "", 10);
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        field.set_changed(Some(Box::new(move |text| sink.borrow_mut().push(text.to_string()))));

        field.handle_key(Key::Char('h'));
        field.handle_key(Key::Char('i'));
        field.handle_key(Key::Backspace);
        assert_eq!(*log.borrow(), vec!["h", "hi", "h"]);
    }

    #[test]
    fn test_finishing_keys_fire_handler() {
        use std::cell::Cell;

        let mut field = InputField::new("Name", "", 10);
        let seen = Rc::new(Cell::new(None));
        let slot = Rc::clone(&seen);
        field.set_finished(Some(Box::new(move |key| slot.set(Some(key)))));

        field.handle_key(Key::Char('a'));
        assert_eq!(seen.get(), None);
        field.handle_key(Key::Tab);
        assert_eq!(seen.get(), Some(Key::Tab));
        field.handle_key(Key::Up);
        assert_eq!(seen.get(), Some(Key::Up));
    }

    #[test]
    fn test_draw_masked_field() {
        let mut field = InputField::new("Pw: ", "secret", 8);
        field.set_mask(Some('*'));
        field.set_layout_attributes(ItemAttributes {
            label_width: 4,
            field_width: 8,
            ..ItemAttributes::default()
        });
        field.set_rect(Rect::new(0, 0, 12, 1));

        let mut buf = CellBuffer::new(12, 1).unwrap();
        field.draw(&mut buf);
        assert_eq!(buf.row_text(0), "Pw: ******  ");
    }

    #[test]
    fn test_draw_scrolls_to_cursor() {
        let mut field = InputField::new("", "abcdefgh", 4);
        field.set_layout_attributes(ItemAttributes {
            label_width: 0,
            field_width: 4,
            ..ItemAttributes::default()
        });
        field.set_rect(Rect::new(0, 0, 4, 1));

        // Cursor sits past the end; the window slides so it is visible.
        let mut buf = CellBuffer::new(4, 1).unwrap();
        field.draw(&mut buf);
        assert_eq!(buf.row_text(0), "fgh ");
    }
}
