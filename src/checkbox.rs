//! Checkbox widget.

use crate::item::{FinishedFn, FormItem, ItemAttributes, ItemCore, Widget, WidgetId};
use crate::key::Key;
use crate::style::{Attr, Style};
use crate::surface::{draw_str, Surface};
use crate::types::{Align, Padding, Rect};

/// Callback invoked when the checked state changes.
pub type CheckedFn = Box<dyn FnMut(bool)>;

/// A toggleable checkbox. Space flips the state; Enter and the focus
/// keys finish the item.
pub struct Checkbox {
    core: ItemCore,
    checked: bool,
    changed: Option<CheckedFn>,
}

impl Checkbox {
    /// Create a new checkbox.
    pub fn new(label: &str, checked: bool) -> Self {
        Self {
            core: ItemCore::new(label),
            checked,
            changed: None,
        }
    }

    /// The current checked state.
    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Set the checked state without running the changed callback.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Install or clear the changed callback.
    pub fn set_changed(&mut self, changed: Option<CheckedFn>) {
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

    /// Set the field alignment within its column.
    pub fn set_field_align(&mut self, align: Align) {
        self.core.field_align = align;
    }

    /// Reserve extra cells around the item.
    pub fn set_border_padding(&mut self, padding: Padding) {
        self.core.padding = padding;
    }

    /// Enable or disable the checkbox. Disabled items decline focus.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.core.disabled = disabled;
    }

    fn toggle(&mut self) {
        self.checked = !self.checked;
        if let Some(changed) = &mut self.changed {
            changed(self.checked);
        }
    }
}

impl Widget for Checkbox {
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
        let mut field_style = Style::new(attrs.field_text_color, attrs.field_background_color);
        if self.core.focused {
            field_style = field_style.with_attr(Attr::REVERSE);
        }
        let marker = if self.checked { "[X]" } else { "[ ]" };
        draw_str(surface, fx, y, rect.right() - fx, marker, field_style);
    }
}

impl FormItem for Checkbox {
    fn label(&self) -> &str {
        &self.core.label
    }

    fn label_width(&self) -> i32 {
        self.core.label_width()
    }

    fn field_width(&self) -> i32 {
        // The rendered [X] box.
        3
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
            Key::Char(' ') => self.toggle(),
            Key::Enter | Key::Escape | Key::Tab | Key::BackTab | Key::Up | Key::Down => {
                self.core.finish(key)
            }
            _ => {}
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
    fn test_space_toggles() {
        let mut checkbox = Checkbox::new("On", false);
        let state = Rc::new(Cell::new(false));
        let sink = Rc::clone(&state);
        checkbox.set_changed(Some(Box::new(move |checked| sink.set(checked))));

        checkbox.handle_key(Key::Char(' '));
        assert!(checkbox.checked());
        assert!(state.get());

        checkbox.handle_key(Key::Char(' '));
        assert!(!checkbox.checked());

        // Enter finishes instead of toggling.
        checkbox.handle_key(Key::Enter);
        assert!(!checkbox.checked());
    }

    #[test]
    fn test_draw_marker() {
        let mut checkbox = Checkbox::new("On", true);
        checkbox.set_layout_attributes(ItemAttributes {
            label_width: 3,
            field_width: 3,
            ..ItemAttributes::default()
        });
        checkbox.set_rect(Rect::new(0, 0, 6, 1));
        let mut buf = CellBuffer::new(6, 1).unwrap();
        checkbox.draw(&mut buf);
        assert_eq!(buf.row_text(0), "On [X]");
    }
}
