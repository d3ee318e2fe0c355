//! Radio button group.
//!
//! The group occupies one row per option, which is what exercises the
//! stacked-height arithmetic of multi-row layouts. Up and Down move the
//! selection inside the group and are consumed, so they never leave the
//! widget; Tab, Shift+Tab, Enter and Escape finish it.

use unicode_width::UnicodeWidthStr;

use crate::item::{FinishedFn, FormItem, ItemAttributes, ItemCore, Widget, WidgetId};
use crate::key::Key;
use crate::style::{Attr, Style};
use crate::surface::{draw_str, Surface};
use crate::types::{Align, Padding, Rect};

/// Callback invoked when the selection moves, with the option position
/// and text.
pub type ChangedFn = Box<dyn FnMut(usize, &str)>;

/// A group of mutually exclusive options.
pub struct RadioButtons {
    core: ItemCore,
    options: Vec<String>,
    current: Option<usize>,
    changed: Option<ChangedFn>,
}

impl RadioButtons {
    /// Create a new radio group. `initial` of `None` starts with no
    /// option selected.
    pub fn new(label: &str, options: &[&str], initial: Option<usize>) -> Self {
        let options: Vec<String> = options.iter().map(|s| s.to_string()).collect();
        let current = initial.filter(|&i| i < options.len());
        let mut core = ItemCore::new(label);
        core.rect.height = options.len().max(1) as i32;
        Self {
            core,
            options,
            current,
            changed: None,
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

    /// Replace the options. The selection is dropped when it no longer
    /// exists, and the group's height follows the option count.
    pub fn set_options(&mut self, options: &[&str]) {
        self.options = options.iter().map(|s| s.to_string()).collect();
        self.current = self.current.filter(|&i| i < self.options.len());
        self.core.rect.height = self.options.len().max(1) as i32;
    }

    /// Select an option programmatically without running the callback.
    pub fn set_current(&mut self, index: Option<usize>) {
        self.current = index.filter(|&i| i < self.options.len());
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

    /// Set the field alignment within its column.
    pub fn set_field_align(&mut self, align: Align) {
        self.core.field_align = align;
    }

    /// Reserve extra cells around the item.
    pub fn set_border_padding(&mut self, padding: Padding) {
        self.core.padding = padding;
    }

    /// Enable or disable the group. Disabled items decline focus.
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

    fn move_selection(&mut self, delta: i32) {
        if self.options.is_empty() {
            return;
        }
        let next = match self.current {
            None => 0,
            Some(i) if delta < 0 => i.saturating_sub(1),
            Some(i) => (i + 1).min(self.options.len() - 1),
        };
        if self.current != Some(next) {
            self.current = Some(next);
            if let Some(changed) = &mut self.changed {
                changed(next, &self.options[next]);
            }
        }
    }
}

impl Widget for RadioButtons {
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

        let label_width = self.core.draw_label_width();
        let label_style = Style::new(attrs.label_color, attrs.background_color);
        draw_str(surface, x, rect.y, label_width, &self.core.label, label_style);

        let fx = x + label_width;
        let field_style = Style::new(attrs.field_text_color, attrs.field_background_color);
        for (i, option) in self.options.iter().enumerate() {
            let row = rect.y + i as i32;
            if row >= rect.bottom() {
                break;
            }
            let style = if self.core.focused && self.current == Some(i) {
                field_style.with_attr(Attr::REVERSE)
            } else {
                field_style
            };
            let marker = if self.current == Some(i) { "(x) " } else { "( ) " };
            let line = format!("{}{}", marker, option);
            draw_str(surface, fx, row, rect.right() - fx, &line, style);
        }
    }
}

impl FormItem for RadioButtons {
    fn label(&self) -> &str {
        &self.core.label
    }

    fn label_width(&self) -> i32 {
        self.core.label_width()
    }

    fn field_width(&self) -> i32 {
        // Marker plus the longest option.
        4 + self.longest_option_width()
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
            Key::Up => self.move_selection(-1),
            Key::Down => self.move_selection(1),
            Key::Enter | Key::Escape | Key::Tab | Key::BackTab => self.core.finish(key),
            _ => {}
        }
    }
}
