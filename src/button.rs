//! Action buttons.
//!
//! Buttons sit below (or after) all field columns and trigger a callback
//! when selected. Hidden buttons stay in form storage so the indices of
//! the remaining buttons do not shift, but they are excluded from layout
//! and navigation.

use unicode_width::UnicodeWidthStr;

use crate::item::{next_widget_id, Widget, WidgetId};
use crate::key::Key;
use crate::style::{Color, Style, Theme};
use crate::surface::{draw_str, fill, Surface};
use crate::types::Rect;

/// Callback invoked when a button is selected.
pub type SelectedFn = Box<dyn FnMut()>;

/// Callback invoked with the directional key that moves focus off a
/// button. The form installs its own handler here whenever the button
/// receives focus.
pub type BlurFn = Box<dyn FnMut(Key)>;

/// A form button.
pub struct Button {
    id: WidgetId,
    rect: Rect,
    label: String,
    hidden: bool,
    focused: bool,
    /// Label color when idle.
    label_color: Color,
    /// Label color while the button holds focus.
    label_color_activated: Color,
    /// Background color when idle.
    background_color: Color,
    /// Background color while the button holds focus.
    background_color_activated: Color,
    selected: Option<SelectedFn>,
    blur_handler: Option<BlurFn>,
}

impl Button {
    /// Create a new button with the given label.
    pub fn new(label: &str) -> Self {
        let theme = Theme::default();
        Self {
            id: next_widget_id(),
            rect: Rect::new(0, 0, 0, 1),
            label: label.to_string(),
            hidden: false,
            focused: false,
            label_color: theme.button_text,
            label_color_activated: theme.button_background,
            background_color: theme.button_background,
            background_color_activated: theme.button_text,
            selected: None,
            blur_handler: None,
        }
    }

    /// The button's label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the label text.
    pub fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    /// The display width of the label in cells.
    pub fn label_width(&self) -> i32 {
        UnicodeWidthStr::width(self.label.as_str()) as i32
    }

    /// Whether the button is excluded from layout and navigation.
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    /// Hide or show the button.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// The button's stable identity.
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Whether the button currently holds focus.
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Give the button focus.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Take focus away from the button.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Install or clear the selection callback.
    pub fn set_selected(&mut self, handler: Option<SelectedFn>) {
        self.selected = handler;
    }

    /// Install or clear the blur handler. The form overwrites this
    /// whenever the button receives focus.
    pub fn set_blur_handler(&mut self, handler: Option<BlurFn>) {
        self.blur_handler = handler;
    }

    /// Set the idle label color.
    pub fn set_label_color(&mut self, color: Color) {
        self.label_color = color;
    }

    /// Set the label color used while focused.
    pub fn set_label_color_activated(&mut self, color: Color) {
        self.label_color_activated = color;
    }

    /// Set the idle background color.
    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
    }

    /// Set the background color used while focused.
    pub fn set_background_color_activated(&mut self, color: Color) {
        self.background_color_activated = color;
    }

    /// Deliver one key to the button. Enter and Space select; directional
    /// keys and Escape are forwarded to the blur handler.
    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Enter | Key::Char(' ') => {
                if let Some(handler) = &mut self.selected {
                    handler();
                }
            }
            Key::Tab
            | Key::BackTab
            | Key::Escape
            | Key::Up
            | Key::Down
            | Key::Left
            | Key::Right => {
                if let Some(handler) = &mut self.blur_handler {
                    handler(key);
                }
            }
            _ => {}
        }
    }
}

impl Widget for Button {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn draw(&mut self, surface: &mut dyn Surface) {
        if self.rect.width <= 0 || self.rect.height <= 0 {
            return;
        }
        let (fg, bg) = if self.focused {
            (self.label_color_activated, self.background_color_activated)
        } else {
            (self.label_color, self.background_color)
        };
        let style = Style::new(fg, bg);
        for row in self.rect.y..self.rect.bottom() {
            fill(surface, self.rect.x, row, self.rect.width, ' ', style);
        }

        // Center the label.
        let label_width = self.label_width().min(self.rect.width);
        let lx = self.rect.x + (self.rect.width - label_width) / 2;
        let ly = self.rect.y + (self.rect.height - 1) / 2;
        draw_str(surface, lx, ly, self.rect.width, &self.label, style);
    }
}
