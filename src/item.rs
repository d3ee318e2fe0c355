//! Form item capability surface.
//!
//! A form never branches on what kind of control it is holding. Everything
//! it needs from a data-entry element is expressed by the [`FormItem`]
//! trait: sizing hints for the layout engine, focus handoff, key delivery,
//! and the per-pass [`ItemAttributes`] push. Concrete controls live in
//! their own modules ([`crate::input`], [`crate::checkbox`],
//! [`crate::dropdown`], [`crate::radio`]).

use std::sync::atomic::{AtomicU64, Ordering};

use unicode_width::UnicodeWidthStr;

use crate::key::Key;
use crate::style::{Color, Theme, COLOR_BLACK};
use crate::surface::Surface;
use crate::types::{Align, Padding, Rect};

/// Stable widget identity.
///
/// Ids disambiguate elements when index arithmetic could alias two
/// positions onto the same underlying element during focus traversal.
pub type WidgetId = u64;

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_widget_id() -> WidgetId {
    NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed)
}

/// Completion callback of a form item.
///
/// Invoked with the terminating key (Enter, Escape, Tab, Shift+Tab, Up or
/// Down) when the user finishes interacting with the item. The form
/// installs its own handler here whenever it hands focus to an item.
pub type FinishedFn = Box<dyn FnMut(Key)>;

// ============================================================================
// Layout attributes
// ============================================================================

/// The presentation attributes the form pushes into every item on each
/// layout pass.
///
/// These are form-owned: they never feed back into the sizing hints the
/// item reports ([`FormItem::label_width`] and friends keep returning the
/// item's own configuration), which keeps repeated layout passes stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemAttributes {
    /// Resolved label width in cells.
    pub label_width: i32,
    /// Resolved field width in cells.
    pub field_width: i32,
    /// Label text color.
    pub label_color: Color,
    /// Color of the area behind the label.
    pub background_color: Color,
    /// Field text color.
    pub field_text_color: Color,
    /// Field background color.
    pub field_background_color: Color,
}

impl Default for ItemAttributes {
    fn default() -> Self {
        let theme = Theme::default();
        Self {
            label_width: 0,
            field_width: 0,
            label_color: theme.label,
            background_color: COLOR_BLACK,
            field_text_color: theme.field_text,
            field_background_color: theme.field_background,
        }
    }
}

// ============================================================================
// Capability traits
// ============================================================================

/// The positionable/drawable capability shared by form elements.
pub trait Widget {
    /// The element's bounding rectangle.
    fn rect(&self) -> Rect;

    /// Move or resize the element.
    fn set_rect(&mut self, rect: Rect);

    /// Draw the element onto a surface.
    fn draw(&mut self, surface: &mut dyn Surface);
}

/// The capability set a data-entry control must implement to participate
/// in a form.
pub trait FormItem: Widget {
    /// The item's label text.
    fn label(&self) -> &str;

    /// The label width hint: an explicitly configured width, or the
    /// display width of the label text when unset.
    fn label_width(&self) -> i32;

    /// The field width hint. Zero means flexible; the layout engine
    /// expands the field to the available space.
    fn field_width(&self) -> i32;

    /// The field alignment within its column.
    fn field_align(&self) -> Align;

    /// Extra cells reserved around the item, contributing to measurement.
    fn border_padding(&self) -> Padding;

    /// Receive the resolved geometry and colors for the current pass.
    fn set_layout_attributes(&mut self, attrs: ItemAttributes);

    /// Install or clear the completion callback. The form overwrites this
    /// whenever the item receives focus.
    fn set_finished(&mut self, handler: Option<FinishedFn>);

    /// The item's stable identity.
    fn id(&self) -> WidgetId;

    /// Whether the item currently holds focus.
    fn has_focus(&self) -> bool;

    /// Offer focus to the item. Disabled items silently decline.
    fn focus(&mut self);

    /// Take focus away from the item.
    fn blur(&mut self);

    /// Whether the item refuses focus and input.
    fn is_disabled(&self) -> bool;

    /// Deliver one key to the item.
    fn handle_key(&mut self, key: Key);
}

// ============================================================================
// Shared item state
// ============================================================================

/// State common to every bundled form item. Concrete widgets embed this
/// and delegate the uniform parts of [`FormItem`] to it.
pub(crate) struct ItemCore {
    pub(crate) id: WidgetId,
    pub(crate) rect: Rect,
    pub(crate) label: String,
    pub(crate) label_width: i32,
    pub(crate) field_width: i32,
    pub(crate) field_align: Align,
    pub(crate) padding: Padding,
    pub(crate) disabled: bool,
    pub(crate) focused: bool,
    pub(crate) layout: ItemAttributes,
    pub(crate) finished: Option<FinishedFn>,
}

impl ItemCore {
    /// New core with a one-row rect; the form assigns real geometry later.
    pub(crate) fn new(label: &str) -> Self {
        Self {
            id: next_widget_id(),
            rect: Rect::new(0, 0, 0, 1),
            label: label.to_string(),
            label_width: 0,
            field_width: 0,
            field_align: Align::Left,
            padding: Padding::default(),
            disabled: false,
            focused: false,
            layout: ItemAttributes::default(),
            finished: None,
        }
    }

    /// Configured label width, or the label text width when unset.
    pub(crate) fn label_width(&self) -> i32 {
        if self.label_width > 0 {
            self.label_width
        } else {
            UnicodeWidthStr::width(self.label.as_str()) as i32
        }
    }

    /// Label width to draw with: the pushed value when the form has run,
    /// the intrinsic one otherwise.
    pub(crate) fn draw_label_width(&self) -> i32 {
        if self.layout.label_width > 0 {
            self.layout.label_width
        } else {
            self.label_width()
        }
    }

    pub(crate) fn focus(&mut self) {
        if !self.disabled {
            self.focused = true;
        }
    }

    pub(crate) fn blur(&mut self) {
        self.focused = false;
    }

    /// Run the completion callback, if any.
    pub(crate) fn finish(&mut self, key: Key) {
        if let Some(handler) = &mut self.finished {
            handler(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_ids_are_unique() {
        let a = ItemCore::new("a");
        let b = ItemCore::new("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_label_width_falls_back_to_text() {
        let mut core = ItemCore::new("Name");
        assert_eq!(core.label_width(), 4);
        core.label_width = 9;
        assert_eq!(core.label_width(), 9);
    }

    #[test]
    fn test_disabled_core_declines_focus() {
        let mut core = ItemCore::new("x");
        core.disabled = true;
        core.focus();
        assert!(!core.focused);
        core.disabled = false;
        core.focus();
        assert!(core.focused);
    }

    #[test]
    fn test_finish_invokes_handler() {
        use std::cell::Cell;
        use std::rc::Rc;

        let mut core = ItemCore::new("x");
        let seen = Rc::new(Cell::new(None));
        let slot = Rc::clone(&seen);
        core.finished = Some(Box::new(move |key| slot.set(Some(key))));
        core.finish(Key::Tab);
        assert_eq!(seen.get(), Some(Key::Tab));
    }
}
