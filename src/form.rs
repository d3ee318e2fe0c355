//! The form aggregate.
//!
//! A [`Form`] owns an ordered collection of data-entry items (optionally
//! grouped into columns), an ordered collection of action buttons, the
//! layout configuration, and the focus index over the combined
//! item+button space. Every draw recomputes geometry through
//! [`crate::layout`] and pushes the resolved attributes into the
//! elements; key events move focus between elements with skip/retry
//! semantics.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, trace};

use crate::button::Button;
use crate::checkbox::Checkbox;
use crate::dropdown::DropDown;
use crate::error::{Error, Result};
use crate::input::InputField;
use crate::item::{FormItem, ItemAttributes, Widget};
use crate::key::Key;
use crate::layout::{self, ItemMetrics, LayoutConfig};
use crate::radio::RadioButtons;
use crate::style::{Color, Theme, COLOR_BLACK};
use crate::surface::Surface;
use crate::types::{Align, Padding, Rect};

/// Callback invoked when the user hits Escape and a cancel handler is
/// installed.
pub type CancelFn = Box<dyn FnMut()>;

/// A composite form widget.
///
/// Items are laid out top-to-bottom (or left-to-right with wrapping in
/// horizontal mode), followed by a button row. The form never inspects
/// what kind of control an item is; everything flows through the
/// [`FormItem`] capability trait.
///
/// The form draws no border or title itself. The configured border flag
/// and border padding only reserve the space, so a host drawing the
/// container decoration and this form agree on geometry.
pub struct Form {
    rect: Rect,
    border: bool,
    border_padding: Padding,

    items: Vec<Rc<RefCell<dyn FormItem>>>,
    /// Column assignment per item, in lockstep with `items`.
    item_columns: Vec<usize>,
    buttons: Vec<Rc<RefCell<Button>>>,

    horizontal: bool,
    align: Align,
    buttons_align: Align,
    item_padding: i32,
    column_padding: i32,
    buttons_padding_top: i32,
    buttons_indent: i32,
    default_field_width: i32,
    theme: Theme,

    /// Focus index into the concatenated [items..., buttons...] space.
    focused_element: usize,
    last_item: usize,
    last_button: usize,

    cancel: Option<CancelFn>,
    /// Slot the completion callbacks write the terminating key into;
    /// drained after every dispatched key.
    pending: Rc<Cell<Option<Key>>>,
}

impl Form {
    /// Create an empty form with the default configuration: vertical,
    /// left-aligned, one row between items, a border padding of one cell
    /// on every side, and an auto-sized rectangle.
    pub fn new() -> Self {
        Self {
            rect: Rect::ZERO,
            border: false,
            border_padding: Padding::new(1, 1, 1, 1),
            items: Vec::new(),
            item_columns: Vec::new(),
            buttons: Vec::new(),
            horizontal: false,
            align: Align::Left,
            buttons_align: Align::Left,
            item_padding: 1,
            column_padding: 1,
            buttons_padding_top: 2,
            buttons_indent: 4,
            default_field_width: layout::DEFAULT_FIELD_WIDTH,
            theme: Theme::default(),
            focused_element: 0,
            last_item: 0,
            last_button: 0,
            cancel: None,
            pending: Rc::new(Cell::new(None)),
        }
    }

    // ------------------------------------------------------------------
    // Registry
    // ------------------------------------------------------------------

    /// Append an item to column 0.
    pub fn add_item(&mut self, item: Rc<RefCell<dyn FormItem>>) {
        self.add_item_to_column(item, 0);
    }

    /// Append an item to the given column.
    pub fn add_item_to_column(&mut self, item: Rc<RefCell<dyn FormItem>>, column: usize) {
        self.items.push(item);
        self.item_columns.push(column);
        self.last_button = self.items.len();
    }

    /// Append a text input field and return a handle to it.
    pub fn add_input_field(
        &mut self,
        label: &str,
        text: &str,
        field_width: i32,
    ) -> Rc<RefCell<InputField>> {
        let field = Rc::new(RefCell::new(InputField::new(label, text, field_width)));
        self.add_item(field.clone());
        field
    }

    /// Append a masked input field. A `mask` of `None` uses `*`.
    pub fn add_password_field(
        &mut self,
        label: &str,
        text: &str,
        field_width: i32,
        mask: Option<char>,
    ) -> Rc<RefCell<InputField>> {
        let field = Rc::new(RefCell::new(InputField::new(label, text, field_width)));
        field.borrow_mut().set_mask(Some(mask.unwrap_or('*')));
        self.add_item(field.clone());
        field
    }

    /// Append a checkbox and return a handle to it.
    pub fn add_checkbox(&mut self, label: &str, checked: bool) -> Rc<RefCell<Checkbox>> {
        let checkbox = Rc::new(RefCell::new(Checkbox::new(label, checked)));
        self.add_item(checkbox.clone());
        checkbox
    }

    /// Append a drop-down and return a handle to it.
    pub fn add_drop_down(
        &mut self,
        label: &str,
        options: &[&str],
        initial: Option<usize>,
    ) -> Rc<RefCell<DropDown>> {
        let drop_down = Rc::new(RefCell::new(DropDown::new(label, options, initial)));
        self.add_item(drop_down.clone());
        drop_down
    }

    /// Append a radio group and return a handle to it.
    pub fn add_radio_buttons(
        &mut self,
        label: &str,
        options: &[&str],
        initial: Option<usize>,
    ) -> Rc<RefCell<RadioButtons>> {
        let radio = Rc::new(RefCell::new(RadioButtons::new(label, options, initial)));
        self.add_item(radio.clone());
        radio
    }

    /// Append a button and return a handle to it.
    pub fn add_button(&mut self, label: &str) -> Rc<RefCell<Button>> {
        let button = Rc::new(RefCell::new(Button::new(label)));
        self.buttons.push(button.clone());
        button
    }

    /// Remove all items, and the buttons too when requested. Resets the
    /// focus index.
    pub fn clear(&mut self, include_buttons: bool) {
        self.items.clear();
        self.item_columns.clear();
        if include_buttons {
            self.buttons.clear();
        }
        self.focused_element = 0;
    }

    /// Remove all buttons.
    pub fn clear_buttons(&mut self) {
        self.buttons.clear();
    }

    /// The number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The number of buttons, hidden ones included.
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// The item at the given position, in the order items were added.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range.
    pub fn item(&self, index: usize) -> Rc<RefCell<dyn FormItem>> {
        self.items[index].clone()
    }

    /// The button at the given position, in the order buttons were
    /// added and regardless of visibility.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range.
    pub fn button(&self, index: usize) -> Rc<RefCell<Button>> {
        self.buttons[index].clone()
    }

    /// The first item with the given label, if any. Buttons are not
    /// searched.
    pub fn item_by_label(&self, label: &str) -> Option<Rc<RefCell<dyn FormItem>>> {
        self.items
            .iter()
            .find(|item| item.borrow().label() == label)
            .cloned()
    }

    /// The buttons that participate in layout and navigation: the
    /// stable sub-order of all buttons with hidden ones removed.
    pub fn visible_buttons(&self) -> Vec<Rc<RefCell<Button>>> {
        self.buttons
            .iter()
            .filter(|button| !button.borrow().hidden())
            .cloned()
            .collect()
    }

    /// Hide or show the button at the given position. Out-of-range
    /// indices are ignored.
    pub fn hide_button(&mut self, index: usize, hidden: bool) {
        if index < self.buttons.len() {
            self.buttons[index].borrow_mut().set_hidden(hidden);
        }
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Move or resize the form. A zero width or height keeps that
    /// dimension auto-computed from the content.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Reserve space for a border drawn by the host.
    pub fn set_border(&mut self, border: bool) {
        self.border = border;
    }

    /// Set the padding between the container edge and the content.
    pub fn set_border_padding(&mut self, padding: Padding) {
        self.border_padding = padding;
    }

    /// Set the alignment of the content block within the container.
    pub fn set_align(&mut self, align: Align) {
        self.align = align;
    }

    /// Set the number of empty rows between items in vertical layouts,
    /// or empty cells in horizontal layouts.
    pub fn set_item_padding(&mut self, padding: i32) {
        self.item_padding = padding;
    }

    /// Set the number of empty cells between columns.
    pub fn set_column_padding(&mut self, padding: i32) {
        self.column_padding = padding;
    }

    /// Set the number of empty rows between the last field and the
    /// button row.
    pub fn set_buttons_padding_top(&mut self, padding: i32) {
        self.buttons_padding_top = padding;
    }

    /// Set the number of empty cells between buttons.
    pub fn set_buttons_indent(&mut self, indent: i32) {
        self.buttons_indent = indent;
    }

    /// Set the alignment of the button row. Only vertical layouts
    /// realign the row.
    pub fn set_buttons_align(&mut self, align: Align) {
        self.buttons_align = align;
    }

    /// Switch between top-to-bottom and left-to-right layout.
    pub fn set_horizontal(&mut self, horizontal: bool) {
        self.horizontal = horizontal;
    }

    /// Set the width given to flexible fields in horizontal layouts.
    pub fn set_default_field_width(&mut self, width: i32) {
        self.default_field_width = width;
    }

    /// Set the label color.
    pub fn set_label_color(&mut self, color: Color) {
        self.theme.label = color;
    }

    /// Set the text color of the input areas.
    pub fn set_field_text_color(&mut self, color: Color) {
        self.theme.field_text = color;
    }

    /// Set the background color of the input areas.
    pub fn set_field_background_color(&mut self, color: Color) {
        self.theme.field_background = color;
    }

    /// Set the color of the button texts.
    pub fn set_button_text_color(&mut self, color: Color) {
        self.theme.button_text = color;
    }

    /// Set the background color of the buttons.
    pub fn set_button_background_color(&mut self, color: Color) {
        self.theme.button_background = color;
    }

    /// Replace the whole color theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Install or clear the handler called when the user hits Escape.
    /// Without one, Escape resets focus to the first element.
    pub fn set_cancel(&mut self, cancel: Option<CancelFn>) {
        self.cancel = cancel;
    }

    // ------------------------------------------------------------------
    // Focus
    // ------------------------------------------------------------------

    /// The current focus index into the combined item+button space.
    pub fn focused_element(&self) -> usize {
        self.focused_element
    }

    /// The most recently focused item index.
    pub fn last_item(&self) -> usize {
        self.last_item
    }

    /// The most recently focused button focus index.
    pub fn last_button(&self) -> usize {
        self.last_button
    }

    /// Whether any item or visible button currently reports focus.
    pub fn has_focus(&self) -> bool {
        self.items.iter().any(|item| item.borrow().has_focus())
            || self
                .visible_buttons()
                .iter()
                .any(|button| button.borrow().has_focus())
    }

    /// Hand focus to the element the focus index denotes. Out-of-range
    /// indices are clamped to 0 first; empty forms ignore the call.
    pub fn focus(&mut self) {
        self.focus_current();
    }

    /// Move focus to the given index.
    pub fn set_focus(&mut self, index: usize) -> Result<()> {
        let total = self.items.len() + self.visible_buttons().len();
        if index >= total {
            return Err(Error::IndexOutOfRange { index, len: total });
        }
        self.focused_element = index;
        self.focus_current();
        Ok(())
    }

    /// Reset the focus index to the first non-disabled item (0 when
    /// none qualifies) and the last-visited bookkeeping to its initial
    /// state.
    pub fn reset_focus(&mut self) {
        let mut target = 0;
        for (index, item) in self.items.iter().enumerate() {
            if item.borrow().is_disabled() {
                continue;
            }
            target = index;
            break;
        }
        self.focused_element = target;
        self.last_item = 0;
        self.last_button = self.items.len();
    }

    /// Deliver one key to the focused element and run any focus
    /// transition it finishes with.
    pub fn handle_key(&mut self, key: Key) {
        let field_count = self.items.len();
        let total = field_count + self.visible_buttons().len();
        if total == 0 {
            return;
        }
        if self.focused_element >= total {
            self.focused_element = 0;
        }
        let on_field = self.focused_element < field_count;

        if on_field {
            let item = self.items[self.focused_element].clone();
            item.borrow_mut().handle_key(key);
        } else {
            let visible = self.visible_buttons();
            let offset = self.focused_element - field_count;
            let button = visible[visible.len() - 1 - offset].clone();
            button.borrow_mut().handle_key(key);
        }

        if let Some(finish_key) = self.pending.take() {
            if on_field {
                self.item_transition(finish_key);
            } else {
                self.button_transition(finish_key);
            }
        }
    }

    /// Focus transitions while an item holds focus.
    fn item_transition(&mut self, key: Key) {
        let field_count = self.items.len();
        match key {
            Key::Tab | Key::Enter => self.advance_focus(make_range(0, field_count)),
            Key::BackTab => self.advance_focus(make_range(field_count, 0)),
            Key::Up => {
                if field_count > 0 {
                    self.advance_focus(make_range(field_count - 1, 0));
                }
            }
            Key::Down => {
                if field_count > 0 {
                    self.advance_focus(make_range(0, field_count - 1));
                }
            }
            Key::Escape => self.cancel_or_reset(),
            _ => {}
        }
    }

    /// Focus transitions while a button holds focus.
    fn button_transition(&mut self, key: Key) {
        let field_count = self.items.len();
        let button_count = self.visible_buttons().len();
        match key {
            Key::Tab => self.advance_focus(make_range(0, field_count)),
            Key::BackTab => self.advance_focus(make_range(field_count, 0)),
            Key::Up | Key::Left => {
                if button_count > 0 {
                    self.advance_focus(make_range(field_count, field_count + button_count - 1));
                }
            }
            Key::Down | Key::Right => {
                if button_count > 0 {
                    self.advance_focus(make_range(field_count + button_count - 1, field_count));
                }
            }
            Key::Escape => self.cancel_or_reset(),
            _ => {}
        }
    }

    fn cancel_or_reset(&mut self) {
        if let Some(cancel) = &mut self.cancel {
            cancel();
        } else {
            self.focused_element = 0;
            self.focus_current();
        }
    }

    /// Walk a candidate sequence until an element accepts focus.
    ///
    /// The sequence is first rotated so it starts just past the current
    /// focus index in its direction of travel. Candidates that are out
    /// of range, or that denote the element already holding focus, are
    /// skipped; the remaining ones are offered focus in turn. When no
    /// candidate accepts, no element is left focused.
    fn advance_focus(&mut self, mut candidates: Vec<usize>) {
        let field_count = self.items.len();
        let total = field_count + self.visible_buttons().len();
        if total == 0 {
            return;
        }
        if self.focused_element >= total {
            self.focused_element = 0;
        }

        for i in 1..candidates.len() {
            let previous = candidates[i - 1];
            let candidate = candidates[i];
            if (previous < candidate && self.focused_element < candidate)
                || (previous > candidate && self.focused_element > candidate)
            {
                candidates.rotate_left(i);
                break;
            }
        }

        let current = self.focused_element;
        for &candidate in &candidates {
            if candidate >= total {
                continue;
            }
            self.focused_element = candidate;

            // Identity guards: index arithmetic may alias the element
            // already holding focus.
            if candidate < field_count
                && current < field_count
                && self.items[current].borrow().id() == self.items[candidate].borrow().id()
            {
                continue;
            }
            if candidate >= field_count && current >= field_count {
                let visible = self.visible_buttons();
                if visible[current - field_count].borrow().id()
                    == visible[candidate - field_count].borrow().id()
                {
                    continue;
                }
            }

            self.focus_current();
            if candidate < field_count {
                if self.items[candidate].borrow().has_focus() {
                    trace!("focus moved to item {}", candidate);
                    self.last_item = candidate;
                    break;
                }
            } else {
                let visible = self.visible_buttons();
                if visible[visible.len() - 1 - (candidate - field_count)]
                    .borrow()
                    .has_focus()
                {
                    trace!("focus moved to button index {}", candidate);
                    self.last_button = candidate;
                    break;
                }
            }
            trace!("element {} declined focus", candidate);
        }
    }

    /// Blur everything, then hand focus to the element the focus index
    /// denotes, installing the callback that reports the terminating
    /// key back to the form.
    fn focus_current(&mut self) {
        let field_count = self.items.len();
        let visible = self.visible_buttons();
        let total = field_count + visible.len();
        if total == 0 {
            return;
        }
        if self.focused_element >= total {
            self.focused_element = 0;
        }

        for item in &self.items {
            item.borrow_mut().blur();
        }
        for button in &self.buttons {
            button.borrow_mut().blur();
        }

        if self.focused_element < field_count {
            let pending = Rc::clone(&self.pending);
            let mut item = self.items[self.focused_element].borrow_mut();
            item.set_finished(Some(Box::new(move |key| pending.set(Some(key)))));
            item.focus();
        } else {
            // Focus index `items + k` denotes the visible button at
            // position `len - 1 - k`: button navigation order mirrors
            // the display order.
            let offset = self.focused_element - field_count;
            let pending = Rc::clone(&self.pending);
            let mut button = visible[visible.len() - 1 - offset].borrow_mut();
            button.set_blur_handler(Some(Box::new(move |key| pending.set(Some(key)))));
            button.focus();
        }
    }

    // ------------------------------------------------------------------
    // Geometry and drawing
    // ------------------------------------------------------------------

    /// The form's rectangle. A zero width or height is replaced by the
    /// intrinsic size: the summed column widths (plus separators), and
    /// the stacked content height plus the button row.
    pub fn rect(&self) -> Rect {
        let mut rect = self.rect;
        let metrics = self.metrics();

        if rect.width == 0 {
            let widths = layout::measure_columns(&metrics, &self.item_columns);
            let count = layout::column_count(&self.item_columns);
            let mut width = 0;
            for column in 0..count {
                width += widths.total[column];
            }
            width += (count as i32 - 1) * (1 + self.column_padding);
            width += self.border_padding.left + self.border_padding.right;
            if self.border {
                width += 2;
            }
            rect.width = width;
        }

        if rect.height == 0 {
            let mut height = layout::stacked_height(&metrics, &self.item_columns, self.item_padding);
            if !self.visible_buttons().is_empty() {
                height += 1 + self.buttons_padding_top;
            }
            if self.border {
                height += 2;
            }
            height += self.border_padding.top + self.border_padding.bottom;
            rect.height = height;
        }

        rect
    }

    /// The content rectangle: the form's rectangle minus the border row
    /// and column (when reserved) and the border padding.
    fn inner_rect(&self) -> Rect {
        let mut rect = self.rect();
        if self.border {
            rect.x += 1;
            rect.y += 1;
            rect.width -= 2;
            rect.height -= 2;
        }
        rect.x += self.border_padding.left;
        rect.y += self.border_padding.top;
        rect.width -= self.border_padding.left + self.border_padding.right;
        rect.height -= self.border_padding.top + self.border_padding.bottom;
        rect
    }

    fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            align: self.align,
            item_padding: self.item_padding,
            column_padding: self.column_padding,
            buttons_padding_top: self.buttons_padding_top,
            buttons_indent: self.buttons_indent,
            horizontal: self.horizontal,
            buttons_align: self.buttons_align,
            default_field_width: self.default_field_width,
        }
    }

    /// Snapshot the sizing hints of every item.
    fn metrics(&self) -> Vec<ItemMetrics> {
        self.items
            .iter()
            .map(|item| {
                let item = item.borrow();
                ItemMetrics {
                    label_width: item.label_width(),
                    field_width: item.field_width(),
                    align: item.field_align(),
                    padding: item.border_padding(),
                    height: item.rect().height,
                }
            })
            .collect()
    }

    /// Lay out and draw the form.
    ///
    /// Every element receives its rectangle (shifted by the scroll
    /// offset that keeps the focused element visible) even when it falls
    /// outside the visible band and is skipped for drawing. The focused
    /// item is drawn last to win any overlap.
    pub fn draw(&mut self, surface: &mut dyn Surface) {
        let inner = self.inner_rect();
        let top_limit = inner.y;
        let bottom_limit = inner.y + inner.height;

        let metrics = self.metrics();
        let visible = self.visible_buttons();
        let button_widths: Vec<i32> = visible
            .iter()
            .map(|button| button.borrow().label_width() + 4)
            .collect();

        debug!(
            "drawing form: {} items, {} visible buttons, inner {:?}",
            self.items.len(),
            visible.len(),
            inner
        );

        let placement = layout::place(
            &metrics,
            &self.item_columns,
            &button_widths,
            inner,
            &self.layout_config(),
        );

        // Push the resolved geometry and colors into the items.
        for (index, slot) in placement.items.iter().enumerate() {
            self.items[index]
                .borrow_mut()
                .set_layout_attributes(ItemAttributes {
                    label_width: slot.label_width,
                    field_width: slot.field_width,
                    label_color: self.theme.label,
                    background_color: COLOR_BLACK,
                    field_text_color: self.theme.field_text,
                    field_background_color: self.theme.field_background,
                });
        }
        for button in &visible {
            let mut button = button.borrow_mut();
            button.set_label_color(self.theme.button_text);
            button.set_label_color_activated(self.theme.button_background);
            button.set_background_color_activated(self.theme.button_text);
            button.set_background_color(self.theme.button_background);
        }

        // The focused element's rectangle decides the scroll offset.
        let mut focused_rect = Rect::ZERO;
        for (index, slot) in placement.items.iter().enumerate() {
            if self.items[index].borrow().has_focus() {
                focused_rect = slot.rect;
            }
        }
        for (index, rect) in placement.buttons.iter().enumerate() {
            if visible[index].borrow().has_focus() {
                focused_rect = *rect;
            }
        }

        let mut offset = 0;
        if focused_rect.y + focused_rect.height > bottom_limit {
            offset = focused_rect.y + focused_rect.height - bottom_limit;
            if focused_rect.y - offset < top_limit {
                offset = focused_rect.y - top_limit;
            }
        }

        let mut focused_item: Option<Rc<RefCell<dyn FormItem>>> = None;
        for (index, slot) in placement.items.iter().enumerate() {
            let y = slot.rect.y - offset;
            let height = slot.rect.height;
            let item = &self.items[index];
            item.borrow_mut()
                .set_rect(Rect::new(slot.rect.x, y, slot.rect.width, height));

            if y + height <= top_limit || y > bottom_limit {
                continue;
            }
            if item.borrow().has_focus() {
                if focused_item.is_none() {
                    focused_item = Some(Rc::clone(item));
                }
            } else {
                item.borrow_mut().draw(surface);
            }
        }

        for (index, rect) in placement.buttons.iter().enumerate() {
            let y = rect.y - offset;
            let height = rect.height;
            let button = &visible[index];
            button
                .borrow_mut()
                .set_rect(Rect::new(rect.x, y, rect.width, height));

            if y + height <= top_limit || (y >= bottom_limit && inner.height > 0) {
                continue;
            }
            button.borrow_mut().draw(surface);
        }

        // Focused last, in case an open drop-down overlaps a neighbor.
        if let Some(item) = focused_item {
            item.borrow_mut().draw(surface);
        }
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

/// Inclusive range of candidate indices, ascending or descending.
fn make_range(start: usize, end: usize) -> Vec<usize> {
    if start < end {
        (start..=end).collect()
    } else {
        (end..=start).rev().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_range() {
        assert_eq!(make_range(0, 3), vec![0, 1, 2, 3]);
        assert_eq!(make_range(3, 0), vec![3, 2, 1, 0]);
        assert_eq!(make_range(2, 2), vec![2]);
    }

    #[test]
    fn test_add_keeps_columns_in_lockstep() {
        let mut form = Form::new();
        form.add_input_field("a", "", 5);
        form.add_checkbox("b", false);
        form.add_item_to_column(
            Rc::new(RefCell::new(InputField::new("c", "", 5))),
            2,
        );
        assert_eq!(form.item_count(), 3);
        assert_eq!(form.item_columns, vec![0, 0, 2]);
    }

    #[test]
    fn test_clear_resets_registry_and_focus() {
        let mut form = Form::new();
        form.add_input_field("a", "", 5);
        form.add_input_field("b", "", 5);
        form.add_button("OK");
        form.set_focus(1).unwrap();

        form.clear(false);
        assert_eq!(form.item_count(), 0);
        assert_eq!(form.item_columns.len(), 0);
        assert_eq!(form.button_count(), 1);
        assert_eq!(form.focused_element(), 0);

        form.clear(true);
        assert_eq!(form.button_count(), 0);
    }

    #[test]
    fn test_item_by_label() {
        let mut form = Form::new();
        form.add_input_field("Name", "", 5);
        form.add_checkbox("Subscribe", true);
        form.add_button("Name");

        let item = form.item_by_label("Subscribe").unwrap();
        assert_eq!(item.borrow().label(), "Subscribe");
        // Buttons are not searched.
        assert!(form.item_by_label("Missing").is_none());
    }

    #[test]
    fn test_visible_buttons_preserve_order() {
        let mut form = Form::new();
        let first = form.add_button("first");
        form.add_button("second");
        let third = form.add_button("third");
        form.hide_button(1, true);

        let visible = form.visible_buttons();
        assert_eq!(visible.len(), 2);
        assert!(Rc::ptr_eq(&visible[0], &first));
        assert!(Rc::ptr_eq(&visible[1], &third));

        // Out-of-range indices are ignored.
        form.hide_button(9, true);
        assert_eq!(form.visible_buttons().len(), 2);
    }

    #[test]
    fn test_set_focus_rejects_out_of_range() {
        let mut form = Form::new();
        form.add_input_field("a", "", 5);
        assert!(form.set_focus(0).is_ok());
        assert_eq!(
            form.set_focus(3),
            Err(Error::IndexOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn test_reset_focus_skips_disabled() {
        let mut form = Form::new();
        let first = form.add_input_field("a", "", 5);
        form.add_input_field("b", "", 5);
        first.borrow_mut().set_disabled(true);

        form.reset_focus();
        assert_eq!(form.focused_element(), 1);
        assert_eq!(form.last_button(), 2);

        // Every item disabled: settle on 0.
        let mut all_disabled = Form::new();
        let only = all_disabled.add_input_field("a", "", 5);
        only.borrow_mut().set_disabled(true);
        all_disabled.reset_focus();
        assert_eq!(all_disabled.focused_element(), 0);
    }

    #[test]
    fn test_auto_size() {
        let mut form = Form::new();
        form.set_border_padding(Padding::default());
        form.add_input_field("ab", "", 4);
        form.add_item_to_column(
            Rc::new(RefCell::new(InputField::new("cdef", "", 6))),
            1,
        );
        form.add_button("OK");

        // Columns 6 and 10 plus one separator pair; height is one item
        // row, the gap above the buttons, and the button row.
        let rect = form.rect();
        assert_eq!(rect.width, 6 + 10 + 2);
        assert_eq!(rect.height, 1 + 2 + 1);

        form.set_border(true);
        let rect = form.rect();
        assert_eq!(rect.width, 6 + 10 + 2 + 2);
        assert_eq!(rect.height, 1 + 2 + 1 + 2);
    }

    #[test]
    fn test_exhausted_walk_leaves_nothing_focused() {
        let mut form = Form::new();
        let only = form.add_input_field("a", "", 5);
        only.borrow_mut().set_disabled(true);

        form.focus();
        assert!(!form.has_focus());

        // The walk skips the aliasing candidate and finds no acceptor.
        form.handle_key(Key::Tab);
        assert!(!form.has_focus());
        assert_eq!(form.focused_element(), 0);
    }
}
