//! Colors, video attributes, and the form color theme.
//!
//! Colors are palette indices into whatever palette the hosting surface
//! maintains; this library only routes them from the form configuration to
//! the widgets and onto the surface. Attributes travel alongside the colors
//! in a [`Style`].

/// Color value type: an index into the surface's palette.
pub type Color = i16;

/// Black color.
pub const COLOR_BLACK: Color = 0;
/// Red color.
pub const COLOR_RED: Color = 1;
/// Green color.
pub const COLOR_GREEN: Color = 2;
/// Yellow color.
pub const COLOR_YELLOW: Color = 3;
/// Blue color.
pub const COLOR_BLUE: Color = 4;
/// Magenta color.
pub const COLOR_MAGENTA: Color = 5;
/// Cyan color.
pub const COLOR_CYAN: Color = 6;
/// White color.
pub const COLOR_WHITE: Color = 7;

bitflags::bitflags! {
    /// Video attribute flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Attr: u16 {
        /// Bold or extra-bright text.
        const BOLD = 0x01;
        /// Half-bright or dim text.
        const DIM = 0x02;
        /// Underlined text.
        const UNDERLINE = 0x04;
        /// Reverse video.
        const REVERSE = 0x08;
        /// Blinking text.
        const BLINK = 0x10;
    }
}

/// A complete cell style: foreground, background, and attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Video attributes.
    pub attr: Attr,
}

impl Style {
    /// Create a style from foreground and background colors.
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            attr: Attr::empty(),
        }
    }

    /// The same style with the given attributes added.
    pub const fn with_attr(mut self, attr: Attr) -> Self {
        self.attr = attr;
        self
    }

    /// The same style with foreground and background swapped.
    pub const fn reversed(self) -> Self {
        Self {
            fg: self.bg,
            bg: self.fg,
            attr: self.attr,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::new(COLOR_WHITE, COLOR_BLACK)
    }
}

/// The color assignments a form pushes into its elements on every layout
/// pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Theme {
    /// Color of field labels.
    pub label: Color,
    /// Text color of editable field areas.
    pub field_text: Color,
    /// Background color of editable field areas.
    pub field_background: Color,
    /// Color of button labels.
    pub button_text: Color,
    /// Background color of buttons.
    pub button_background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            label: COLOR_YELLOW,
            field_text: COLOR_WHITE,
            field_background: COLOR_BLUE,
            button_text: COLOR_WHITE,
            button_background: COLOR_BLUE,
        }
    }
}
