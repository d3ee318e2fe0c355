//! # termform
//!
//! A composite form widget for character-cell displays: column-based
//! layout, focus navigation and key handling for labeled entry fields,
//! checkboxes, drop-downs, radio groups and action buttons.
//!
//! The crate never talks to a terminal. Forms draw into any
//! [`Surface`] implementation and receive decoded [`Key`] events from
//! the host, so the same form logic runs against a real screen, a test
//! buffer, or a remote session.
//!
//! ## Features
//!
//! - **regex**: Regular-expression acceptance predicates for input
//!   fields
//!
//! ## Example
//!
//! ```rust,no_run
//! use termform::*;
//!
//! fn main() -> Result<()> {
//!     let mut form = Form::new();
//!     let name = form.add_input_field("Name: ", "", 20);
//!     form.add_checkbox("Subscribe ", false);
//!     form.add_button("Save");
//!
//!     form.set_rect(Rect::new(0, 0, 40, 10));
//!     form.focus();
//!
//!     // Drive the form with keys and draw it into a cell buffer.
//!     let mut screen = CellBuffer::new(40, 10)?;
//!     form.handle_key(Key::Char('A'));
//!     form.handle_key(Key::Tab);
//!     form.draw(&mut screen);
//!
//!     println!("name = {}", name.borrow().text());
//!     Ok(())
//! }
//! ```

#![allow(clippy::needless_doctest_main)]
#![warn(missing_docs)]

pub mod button;
pub mod checkbox;
pub mod dropdown;
pub mod error;
pub mod form;
pub mod input;
pub mod item;
pub mod key;
pub mod layout;
pub mod radio;
pub mod style;
pub mod surface;
pub mod types;

// Re-export commonly used items at crate root
pub use button::Button;
pub use checkbox::Checkbox;
pub use dropdown::DropDown;
pub use error::{Error, Result};
pub use form::Form;
pub use input::InputField;
pub use item::{FormItem, ItemAttributes, Widget, WidgetId};
pub use key::*;
pub use layout::{ItemMetrics, LayoutConfig, Placement};
pub use radio::RadioButtons;
pub use style::*;
pub use surface::{CellBuffer, Surface};
pub use types::*;

/// The termform version string
pub const VERSION: &str = "0.1.0";

/// termform major version
pub const VERSION_MAJOR: u32 = 0;

/// termform minor version
pub const VERSION_MINOR: u32 = 1;

/// termform patch version
pub const VERSION_PATCH: u32 = 0;
