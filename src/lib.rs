//! Type-ahead suggestion filtering for the terminal
//!
//! The interaction core lives in [`autocomplete`]: a debouncer, a
//! case-insensitive substring matcher, a keyboard selection state machine and
//! the [`autocomplete::Autocomplete`] controller that wires them together.
//! [`app::App`] binds the controller to a ratatui input field and list.

pub mod app;
pub mod autocomplete;
pub mod config;
pub mod error;
pub mod layout;
pub mod suggestions;
pub mod theme;
pub mod widgets;


pub use error::TypeaheadError;
