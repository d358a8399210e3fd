//! movie-gate: an age gate in front of a movie picker.

pub mod age;
pub mod catalog;
pub mod error;
pub mod form;
pub mod logging;
pub mod numeric;
pub mod prompt;
pub mod report;
pub mod tui;
pub mod types;
