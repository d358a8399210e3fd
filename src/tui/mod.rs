//! TUI module for the interactive terminal form.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: TUI data types (App, Alert, Action)
//! - `update`: action handling over the form
//! - `view`: pure rendering
//! - `run`: effects (terminal, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
