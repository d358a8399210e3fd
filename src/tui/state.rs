//! TUI state: the form plus what only a terminal needs.
//!
//! The form itself ([`Form`]) carries the screen, both text fields, the
//! feedback and the selection. This layer adds the acknowledgment modal
//! and the quit flag.

use crate::form::{Form, Notifier};
use crate::types::Movie;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Form state shared with every other front end.
    pub form: Form,

    /// Open acknowledgment modal. While present it swallows all input
    /// except dismiss and quit.
    pub alert: Option<Alert>,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    pub fn new(form: Form) -> Self {
        App {
            form,
            alert: None,
            should_quit: false,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new(Form::default())
    }
}

// ============================================================================
// MODAL
// ============================================================================

/// A modal message the user must dismiss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub body: String,
}

impl Alert {
    pub fn movie_selected(movie: &Movie) -> Self {
        Alert {
            title: "Movie Selected",
            body: format!("You chose: {}", movie.title),
        }
    }
}

/// The TUI acknowledges a selection by opening the modal.
impl Notifier for Option<Alert> {
    fn movie_selected(&mut self, movie: &Movie) {
        *self = Some(Alert::movie_selected(movie));
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions.
/// The update function decides what each Action means per screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Type a character into the active field.
    Input(char),
    /// Delete the last character of the active field.
    Backspace,
    /// Submit the active field, or dismiss the modal.
    Submit,
    /// Back to the age screen; quits from the age screen; dismisses the modal.
    Back,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================
