//! The form controller: screen, inputs, feedback and selection.
//!
//! One `Form` owns every piece of mutable form state. Front ends edit the
//! text fields, call the `submit_*` hooks and render what they read back.
//!
//! Invariants:
//! - `selected`, when present, came from `catalog` (see [`Movie`]).
//! - Entering the movie screen always goes through
//!   [`Form::advance_to_movies`], which clears the choice field, its
//!   feedback and the selection together.

use tracing::{debug, info};

use crate::age::evaluate_age;
use crate::catalog::{Catalog, evaluate_choice};
use crate::types::{AgeVerdict, ChoiceVerdict, Movie, Screen};

/// Longest age the terminal front end lets the user type.
pub const AGE_INPUT_MAX_LEN: usize = 3;

/// Longest movie number the terminal front end lets the user type.
pub const CHOICE_INPUT_MAX_LEN: usize = 1;

/// Receives the blocking acknowledgment for an accepted movie choice.
///
/// Called synchronously from [`Form::submit_choice`] after the selection
/// has been recorded. Front ends decide what "blocking" looks like: a
/// modal in the TUI, a "Press Enter" pause on a line terminal.
pub trait Notifier {
    fn movie_selected(&mut self, movie: &Movie);
}

/// Complete form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    catalog: Catalog,
    screen: Screen,
    age_input: String,
    age_verdict: Option<AgeVerdict>,
    choice_input: String,
    choice_verdict: Option<ChoiceVerdict>,
    selected: Option<Movie>,
}

impl Form {
    /// A fresh form on the age screen.
    pub fn new(catalog: Catalog) -> Self {
        Form {
            catalog,
            screen: Screen::Age,
            age_input: String::new(),
            age_verdict: None,
            choice_input: String::new(),
            choice_verdict: None,
            selected: None,
        }
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn age_input(&self) -> &str {
        &self.age_input
    }

    pub fn choice_input(&self) -> &str {
        &self.choice_input
    }

    pub fn selected(&self) -> Option<Movie> {
        self.selected
    }

    /// Result of the latest age submission, if any.
    pub fn age_verdict(&self) -> Option<AgeVerdict> {
        self.age_verdict
    }

    /// Result of the latest choice submission since entering the movie screen.
    pub fn choice_verdict(&self) -> Option<ChoiceVerdict> {
        self.choice_verdict
    }

    /// Inline error under the age field.
    pub fn age_error(&self) -> Option<&'static str> {
        self.age_verdict.and_then(|v| v.message())
    }

    /// Inline error under the choice field.
    pub fn choice_error(&self) -> Option<String> {
        self.choice_verdict.and_then(|v| v.message(self.catalog.len()))
    }

    // ------------------------------------------------------------------------
    // Text editing
    // ------------------------------------------------------------------------

    /// Replace the age text. Feedback is untouched until the next submit.
    pub fn set_age_input(&mut self, text: impl Into<String>) {
        self.age_input = text.into();
    }

    /// Replace the choice text. Feedback is untouched until the next submit.
    pub fn set_choice_input(&mut self, text: impl Into<String>) {
        self.choice_input = text.into();
    }

    /// The text field of the active screen, with its length cap.
    pub fn active_input_mut(&mut self) -> (&mut String, usize) {
        match self.screen {
            Screen::Age => (&mut self.age_input, AGE_INPUT_MAX_LEN),
            Screen::Movies => (&mut self.choice_input, CHOICE_INPUT_MAX_LEN),
        }
    }

    // ------------------------------------------------------------------------
    // Submissions and transitions
    // ------------------------------------------------------------------------

    /// Validate the age field; advance to the movie screen if accepted.
    ///
    /// Any other outcome leaves the screen where it is and only replaces
    /// the age feedback.
    pub fn submit_age(&mut self) -> AgeVerdict {
        let verdict = evaluate_age(&self.age_input);
        debug!(input = %self.age_input, ?verdict, "age submitted");
        self.age_verdict = Some(verdict);

        if verdict.is_accepted() {
            self.advance_to_movies();
        }
        verdict
    }

    /// Validate the choice field; record the movie and notify if accepted.
    ///
    /// A rejected choice keeps any earlier selection on display.
    pub fn submit_choice(&mut self, notifier: &mut dyn Notifier) -> ChoiceVerdict {
        let verdict = evaluate_choice(&self.choice_input, &self.catalog);
        debug!(input = %self.choice_input, ?verdict, "choice submitted");
        self.choice_verdict = Some(verdict);

        if let Some(movie) = verdict.movie() {
            self.selected = Some(movie);
            info!(title = movie.title, number = movie.number(), "movie selected");
            notifier.movie_selected(&movie);
        }
        verdict
    }

    /// Switch to the movie screen with a clean selection.
    pub fn advance_to_movies(&mut self) {
        self.reset_selection();
        self.screen = Screen::Movies;
        info!("entered movie screen");
    }

    /// Clear the choice field, its feedback and the selection.
    pub fn reset_selection(&mut self) {
        self.choice_input.clear();
        self.choice_verdict = None;
        self.selected = None;
    }

    /// Go back to the age screen. The typed age is kept.
    pub fn return_to_age_screen(&mut self) {
        self.screen = Screen::Age;
        info!("returned to age screen");
    }
}

impl Default for Form {
    fn default() -> Self {
        Form::new(Catalog::builtin())
    }
}

// ============================================================================
// TESTS
// ============================================================================
