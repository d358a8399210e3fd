//! Domain types for movie-gate.
//!
//! Screens, validation outcomes, catalog entries and configuration.
//! Validation outcomes are ordinary values: every one of them is
//! rendered inline and none ends the session.

use std::path::PathBuf;

use serde::Serialize;

// ============================================================================
// SCREENS
// ============================================================================

/// Which half of the form is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Age gate. The form starts here.
    #[default]
    Age,
    /// Movie selection, reachable only through an accepted age.
    Movies,
}

// ============================================================================
// CATALOG ENTRIES
// ============================================================================

/// A movie taken from a catalog.
///
/// Obtained from [`crate::catalog::Catalog`] lookups, which only ever
/// return entries that exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Movie {
    /// Zero-based position in the catalog.
    pub index: usize,
    /// Display title.
    pub title: &'static str,
}

impl Movie {
    /// One-based number the user types to pick this movie.
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

// ============================================================================
// VALIDATION OUTCOMES
// ============================================================================

/// Outcome of validating the age field.
///
/// Variants that got past parsing carry the parsed age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AgeVerdict {
    /// Nothing but whitespace was entered.
    Empty,
    /// The text does not start with an integer.
    NotANumber,
    /// Below 0 or above 120.
    OutOfRealisticRange { age: i64 },
    /// 18 or younger.
    TooYoung { age: i64 },
    /// Over 18 but not over 21.
    BorderlineRejected { age: i64 },
    /// Over 21: the only outcome that opens the movie screen.
    Accepted { age: i64 },
}

/// Outcome of validating the movie-number field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ChoiceVerdict {
    /// Nothing but whitespace was entered.
    Empty,
    /// The text does not start with an integer.
    NotANumber,
    /// Parsed, but not between 1 and the catalog size.
    OutOfCatalogRange { number: i64 },
    /// A catalog entry was picked.
    Accepted { movie: Movie },
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for one-shot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Where log records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// Standard error. Used by commands that do not own the terminal.
    Stderr,
    /// Append to a file. Used while the TUI owns the terminal.
    File(PathBuf),
}

/// Configuration for the tracing subscriber.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directive used when `MOVIE_GATE_LOG` is unset (e.g. "warn", "movie_gate=debug").
    pub default_filter: String,
    /// Log sink.
    pub destination: LogDestination,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_filter: "warn".to_string(),
            destination: LogDestination::Stderr,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
