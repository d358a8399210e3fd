//! Age gate: raw text in, gate decision out.
//!
//! Pure functions, no I/O.

use crate::numeric::parse_leading_int;
use crate::types::AgeVerdict;

/// Youngest age the form treats as realistic.
pub const MIN_REALISTIC_AGE: i64 = 0;

/// Oldest age the form treats as realistic.
///
/// The out-of-range message says "between 0 and 100" while this bound is
/// 120. Both are kept as they are; see `out_of_range_message_disagrees_with_bound`.
pub const MAX_REALISTIC_AGE: i64 = 120;

/// Ages up to and including this are too young.
pub const MIN_AGE_EXCLUSIVE: i64 = 18;

/// Ages must exceed this to continue.
pub const ENTRY_AGE_EXCLUSIVE: i64 = 21;

/// Validate the age field.
///
/// Checks run in order and the first failing one wins:
/// empty, not a number, unrealistic, too young, borderline.
pub fn evaluate_age(raw: &str) -> AgeVerdict {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return AgeVerdict::Empty;
    }

    let Some(age) = parse_leading_int(trimmed) else {
        return AgeVerdict::NotANumber;
    };

    if !(MIN_REALISTIC_AGE..=MAX_REALISTIC_AGE).contains(&age) {
        AgeVerdict::OutOfRealisticRange { age }
    } else if age <= MIN_AGE_EXCLUSIVE {
        AgeVerdict::TooYoung { age }
    } else if age > ENTRY_AGE_EXCLUSIVE {
        AgeVerdict::Accepted { age }
    } else {
        AgeVerdict::BorderlineRejected { age }
    }
}

impl AgeVerdict {
    /// Inline message shown under the age field. `None` when accepted.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            AgeVerdict::Empty => Some("Please enter your age."),
            AgeVerdict::NotANumber => Some("Age must be a number."),
            AgeVerdict::OutOfRealisticRange { .. } => {
                Some("Enter a realistic age between 0 and 100.")
            }
            AgeVerdict::TooYoung { .. } => Some("You are not over 18."),
            AgeVerdict::BorderlineRejected { .. } => {
                Some("You are over 18 but not over 21, so you can't continue.")
            }
            AgeVerdict::Accepted { .. } => None,
        }
    }

    /// True only for [`AgeVerdict::Accepted`].
    pub fn is_accepted(&self) -> bool {
        matches!(self, AgeVerdict::Accepted { .. })
    }
}

// ============================================================================
// TESTS
// ============================================================================
