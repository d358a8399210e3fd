//! Movie catalog and choice validation.
//!
//! The catalog is fixed for the life of the process. Users pick by
//! one-based number; storage is zero-based.

use crate::numeric::parse_leading_int;
use crate::types::{ChoiceVerdict, Movie};

/// The titles offered on the movie screen, in display order.
pub const MOVIES: [&str; 5] = ["Superbad", "The Hangover", "Sausage Party", "Ted", "Borat"];

/// An ordered, immutable list of movie titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    titles: &'static [&'static str],
}

impl Catalog {
    /// The built-in five-movie catalog.
    pub const fn builtin() -> Self {
        Catalog { titles: &MOVIES }
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Look up a movie by its one-based number.
    pub fn by_number(&self, number: usize) -> Option<Movie> {
        let index = number.checked_sub(1)?;
        self.titles.get(index).map(|&title| Movie { index, title })
    }

    /// All movies in display order.
    pub fn iter(&self) -> impl Iterator<Item = Movie> + '_ {
        self.titles
            .iter()
            .enumerate()
            .map(|(index, &title)| Movie { index, title })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}

/// Validate the movie-number field against `catalog`.
pub fn evaluate_choice(raw: &str, catalog: &Catalog) -> ChoiceVerdict {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ChoiceVerdict::Empty;
    }

    let Some(number) = parse_leading_int(trimmed) else {
        return ChoiceVerdict::NotANumber;
    };

    match usize::try_from(number).ok().and_then(|n| catalog.by_number(n)) {
        Some(movie) => ChoiceVerdict::Accepted { movie },
        None => ChoiceVerdict::OutOfCatalogRange { number },
    }
}

impl ChoiceVerdict {
    /// Inline message shown under the choice field. `None` when accepted.
    pub fn message(&self, catalog_size: usize) -> Option<String> {
        match self {
            ChoiceVerdict::Empty => Some(format!("Please enter a number from 1 to {catalog_size}.")),
            ChoiceVerdict::NotANumber => {
                Some(format!("That is not a number. Enter 1–{catalog_size}."))
            }
            ChoiceVerdict::OutOfCatalogRange { .. } => {
                Some(format!("Please enter a number between 1 and {catalog_size}."))
            }
            ChoiceVerdict::Accepted { .. } => None,
        }
    }

    /// The picked movie, if any.
    pub fn movie(&self) -> Option<Movie> {
        match self {
            ChoiceVerdict::Accepted { movie } => Some(*movie),
            _ => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CATALOG: Catalog = Catalog::builtin();

    #[test]
    fn builtin_catalog_has_five_movies_in_order() {
        let titles: Vec<_> = CATALOG.iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["Superbad", "The Hangover", "Sausage Party", "Ted", "Borat"]);
        assert_eq!(CATALOG.len(), 5);
        assert!(!CATALOG.is_empty());
    }

    #[test]
    fn by_number_is_one_based() {
        assert_eq!(CATALOG.by_number(0), None);
        assert_eq!(CATALOG.by_number(1).map(|m| m.title), Some("Superbad"));
        assert_eq!(CATALOG.by_number(5).map(|m| m.title), Some("Borat"));
        assert_eq!(CATALOG.by_number(6), None);
    }

    #[test]
    fn three_picks_sausage_party() {
        let verdict = evaluate_choice("3", &CATALOG);
        assert_eq!(
            verdict,
            ChoiceVerdict::Accepted {
                movie: Movie { index: 2, title: "Sausage Party" }
            }
        );
    }

    #[test]
    fn zero_and_six_are_out_of_range() {
        assert_eq!(
            evaluate_choice("0", &CATALOG),
            ChoiceVerdict::OutOfCatalogRange { number: 0 }
        );
        assert_eq!(
            evaluate_choice("6", &CATALOG),
            ChoiceVerdict::OutOfCatalogRange { number: 6 }
        );
        assert_eq!(
            evaluate_choice("-2", &CATALOG),
            ChoiceVerdict::OutOfCatalogRange { number: -2 }
        );
    }

    #[test]
    fn letters_are_not_a_number() {
        assert_eq!(evaluate_choice("abc", &CATALOG), ChoiceVerdict::NotANumber);
    }

    #[test]
    fn blank_is_empty() {
        assert_eq!(evaluate_choice("  ", &CATALOG), ChoiceVerdict::Empty);
    }

    #[test]
    fn trailing_text_is_tolerated() {
        assert_eq!(
            evaluate_choice(" 4th ", &CATALOG).movie().map(|m| m.title),
            Some("Ted")
        );
    }

    #[test]
    fn messages_use_catalog_size() {
        assert_eq!(
            ChoiceVerdict::Empty.message(5).as_deref(),
            Some("Please enter a number from 1 to 5.")
        );
        assert_eq!(
            ChoiceVerdict::NotANumber.message(5).as_deref(),
            Some("That is not a number. Enter 1–5.")
        );
        assert_eq!(
            ChoiceVerdict::OutOfCatalogRange { number: 9 }.message(5).as_deref(),
            Some("Please enter a number between 1 and 5.")
        );
        assert_eq!(evaluate_choice("1", &CATALOG).message(5), None);
    }

    proptest! {
        #[test]
        fn accepted_movie_always_belongs_to_catalog(n in -20i64..20) {
            if let ChoiceVerdict::Accepted { movie } = evaluate_choice(&n.to_string(), &CATALOG) {
                prop_assert_eq!(CATALOG.by_number(movie.number()), Some(movie));
                prop_assert_eq!(movie.number() as i64, n);
            } else {
                prop_assert!(!(1..=5).contains(&n));
            }
        }
    }
}
