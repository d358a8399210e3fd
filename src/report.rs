//! Output formatting for the one-shot commands.
//!
//! Pure functions: (verdict, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::types::{AgeVerdict, ChoiceVerdict, Movie, OutputFormat};

/// JSON shape for `check-age`.
#[derive(Debug, Serialize)]
struct AgeReport<'a> {
    input: &'a str,
    #[serde(flatten)]
    verdict: AgeVerdict,
    message: Option<&'static str>,
    may_continue: bool,
}

/// JSON shape for `choose`.
#[derive(Debug, Serialize)]
struct ChoiceReport<'a> {
    input: &'a str,
    #[serde(flatten)]
    verdict: ChoiceVerdict,
    message: Option<String>,
}

/// JSON shape for one catalog line.
#[derive(Debug, Serialize)]
struct CatalogEntry {
    number: usize,
    title: &'static str,
}

/// Format the result of an age check.
pub fn format_age(input: &str, verdict: &AgeVerdict, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(match verdict.message() {
            Some(message) => format!("Rejected: {message}\n"),
            None => "Accepted: you may choose a movie.\n".to_string(),
        }),
        OutputFormat::Json => to_json(&AgeReport {
            input,
            verdict: *verdict,
            message: verdict.message(),
            may_continue: verdict.is_accepted(),
        }),
    }
}

/// Format the result of a movie choice.
pub fn format_choice(
    input: &str,
    verdict: &ChoiceVerdict,
    catalog: &Catalog,
    format: OutputFormat,
) -> Result<String> {
    let message = verdict.message(catalog.len());
    match format {
        OutputFormat::Human => Ok(match (verdict.movie(), message) {
            (Some(movie), _) => format!("You chose: {}\n", movie.title),
            (None, Some(message)) => format!("Rejected: {message}\n"),
            (None, None) => String::new(),
        }),
        OutputFormat::Json => to_json(&ChoiceReport {
            input,
            verdict: *verdict,
            message,
        }),
    }
}

/// Format the numbered catalog.
pub fn format_catalog(catalog: &Catalog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(catalog.iter().map(|m| catalog_line(&m) + "\n").collect()),
        OutputFormat::Json => {
            let entries: Vec<CatalogEntry> = catalog
                .iter()
                .map(|m| CatalogEntry {
                    number: m.number(),
                    title: m.title,
                })
                .collect();
            to_json(&entries)
        }
    }
}

/// "3. Sausage Party"
pub fn catalog_line(movie: &Movie) -> String {
    format!("{}. {}", movie.number(), movie.title)
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

// ============================================================================
// TESTS
// ============================================================================
