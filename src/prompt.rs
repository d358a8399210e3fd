//! Line-oriented front end: the same form over plain stdin/stdout.
//!
//! Generic over `BufRead`/`Write` so sessions can be scripted in tests.
//! Typing `back` on the movie prompt returns to the age prompt; `quit`
//! or end of input ends the session.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::form::{Form, Notifier};
use crate::report::catalog_line;
use crate::types::{Movie, Screen};

const BACK: &str = "back";
const QUIT: &str = "quit";

/// Blocking acknowledgment on a line terminal: print, then wait for Enter.
struct PressEnter<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
    result: io::Result<()>,
}

impl<R: BufRead, W: Write> PressEnter<'_, R, W> {
    fn acknowledge(&mut self, movie: &Movie) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Movie Selected")?;
        writeln!(self.output, "You chose: {}", movie.title)?;
        write!(self.output, "Press Enter to continue")?;
        self.output.flush()?;
        let mut buf = String::new();
        self.input.read_line(&mut buf)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Notifier for PressEnter<'_, R, W> {
    fn movie_selected(&mut self, movie: &Movie) {
        self.result = self.acknowledge(movie);
    }
}

/// Run a prompt session until `quit` or end of input.
///
/// Returns the movie selected when the session ended, if any.
pub fn run_prompt<R: BufRead, W: Write>(
    form: &mut Form,
    mut input: R,
    mut output: W,
) -> io::Result<Option<Movie>> {
    let mut shown: Option<Screen> = None;

    loop {
        let screen = form.screen();
        if shown != Some(screen) {
            write_header(form, &mut output)?;
            shown = Some(screen);
        }

        let label = match screen {
            Screen::Age => "Age: ",
            Screen::Movies => "Choice (or 'back'): ",
        };
        write!(output, "{label}")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            writeln!(output)?;
            break;
        };
        let command = line.trim();
        if command.eq_ignore_ascii_case(QUIT) {
            break;
        }

        match screen {
            Screen::Age => {
                form.set_age_input(line);
                form.submit_age();
                if let Some(message) = form.age_error() {
                    writeln!(output, "{message}")?;
                }
            }
            Screen::Movies if command.eq_ignore_ascii_case(BACK) => {
                form.return_to_age_screen();
            }
            Screen::Movies => {
                form.set_choice_input(line);
                let mut ack = PressEnter {
                    input: &mut input,
                    output: &mut output,
                    result: Ok(()),
                };
                form.submit_choice(&mut ack);
                ack.result?;

                if let Some(message) = form.choice_error() {
                    writeln!(output, "{message}")?;
                }
                if let Some(movie) = form.selected() {
                    writeln!(output, "Current selection: {}", movie.title)?;
                }
            }
        }
    }

    debug!(selected = ?form.selected(), "prompt session ended");
    Ok(form.selected())
}

fn write_header<W: Write>(form: &Form, output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    match form.screen() {
        Screen::Age => {
            writeln!(output, "Age Check")?;
            writeln!(
                output,
                "You must be over 18. Only if you are over 21 may you continue."
            )?;
        }
        Screen::Movies => {
            let catalog = form.catalog();
            writeln!(output, "Choose a Movie")?;
            writeln!(output, "Type a number from 1–{}:", catalog.len())?;
            for movie in catalog.iter() {
                writeln!(output, "  {}", catalog_line(&movie))?;
            }
        }
    }
    Ok(())
}

/// Read one line without its terminator. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    let trimmed_len = buf.trim_end_matches(['\n', '\r']).len();
    buf.truncate(trimmed_len);
    Ok(Some(buf))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str) -> (Form, Option<Movie>, String) {
        let mut form = Form::default();
        let mut out = Vec::new();
        let selected = run_prompt(&mut form, script.as_bytes(), &mut out).unwrap();
        (form, selected, String::from_utf8(out).unwrap())
    }

    #[test]
    fn eof_on_age_prompt_ends_quietly() {
        let (form, selected, out) = session("");
        assert_eq!(selected, None);
        assert_eq!(form.screen(), Screen::Age);
        assert!(out.contains("Age Check"));
    }

    #[test]
    fn rejections_are_printed_inline() {
        let (form, _, out) = session("\nabc\n150\n18\n20\nquit\n");
        assert!(out.contains("Please enter your age."));
        assert!(out.contains("Age must be a number."));
        assert!(out.contains("Enter a realistic age between 0 and 100."));
        assert!(out.contains("You are not over 18."));
        assert!(out.contains("You are over 18 but not over 21, so you can't continue."));
        assert_eq!(form.screen(), Screen::Age);
    }

    #[test]
    fn accepted_age_lists_catalog() {
        let (form, _, out) = session("25\n");
        assert_eq!(form.screen(), Screen::Movies);
        assert!(out.contains("Choose a Movie"));
        assert!(out.contains("3. Sausage Party"));
    }

    #[test]
    fn choice_is_acknowledged_and_returned() {
        // Third line answers the "Press Enter" pause.
        let (_, selected, out) = session("25\n3\n\nquit\n");
        assert_eq!(selected.map(|m| m.title), Some("Sausage Party"));
        assert!(out.contains("Movie Selected"));
        assert!(out.contains("You chose: Sausage Party"));
        assert!(out.contains("Current selection: Sausage Party"));
    }

    #[test]
    fn bad_choice_shows_catalog_message() {
        let (_, selected, out) = session("25\n9\nx\n\n");
        assert_eq!(selected, None);
        assert!(out.contains("Please enter a number between 1 and 5."));
        assert!(out.contains("That is not a number. Enter 1–5."));
        assert!(out.contains("Please enter a number from 1 to 5."));
    }

    #[test]
    fn back_returns_to_age_and_reentry_clears_selection() {
        let (form, selected, out) = session("30\n1\n\nback\n30\nquit\n");
        assert_eq!(form.screen(), Screen::Movies);
        assert_eq!(form.age_input(), "30");
        assert_eq!(selected, None);
        assert_eq!(out.matches("Choose a Movie").count(), 2);
    }
}
