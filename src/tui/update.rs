//! State transitions: (App, Action) → App.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Each screen defines which actions it accepts. Unhandled actions
//! leave the state unchanged.

use crate::types::Screen;

use super::state::{Action, App};

/// Apply one action to the app.
pub fn update(app: &mut App, action: &Action) {
    if *action == Action::Quit {
        app.should_quit = true;
        return;
    }

    if app.alert.is_some() {
        update_alert(app, action);
        return;
    }

    match app.form.screen() {
        Screen::Age => update_age(app, action),
        Screen::Movies => update_movies(app, action),
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Modal open: Enter or Esc dismisses, everything else is swallowed.
fn update_alert(app: &mut App, action: &Action) {
    if matches!(action, Action::Submit | Action::Back) {
        app.alert = None;
    }
}

/// Age screen: edit, submit, Esc quits.
fn update_age(app: &mut App, action: &Action) {
    match action {
        Action::Submit => {
            app.form.submit_age();
        }
        Action::Back => app.should_quit = true,
        _ => edit_active_field(app, action),
    }
}

/// Movie screen: edit, submit, Esc goes back to the age screen.
fn update_movies(app: &mut App, action: &Action) {
    match action {
        Action::Submit => {
            app.form.submit_choice(&mut app.alert);
        }
        Action::Back => app.form.return_to_age_screen(),
        _ => edit_active_field(app, action),
    }
}

/// Typing and deleting in whichever field the current screen shows.
fn edit_active_field(app: &mut App, action: &Action) {
    let (text, max_len) = app.form.active_input_mut();
    match action {
        Action::Input(c) if !c.is_control() && text.chars().count() < max_len => {
            text.push(*c);
        }
        Action::Backspace => {
            text.pop();
        }
        _ => {}
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{AGE_INPUT_MAX_LEN, CHOICE_INPUT_MAX_LEN};

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            update(app, &Action::Input(c));
        }
    }

    fn app_on_movies() -> App {
        let mut app = App::default();
        type_text(&mut app, "25");
        update(&mut app, &Action::Submit);
        assert_eq!(app.form.screen(), Screen::Movies);
        app
    }

    // -- Age --

    #[test]
    fn typing_fills_age_field() {
        let mut app = App::default();
        type_text(&mut app, "42");
        assert_eq!(app.form.age_input(), "42");
    }

    #[test]
    fn age_field_is_capped() {
        let mut app = App::default();
        type_text(&mut app, "12345");
        assert_eq!(app.form.age_input().chars().count(), AGE_INPUT_MAX_LEN);
        assert_eq!(app.form.age_input(), "123");
    }

    #[test]
    fn backspace_deletes_last_char() {
        let mut app = App::default();
        type_text(&mut app, "42");
        update(&mut app, &Action::Backspace);
        assert_eq!(app.form.age_input(), "4");
    }

    #[test]
    fn backspace_on_empty_field_is_noop() {
        let mut app = App::default();
        update(&mut app, &Action::Backspace);
        assert_eq!(app.form.age_input(), "");
    }

    #[test]
    fn rejected_age_stays_with_error() {
        let mut app = App::default();
        type_text(&mut app, "19");
        update(&mut app, &Action::Submit);
        assert_eq!(app.form.screen(), Screen::Age);
        assert!(app.form.age_error().is_some());
    }

    #[test]
    fn accepted_age_moves_to_movies() {
        let app = app_on_movies();
        assert_eq!(app.form.choice_input(), "");
        assert_eq!(app.form.selected(), None);
    }

    #[test]
    fn esc_on_age_quits() {
        let mut app = App::default();
        update(&mut app, &Action::Back);
        assert!(app.should_quit);
    }

    #[test]
    fn quit_works_everywhere() {
        let mut app = app_on_movies();
        update(&mut app, &Action::Quit);
        assert!(app.should_quit);
    }

    // -- Movies --

    #[test]
    fn choice_field_is_capped() {
        let mut app = app_on_movies();
        type_text(&mut app, "34");
        assert_eq!(app.form.choice_input().chars().count(), CHOICE_INPUT_MAX_LEN);
        assert_eq!(app.form.choice_input(), "3");
    }

    #[test]
    fn accepted_choice_opens_modal() {
        let mut app = app_on_movies();
        type_text(&mut app, "5");
        update(&mut app, &Action::Submit);
        assert_eq!(app.form.selected().map(|m| m.title), Some("Borat"));
        let alert = app.alert.as_ref().expect("modal should be open");
        assert_eq!(alert.body, "You chose: Borat");
    }

    #[test]
    fn rejected_choice_does_not_open_modal() {
        let mut app = app_on_movies();
        type_text(&mut app, "0");
        update(&mut app, &Action::Submit);
        assert!(app.alert.is_none());
        assert_eq!(
            app.form.choice_error().as_deref(),
            Some("Please enter a number between 1 and 5.")
        );
    }

    #[test]
    fn esc_on_movies_returns_to_age_keeping_text() {
        let mut app = app_on_movies();
        update(&mut app, &Action::Back);
        assert_eq!(app.form.screen(), Screen::Age);
        assert_eq!(app.form.age_input(), "25");
        assert!(!app.should_quit);
    }

    // -- Modal --

    #[test]
    fn modal_swallows_typing_and_dismisses_on_enter() {
        let mut app = app_on_movies();
        type_text(&mut app, "1");
        update(&mut app, &Action::Submit);
        assert!(app.alert.is_some());

        update(&mut app, &Action::Backspace);
        update(&mut app, &Action::Input('2'));
        assert_eq!(app.form.choice_input(), "1");
        assert!(app.alert.is_some());

        update(&mut app, &Action::Submit);
        assert!(app.alert.is_none());
        assert_eq!(app.form.screen(), Screen::Movies);
    }

    #[test]
    fn esc_dismisses_modal_without_leaving_screen() {
        let mut app = app_on_movies();
        type_text(&mut app, "2");
        update(&mut app, &Action::Submit);
        update(&mut app, &Action::Back);
        assert!(app.alert.is_none());
        assert_eq!(app.form.screen(), Screen::Movies);
    }
}
