//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated render function. The main `render()`
//! dispatches on the form's current screen and draws the modal on top
//! when one is open.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::form::Form;
use crate::report::catalog_line;
use crate::types::Screen;

use super::state::{Alert, App};
use super::theme;

/// Widest the form card grows.
const CARD_MAX_WIDTH: u16 = 64;

/// Modal size.
const ALERT_WIDTH: u16 = 40;
const ALERT_HEIGHT: u16 = 7;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Common layout: title bar at top, content in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(), chunks[0]);
    frame.render_widget(render_help(app), chunks[2]);

    let card_width = chunks[1].width.min(CARD_MAX_WIDTH);
    let card = centered_rect(card_width, chunks[1].height, chunks[1]);

    match app.form.screen() {
        Screen::Age => render_age(&app.form, frame, card),
        Screen::Movies => render_movies(&app.form, frame, card),
    }

    if let Some(alert) = &app.alert {
        render_alert(alert, frame, area);
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![Span::styled("movie-gate", theme::STYLE_TITLE)]))
}

/// Help line showing available keybindings for the current state.
fn render_help(app: &App) -> Paragraph<'static> {
    let help_text = if app.alert.is_some() {
        "[Enter] OK"
    } else {
        match app.form.screen() {
            Screen::Age => "[Enter] check age  [Esc] quit",
            Screen::Movies => "[Enter] confirm choice  [Esc] back to age screen  [^C] quit",
        }
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// One-line text field: typed text with a cursor, or a dim placeholder.
fn input_line(text: &str, placeholder: String) -> Line<'static> {
    if text.is_empty() {
        Line::from(vec![
            Span::styled("> ", theme::STYLE_INTERACTIVE),
            Span::styled(placeholder, theme::STYLE_PLACEHOLDER),
        ])
    } else {
        Line::from(vec![
            Span::styled("> ", theme::STYLE_INTERACTIVE),
            Span::styled(text.to_string(), theme::STYLE_INPUT),
            Span::styled("_", theme::STYLE_INTERACTIVE),
        ])
    }
}

fn card(lines: Vec<Line<'static>>) -> Paragraph<'static> {
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(Block::bordered().border_style(theme::STYLE_BORDER))
}

// ============================================================================
// SCREEN: AGE
// ============================================================================

fn render_age(form: &Form, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("Age Check", theme::STYLE_TITLE)),
        Line::from(""),
        Line::from(vec![
            Span::styled("You must be ", theme::STYLE_SUBTITLE),
            Span::styled("over 18", theme::STYLE_EMPHASIS),
            Span::styled(". Only if you are ", theme::STYLE_SUBTITLE),
            Span::styled("over 21", theme::STYLE_EMPHASIS),
            Span::styled(" may you continue.", theme::STYLE_SUBTITLE),
        ]),
        Line::from(""),
        input_line(form.age_input(), "Type your age".to_string()),
        Line::from(""),
    ];

    if let Some(message) = form.age_error() {
        lines.push(Line::from(Span::styled(message, theme::STYLE_ERROR)));
    }

    frame.render_widget(card(lines), area);
}

// ============================================================================
// SCREEN: MOVIES
// ============================================================================

fn render_movies(form: &Form, frame: &mut Frame, area: Rect) {
    let catalog = form.catalog();

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("Choose a Movie", theme::STYLE_TITLE)),
        Line::from(""),
        Line::from(Span::styled(
            format!("Type a number from 1–{}:", catalog.len()),
            theme::STYLE_SUBTITLE,
        )),
        Line::from(""),
    ];

    for movie in catalog.iter() {
        lines.push(Line::from(Span::styled(catalog_line(&movie), theme::STYLE_OPTION)));
    }

    lines.push(Line::from(""));
    lines.push(input_line(form.choice_input(), format!("Enter 1–{}", catalog.len())));
    lines.push(Line::from(""));

    if let Some(message) = form.choice_error() {
        lines.push(Line::from(Span::styled(message, theme::STYLE_ERROR)));
    }

    if let Some(movie) = form.selected() {
        lines.push(Line::from(Span::styled(
            format!("Current selection: {}", movie.title),
            theme::STYLE_INFO,
        )));
    }

    frame.render_widget(card(lines), area);
}

// ============================================================================
// MODAL
// ============================================================================

fn render_alert(alert: &Alert, frame: &mut Frame, area: Rect) {
    let rect = centered_rect(ALERT_WIDTH, ALERT_HEIGHT, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(alert.body.clone(), theme::STYLE_INFO)),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", theme::STYLE_INTERACTIVE)),
    ];

    let block = Block::bordered()
        .title(Span::styled(alert.title, theme::STYLE_TITLE))
        .border_style(theme::STYLE_ALERT_BORDER);

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(block);

    frame.render_widget(Clear, rect);
    frame.render_widget(paragraph, rect);
}

// ============================================================================
// TESTS
// ============================================================================
