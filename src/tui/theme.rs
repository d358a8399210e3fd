//! TUI color semantics and style constants.
//!
//! Pure data, consumed by the rendering layer.
//!
//! Color semantics:
//! - Cyan: emphasis and interactive elements (thresholds, keybinding hints, selection)
//! - Red: validation feedback
//! - Dim: placeholders and help

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Validation feedback under a field: bold red.
pub const STYLE_ERROR: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// Current selection: bold cyan.
pub const STYLE_INFO: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Emphasized words inside prose ("over 18"): bold cyan.
pub const STYLE_EMPHASIS: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Interactive element / keybinding hint: cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized text: dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / card heading.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Subtitle prose.
pub const STYLE_SUBTITLE: Style = Style::new().fg(Color::Gray);

/// Typed text in a field.
pub const STYLE_INPUT: Style = Style::new().fg(Color::White);

/// Placeholder in an empty field.
pub const STYLE_PLACEHOLDER: Style = Style::new().fg(Color::DarkGray);

/// Catalog rows.
pub const STYLE_OPTION: Style = Style::new().fg(Color::White);

/// Card and field borders.
pub const STYLE_BORDER: Style = Style::new().fg(Color::DarkGray);

/// Modal border.
pub const STYLE_ALERT_BORDER: Style = Style::new().fg(Color::Cyan);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
