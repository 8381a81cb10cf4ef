//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the front alert of the queue, centered on the screen.
///
/// `queued` is the total number of alerts waiting, including this one.
pub fn render_error_dialog(frame: &mut Frame, message: &str, queued: usize) {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key),
        Span::raw(" or "),
        Span::styled("Esc", key),
        Span::raw(" to dismiss"),
    ];

    let title = if queued > 1 {
        format!("Error (1 of {queued})")
    } else {
        "Error".to_string()
    };

    render_dialog(
        frame,
        DialogConfig {
            title: &title,
            title_color: Color::Red,
            border_color: Color::Red,
            message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
