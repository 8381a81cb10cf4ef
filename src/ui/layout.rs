//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{COPY_HINT, SUBMIT_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into a one-line header and the main content.
/// The bottom line is reserved for the status bar.
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the title line with a breadcrumb for the current view
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let crumb = match app.state.current_view {
        View::StoreForm => "Create your store",
        View::Products => "Products",
        View::ProductDetail => "Products / Detail",
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Storefront ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(crumb, Style::default().fg(Color::Cyan)),
    ]));
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    // View-specific hints
    let hints = get_view_hints(&app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::StoreForm => format!(
            "Tab:next  ←/→:choose  {SUBMIT_SHORTCUT}:create  Esc:quit"
        ),
        View::Products => "h/j/k/l:nav  Enter:view  r:reload  q:quit".to_string(),
        View::ProductDetail => format!("j/k:scroll  {COPY_HINT}  r:reload  Esc:back"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_header_and_status() {
        let (header, main) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 1);
        assert_eq!(main.y, 1);
        assert_eq!(main.height, 22);
    }

    #[test]
    fn test_form_hints_mention_submit_shortcut() {
        assert!(get_view_hints(&View::StoreForm).contains(SUBMIT_SHORTCUT));
        assert!(get_view_hints(&View::ProductDetail).contains("Esc:back"));
    }
}
