//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of a bordered single-line field
pub const FIELD_HEIGHT: u16 = 3;

/// What a single field shows
pub struct FieldView<'a> {
    pub label: &'a str,
    /// Rendered as given; when every span is empty the placeholder is shown
    pub value: Vec<Span<'a>>,
    pub placeholder: &'a str,
    /// Span index the cursor is inserted at while active; `None` for no cursor
    pub cursor: Option<usize>,
    pub is_active: bool,
    pub has_error: bool,
}

impl<'a> FieldView<'a> {
    /// Value spans with the placeholder and cursor applied
    fn into_spans(self) -> Vec<Span<'a>> {
        let is_empty = self.value.iter().all(|s| s.content.is_empty());
        let mut spans = if is_empty {
            vec![Span::styled(
                self.placeholder,
                Style::default().fg(Color::DarkGray),
            )]
        } else {
            self.value
        };

        if let Some(at) = self.cursor.filter(|_| self.is_active) {
            let at = if is_empty { 0 } else { at.min(spans.len()) };
            spans.insert(at, Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
        spans
    }

    fn accent(&self) -> Style {
        if self.is_active {
            Style::default().fg(Color::Cyan)
        } else if self.has_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

/// Draw a bordered single-line field
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldView<'_>) {
    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(field.accent());

    let line = Line::from(field.into_spans());
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw a field on one row as `label: value`, for short terminals
pub fn draw_field_inline(frame: &mut Frame, area: Rect, field: FieldView<'_>) {
    let marker = if field.is_active { "› " } else { "  " };
    let label_style = if field.is_active {
        field.accent().add_modifier(Modifier::BOLD)
    } else if field.has_error {
        field.accent()
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(format!("{}: ", field.label), label_style),
    ];
    spans.extend(field.into_spans());
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
