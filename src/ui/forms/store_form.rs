//! Store creation wizard

use super::field_renderer::{draw_field, draw_field_inline, FieldView, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{DomainStatus, FieldKind, FormFieldId, FormFocus, FormState};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

const FORM_MAX_WIDTH: u16 = 72;
const SUBMIT_BUTTON_WIDTH: u16 = 22;

/// Rows the bordered layout needs: each field with its message line, then the button
const FULL_LAYOUT_HEIGHT: u16 =
    FormFieldId::ORDER.len() as u16 * (FIELD_HEIGHT + 1) + BUTTON_HEIGHT;

/// Draw the store creation form
pub fn draw_store_form(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = app.form.as_ref() else {
        return;
    };
    let state = form.state();

    let [column] = Layout::horizontal([Constraint::Max(FORM_MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(area);

    let block = Block::default()
        .title(" Create a store ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(column);
    frame.render_widget(block, column);

    let button_row = if inner.height >= FULL_LAYOUT_HEIGHT {
        draw_bordered_fields(frame, inner, state, &app.domain_suffix)
    } else {
        draw_compact_fields(frame, inner, state, &app.domain_suffix)
    };

    let [button_area] = Layout::horizontal([Constraint::Length(SUBMIT_BUTTON_WIDTH)])
        .flex(Flex::Center)
        .areas(button_row);
    render_button(
        frame,
        button_area,
        state.submit_label(),
        state.focus == FormFocus::SubmitButton,
        state.can_submit(),
    );
}

/// One bordered box per field with a message line under each.
/// Returns the area left for the submit button.
fn draw_bordered_fields(
    frame: &mut Frame,
    inner: Rect,
    state: &FormState,
    suffix: &str,
) -> Rect {
    let mut constraints = Vec::with_capacity(FormFieldId::ORDER.len() * 2 + 2);
    for _ in FormFieldId::ORDER {
        constraints.push(Constraint::Length(FIELD_HEIGHT));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in FormFieldId::ORDER.into_iter().enumerate() {
        let is_active = state.focus == FormFocus::Field(field);
        draw_field(
            frame,
            chunks[i * 2],
            field_view(state, field, is_active, suffix),
        );
        if let Some(message) = field_message(state, field) {
            frame.render_widget(Paragraph::new(message), chunks[i * 2 + 1]);
        }
    }
    chunks[FormFieldId::ORDER.len() * 2]
}

/// One row per field; message rows only where there is something to say.
/// Returns the area left for the submit button.
fn draw_compact_fields(
    frame: &mut Frame,
    inner: Rect,
    state: &FormState,
    suffix: &str,
) -> Rect {
    let messages: Vec<Option<Line<'_>>> = FormFieldId::ORDER
        .into_iter()
        .map(|field| field_message(state, field))
        .collect();

    let mut constraints = Vec::with_capacity(FormFieldId::ORDER.len() * 2 + 3);
    for message in &messages {
        constraints.push(Constraint::Length(1));
        if message.is_some() {
            constraints.push(Constraint::Length(1));
        }
    }
    constraints.push(Constraint::Length(1)); // gap above the button
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let mut row = 0;
    for (field, message) in FormFieldId::ORDER.into_iter().zip(messages) {
        let is_active = state.focus == FormFocus::Field(field);
        draw_field_inline(
            frame,
            chunks[row],
            field_view(state, field, is_active, suffix),
        );
        row += 1;
        if let Some(message) = message {
            frame.render_widget(
                Paragraph::new(message).block(Block::default().padding(Padding::left(2))),
                chunks[row],
            );
            row += 1;
        }
    }
    chunks[row + 1]
}

fn field_view<'a>(
    state: &'a FormState,
    field: FormFieldId,
    is_active: bool,
    domain_suffix: &str,
) -> FieldView<'a> {
    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let value = state.display_value(field);

    let (spans, cursor) = match (field, field.kind()) {
        (FormFieldId::Domain, _) => (
            vec![
                Span::styled(value, text_style),
                Span::styled(
                    format!(".{domain_suffix}"),
                    Style::default().fg(Color::DarkGray),
                ),
            ],
            Some(1),
        ),
        (_, FieldKind::Text) => (vec![Span::styled(value, text_style)], Some(1)),
        (_, FieldKind::Choice) => {
            let arrow = if is_active {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            (
                vec![
                    Span::styled("◀ ", arrow),
                    Span::styled(value, text_style.add_modifier(Modifier::BOLD)),
                    Span::styled(" ▶", arrow),
                ],
                None,
            )
        }
    };

    FieldView {
        label: field.label(),
        value: spans,
        placeholder: field.placeholder(),
        cursor,
        is_active,
        has_error: state.error(field).is_some(),
    }
}

/// Line under a field: its validation error, else the domain availability
fn field_message(state: &FormState, field: FormFieldId) -> Option<Line<'_>> {
    if let Some(error) = state.error(field) {
        // Errors from an earlier submit fade once the form has been edited
        let style = if state.validation_stale {
            Style::default().fg(Color::Red).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Red)
        };
        return Some(Line::from(Span::styled(format!(" {error}"), style)));
    }
    if field != FormFieldId::Domain {
        return None;
    }

    let (text, color) = match state.domain_status {
        DomainStatus::Unchecked => return None,
        DomainStatus::Pending => ("Checking availability...", Color::Yellow),
        DomainStatus::Available => (state.domain_message.as_deref()?, Color::Green),
        DomainStatus::Taken | DomainStatus::Error => (state.domain_message.as_deref()?, Color::Red),
    };
    Some(Line::from(Span::styled(
        format!(" {text}"),
        Style::default().fg(color),
    )))
}
