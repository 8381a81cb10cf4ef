//! Product grid and detail views

use crate::app::App;
use crate::state::{LoadState, Product};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Grid layout configuration
const MIN_CARD_WIDTH: u16 = 24;
const CARD_HEIGHT: u16 = 6; // 1 (top border) + 4 (content) + 1 (bottom border)
const CARD_SPACING_H: u16 = 1;

/// Rows taken by the header, the status bar and the grid's outer border
const GRID_CHROME_ROWS: u16 = 4;

/// Helper for grid layout calculations
struct GridLayout {
    columns: usize,
    card_width: u16,
}

impl GridLayout {
    /// Create a new grid layout based on available width
    fn new(area_width: u16) -> Self {
        // Account for outer block borders (2 chars total)
        let usable_width = area_width.saturating_sub(2);

        let columns = if usable_width >= MIN_CARD_WIDTH {
            ((usable_width + CARD_SPACING_H) / (MIN_CARD_WIDTH + CARD_SPACING_H)) as usize
        } else {
            1
        };
        let columns = columns.max(1);

        // Distribute remaining space evenly across cards
        let total_spacing = (columns.saturating_sub(1) as u16) * CARD_SPACING_H;
        let card_width = usable_width.saturating_sub(total_spacing) / columns as u16;

        Self {
            columns,
            card_width,
        }
    }

    /// Convert linear index to (row, col)
    fn index_to_pos(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// Card area for a position, counting rows from the first visible one
    fn card_area(&self, inner: Rect, visible_row: usize, col: usize) -> Rect {
        Rect {
            x: inner.x + (col as u16) * (self.card_width + CARD_SPACING_H),
            y: inner.y + (visible_row as u16) * CARD_HEIGHT,
            width: self.card_width,
            height: CARD_HEIGHT,
        }
    }
}

/// Number of grid columns that fit in a terminal `width` columns wide
pub fn grid_columns(width: u16) -> usize {
    GridLayout::new(width).columns
}

/// Number of full card rows that fit in a terminal `height` rows tall
pub fn grid_visible_rows(height: u16) -> usize {
    (height.saturating_sub(GRID_CHROME_ROWS) / CARD_HEIGHT).max(1) as usize
}

/// Shorten `text` to `max` characters, marking the cut with "..."
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max > 3 {
        let cut: String = text.chars().take(max - 3).collect();
        format!("{cut}...")
    } else {
        text.chars().take(max).collect()
    }
}

fn inner_rect(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn draw_centered_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, inner_rect(area));
}

/// Draw the product grid
pub fn draw_grid(frame: &mut Frame, area: Rect, app: &App) {
    let title = match app.state.catalog.loaded() {
        Some(products) => format!(" Products ({}) ", products.len()),
        None => " Products ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let products = match &app.state.catalog {
        LoadState::Idle | LoadState::Loading => {
            draw_centered_message(frame, area, "Loading products...", Color::DarkGray);
            return;
        }
        LoadState::Failed(message) => {
            draw_centered_message(frame, area, message, Color::Red);
            return;
        }
        LoadState::Loaded(products) if products.is_empty() => {
            draw_centered_message(frame, area, "No products found.", Color::DarkGray);
            return;
        }
        LoadState::Loaded(products) => products,
    };

    let grid = GridLayout::new(area.width);
    let inner = inner_rect(area);
    let first_row = app.state.scroll_offset;

    for (idx, product) in products.iter().enumerate() {
        let (row, col) = grid.index_to_pos(idx);
        if row < first_row {
            continue;
        }
        let card_area = grid.card_area(inner, row - first_row, col);

        // Stop once cards fall below the visible area
        if card_area.y + card_area.height > inner.y + inner.height {
            break;
        }

        let is_selected = idx == app.state.selected_index;
        draw_product_card(frame, card_area, product, is_selected);
    }
}

/// Draw a single product card
fn draw_product_card(frame: &mut Frame, area: Rect, product: &Product, is_selected: bool) {
    let border_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let bg_style = if is_selected {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(bg_style);
    frame.render_widget(block, area);

    let inner = inner_rect(area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let width = inner.width as usize;

    let name_style = if is_selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let content = vec![
        Line::from(Span::styled(truncate(&product.name, width), name_style)),
        Line::from(Span::styled(
            product.display_price(),
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            truncate(&product.description, width),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            truncate(product.cover_image(), width),
            Style::default().fg(Color::Blue),
        )),
    ];
    frame.render_widget(Paragraph::new(content), inner);
}

/// Draw the product detail view
pub fn draw_detail(frame: &mut Frame, area: Rect, app: &App) {
    let block = |title: String| {
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
    };

    let product = match &app.state.product_detail {
        LoadState::Idle | LoadState::Loading => {
            let message = Paragraph::new("Loading product...")
                .style(Style::default().fg(Color::DarkGray))
                .block(block(" Product ".to_string()));
            frame.render_widget(message, area);
            return;
        }
        LoadState::Failed(error) => {
            let message = Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .block(block(" Product ".to_string()));
            frame.render_widget(message, area);
            return;
        }
        LoadState::Loaded(product) => product,
    };

    let label = Style::default().fg(Color::DarkGray);
    let mut content = vec![
        Line::from(vec![
            Span::raw("Price: "),
            Span::styled(
                product.display_price(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("ID: ", label),
            Span::styled(&product.id, label),
        ]),
        Line::from(vec![
            Span::styled("Image: ", label),
            Span::styled(product.cover_image(), Style::default().fg(Color::Blue)),
        ]),
        Line::from(vec![
            Span::styled("Video: ", label),
            match product.video_url() {
                Some(url) => Span::styled(url, Style::default().fg(Color::Blue)),
                None => Span::styled("none", label),
            },
        ]),
        Line::from(""),
        Line::from(Span::styled("─".repeat(40), label)),
        Line::from(""),
        Line::from(Span::styled(
            "Description",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    if product.description.is_empty() {
        content.push(Line::from(Span::styled(
            "No description provided.",
            label,
        )));
    } else {
        for line in product.description.lines() {
            content.push(Line::from(line.to_string()));
        }
    }

    let paragraph = Paragraph::new(content)
        .block(block(format!(" {} ", product.name)))
        .wrap(Wrap { trim: false })
        .scroll((app.state.detail_scroll as u16, 0));

    frame.render_widget(paragraph, area);
}
