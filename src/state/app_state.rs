//! Application state definitions

use super::product::Product;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Store creation wizard
    #[default]
    StoreForm,
    /// Product grid
    Products,
    ProductDetail,
}

/// View parameters for navigation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    pub product_id: Option<String>,
}

/// Progress of a remote fetch
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_params: ViewParams,
    pub view_history: Vec<(View, ViewParams)>,

    // Catalog
    pub catalog: LoadState<Vec<Product>>,
    pub product_detail: LoadState<Product>,

    // Selection
    pub selected_index: usize,
    /// First visible grid row
    pub scroll_offset: usize,
    /// First visible line of the product detail
    pub detail_scroll: usize,

    // UI state
    pub status_message: Option<String>,
    /// Alerts shown one at a time in a modal dialog
    pub error_queue: VecDeque<String>,
}

impl AppState {
    /// Products currently loaded into the grid
    pub fn products(&self) -> &[Product] {
        self.catalog.loaded().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.products().get(self.selected_index)
    }

    /// Move selection left in grid
    pub fn move_selection_left(&mut self, columns: usize) {
        if columns == 0 {
            return;
        }
        let col = self.selected_index % columns;
        if col > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection right in grid
    pub fn move_selection_right(&mut self, columns: usize, total: usize) {
        if columns == 0 || total == 0 {
            return;
        }
        let col = self.selected_index % columns;
        if col < columns - 1 && self.selected_index + 1 < total {
            self.selected_index += 1;
        }
    }

    /// Move selection up in grid (by one row)
    pub fn move_selection_up_grid(&mut self, columns: usize) {
        if columns == 0 {
            return;
        }
        if self.selected_index >= columns {
            self.selected_index -= columns;
        }
    }

    /// Move selection down in grid (by one row)
    pub fn move_selection_down_grid(&mut self, columns: usize, total: usize) {
        if columns == 0 || total == 0 {
            return;
        }
        let new_index = self.selected_index + columns;
        if new_index < total {
            self.selected_index = new_index;
        } else {
            // Past the end: land on the last row, same column if it exists
            let current_row = self.selected_index / columns;
            let last_row = (total - 1) / columns;
            if current_row < last_row {
                let target = last_row * columns + self.selected_index % columns;
                self.selected_index = target.min(total - 1);
            }
        }
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    /// Scroll the detail view down
    pub fn scroll_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    /// Scroll the detail view up
    pub fn scroll_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    /// Keep the selected grid row inside the visible rows
    pub fn ensure_selected_visible(&mut self, columns: usize, visible_rows: usize) {
        if columns == 0 || visible_rows == 0 {
            return;
        }
        let row = self.selected_index / columns;
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset + visible_rows {
            self.scroll_offset = row + 1 - visible_rows;
        }
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
