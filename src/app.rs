//! Application state and core logic

use crate::api::{ApiError, StorefrontApi, StorefrontClient};
use crate::config::StorefrontConfig;
use crate::state::{
    AppState, FieldKind, FormFocus, FormOutcome, LoadState, Product, StoreFormController, View,
    ViewParams,
};
use crate::ui::{grid_columns, grid_visible_rows};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

pub const MSG_PRODUCTS_FAILED: &str = "Failed to load products.";
pub const MSG_PRODUCT_FAILED: &str = "Failed to load product";
pub const MSG_PRODUCT_NOT_FOUND: &str = "Product not found";

/// Completions of catalog fetches
#[derive(Debug)]
pub enum CatalogEvent {
    Listed {
        request: u64,
        result: Result<Vec<Product>, ApiError>,
    },
    Found {
        id: String,
        result: Result<Product, ApiError>,
    },
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Store creation form; dropped once the store is created
    pub form: Option<StoreFormController>,
    api: Arc<dyn StorefrontApi>,
    catalog_tx: mpsc::UnboundedSender<CatalogEvent>,
    catalog_rx: mpsc::UnboundedReceiver<CatalogEvent>,
    /// Id of the latest catalog listing request; older responses are dropped
    catalog_request: u64,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for grid calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Shown after the subdomain the merchant types
    pub domain_suffix: String,
}

impl App {
    /// Create a new App talking to the configured services
    pub fn new(config: &StorefrontConfig) -> Result<Self> {
        let client = StorefrontClient::new(config)?;
        tracing::info!(
            "Using store service {} and catalog {}",
            config.store_service_url,
            config.catalog_service_url
        );
        Ok(Self::with_api(Arc::new(client), config))
    }

    /// Create an App on top of any service implementation
    pub fn with_api(api: Arc<dyn StorefrontApi>, config: &StorefrontConfig) -> Self {
        let (catalog_tx, catalog_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            form: Some(StoreFormController::new(Arc::clone(&api), config)),
            api,
            catalog_tx,
            catalog_rx,
            catalog_request: 0,
            quit: false,
            terminal_size: None,
            domain_suffix: config.domain_suffix.clone(),
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Calculate number of columns for the product grid based on terminal width
    pub fn calculate_product_grid_columns(&self) -> usize {
        let width = self.terminal_size.map(|(_, w)| w).unwrap_or(80);
        grid_columns(width)
    }

    /// Number of product card rows that fit on screen
    fn visible_grid_rows(&self) -> usize {
        let height = self.terminal_size.map(|(h, _)| h).unwrap_or(24);
        grid_visible_rows(height)
    }

    /// Apply finished background work. Called once per loop iteration.
    pub fn tick(&mut self) {
        let outcomes = self
            .form
            .as_mut()
            .map(StoreFormController::poll_events)
            .unwrap_or_default();
        for outcome in outcomes {
            self.handle_form_outcome(outcome);
        }

        while let Ok(event) = self.catalog_rx.try_recv() {
            self.handle_catalog_event(event);
        }
    }

    fn handle_form_outcome(&mut self, outcome: FormOutcome) {
        match outcome {
            FormOutcome::StoreCreated => {
                // One-way: the form is discarded and not reachable from history
                self.form = None;
                self.state.view_history.clear();
                self.state.current_view = View::Products;
                self.state.view_params = ViewParams::default();
                self.state.status_message = Some("Store created!".to_string());
                self.load_catalog();
            }
            FormOutcome::Alert(message) => self.push_error(message),
        }
    }

    fn handle_catalog_event(&mut self, event: CatalogEvent) {
        match event {
            CatalogEvent::Listed { request, result } => {
                if request != self.catalog_request {
                    tracing::debug!("Dropping superseded catalog response #{request}");
                    return;
                }
                self.state.catalog = match result {
                    Ok(products) => {
                        tracing::info!("Loaded {} products", products.len());
                        LoadState::Loaded(products)
                    }
                    Err(e) => {
                        tracing::error!("Catalog fetch failed: {e}");
                        LoadState::Failed(MSG_PRODUCTS_FAILED.to_string())
                    }
                };
                self.state.reset_selection();
            }
            CatalogEvent::Found { id, result } => {
                let still_open = self.state.current_view == View::ProductDetail
                    && self.state.view_params.product_id.as_deref() == Some(id.as_str());
                if !still_open {
                    tracing::debug!("Dropping detail response for closed product {id}");
                    return;
                }
                self.state.product_detail = match result {
                    Ok(product) => LoadState::Loaded(product),
                    Err(ApiError::NotFound(_)) => {
                        LoadState::Failed(MSG_PRODUCT_NOT_FOUND.to_string())
                    }
                    Err(e) => {
                        tracing::error!("Product {id} fetch failed: {e}");
                        LoadState::Failed(MSG_PRODUCT_FAILED.to_string())
                    }
                };
            }
        }
    }

    /// Fetch the product grid
    pub fn load_catalog(&mut self) {
        self.catalog_request += 1;
        self.state.catalog = LoadState::Loading;

        let request = self.catalog_request;
        let api = Arc::clone(&self.api);
        let tx = self.catalog_tx.clone();
        tokio::spawn(async move {
            let result = api.list_products().await;
            let _ = tx.send(CatalogEvent::Listed { request, result });
        });
    }

    /// Open the detail screen and fetch the product
    pub fn open_product(&mut self, id: String) {
        self.navigate(
            View::ProductDetail,
            ViewParams {
                product_id: Some(id.clone()),
            },
        );
        self.fetch_product(id);
    }

    fn fetch_product(&mut self, id: String) {
        self.state.product_detail = LoadState::Loading;
        self.state.detail_scroll = 0;

        let api = Arc::clone(&self.api);
        let tx = self.catalog_tx.clone();
        tokio::spawn(async move {
            let result = api.find_product(&id).await;
            let _ = tx.send(CatalogEvent::Found { id, result });
        });
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View, params: ViewParams) {
        self.state.view_history.push((
            self.state.current_view.clone(),
            self.state.view_params.clone(),
        ));
        self.state.current_view = view;
        self.state.view_params = params;
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        if let Some((view, params)) = self.state.view_history.pop() {
            if matches!(view, View::Products) {
                self.state.product_detail = LoadState::Idle;
            }
            self.state.current_view = view;
            self.state.view_params = params;
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match self.state.current_view {
            View::StoreForm => self.handle_store_form_key(key),
            View::Products => self.handle_products_key(key),
            View::ProductDetail => self.handle_product_detail_key(key),
        }
        Ok(())
    }

    /// Handle keys in the store creation form
    fn handle_store_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let focus = form.state().focus;
        let on_choice = focus
            .field()
            .is_some_and(|f| f.kind() == FieldKind::Choice);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Char('s') if ctrl => self.submit_store_form(),
            KeyCode::Enter if focus == FormFocus::SubmitButton => self.submit_store_form(),
            KeyCode::Enter => form.focus_next(),
            KeyCode::Left if on_choice => form.cycle_choice(false),
            KeyCode::Right if on_choice => form.cycle_choice(true),
            KeyCode::Char(c) if !ctrl => form.input_char(c),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn submit_store_form(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        if form.state().is_submitting {
            return;
        }
        if !form.state().can_submit() {
            self.state.status_message =
                Some("Wait for the domain to be confirmed available".to_string());
            return;
        }
        if form.submit() {
            tracing::debug!("Store creation submitted");
        }
    }

    /// Handle keys in the product grid
    fn handle_products_key(&mut self, key: KeyEvent) {
        let columns = self.calculate_product_grid_columns();
        let total = self.state.products().len();

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.move_selection_down_grid(columns, total)
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up_grid(columns),
            KeyCode::Char('h') | KeyCode::Left => self.state.move_selection_left(columns),
            KeyCode::Char('l') | KeyCode::Right => {
                self.state.move_selection_right(columns, total)
            }
            KeyCode::Enter => {
                if let Some(id) = self.state.selected_product().map(|p| p.id.clone()) {
                    self.open_product(id);
                }
            }
            KeyCode::Char('r') => self.load_catalog(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
        let rows = self.visible_grid_rows();
        self.state.ensure_selected_visible(columns, rows);
    }

    /// Handle keys in the product detail view
    fn handle_product_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => self.go_back(),
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::Char('r') => {
                if let Some(id) = self.state.view_params.product_id.clone() {
                    self.fetch_product(id);
                }
            }
            KeyCode::Char('y') => {
                let url = self
                    .state
                    .product_detail
                    .loaded()
                    .map(|p| p.cover_image().to_string());
                self.copy_url(url, "image");
            }
            KeyCode::Char('v') => {
                let url = self
                    .state
                    .product_detail
                    .loaded()
                    .and_then(|p| p.video_url().map(str::to_string));
                self.copy_url(url, "video");
            }
            _ => {}
        }
    }

    fn copy_url(&mut self, url: Option<String>, what: &str) {
        let Some(url) = url else {
            self.state.status_message = Some(format!("No {what} URL to copy"));
            return;
        };
        match self.copy_to_clipboard(&url) {
            Ok(()) => self.state.status_message = Some(format!("Copied {what} URL")),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {e}");
                self.push_error(format!("Could not copy to clipboard: {e}"));
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
