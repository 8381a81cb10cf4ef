//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod products;

pub use products::{grid_columns, grid_visible_rows};

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, main_area) = layout::create_layout(area);
    layout::draw_header(frame, header_area, app);

    // Draw main content based on current view
    match &app.state.current_view {
        View::StoreForm => forms::draw_store_form(frame, main_area, app),
        View::Products => products::draw_grid(frame, main_area, app),
        View::ProductDetail => products::draw_detail(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Alerts sit on top of everything
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message, app.state.error_queue.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{DomainCheck, MockStorefrontApi};
    use crate::config::StorefrontConfig;
    use crate::state::{FormFieldId, FormFocus, LoadState, Product, MSG_DOMAIN_AVAILABLE};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use std::time::Duration;

    fn render(app: &App) -> String {
        render_sized(app, 100, 40)
    }

    fn render_sized(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn test_app() -> App {
        App::with_api(
            Arc::new(MockStorefrontApi::new()),
            &StorefrontConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_store_form_renders_fields() {
        let app = test_app();
        let screen = render(&app);
        assert!(screen.contains("Give your online store a name"));
        assert!(screen.contains(".expressitbd.com"));
        assert!(screen.contains("Bangladesh"));
        assert!(screen.contains("Create store"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_form_fits_standard_terminal() {
        let mut api = MockStorefrontApi::new();
        api.expect_check_domain()
            .returning(|_| Ok(DomainCheck { taken: false }));
        let mut app = App::with_api(Arc::new(api), &StorefrontConfig::default());

        let form = app.form.as_mut().unwrap();
        form.set_focus(FormFocus::Field(FormFieldId::Domain));
        for c in "shop1".chars() {
            form.input_char(c);
        }
        form.set_focus(FormFocus::SubmitButton);
        for _ in 0..30 {
            tokio::time::sleep(Duration::from_millis(50)).await;
            app.tick();
        }

        let screen = render_sized(&app, 80, 24);
        assert!(screen.contains("shop1.expressitbd.com"));
        assert!(screen.contains(MSG_DOMAIN_AVAILABLE));
        assert!(screen.contains("Bangladesh"));
        assert!(screen.contains("Fashion"));
        assert!(screen.contains("BDT"));
        assert!(screen.contains("you@example.com"));
        assert!(screen.contains("Create store"));
    }

    #[tokio::test]
    async fn test_error_dialog_overlays_view() {
        let mut app = test_app();
        app.push_error("Something went wrong. Please try again.");
        let screen = render(&app);
        assert!(screen.contains("Something went wrong"));
        assert!(screen.contains("to dismiss"));
        assert!(!screen.contains("1 of"));

        app.push_error("second");
        assert!(render(&app).contains("Error (1 of 2)"));
    }

    #[tokio::test]
    async fn test_product_grid_renders_cards() {
        let mut app = test_app();
        app.state.current_view = View::Products;
        app.state.catalog = LoadState::Loaded(vec![Product {
            id: "p1".into(),
            name: "Linen Shirt".into(),
            description: "Breathable".into(),
            price: "25".into(),
            images: Vec::new(),
            video: None,
        }]);
        let screen = render(&app);
        assert!(screen.contains("Linen Shirt"));
        assert!(screen.contains("$25"));
    }

    #[tokio::test]
    async fn test_product_grid_failure_message() {
        let mut app = test_app();
        app.state.current_view = View::Products;
        app.state.catalog = LoadState::Failed("Failed to load products.".into());
        assert!(render(&app).contains("Failed to load products."));
    }
}
