//! Form rendering module
//!
//! - `field_renderer`: bordered single-line fields
//! - `store_form`: the store creation wizard

mod field_renderer;
mod store_form;

pub use store_form::draw_store_form;
