//! Application state module

mod app_state;
mod forms;
mod product;

pub use app_state::*;
pub use forms::*;
pub use product::*;
