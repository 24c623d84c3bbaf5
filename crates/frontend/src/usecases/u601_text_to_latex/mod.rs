//! Text-to-LaTeX converter page
//!
//! - api.rs: HTTP client for the conversion backend
//! - model.rs: page state and error types
//! - controller.rs: the convert / generate / download operations
//! - view_model.rs: signal-backed commands for the view
//! - view.rs: Leptos component (pure UI)

mod api;
mod controller;
mod model;
mod view;
mod view_model;

pub use api::{ApiError, ConversionApi, HttpConversionApi};
pub use controller::ConverterController;
pub use model::{ConverterError, ConverterState, ConverterStore, ValidationError};
pub use view::TextToLatexPage;
pub use view_model::TextToLatexViewModel;
