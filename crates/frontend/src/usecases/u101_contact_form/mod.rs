//! Contact form UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: submission seam (`ContactSubmitter`) and the simulated backend
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use model::{ContactSubmitter, SimulatedSubmitter, SubmitFuture};
pub use view::ContactForm;
pub use view_model::ContactFormViewModel;
