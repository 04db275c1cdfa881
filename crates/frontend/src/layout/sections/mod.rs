//! Page sections. Markup only: behaviour is attached through data attributes
//! (`data-reveal*`, `data-count`, `data-tilt`, `data-depth`, `data-ripple`)
//! by the controllers in `shared::interactions`.

mod about;
mod contact;
mod hero;
mod process;
mod services;
mod testimonials;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use process::Process;
pub use services::Services;
pub use testimonials::Testimonials;
