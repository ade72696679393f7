//! Domain models with validation at construction
//!
//! Registration input is validated when the record is built from the raw
//! form. Content items are plain read-only rows.

pub mod content;
pub mod registration;
pub mod validation;

pub use content::{Faq, Game, Program, Statistic, Teacher, Testimonial};
pub use registration::{RegistrationForm, RegistrationId, RegistrationRecord};
pub use validation::ValidationError;
