//! nuryanti-core: registration pipeline and content models
//!
//! Everything here is storage- and transport-agnostic. The pipeline talks to
//! persistence and email through the [`store`] and [`mail`] traits; concrete
//! Postgres and SMTP implementations live in `nuryanti-server`.

pub mod compose;
pub mod config;
pub mod error;
pub mod mail;
pub mod memory;
pub mod models;
pub mod registrar;
pub mod store;
pub mod whatsapp;

pub use config::{NotifyPolicy, SiteConfig, SmtpConfig};
pub use error::{ConfigError, NotifyError, RegistrationError, StoreError};
pub use mail::{Mailer, OutgoingEmail};
pub use models::{
    Faq, Game, Program, RegistrationForm, RegistrationId, RegistrationRecord, Statistic, Teacher,
    Testimonial, ValidationError,
};
pub use registrar::{Channel, Registrar, RegistrationOutcome};
pub use store::{ContentStore, RegistrationStore};
pub use whatsapp::WhatsAppNumber;
