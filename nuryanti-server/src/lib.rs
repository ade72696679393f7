//! nuryanti-server: HTTP server for the school site
//!
//! Serves the registration endpoint and the read-only content API, backed
//! by Postgres (sqlx) and SMTP (lettre).

pub mod db;
pub mod error;
pub mod http;
pub mod mail;
pub mod seed;

use std::sync::Arc;

use nuryanti_core::{ContentStore, Mailer, RegistrationStore, Registrar, SiteConfig};

pub use error::{Result, ServerError};
pub use http::{build_router, run_server, AppState, ServerConfig};

/// Connect everything described by `site` and serve until shutdown.
///
/// Pool, migrations and the SMTP transport are set up once here; a failure
/// in any of them stops startup before the listener binds.
pub async fn serve(site: SiteConfig, config: ServerConfig) -> Result<()> {
    tracing::info!(?site, "starting with configuration");

    let pool = db::create_pool(&site.database_url).await?;
    db::migrations::run(&pool).await?;

    let store = Arc::new(db::PgStore::new(pool));
    let mailer: Arc<dyn Mailer> = Arc::new(mail::SmtpMailer::new(&site.smtp, &site.admin_email)?);

    let registrar = Registrar::from_config(
        &site,
        store.clone() as Arc<dyn RegistrationStore>,
        mailer,
    );
    if !registrar.persists() {
        tracing::warn!("REGISTRATION_PERSIST is off, registrations are not stored");
    }

    let state = AppState::new(store as Arc<dyn ContentStore>, registrar);
    run_server(state, config).await
}
