//! Registration pipeline
//!
//! persist (optional) -> compose -> internal email -> confirmation email ->
//! WhatsApp deep link. Steps run sequentially inside the caller's request;
//! nothing is retried and nothing is compensated.

use std::fmt;
use std::sync::Arc;

use crate::compose::{ComposedMessages, CONFIRMATION_SUBJECT, INTERNAL_NOTICE_SUBJECT};
use crate::config::{NotifyPolicy, SiteConfig};
use crate::error::{NotifyError, RegistrationError};
use crate::mail::{Mailer, OutgoingEmail};
use crate::models::{RegistrationId, RegistrationRecord};
use crate::store::RegistrationStore;
use crate::whatsapp::WhatsAppNumber;

/// Notification channel, used in logs and outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Email to the registration inbox
    InternalNotice,
    /// Email to the submitting parent
    Confirmation,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InternalNotice => f.write_str("internal notice email"),
            Self::Confirmation => f.write_str("confirmation email"),
        }
    }
}

/// Result of a successful registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationOutcome {
    /// Row id, `None` when persistence is disabled
    pub registration_id: Option<RegistrationId>,
    /// Deep link for the browser to open
    pub whatsapp_url: String,
    /// Channels that failed under [`NotifyPolicy::BestEffort`]
    pub undelivered: Vec<Channel>,
}

/// Runs registrations. Built once at startup and shared by all requests.
pub struct Registrar {
    store: Option<Arc<dyn RegistrationStore>>,
    mailer: Arc<dyn Mailer>,
    registration_inbox: String,
    whatsapp_number: WhatsAppNumber,
    policy: NotifyPolicy,
}

impl Registrar {
    pub fn new(
        store: Option<Arc<dyn RegistrationStore>>,
        mailer: Arc<dyn Mailer>,
        registration_inbox: impl Into<String>,
        whatsapp_number: WhatsAppNumber,
        policy: NotifyPolicy,
    ) -> Self {
        Self {
            store,
            mailer,
            registration_inbox: registration_inbox.into(),
            whatsapp_number,
            policy,
        }
    }

    /// Build from site configuration. The store is dropped when
    /// `REGISTRATION_PERSIST` is off.
    pub fn from_config(
        config: &SiteConfig,
        store: Arc<dyn RegistrationStore>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self::new(
            config.persist_registrations.then_some(store),
            mailer,
            config.registration_inbox.clone(),
            config.whatsapp_number.clone(),
            config.notify_policy,
        )
    }

    pub fn persists(&self) -> bool {
        self.store.is_some()
    }

    pub fn policy(&self) -> NotifyPolicy {
        self.policy
    }

    /// Run the whole pipeline for one validated record.
    ///
    /// A storage failure aborts before any email is sent. Under
    /// [`NotifyPolicy::Strict`] the first email failure aborts too, even if
    /// the internal notice already went out.
    pub async fn register(
        &self,
        record: &RegistrationRecord,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        let registration_id = match &self.store {
            Some(store) => {
                let id = store.insert(record).await.map_err(|e| {
                    tracing::error!(
                        child = %record.child_name(),
                        error = %e,
                        "failed to persist registration"
                    );
                    RegistrationError::Persistence(e)
                })?;
                tracing::debug!(registration_id = id, "registration stored");
                Some(id)
            }
            None => None,
        };

        let messages = ComposedMessages::for_record(record);
        let mut undelivered = Vec::new();

        let deliveries = [
            (
                Channel::InternalNotice,
                OutgoingEmail::new(
                    &self.registration_inbox,
                    INTERNAL_NOTICE_SUBJECT,
                    &messages.internal_notice,
                ),
            ),
            (
                Channel::Confirmation,
                OutgoingEmail::new(record.email(), CONFIRMATION_SUBJECT, &messages.confirmation),
            ),
        ];

        for (channel, email) in deliveries {
            if let Err(e) = self.mailer.send(&email).await {
                self.delivery_failed(channel, registration_id, record, &e);
                match self.policy {
                    NotifyPolicy::Strict => {
                        return Err(RegistrationError::Notification { channel, source: e })
                    }
                    NotifyPolicy::BestEffort => undelivered.push(channel),
                }
            }
        }

        let whatsapp_url = self.whatsapp_number.deep_link(&messages.internal_notice);

        tracing::info!(
            registration_id = ?registration_id,
            undelivered = undelivered.len(),
            "registration processed"
        );

        Ok(RegistrationOutcome {
            registration_id,
            whatsapp_url,
            undelivered,
        })
    }

    fn delivery_failed(
        &self,
        channel: Channel,
        registration_id: Option<RegistrationId>,
        record: &RegistrationRecord,
        error: &NotifyError,
    ) {
        match self.policy {
            NotifyPolicy::Strict => tracing::error!(
                %channel,
                registration_id = ?registration_id,
                child = %record.child_name(),
                error = %error,
                "notification failed, registration reported as failed"
            ),
            NotifyPolicy::BestEffort => tracing::warn!(
                %channel,
                registration_id = ?registration_id,
                child = %record.child_name(),
                error = %error,
                "notification failed, continuing"
            ),
        }
    }
}

impl fmt::Debug for Registrar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registrar")
            .field("persists", &self.persists())
            .field("registration_inbox", &self.registration_inbox)
            .field("whatsapp_number", &self.whatsapp_number)
            .field("policy", &self.policy)
            .finish()
    }
}
