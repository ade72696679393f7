//! SMTP mailer (lettre)
//!
//! One transport per process. lettre pools SMTP connections internally, so
//! the same `SmtpMailer` serves every concurrent request.
//!
//! Port 465 uses implicit TLS; any other port negotiates STARTTLS.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use nuryanti_core::{Mailer, NotifyError, OutgoingEmail, SmtpConfig};

/// Implicit-TLS submission port
const SMTPS_PORT: u16 = 465;

/// Mail transport setup failure (startup only)
#[derive(Debug, thiserror::Error)]
pub enum MailSetupError {
    #[error("invalid sender address '{address}': {reason}")]
    Sender { address: String, reason: String },

    #[error("failed to configure SMTP relay {host}: {reason}")]
    Relay { host: String, reason: String },
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build the transport. Does not connect; the first send does.
    pub fn new(config: &SmtpConfig, from: &str) -> Result<Self, MailSetupError> {
        let from: Mailbox = from.parse().map_err(|e: lettre::address::AddressError| {
            MailSetupError::Sender {
                address: from.to_owned(),
                reason: e.to_string(),
            }
        })?;

        let builder = if config.port == SMTPS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
        }
        .map_err(|e| MailSetupError::Relay {
            host: config.host.clone(),
            reason: e.to_string(),
        })?;

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        tracing::info!(host = %config.host, port = config.port, from = %from, "SMTP transport ready");
        Ok(Self { transport, from })
    }

    fn build_message(&self, email: &OutgoingEmail) -> Result<Message, NotifyError> {
        build_message(&self.from, email)
    }
}

fn build_message(from: &Mailbox, email: &OutgoingEmail) -> Result<Message, NotifyError> {
    let to: Mailbox = email.to.parse().map_err(|e: lettre::address::AddressError| {
        NotifyError::Address {
            address: email.to.clone(),
            reason: e.to_string(),
        }
    })?;

    Message::builder()
        .from(from.clone())
        .to(to)
        .subject(email.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(email.body.clone())
        .map_err(|e| NotifyError::Build(e.to_string()))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), NotifyError> {
        let message = self.build_message(email)?;
        self.transport
            .send(message)
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;
        tracing::debug!(to = %email.to, subject = %email.subject, "email sent");
        Ok(())
    }
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer").field("from", &self.from).finish()
    }
}
