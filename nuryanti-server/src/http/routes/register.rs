//! Registration endpoint
//!
//! The browser only ever learns `success` and, on success, the WhatsApp
//! link to open. Why a registration failed stays in the server log.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;

use nuryanti_core::RegistrationRecord;

use crate::http::extractors::RegistrationSubmission;
use crate::http::server::AppState;

/// Registration response body
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_url: Option<String>,
}

/// Status code plus body
#[derive(Debug)]
pub struct RegistrationReply {
    status: StatusCode,
    body: RegistrationResponse,
}

impl RegistrationReply {
    pub fn accepted(whatsapp_url: String) -> Self {
        Self {
            status: StatusCode::OK,
            body: RegistrationResponse {
                success: true,
                whatsapp_url: Some(whatsapp_url),
            },
        }
    }

    /// Bad input (400)
    pub fn invalid() -> Self {
        Self::failure(StatusCode::BAD_REQUEST)
    }

    /// Pipeline failure (500)
    pub fn failed() -> Self {
        Self::failure(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn failure(status: StatusCode) -> Self {
        Self {
            status,
            body: RegistrationResponse {
                success: false,
                whatsapp_url: None,
            },
        }
    }
}

impl IntoResponse for RegistrationReply {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// POST /api/register
async fn register(
    State(state): State<Arc<AppState>>,
    RegistrationSubmission(form): RegistrationSubmission,
) -> RegistrationReply {
    let record = match RegistrationRecord::try_from(form) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(field = e.field(), reason = %e, "registration rejected");
            return RegistrationReply::invalid();
        }
    };

    let outcome =
        tokio::time::timeout(state.registration_timeout, state.registrar.register(&record)).await;

    match outcome {
        Ok(Ok(outcome)) => RegistrationReply::accepted(outcome.whatsapp_url),
        Ok(Err(e)) => {
            tracing::error!(error = %e, channel = ?e.channel(), "registration failed");
            RegistrationReply::failed()
        }
        Err(_) => {
            tracing::error!(
                child = %record.child_name(),
                timeout_ms = state.registration_timeout.as_millis() as u64,
                "registration timed out"
            );
            RegistrationReply::failed()
        }
    }
}

/// Registration routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/register", post(register))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn success_body_carries_link() {
        let response = RegistrationReply::accepted("https://wa.me/62?text=x".into()).into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(
            &body[..],
            br#"{"success":true,"whatsappUrl":"https://wa.me/62?text=x"}"#
        );
    }

    #[tokio::test]
    async fn failure_body_is_bare() {
        for (reply, status) in [
            (RegistrationReply::invalid(), StatusCode::BAD_REQUEST),
            (RegistrationReply::failed(), StatusCode::INTERNAL_SERVER_ERROR),
        ] {
            let response = reply.into_response();
            assert_eq!(response.status(), status);

            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert_eq!(&body[..], br#"{"success":false}"#);
        }
    }
}
