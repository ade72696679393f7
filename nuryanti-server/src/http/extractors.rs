//! Custom Axum extractors

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};

use nuryanti_core::RegistrationForm;

use super::routes::register::RegistrationReply;

/// Registration form from either a urlencoded form post or a JSON body.
///
/// JSON is chosen when the content type says so; everything else is parsed
/// as `application/x-www-form-urlencoded`. An unreadable body is rejected
/// with the same generic `{"success": false}` reply as invalid input.
pub struct RegistrationSubmission(pub RegistrationForm);

impl<S> FromRequest<S> for RegistrationSubmission
where
    S: Send + Sync,
{
    type Rejection = RegistrationReply;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        let form = if is_json {
            Json::<RegistrationForm>::from_request(req, state)
                .await
                .map(|Json(form)| form)
                .map_err(|rejection| {
                    tracing::warn!(reason = %rejection.body_text(), "unreadable registration body");
                    RegistrationReply::invalid()
                })?
        } else {
            Form::<RegistrationForm>::from_request(req, state)
                .await
                .map(|Form(form)| form)
                .map_err(|rejection| {
                    tracing::warn!(reason = %rejection.body_text(), "unreadable registration body");
                    RegistrationReply::invalid()
                })?
        };

        Ok(Self(form))
    }
}
