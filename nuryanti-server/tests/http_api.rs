//! HTTP API tests against in-memory backends
//!
//! Drives the full router (extractors, middleware, error mapping) without
//! Postgres or SMTP.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use nuryanti_core::memory::{MemoryContent, MemoryStore, RecordingMailer};
use nuryanti_core::{
    compose, Mailer, NotifyError, NotifyPolicy, OutgoingEmail, Registrar, RegistrationRecord,
    RegistrationStore, WhatsAppNumber,
};
use nuryanti_server::seed::SeedData;
use nuryanti_server::{build_router, AppState, ServerConfig};

const INBOX: &str = "registrasi@example.com";

struct Harness {
    store: Arc<MemoryStore>,
    mailer: Arc<RecordingMailer>,
    app: Router,
}

fn harness(content: MemoryContent, policy: NotifyPolicy) -> Harness {
    let store = Arc::new(MemoryStore::with_content(content));
    let mailer = Arc::new(RecordingMailer::new());
    let registrar = Registrar::new(
        Some(store.clone() as Arc<dyn RegistrationStore>),
        mailer.clone(),
        INBOX,
        WhatsAppNumber::parse("+62 857-2154-9005").unwrap(),
        policy,
    );
    let state = AppState::new(store.clone(), registrar);
    let app = build_router(state, &ServerConfig::default()).unwrap();
    Harness { store, mailer, app }
}

fn seeded() -> Harness {
    harness(
        MemoryContent::from(SeedData::builtin().unwrap()),
        NotifyPolicy::Strict,
    )
}

const FORM_BODY: &str = "childName=Ali&parentName=Budi&email=budi%40example.com\
&phone=081234567890&address=Jl.+Mawar+1";

fn form_post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/register")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

fn json_post(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_form_registration_returns_whatsapp_link() {
    let h = seeded();

    let (status, body) = send(&h.app, form_post(FORM_BODY)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let record =
        RegistrationRecord::new("Ali", "Budi", "budi@example.com", "081234567890", "Jl. Mawar 1")
            .unwrap();
    let expected = format!(
        "https://wa.me/6285721549005?text={}",
        urlencoding::encode(&compose::internal_notice(&record))
    );
    assert_eq!(body["whatsappUrl"], expected.as_str());

    assert_eq!(h.store.registrations(), vec![record]);
    let sent = h.mailer.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].to, INBOX);
    assert_eq!(sent[1].to, "budi@example.com");
}

#[tokio::test]
async fn test_json_registration_is_accepted() {
    let h = seeded();

    let (status, body) = send(
        &h.app,
        json_post(serde_json::json!({
            "childName": "Siti",
            "parentName": "Rahma",
            "email": "rahma@example.com",
            "phone": "+62 812 3456 7890",
            "address": "Jl. Melati 2",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["whatsappUrl"]
        .as_str()
        .unwrap()
        .starts_with("https://wa.me/6285721549005?text="));
    assert_eq!(h.store.registrations()[0].child_name(), "Siti");
}

#[tokio::test]
async fn test_invalid_submission_is_rejected_without_side_effects() {
    let h = seeded();

    for body in [
        // missing address
        "childName=Ali&parentName=Budi&email=budi%40example.com&phone=081234567890",
        // malformed email
        "childName=Ali&parentName=Budi&email=budi&phone=081234567890&address=Jl.+Mawar+1",
        // whitespace only
        "childName=+++&parentName=Budi&email=budi%40example.com&phone=081234567890&address=x",
    ] {
        let (status, reply) = send(&h.app, form_post(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(reply, serde_json::json!({ "success": false }));
    }

    assert!(h.store.registrations().is_empty());
    assert_eq!(h.mailer.attempts(), 0);
}

#[tokio::test]
async fn test_unreadable_json_is_rejected() {
    let h = seeded();

    let request = Request::builder()
        .method("POST")
        .uri("/api/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, reply) = send(&h.app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(reply, serde_json::json!({ "success": false }));
}

#[tokio::test]
async fn test_storage_outage_fails_before_any_email() {
    let h = seeded();
    h.store.set_unavailable(true);

    let (status, reply) = send(&h.app, form_post(FORM_BODY)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply, serde_json::json!({ "success": false }));
    assert_eq!(h.mailer.attempts(), 0);
}

#[tokio::test]
async fn test_confirmation_failure_is_reported_under_strict_policy() {
    let h = seeded();
    h.mailer.fail_for("budi@example.com");

    let (status, reply) = send(&h.app, form_post(FORM_BODY)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply, serde_json::json!({ "success": false }));

    // Record and internal notice went out before the failing step
    assert_eq!(h.store.registrations().len(), 1);
    assert_eq!(h.mailer.sent().len(), 1);
}

/// SMTP server that accepts the connection and never answers
struct StalledMailer;

#[async_trait]
impl Mailer for StalledMailer {
    async fn send(&self, _email: &OutgoingEmail) -> Result<(), NotifyError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(())
    }
}

#[tokio::test]
async fn test_stalled_mail_times_out_with_json_failure() {
    let store = Arc::new(MemoryStore::new());
    let registrar = Registrar::new(
        Some(store.clone() as Arc<dyn RegistrationStore>),
        Arc::new(StalledMailer),
        INBOX,
        WhatsAppNumber::parse("6285721549005").unwrap(),
        NotifyPolicy::BestEffort,
    );
    let config = ServerConfig {
        request_timeout: Duration::from_millis(100),
        ..ServerConfig::default()
    };
    let app = build_router(AppState::new(store.clone(), registrar), &config).unwrap();

    let (status, reply) = send(&app, form_post(FORM_BODY)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply, serde_json::json!({ "success": false }));
    assert_eq!(store.registrations().len(), 1);
}

#[tokio::test]
async fn test_confirmation_failure_tolerated_under_best_effort() {
    let h = harness(MemoryContent::default(), NotifyPolicy::BestEffort);
    h.mailer.fail_for("budi@example.com");

    let (status, reply) = send(&h.app, form_post(FORM_BODY)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply["success"], true);
}

#[tokio::test]
async fn test_content_lists_follow_seed_order() {
    let h = seeded();

    let (status, programs) = send(&h.app, get("/api/programs")).await;
    assert_eq!(status, StatusCode::OK);
    let programs = programs.as_array().unwrap();
    assert_eq!(programs.len(), 4);
    assert_eq!(programs[0]["id"], 1);
    assert_eq!(programs[0]["title"], "Program Tahfidz");

    let (_, games) = send(&h.app, get("/api/games")).await;
    assert_eq!(games[1]["ageGroup"], "2-4 tahun");
    assert!(games[1].get("age_group").is_none());

    for (uri, len) in [
        ("/api/testimonials", 3),
        ("/api/teachers", 4),
        ("/api/statistics", 4),
        ("/api/faqs", 4),
    ] {
        let (status, body) = send(&h.app, get(uri)).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body.as_array().unwrap().len(), len, "{uri}");
    }
}

#[tokio::test]
async fn test_empty_collections_are_empty_arrays() {
    let h = harness(MemoryContent::default(), NotifyPolicy::Strict);

    let (status, body) = send(&h.app, get("/api/faqs")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_content_storage_error_is_generic_500() {
    let h = seeded();
    h.store.set_unavailable(true);

    let (status, body) = send(&h.app, get("/api/testimonials")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        serde_json::json!({
            "error": "internal_error",
            "message": "an internal error occurred"
        })
    );
}

#[tokio::test]
async fn test_health_and_unknown_routes() {
    let h = seeded();

    let (status, body) = send(&h.app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["persistence"], true);
    assert_eq!(body["notifyPolicy"], "strict");

    let (status, body) = send(&h.app, get("/api/unknown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_cors_preflight_from_site_origin() {
    let h = seeded();

    let response = h
        .app
        .clone()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/register")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:3000"
    );
}
