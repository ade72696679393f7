//! Content endpoints - read-only JSON arrays
//!
//! Every collection is returned whole. An empty table is `[]`.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use nuryanti_core::{Faq, Game, Program, Statistic, Teacher, Testimonial};

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /api/programs
async fn list_programs(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Program>>, ApiError> {
    Ok(Json(state.content.programs().await?))
}

/// GET /api/testimonials
async fn list_testimonials(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    Ok(Json(state.content.testimonials().await?))
}

/// GET /api/teachers
async fn list_teachers(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Teacher>>, ApiError> {
    Ok(Json(state.content.teachers().await?))
}

/// GET /api/games
async fn list_games(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Game>>, ApiError> {
    Ok(Json(state.content.games().await?))
}

/// GET /api/statistics
async fn list_statistics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Statistic>>, ApiError> {
    Ok(Json(state.content.statistics().await?))
}

/// GET /api/faqs
async fn list_faqs(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Faq>>, ApiError> {
    Ok(Json(state.content.faqs().await?))
}

/// Content routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/programs", get(list_programs))
        .route("/api/testimonials", get(list_testimonials))
        .route("/api/teachers", get(list_teachers))
        .route("/api/games", get(list_games))
        .route("/api/statistics", get(list_statistics))
        .route("/api/faqs", get(list_faqs))
}
