//! HTTP endpoint handlers. These are thin wrappers that forward to the
//! session state; each handler is instrumented and logs basic result info.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tracing::{info, instrument};

use crate::errors::PuzzleError;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse {
    Json(HealthOut { ok: true })
}

#[instrument(level = "info", skip(state))]
pub async fn http_generate_puzzle(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PuzzleOut>, PuzzleError> {
    let (puzzle, streak) = state.new_puzzle().await?;
    info!(target: "puzzle", id = %puzzle.id, level = puzzle.level, "HTTP puzzle served");
    Ok(Json(puzzle_to_out(&puzzle, streak)))
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_submit_answer(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SubmitIn>,
) -> Result<Json<SubmitOut>, PuzzleError> {
    let answer = body.answer_as_int().ok_or(PuzzleError::InvalidAnswerFormat)?;
    let (outcome, knowledge_cards) = state.submit_answer(answer).await?;
    info!(
        target: "puzzle",
        %answer,
        correct = outcome.is_correct,
        level = outcome.level,
        "HTTP submit_answer evaluated"
    );
    Ok(Json(outcome_to_out(&outcome, knowledge_cards)))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let stats = state.stats().await;
    Json(stats_to_out(&stats))
}

#[instrument(level = "info", skip(state))]
pub async fn http_reset_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let stats = state.reset().await;
    info!(target: "puzzle", "HTTP stats reset");
    Json(reset_to_out(&stats))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_history(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let stats = state.stats().await;
    Json(history_to_out(&stats))
}
