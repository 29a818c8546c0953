use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use uuid::Uuid;

use mesmer_core::models::answers::AnswerSet;
use mesmer_core::models::assessment::Assessment;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SubmitRequest {
    pub answers: AnswerSet,
}

/// Score a completed answer set, persist the result, and echo it back.
pub async fn submit_assessment(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<Assessment>, ApiError> {
    let result = mesmer_scoring::score_assessment(&req.answers)?;
    let assessment = Assessment {
        id: Uuid::new_v4(),
        result,
    };
    state.store.save(&assessment).await?;
    Ok(Json(assessment))
}

pub async fn list_assessments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Assessment>>, ApiError> {
    Ok(Json(state.store.list().await?))
}

pub async fn get_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Assessment>, ApiError> {
    Ok(Json(state.store.load(id).await?))
}

pub async fn delete_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    state.store.delete(id).await?;
    Ok(Json(()))
}
