use axum::Json;

use mesmer_core::models::question::Questionnaire;
use mesmer_scoring::catalog;

/// Serve the full questionnaire battery with presentation metadata.
pub async fn get_questionnaire() -> Json<Questionnaire> {
    Json(catalog::questionnaire().clone())
}
