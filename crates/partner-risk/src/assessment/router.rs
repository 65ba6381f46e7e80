use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};

use super::answers::JsonAnswers;
use super::category::CategoryDescriptor;
use super::engine::{AssessmentEngine, AssessmentError, AssessmentResult};
use crate::error::AppError;

/// Router exposing the scoring engine over HTTP.
pub fn assessment_router(engine: Arc<AssessmentEngine>) -> Router {
    Router::new()
        .route("/api/v1/assessments", post(assess_handler))
        .route("/api/v1/assessments/categories", get(categories_handler))
        .with_state(engine)
}

// The body is decoded here rather than through `Json` so shape errors share the
// engine's error payload.
pub(crate) async fn assess_handler(
    State(engine): State<Arc<AssessmentEngine>>,
    body: Bytes,
) -> Result<Json<AssessmentResult>, AppError> {
    let payload: JsonAnswers =
        serde_json::from_slice(&body).map_err(AssessmentError::MalformedPayload)?;
    let result = engine.assess_json(payload)?;
    Ok(Json(result))
}

pub(crate) async fn categories_handler(
    State(engine): State<Arc<AssessmentEngine>>,
) -> Json<Vec<CategoryDescriptor>> {
    Json(engine.categories())
}
