use axum::extract::State;
use axum::Json;
use promptlint_core::{AnalysisRequest, AnalysisResult};
use serde::Serialize;

use crate::{ApiResult, AppState};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "promptlint",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> ApiResult<Json<AnalysisResult>> {
    tracing::info!(chars = request.prompt_text.len(), "analyze request");
    let result = state.analyzer.analyze(&request).await?;
    Ok(Json(result))
}
