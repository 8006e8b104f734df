use super::types::{AnalysisResponse, ErrorResponse, HealthResponse, SymptomRequest};
use crate::{
    analysis::{AnalysisError, SymptomAnalyzer},
    llm::LlmClient,
};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

pub const HEALTH_MESSAGE: &str = "Healthcare Symptom Checker API is running.";

#[derive(Clone)]
pub struct AppState {
    pub analyzer: SymptomAnalyzer,
}

impl AppState {
    pub fn new(llm_client: Option<Arc<dyn LlmClient>>) -> Self {
        Self {
            analyzer: SymptomAnalyzer::new(llm_client),
        }
    }
}

/// Failures surfaced by the HTTP layer, all rendered as `{"detail": ...}`.
///
/// Only body-shape rejections become 422; transport-level rejections such as
/// a failed body read keep axum's own status.
#[derive(Debug)]
pub enum ApiError {
    InvalidBody(JsonRejection),
    Analysis(AnalysisError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection)
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        Self::Analysis(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::InvalidBody(rejection) => (rejection_status(&rejection), rejection.body_text()),
            Self::Analysis(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.detail().to_string())
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

fn rejection_status(rejection: &JsonRejection) -> StatusCode {
    match rejection {
        JsonRejection::JsonDataError(_)
        | JsonRejection::JsonSyntaxError(_)
        | JsonRejection::MissingJsonContentType(_) => StatusCode::UNPROCESSABLE_ENTITY,
        other => other.status(),
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: HEALTH_MESSAGE.to_string(),
    })
}

pub async fn analyze_symptoms(
    State(state): State<AppState>,
    payload: Result<Json<SymptomRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected analysis request body: {}", rejection.body_text());
        rejection
    })?;

    let request_id = Uuid::new_v4();
    let span = info_span!("analyze_symptoms", %request_id);

    async move {
        info!(
            symptoms_len = request.symptoms.len(),
            "Received symptom analysis request"
        );

        match state.analyzer.analyze(&request.symptoms).await {
            Ok(analysis) => {
                info!(analysis_len = analysis.len(), "Analysis completed");
                Ok(Json(AnalysisResponse { analysis }))
            }
            Err(e) => {
                match &e {
                    AnalysisError::ServiceUnavailable => {
                        error!("Analysis refused, LLM client unavailable")
                    }
                    AnalysisError::EmptyResponse { finish_reason } => {
                        error!(?finish_reason, "Empty response from LLM")
                    }
                    AnalysisError::Communication(source) => {
                        error!("An unexpected error occurred: {}", source)
                    }
                }
                Err(ApiError::from(e))
            }
        }
    }
    .instrument(span)
    .await
}
