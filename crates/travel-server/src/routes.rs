//! Request handling and error mapping

use axum::{
    Json, Router,
    extract::State,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::error;

use travel_core::Error;

use crate::context::AppContext;

/// Wire shape of `POST /get_response`.
///
/// Both fields are optional at the serde layer; the active pipeline checks
/// the presence of the ones it requires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub user_query: Option<String>,
    #[serde(default)]
    pub chat_history: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Boundary wrapper mapping typed errors onto status codes.
pub struct ApiError(Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

pub async fn get_response(
    State(state): State<Arc<AppContext>>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<QueryResponse>, ApiError> {
    // A body that fails to parse never reaches field validation; it surfaces
    // as an internal error, not a 400.
    let Json(request) = payload.map_err(|e| ApiError(Error::Internal(e.body_text())))?;

    let response = state.pipeline.answer(&request).await.map_err(|e| {
        if !e.is_client_error() {
            error!(error = %e, "request failed");
        }
        ApiError(e)
    })?;

    Ok(Json(QueryResponse { response }))
}

pub fn router(context: Arc<AppContext>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/get_response", post(get_response))
        .with_state(context)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
