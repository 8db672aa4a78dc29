use axum::{extract::State, http::StatusCode, Json};

use crate::{
    api::types::{
        PathwayRequest, PathwayResponse, EMPTY_COMPLETION_PATHWAY, MISSING_DESCRIPTION_PATHWAY,
        SERVER_ERROR_PATHWAY,
    },
    completion::build_messages,
    state::AppState,
};

pub async fn build_pathway(
    State(state): State<AppState>,
    Json(payload): Json<PathwayRequest>,
) -> (StatusCode, Json<PathwayResponse>) {
    if payload.description.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(PathwayResponse::error(
                "Missing description",
                MISSING_DESCRIPTION_PATHWAY,
            )),
        );
    }

    let messages = build_messages(&payload.description);

    match state.backend.complete(messages).await {
        Ok(Some(text)) => (StatusCode::OK, Json(PathwayResponse::ok(text))),
        Ok(None) => (
            StatusCode::OK,
            Json(PathwayResponse::ok(EMPTY_COMPLETION_PATHWAY.to_string())),
        ),
        Err(err) => {
            tracing::error!("pathway generation failed: {err:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(PathwayResponse::error("Server error", SERVER_ERROR_PATHWAY)),
            )
        }
    }
}
