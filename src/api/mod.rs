use axum::{routing::post, Router};

use crate::state::AppState;

pub mod handlers;
pub mod types;

use handlers::build_pathway;

pub fn router() -> Router<AppState> {
    Router::new().route("/bassshed-pathway", post(build_pathway))
}
