use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Welcome / liveness message",
    responses(
        (status = 200, body = WelcomeResponse)
    )
)]
pub async fn root() -> Response<WelcomeResponse> {
    Response::OK(WelcomeResponse {
        message: "Welcome to the Bagcheck API. See /swagger-ui for interactive docs.".to_string(),
    })
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/", root_path), get(root))
}
