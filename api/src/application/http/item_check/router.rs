use axum::{Router, routing::post};

use super::handlers::check_item::check_item;
use crate::application::http::server::app_state::AppState;

pub fn item_check_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/check-item", state.args.server.root_path),
        post(check_item),
    )
}
