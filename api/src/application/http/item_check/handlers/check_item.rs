use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::USER_AGENT;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    item_check::validators::CheckItemRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use bagcheck_core::domain::item_check::{
    entities::ItemVerdict, ports::ItemCheckService, value_objects::CheckItemInput,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CheckItemResponse {
    pub carry_on: bool,
    pub checked_bag: bool,
    pub description: String,
}

impl From<ItemVerdict> for CheckItemResponse {
    fn from(verdict: ItemVerdict) -> Self {
        Self {
            carry_on: verdict.carry_on,
            checked_bag: verdict.checked_bag,
            description: verdict.description,
        }
    }
}

/// Client address as reported by the reverse proxy, if any. The socket peer
/// is the proxy itself.
fn client_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        })
}

#[utoipa::path(
    post,
    path = "/check-item",
    tag = "item-check",
    summary = "Check an item against carry-on and checked-bag rules",
    description = "Forwards the item name to the upstream model and returns its verdict",
    request_body = CheckItemRequest,
    responses(
        (status = 200, body = CheckItemResponse)
    )
)]
pub async fn check_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidateJson(payload): ValidateJson<CheckItemRequest>,
) -> Result<Response<CheckItemResponse>, ApiError> {
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let ip_address = client_ip(&headers);

    let verdict = state
        .service
        .check_item(CheckItemInput {
            item_name: payload.item_name,
            user_agent,
            ip_address,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CheckItemResponse::from(verdict)))
}
