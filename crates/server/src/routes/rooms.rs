use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use service::rooms;
use tracing::info;

use crate::errors::{parse_id, JsonApiError};
use crate::state::ServerState;

/// `price` accepts `"150"` or `150`; both are stored as text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Text(String),
    Number(serde_json::Number),
}

impl PriceValue {
    fn into_text(self) -> String {
        match self {
            PriceValue::Text(s) => s,
            PriceValue::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PriceInput {
    #[serde(default)]
    pub price: Option<PriceValue>,
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/rooms", get(list))
        .route("/api/rooms/:id/price", put(update_price))
}

#[utoipa::path(
    get, path = "/api/rooms", tag = "rooms",
    responses(
        (status = 200, description = "All rooms", body = [crate::openapi::RoomDoc]),
        (status = 500, description = "Store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::room::Model>>, JsonApiError> {
    let list = rooms::list_rooms(&state.db).await?;
    info!(count = list.len(), "list rooms");
    Ok(Json(list))
}

#[utoipa::path(
    put, path = "/api/rooms/{id}/price", tag = "rooms",
    params(("id" = String, Path, description = "Room ID")),
    request_body = crate::openapi::PriceInputDoc,
    responses(
        (status = 200, description = "Updated room", body = crate::openapi::RoomDoc),
        (status = 400, description = "Price missing", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Unknown room", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_price(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Result<Json<PriceInput>, JsonRejection>,
) -> Result<Json<models::room::Model>, JsonApiError> {
    // an unreadable body carries no price
    let price = body
        .ok()
        .and_then(|Json(input)| input.price)
        .map(PriceValue::into_text)
        .unwrap_or_default();
    if price.trim().is_empty() {
        return Err(JsonApiError::validation("price is required"));
    }
    let id = parse_id(&id, "room")?;
    let updated = rooms::update_room_price(&state.db, id, &price).await?;
    info!(id = %updated.id, price = %updated.price, "room price updated");
    Ok(Json(updated))
}
