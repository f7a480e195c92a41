use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use common::types::Ack;
use serde::Deserialize;
use service::reviews;
use tracing::info;

use crate::errors::{parse_id, JsonApiError};
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize)]
pub struct ReviewInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub text: String,
}

/// The single mount point for reviews.
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/reviews", get(list).post(create))
        .route("/api/reviews/:id", delete(remove))
}

#[utoipa::path(
    get, path = "/api/reviews", tag = "reviews",
    responses(
        (status = 200, description = "Reviews, newest first", body = [crate::openapi::ReviewDoc]),
        (status = 500, description = "Store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::review::Model>>, JsonApiError> {
    let list = reviews::list_reviews(&state.db).await?;
    info!(count = list.len(), "list reviews");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/api/reviews", tag = "reviews",
    request_body = crate::openapi::ReviewInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ReviewDoc),
        (status = 400, description = "Name and text are required", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<ReviewInput>, JsonRejection>,
) -> Result<(StatusCode, Json<models::review::Model>), JsonApiError> {
    let input = body.map(|Json(i)| i).unwrap_or_default();
    let created = reviews::create_review(&state.db, &input.name, &input.text).await?;
    info!(id = %created.id, "review created");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    delete, path = "/api/reviews/{id}", tag = "reviews",
    params(("id" = String, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::AckDoc),
        (status = 404, description = "Unknown review", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn remove(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Ack>, JsonApiError> {
    let id = parse_id(&id, "review")?;
    reviews::delete_review(&state.db, id).await?;
    info!(id = %id, "review deleted");
    Ok(Json(Ack::OK))
}
