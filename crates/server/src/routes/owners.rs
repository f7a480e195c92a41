use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, Path, State,
    },
    routing::{delete, get},
    Json, Router,
};
use common::types::Ack;
use service::owners::{ImageUpload, NewOwner};
use tracing::info;

use crate::errors::{parse_id, JsonApiError};
use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/owner", get(list).post(create))
        .route("/api/owner/:id", delete(remove))
}

fn upload_error(e: MultipartError) -> JsonApiError {
    JsonApiError::new(e.status(), "Invalid Upload", Some(e.body_text()))
}

/// Collect the `name`, `info` and single `image` parts; other parts are ignored.
async fn read_owner_form(mut form: Multipart) -> Result<NewOwner, JsonApiError> {
    let mut input = NewOwner::default();
    while let Some(field) = form.next_field().await.map_err(upload_error)? {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("name") => input.name = field.text().await.map_err(upload_error)?,
            Some("info") => input.info = Some(field.text().await.map_err(upload_error)?),
            Some("image") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(upload_error)?;
                // browsers send an empty part when no file was picked
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }
                if input.image.is_some() {
                    return Err(JsonApiError::validation("only one image may be uploaded"));
                }
                input.image = Some(ImageUpload { file_name, bytes: bytes.to_vec() });
            }
            _ => {}
        }
    }
    Ok(input)
}

#[utoipa::path(
    get, path = "/api/owner", tag = "owners",
    responses(
        (status = 200, description = "All owners", body = [crate::openapi::OwnerDoc]),
        (status = 500, description = "Store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::owner::Model>>, JsonApiError> {
    let list = state.owners.list().await?;
    info!(count = list.len(), "list owners");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/api/owner", tag = "owners",
    request_body(content = crate::openapi::OwnerFormDoc, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Created owner", body = crate::openapi::OwnerDoc),
        (status = 400, description = "Name missing or malformed upload", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    form: Result<Multipart, MultipartRejection>,
) -> Result<Json<models::owner::Model>, JsonApiError> {
    let form = form.map_err(|e| JsonApiError::new(e.status(), "Invalid Upload", Some(e.body_text())))?;
    let input = read_owner_form(form).await?;
    let created = state.owners.create(input).await?;
    Ok(Json(created))
}

#[utoipa::path(
    delete, path = "/api/owner/{id}", tag = "owners",
    params(("id" = String, Path, description = "Owner ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::AckDoc),
        (status = 404, description = "Unknown owner", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn remove(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Ack>, JsonApiError> {
    let id = parse_id(&id, "owner")?;
    state.owners.delete(id).await?;
    Ok(Json(Ack::OK))
}
