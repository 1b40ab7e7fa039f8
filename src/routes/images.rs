//! Image routes: list, upload, serve.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::header::{CONTENT_TYPE, HOST};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use board::image::{ErrorBody, IMAGES_PATH, UPLOAD_FIELD, UploadedImage};
use tracing::{error, info, warn};

use crate::services::storage::{StorageError, UploadError, content_type_for, now_epoch_ms};
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub(crate) fn error_status(err: &RouteError) -> StatusCode {
    match err {
        RouteError::Upload(UploadError::UnsupportedFormat(_) | UploadError::MissingFile | UploadError::Multipart(_)) => {
            StatusCode::BAD_REQUEST
        }
        RouteError::Upload(UploadError::Storage(_)) | RouteError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let status = error_status(&self);
        if status.is_server_error() {
            error!(error = %self, "image route failed");
        } else {
            warn!(error = %self, "image request rejected");
        }
        (status, Json(ErrorBody { message: self.to_string() })).into_response()
    }
}

/// Scheme + authority for URLs handed back to the client.
///
/// `PUBLIC_BASE_URL` wins; otherwise the request's `Host` (and
/// `X-Forwarded-Proto`, when a proxy set it) are used.
pub(crate) fn base_url(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(base) = &state.public_base_url {
        return base.to_string();
    }
    let host = headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    format!("{scheme}://{host}")
}

pub(crate) fn image_url(base: &str, name: &str) -> String {
    format!("{base}{IMAGES_PATH}/{name}")
}

/// `GET /images`: absolute URLs of every stored image.
pub async fn list_images(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<Vec<String>>, RouteError> {
    let base = base_url(&state, &headers);
    let names = state.store.list().await?;
    Ok(Json(names.iter().map(|name| image_url(&base, name)).collect()))
}

/// `POST /uploads`: store the JPEG/PNG in multipart field `upload`.
pub async fn upload_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<UploadedImage>, RouteError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Multipart(e.body_text()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| UploadError::Multipart(e.body_text()))?;

        let name = state
            .store
            .save(file_name.as_deref(), content_type.as_deref(), &bytes, now_epoch_ms())
            .await?;
        info!(%name, size = bytes.len(), "image uploaded");

        let file = image_url(&base_url(&state, &headers), &name);
        return Ok(Json(UploadedImage { file }));
    }
    Err(UploadError::MissingFile.into())
}

/// `GET /images/{name}`: raw file bytes.
pub async fn serve_image(State(state): State<AppState>, Path(name): Path<String>) -> Result<Response, RouteError> {
    let Some(bytes) = state.store.read(&name).await? else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };
    Ok(([(CONTENT_TYPE, content_type_for(&name))], bytes).into_response())
}
