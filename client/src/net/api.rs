//! REST calls against the image server.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: the request flows still compile and run against any
//! [`ImageTransport`], which is how they are tested.
//!
//! ERROR HANDLING
//! ==============
//! Listing returns `Result` so the library state can record a message.
//! Uploads collapse every failure to `None` after logging it; the upload
//! zone has nothing to show beyond "the gallery did not change".

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use board::image::{IMAGES_PATH, ImageUrl, UPLOADS_PATH, parse_error_message, parse_image_list, parse_uploaded};

/// Server origin prefixed to every endpoint. Empty means same origin,
/// which is the case when the server also hosts the built client.
pub const API_BASE: &str = match option_env!("PINBOARD_API_BASE") {
    Some(base) => base,
    None => "",
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Status and text body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The two requests the board needs. `File` is whatever the platform hands
/// the upload zone (a `web_sys::File` in the browser).
pub trait ImageTransport {
    type File;

    async fn get(&self, url: &str) -> Result<HttpReply, ApiError>;

    /// POST `file` as multipart field `upload`, keeping its file name.
    async fn post_upload(&self, url: &str, file: &Self::File) -> Result<HttpReply, ApiError>;
}

fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Text stored in the library after a failed listing: the transport's own
/// message for network failures, the status line for non-OK responses.
pub(crate) fn list_failed_message(err: &ApiError) -> String {
    match err {
        ApiError::Network(message) => message.clone(),
        ApiError::Status(status) => format!("failed to fetch images: {status}"),
        ApiError::Decode(e) => e.to_string(),
    }
}

/// `GET {base}/images`.
///
/// A non-OK status is returned before the body is looked at.
///
/// # Errors
///
/// Network failure, non-OK status, or a body that is not a string array.
pub async fn fetch_images<T: ImageTransport>(transport: &T, base: &str) -> Result<Vec<ImageUrl>, ApiError> {
    let reply = transport.get(&endpoint(base, IMAGES_PATH)).await?;
    if !reply.is_ok() {
        log::warn!("image list request failed: {}", reply.status);
        return Err(ApiError::Status(reply.status));
    }
    Ok(parse_image_list(&reply.body)?)
}

/// `POST {base}/uploads`; the stored file's URL on success.
pub async fn upload_image<T: ImageTransport>(transport: &T, base: &str, file: &T::File) -> Option<ImageUrl> {
    match try_upload(transport, base, file).await {
        Ok(url) => Some(url),
        Err(e) => {
            log::error!("image upload failed: {e}");
            None
        }
    }
}

async fn try_upload<T: ImageTransport>(transport: &T, base: &str, file: &T::File) -> Result<ImageUrl, ApiError> {
    let reply = transport.post_upload(&endpoint(base, UPLOADS_PATH), file).await?;
    if !reply.is_ok() {
        if let Some(message) = parse_error_message(&reply.body) {
            log::warn!("upload rejected: {message}");
        }
        return Err(ApiError::Status(reply.status));
    }
    Ok(parse_uploaded(&reply.body)?.file)
}

// =============================================================================
// BROWSER TRANSPORT
// =============================================================================

/// `gloo-net` transport used by the browser build.
#[cfg(feature = "csr")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[cfg(feature = "csr")]
impl ImageTransport for BrowserTransport {
    type File = web_sys::File;

    async fn get(&self, url: &str) -> Result<HttpReply, ApiError> {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        reply(resp).await
    }

    async fn post_upload(&self, url: &str, file: &web_sys::File) -> Result<HttpReply, ApiError> {
        let form = web_sys::FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename(board::image::UPLOAD_FIELD, file, &file.name())
            .map_err(js_error)?;
        let resp = gloo_net::http::Request::post(url)
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        reply(resp).await
    }
}

#[cfg(feature = "csr")]
async fn reply(resp: gloo_net::http::Response) -> Result<HttpReply, ApiError> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    Ok(HttpReply { status, body })
}

#[cfg(feature = "csr")]
fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{value:?}"))
}

/// Reload the gallery list into `library` in the background.
#[cfg(feature = "csr")]
pub fn spawn_refresh(library: leptos::prelude::RwSignal<crate::state::library::ImageLibrary>) {
    use leptos::prelude::Update;

    library.update(crate::state::library::ImageLibrary::begin_fetch);
    leptos::task::spawn_local(async move {
        let result = fetch_images(&BrowserTransport, API_BASE).await;
        library.update(|l| l.finish_fetch(result));
    });
}

/// Upload `files` one after another, then refresh the gallery once.
#[cfg(feature = "csr")]
pub fn spawn_uploads(files: Vec<web_sys::File>, library: leptos::prelude::RwSignal<crate::state::library::ImageLibrary>) {
    if files.is_empty() {
        return;
    }
    leptos::task::spawn_local(async move {
        let mut stored = 0_usize;
        for file in &files {
            if let Some(url) = upload_image(&BrowserTransport, API_BASE, file).await {
                log::info!("uploaded {url}");
                stored += 1;
            }
        }
        if stored > 0 {
            spawn_refresh(library);
        }
    });
}
