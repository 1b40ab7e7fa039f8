//! Image model: placed canvas images, z-order helpers, and REST wire types.
//!
//! `CanvasImage` is what the canvas renders; the collection of them is owned
//! by [`crate::engine::BoardCore`]. The wire types at the bottom describe the
//! JSON exchanged with the upload server and are shared by both ends.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use serde::{Deserialize, Serialize};

use crate::input::Point;

/// Absolute URL of an image served by the upload server.
pub type ImageUrl = String;

/// One placed image instance on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasImage {
    /// Source URL of the image.
    pub url: ImageUrl,
    /// Left edge in canvas-local CSS pixels.
    pub x: f64,
    /// Top edge in canvas-local CSS pixels.
    pub y: f64,
    /// Stacking order; absent is treated as 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<i64>,
}

impl CanvasImage {
    #[must_use]
    pub fn new(url: impl Into<ImageUrl>, x: f64, y: f64) -> Self {
        Self { url: url.into(), x, y, z: None }
    }

    /// Effective stacking order.
    #[must_use]
    pub fn z_index(&self) -> i64 {
        self.z.unwrap_or(0)
    }

    /// Top-left corner as a point.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move the top-left corner to `pt`.
    pub fn set_position(&mut self, pt: Point) {
        self.x = pt.x;
        self.y = pt.y;
    }
}

/// Highest effective z among `images`, or 0 when the collection is empty.
#[must_use]
pub fn max_z(images: &[CanvasImage]) -> i64 {
    images.iter().map(CanvasImage::z_index).max().unwrap_or(0)
}

/// z value that places a new image above everything in `images`.
#[must_use]
pub fn next_z(images: &[CanvasImage]) -> i64 {
    max_z(images) + 1
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Multipart field name carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "upload";

/// Path of the listing endpoint.
pub const IMAGES_PATH: &str = "/images";

/// Path of the upload endpoint.
pub const UPLOADS_PATH: &str = "/uploads";

/// Successful upload response: `{ "file": "<absolute url>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub file: ImageUrl,
}

/// Error response body: `{ "message": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Decode the `GET /images` response body.
///
/// # Errors
///
/// Returns the JSON error when the body is not an array of strings.
pub fn parse_image_list(body: &str) -> Result<Vec<ImageUrl>, serde_json::Error> {
    serde_json::from_str(body)
}

/// Decode a successful `POST /uploads` response body.
///
/// # Errors
///
/// Returns the JSON error when the body has no string `file` field.
pub fn parse_uploaded(body: &str) -> Result<UploadedImage, serde_json::Error> {
    serde_json::from_str(body)
}

/// Extract the `message` of an error response, if the body carries one.
#[must_use]
pub fn parse_error_message(body: &str) -> Option<String> {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(b) => Some(b.message),
        Err(_) => None,
    }
}
