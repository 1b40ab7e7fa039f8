//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before this runs, so either source works.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_IMAGES_DIR: &str = "images";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_CLIENT_DIST_DIR: &str = "client/dist";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Directory holding uploaded files; the only durable store.
    pub images_dir: PathBuf,
    /// Allowed CORS origin, or `*` for any.
    pub cors_origin: String,
    /// Scheme + authority used in returned URLs. `None` derives it from `Host`.
    pub public_base_url: Option<String>,
    /// Built client served as the fallback (index.html at `/`).
    pub client_dist_dir: PathBuf,
    /// Request body cap for `POST /uploads`.
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            cors_origin: DEFAULT_CORS_ORIGIN.to_owned(),
            public_base_url: None,
            client_dist_dir: PathBuf::from(DEFAULT_CLIENT_DIST_DIR),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 8000
    /// - `IMAGES_DIR`: default `images`
    /// - `CORS_ORIGIN`: default `http://localhost:5173`
    /// - `PUBLIC_BASE_URL`: e.g. `https://pins.example.com`
    /// - `CLIENT_DIST_DIR`: default `client/dist`
    /// - `MAX_UPLOAD_BYTES`: default 20 MiB
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Unparseable or blank values
    /// fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            port: get("PORT")
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(defaults.port),
            images_dir: get("IMAGES_DIR").map_or(defaults.images_dir, PathBuf::from),
            cors_origin: get("CORS_ORIGIN").unwrap_or(defaults.cors_origin),
            public_base_url: get("PUBLIC_BASE_URL").map(|v| v.trim_end_matches('/').to_owned()),
            client_dist_dir: get("CLIENT_DIST_DIR").map_or(defaults.client_dist_dir, PathBuf::from),
            max_upload_bytes: get("MAX_UPLOAD_BYTES")
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(defaults.max_upload_bytes),
        }
    }
}
