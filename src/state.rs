//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! carries the image store and the base URL override used when building the
//! absolute URLs the client receives. Clone is required by Axum; all fields
//! are cheap to clone.

use std::sync::Arc;

use crate::config::Config;
use crate::services::storage::ImageStore;

#[derive(Clone)]
pub struct AppState {
    pub store: ImageStore,
    pub public_base_url: Option<Arc<str>>,
}

impl AppState {
    #[must_use]
    pub fn new(store: ImageStore, public_base_url: Option<String>) -> Self {
        Self { store, public_base_url: public_base_url.map(Arc::from) }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(ImageStore::new(config.images_dir.clone()), config.public_base_url.clone())
    }
}
