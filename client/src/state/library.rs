//! Gallery list state.
//!
//! DESIGN
//! ======
//! The fetch itself lives in `net::api`; this type only records what the
//! last fetch produced so the gallery can render loading and error text.
//! A failed fetch never clears images that were already listed.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use board::image::ImageUrl;

use crate::net::api::{ApiError, list_failed_message};

/// Images available in the gallery, plus fetch status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageLibrary {
    pub images: Vec<ImageUrl>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ImageLibrary {
    /// A fetch is starting.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record the outcome of the fetch started by [`Self::begin_fetch`].
    pub fn finish_fetch(&mut self, result: Result<Vec<ImageUrl>, ApiError>) {
        match result {
            Ok(images) => self.images = images,
            Err(e) => self.error = Some(list_failed_message(&e)),
        }
        self.loading = false;
    }
}
