//! Networking for the image server.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the list and upload flows behind a transport trait; the
//! browser transport and the spawn helpers exist only in the `csr` build.

pub mod api;
