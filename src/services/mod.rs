//! Service layer: filesystem-backed image storage used by the routes.

pub mod storage;
