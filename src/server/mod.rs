//! Axum-based HTTP server for the visiongate gateway.
//!
//! # Components
//!
//! - `handlers`: the generic analysis dispatcher plus the metadata endpoints.
//! - `validate`: the request gate that rejects bad image URLs before any
//!   upstream cost is incurred.
//! - `docs`: the interactive API documentation UI and its OpenAPI document.
//! - `routes`: the router configuration that ties everything together.

mod docs;
mod handlers;
mod routes;
pub mod validate;

pub use routes::{create_router, AppState};
