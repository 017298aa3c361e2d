//! Upstream Azure Computer Vision integration.
//!
//! # Submodules
//!
//! - `client`: reqwest-backed client for the Computer Vision v3.2 REST API.
//! - `features`: visual feature and detail identifiers for composite analysis.
//! - `ops`: the static table of gateway operations (remote call + result shape).

pub mod client;
pub mod features;
pub mod ops;

pub use client::VisionClient;
pub use features::{Detail, VisualFeature};
