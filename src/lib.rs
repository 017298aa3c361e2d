// visiongate - HTTP gateway for Azure Computer Vision image analysis

pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod utils;
pub mod vision;
