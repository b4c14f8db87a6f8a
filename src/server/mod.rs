//! HTTP server implementation for localprobe.
//!
//! This module provides the diagnostic server: a fixed-port listener that
//! answers `GET /` with an embedded HTML page, serves static files from a
//! base directory for every other request, and disables caching on all
//! responses.

mod response;
mod config;
mod error;
mod page;
mod static_files;
mod http_server;

// Re-export public items
pub use response::{HttpResponse, StatusCode};
pub use config::ServerConfig;
pub use error::Error;
pub use http_server::HttpServer;
