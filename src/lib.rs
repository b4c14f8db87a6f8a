//! A minimal localhost diagnostic HTTP server.
//!
//! This library backs the `localprobe` binary: a small HTTP server used to
//! verify that a browser can reach `localhost`. It serves static files from
//! the directory containing the executable and answers `GET /` with a fixed
//! diagnostic HTML page, with caching disabled on every response so browsers
//! never show a stale result while troubleshooting.
//!
//! # Behavior
//!
//! - `GET /` returns the embedded diagnostic page (200, `text/html`).
//! - Every other request falls through to conventional static file serving
//!   relative to the base directory: files are served with an inferred
//!   content type, directories redirect to their trailing-slash form and
//!   then serve `index.html` or a generated listing, and missing paths
//!   yield 404.
//! - All responses carry `Cache-Control: no-store, no-cache,
//!   must-revalidate`, including error responses.
//!
//! # Examples
//!
//! ```no_run
//! use localprobe::{HttpServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), localprobe::ServerError> {
//!     let server = HttpServer::new(ServerConfig::default());
//!     server.start().await
//! }
//! ```
//!
//! The request parsing layer is exposed as well:
//!
//! ```
//! use localprobe::parse_request;
//!
//! let request_bytes = b"GET /index.html HTTP/1.1\r\nHost: localhost\r\n\r\n";
//!
//! match parse_request(request_bytes) {
//!     Ok(request) => {
//!         println!("Method: {}", request.method);
//!         println!("Path: {}", request.path);
//!     },
//!     Err(err) => {
//!         println!("Error parsing request: {}", err);
//!     }
//! }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{Error as ParserError, HttpRequest, HttpVersion, Method, parse_request};
pub use server::{Error as ServerError, HttpResponse, HttpServer, ServerConfig, StatusCode};
