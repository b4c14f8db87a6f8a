//! HTTP server implementation.

use std::sync::Arc;

use log::{debug, error, info};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::signal;

use crate::parser::{parse_request, HttpRequest, Method};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::page;
use crate::server::response::{HttpResponse, StatusCode};
use crate::server::static_files;

/// Cache-control directives attached to every outgoing response so browsers
/// never show a stale diagnostic result.
const CACHE_CONTROL: &str = "no-store, no-cache, must-revalidate";

/// The diagnostic HTTP server.
pub struct HttpServer {
    /// The server configuration.
    pub config: Arc<ServerConfig>,
}

impl HttpServer {
    /// Create a new server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Start the server and listen for incoming connections.
    ///
    /// A bind failure (port already in use, insufficient privilege)
    /// propagates to the caller; there is no retry or fallback port. The
    /// accept loop runs until Ctrl+C, at which point the listener is dropped.
    pub async fn start(&self) -> Result<(), Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        println!(
            "Server running at http://localhost:{}/",
            self.config.addr.port()
        );
        info!("serving files from {}", self.config.base_dir.display());

        loop {
            tokio::select! {
                _ = signal::ctrl_c() => {
                    info!("Received Ctrl+C, closing listener");
                    break;
                }

                accepted = listener.accept() => {
                    let (mut socket, addr) = match accepted {
                        Ok(pair) => pair,
                        Err(e) => {
                            error!("Error accepting connection: {e}");
                            continue;
                        }
                    };
                    debug!("Connection from: {addr}");

                    let config = self.config.clone();
                    tokio::spawn(async move {
                        if let Err(e) = Self::handle_connection(&mut socket, &config).await {
                            error!("Error handling connection: {e}");
                        }
                    });
                }
            }
        }

        Ok(())
    }

    /// Handle a single connection: read one request, dispatch it, send the
    /// response.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        config: &ServerConfig,
    ) -> Result<(), Error> {
        let mut buf = vec![0; config.read_buffer_size];

        // Read data from the socket
        let n = socket.read(&mut buf).await?;
        if n == 0 {
            return Ok(()); // Connection closed
        }

        // Parse the HTTP request
        let request = match parse_request(&buf[..n]) {
            Ok(req) => req,
            Err(e) => {
                let response = HttpResponse::new(StatusCode::BadRequest)
                    .with_content_type("text/plain")
                    .with_body_string(format!("Error parsing request: {e}"));
                Self::send(socket, response).await?;
                return Err(Error::ParseError(e));
            }
        };

        let response = Self::dispatch(&request, config).await;
        Self::send(socket, response).await
    }

    /// Route a request: an exact root GET gets the diagnostic page, anything
    /// else falls through to static file serving (whatever the method).
    async fn dispatch(request: &HttpRequest, config: &ServerConfig) -> HttpResponse {
        if request.method == Method::GET && request.path == "/" {
            return HttpResponse::new(StatusCode::Ok)
                .with_content_type("text/html")
                .with_body_string(page::render(config.addr.port()));
        }

        static_files::serve(&config.base_dir, request).await
    }

    /// Single choke point every response passes through before hitting the
    /// socket: caching is disabled here so error responses get the header
    /// too.
    async fn send(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        response: HttpResponse,
    ) -> Result<(), Error> {
        let response = response.with_header("Cache-Control", CACHE_CONTROL);
        socket.write_all(&response.to_bytes()).await?;
        Ok(())
    }
}
