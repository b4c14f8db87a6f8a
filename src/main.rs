//! Binary entry point for the localprobe diagnostic server.
//!
//! No flags, no environment configuration: bind 0.0.0.0:8080, serve files
//! from the directory containing the executable, run until interrupted.

use localprobe::{HttpServer, ServerConfig};

#[tokio::main]
async fn main() {
    env_logger::init();

    let server = HttpServer::new(ServerConfig::default());

    if let Err(e) = server.start().await {
        eprintln!("Failed to start server: {e}");
        std::process::exit(1);
    }
}
