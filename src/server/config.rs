//! Server configuration.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// The fixed listening port. Not configurable by flag or environment.
pub const PORT: u16 = 8080;

/// Diagnostic server configuration.
///
/// Built once at process start and passed to [`HttpServer`]; nothing mutates
/// it afterwards.
///
/// [`HttpServer`]: crate::server::HttpServer
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The directory static files are served from.
    pub base_dir: PathBuf,
    /// The read buffer size.
    pub read_buffer_size: usize,
}

impl ServerConfig {
    /// The directory containing the running executable.
    ///
    /// Used as the default base directory so relative file lookups are stable
    /// regardless of the caller's current directory. Falls back to `.` if the
    /// executable path cannot be determined.
    pub fn exe_dir() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], PORT)),
            base_dir: Self::exe_dir(),
            read_buffer_size: 8192,
        }
    }
}
