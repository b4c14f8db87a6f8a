//! Static file serving over a base directory.
//!
//! Conventional built-in file server semantics: request paths resolve under
//! the base directory, directories redirect to their trailing-slash form and
//! then serve an index file or a generated listing, and anything missing or
//! unresolvable yields 404. Paths can never escape the base directory.

use std::path::{Path, PathBuf};

use log::debug;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use tokio::fs;

use crate::parser::{HttpRequest, Method};
use crate::server::response::{HttpResponse, StatusCode};

/// Characters escaped when building listing hrefs.
const HREF_ENCODE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'%');

/// Index files tried before falling back to a directory listing.
const INDEX_FILES: &[&str] = &["index.html", "index.htm"];

/// Serve a request against the base directory.
///
/// GET and HEAD are handled; any other method gets 501 Not Implemented.
pub async fn serve(base_dir: &Path, request: &HttpRequest) -> HttpResponse {
    let head_only = match request.method {
        Method::GET => false,
        Method::HEAD => true,
        method => {
            return HttpResponse::new(StatusCode::NotImplemented)
                .with_content_type("text/plain")
                .with_body_string(format!("Unsupported method ({method})"));
        }
    };

    // The query string and fragment play no part in file resolution.
    let url_path = request
        .path
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    let relative = match sanitize_path(url_path) {
        Some(relative) => relative,
        None => return not_found(),
    };
    let full_path = base_dir.join(relative);
    debug!("resolving {url_path} to {}", full_path.display());

    let metadata = match fs::metadata(&full_path).await {
        Ok(metadata) => metadata,
        Err(_) => return not_found(),
    };

    let response = if metadata.is_dir() {
        if !url_path.ends_with('/') {
            // Redirect to the canonical trailing-slash form of the URL.
            HttpResponse::new(StatusCode::MovedPermanently)
                .with_header("Location", format!("{url_path}/"))
                .with_body_string("")
        } else {
            serve_directory(&full_path, url_path).await
        }
    } else {
        serve_regular_file(&full_path).await
    };

    if head_only {
        response.without_body()
    } else {
        response
    }
}

/// Map a request path onto a relative path that cannot escape the base
/// directory.
///
/// `..` pops the path built so far, `.` and empty segments are skipped, and
/// decoded segments containing a separator or starting with a dot are
/// rejected outright.
pub fn sanitize_path(url_path: &str) -> Option<PathBuf> {
    let mut sanitized = PathBuf::new();

    for segment in url_path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => {
                sanitized.pop();
            }
            segment => {
                let decoded = percent_decode_str(segment).decode_utf8().ok()?;
                if decoded.contains('/') || decoded.contains('\\') || decoded.starts_with('.') {
                    return None;
                }
                sanitized.push(decoded.as_ref());
            }
        }
    }

    Some(sanitized)
}

/// Infer a content type from the file extension.
pub fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("txt") => "text/plain",
        Some("xml") => "application/xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("pdf") => "application/pdf",
        Some("wasm") => "application/wasm",
        _ => "application/octet-stream",
    }
}

async fn serve_regular_file(path: &Path) -> HttpResponse {
    match fs::read(path).await {
        Ok(contents) => HttpResponse::new(StatusCode::Ok)
            .with_content_type(content_type_for(path))
            .with_body_bytes(contents),
        Err(_) => not_found(),
    }
}

async fn serve_directory(dir: &Path, url_path: &str) -> HttpResponse {
    // An index file takes precedence over a listing.
    for index in INDEX_FILES {
        let candidate = dir.join(index);
        if fs::metadata(&candidate)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
        {
            return serve_regular_file(&candidate).await;
        }
    }

    match render_listing(dir, url_path).await {
        Ok(html) => HttpResponse::new(StatusCode::Ok)
            .with_content_type("text/html")
            .with_body_string(html),
        Err(_) => not_found(),
    }
}

/// Generate a plain HTML directory listing, entries sorted by name and
/// directories suffixed with `/`.
async fn render_listing(dir: &Path, url_path: &str) -> std::io::Result<String> {
    let mut entries = Vec::new();
    let mut read_dir = fs::read_dir(dir).await?;

    while let Some(entry) = read_dir.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await?.is_dir() {
            name.push('/');
        }
        entries.push(name);
    }
    entries.sort();

    let title = format!("Directory listing for {}", html_escape(url_path));
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str(&format!("    <title>{title}</title>\n"));
    html.push_str("    <meta charset=\"UTF-8\">\n</head>\n<body>\n");
    html.push_str(&format!("    <h1>{title}</h1>\n    <hr>\n    <ul>\n"));
    for name in &entries {
        let href = utf8_percent_encode(name, HREF_ENCODE);
        html.push_str(&format!(
            "        <li><a href=\"{href}\">{}</a></li>\n",
            html_escape(name)
        ));
    }
    html.push_str("    </ul>\n    <hr>\n</body>\n</html>\n");

    Ok(html)
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn not_found() -> HttpResponse {
    HttpResponse::new(StatusCode::NotFound)
        .with_content_type("text/plain")
        .with_body_string("File not found")
}
