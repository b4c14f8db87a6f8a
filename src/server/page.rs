//! The embedded diagnostic page.

/// Render the diagnostic page served for `GET /`.
///
/// The page carries no server-supplied dynamic values: the displayed time is
/// filled in by the inline script when the browser loads the page, so the
/// rendered bytes are identical across requests for a given port.
pub fn render(port: u16) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Localhost Test</title>
    <meta charset="UTF-8">
</head>
<body style="font-family: Arial, sans-serif; padding: 40px;">
    <h1 style="color: green;">✓ SUCCESS! Localhost is working!</h1>
    <p>If you can see this, your browser can access localhost.</p>
    <p>Server is running on port {port}</p>
    <p>Time: <span id="time"></span></p>
    <script>
        document.getElementById('time').textContent = new Date().toLocaleTimeString();
    </script>
</body>
</html>
"#
    )
}
