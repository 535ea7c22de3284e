//! Preview document assembly.
//!
//! The composer turns the two editor buffers into one self-contained HTML
//! document for the sandboxed preview iframe. It is pure string assembly:
//! no parsing, no sanitization, no escaping. The output is only ever
//! handed to an isolated rendering surface and is never persisted.

/// Default styling injected before the user's CSS.
///
/// Lesson markup uses the `.grid-container` / `.flex-container` /
/// `.position-container` class names; these rules make that markup render
/// recognizably before the learner writes any CSS. User rules come later
/// in the same style element, so the normal cascade lets them override.
pub const BASE_STYLE: &str = r#"body {
  margin: 0;
  padding: 20px;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  background: #f8fafc;
}
.grid-container, .flex-container, .position-container {
  min-height: 200px;
  background: white;
  border-radius: 8px;
  padding: 20px;
  box-shadow: 0 1px 3px 0 rgba(0, 0, 0, 0.1);
}
.grid-container > div,
.flex-container > div,
.position-container > div {
  background: linear-gradient(135deg, #3b82f6, #8b5cf6);
  color: white;
  padding: 15px;
  border-radius: 6px;
  font-weight: bold;
  display: flex;
  align-items: center;
  justify-content: center;
}"#;

/// Compose the full preview document: fixed envelope, base style block,
/// user CSS, user HTML — in that order, always.
///
/// Total function: any pair of input strings yields a renderable document.
/// Malformed input shows up visually in the sandbox, not as an error here.
pub fn compose_preview(html: &str, css: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<style>
{BASE_STYLE}
{css}
</style>
</head>
<body>
{html}
</body>
</html>"#
    )
}
