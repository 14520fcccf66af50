//! HTML serialization of resolved geometry.
//!
//! Emits a wrapper `<div>` holding an `<iframe>`, plus a reveal `<button>`
//! when the video starts hidden:
//!
//! ```text
//! <div class="video_wrapper" name="ID" style="...">
//! <iframe allowfullscreen="true" src="BASE_URLID" style="...">
//! </iframe></div>
//! <button onclick='...'>LABEL</button>
//! ```
//!
//! Attributes are written sorted by name and each start tag ends with a
//! newline, so existing rendered pages stay byte-identical.
//!
//! # Example
//!
//! ```
//! use vidembed::{VideoRequest, html::render_html};
//!
//! let markup = render_html(&VideoRequest::new("abc123"), "https://www.youtube.com/embed/");
//! assert!(markup.contains(r#"src="https://www.youtube.com/embed/abc123""#));
//! assert!(markup.ends_with("</iframe></div>"));
//! ```

use alloc::format;
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::layout::{Geometry, resolve};
use crate::request::VideoRequest;

/// CSS class on the wrapping container.
pub const WRAPPER_CLASS: &str = "video_wrapper";

/// Resolve and serialize a request in one step.
pub fn render_html(request: &VideoRequest, base_url: &str) -> String {
    serialize(&resolve(request), &request.id, base_url)
}

/// Serialize resolved geometry for the video `id` hosted at `base_url`.
pub fn serialize(geometry: &Geometry, id: &str, base_url: &str) -> String {
    let mut html = String::with_capacity(256);

    let container_style = geometry.container.to_string();
    push_start_tag(
        &mut html,
        "div",
        &mut [
            ("class", WRAPPER_CLASS),
            ("style", container_style.as_str()),
            // Lookup key for the reveal control.
            ("name", id),
        ],
    );

    let src = format!("{base_url}{id}");
    let frame_style = geometry.frame.to_string();
    push_start_tag(
        &mut html,
        "iframe",
        &mut [
            ("src", src.as_str()),
            ("style", frame_style.as_str()),
            ("allowfullscreen", "true"),
        ],
    );
    html.push_str("</iframe></div>");

    if let Some(label) = geometry.visibility.label() {
        html.push('\n');
        push_reveal_control(&mut html, id, label);
    }
    html
}

/// `<name a="..." b="...">` with attributes sorted by name, then a newline.
fn push_start_tag(html: &mut String, name: &str, attrs: &mut [(&str, &str)]) {
    attrs.sort_unstable_by_key(|(k, _)| *k);
    let mut parts: Vec<String> = Vec::with_capacity(attrs.len() + 1);
    parts.push(String::from(name));
    for (key, value) in attrs.iter() {
        parts.push(format!(r#"{key}="{}""#, escape_attr(value)));
    }
    html.push('<');
    html.push_str(&parts.join(" "));
    html.push_str(">\n");
}

/// Button that un-hides the container named `id` and then hides itself.
fn push_reveal_control(html: &mut String, id: &str, label: &str) {
    let script = format!(
        r#"document.getElementsByName("{}")[0].style.display = "block"; this.style.display = "none""#,
        escape_js_string(id)
    );
    html.push_str(&format!(
        "<button onclick='{}'>{}</button>",
        escape_single_quoted(&script),
        escape_text(label)
    ));
}

/// Escape for a double-quoted attribute value.
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Escape for a single-quoted attribute value. Double quotes stay literal.
fn escape_single_quoted(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&#39;")
}

/// Escape element text content.
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape for a double-quoted JavaScript string literal.
fn escape_js_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
