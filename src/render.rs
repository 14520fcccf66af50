//! Output-format dispatch and the per-document rendering context.
//!
//! A document build walks its video elements and calls [`render`] for each,
//! passing the same [`DocumentPass`] throughout. The pass collects the
//! rendered body, any preamble the target needs, and warnings for elements
//! that were skipped.
//!
//! # Example
//!
//! ```
//! use vidembed::{DocumentPass, OutputTarget, Rendered, VideoRequest, YOUTUBE, render};
//!
//! let mut pass = DocumentPass::new();
//! let request = VideoRequest::new("abc123");
//!
//! assert_eq!(render(&request, &YOUTUBE, &OutputTarget::Html, &mut pass), Rendered::Emitted);
//! assert!(pass.body().contains("youtube.com/embed/abc123"));
//!
//! let man = OutputTarget::from_builder("man");
//! assert_eq!(render(&request, &YOUTUBE, &man, &mut pass), Rendered::Skipped);
//! assert_eq!(pass.warnings().len(), 1);
//! ```

use alloc::borrow::Cow;
use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::html;
use crate::request::VideoRequest;

/// YouTube embed player.
pub const YOUTUBE: Platform = Platform::new_static("youtube", "https://www.youtube.com/embed/");

/// Vimeo embed player.
pub const VIMEO: Platform = Platform::new_static("vimeo", "https://player.vimeo.com/video/");

/// A video hosting platform: its name and the URL the video id is appended to.
///
/// Platforms differ only in these two values; adding one needs no other code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Platform {
    name: Cow<'static, str>,
    base_url: Cow<'static, str>,
}

impl Platform {
    /// Platform from runtime configuration.
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            base_url: Cow::Owned(base_url.into()),
        }
    }

    const fn new_static(name: &'static str, base_url: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            base_url: Cow::Borrowed(base_url),
        }
    }

    /// Short platform name, used in macro names and warnings.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Embed URL prefix the video id is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Output format a document is being built for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum OutputTarget {
    /// HTML pages.
    Html,
    /// LaTeX source.
    Latex,
    /// Any format without a video renderer.
    Other(String),
}

impl OutputTarget {
    /// Map a builder name (`html`, `latex`, `man`, ...) to a target.
    pub fn from_builder(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "html" | "dirhtml" | "singlehtml" | "epub" => Self::Html,
            "latex" => Self::Latex,
            _ => Self::Other(String::from(name)),
        }
    }

    /// Builder name of the target.
    pub fn name(&self) -> &str {
        match self {
            Self::Html => "html",
            Self::Latex => "latex",
            Self::Other(name) => name,
        }
    }
}

/// Outcome of rendering one element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rendered {
    /// Markup was appended to the pass body.
    Emitted,
    /// The target has no renderer; the element was omitted and a warning
    /// recorded.
    Skipped,
}

/// Non-fatal problem recorded while rendering a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderWarning {
    /// No renderer exists for this platform and output format.
    UnsupportedOutputTarget { platform: String, target: String },
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedOutputTarget { platform, .. } => {
                write!(f, "{platform}: unsupported output format (node skipped)")
            }
        }
    }
}

/// State owned by one document rendering pass.
///
/// Create one per document. The macro registry inside makes sure each
/// platform's LaTeX macro is defined at most once per document.
#[derive(Clone, Debug, Default)]
pub struct DocumentPass {
    body: String,
    preamble: String,
    macros: BTreeSet<String>,
    warnings: Vec<RenderWarning>,
}

impl DocumentPass {
    /// Empty pass for a new document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered markup, in element order.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Definitions that must precede the body (LaTeX macros).
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Warnings recorded so far, in element order.
    pub fn warnings(&self) -> &[RenderWarning] {
        &self.warnings
    }

    /// Whether the named macro is already defined in this pass.
    pub fn has_macro(&self, name: &str) -> bool {
        self.macros.contains(name)
    }

    /// Consume the pass, returning `(preamble, body, warnings)`.
    pub fn into_parts(self) -> (String, String, Vec<RenderWarning>) {
        (self.preamble, self.body, self.warnings)
    }

    pub(crate) fn push_body(&mut self, markup: &str) {
        self.body.push_str(markup);
    }

    /// Append `definition` to the preamble unless `name` was registered
    /// already. Returns true if it was added.
    #[cfg_attr(not(feature = "latex"), allow(dead_code))]
    pub(crate) fn define_macro(&mut self, name: &str, definition: &str) -> bool {
        if !self.macros.insert(String::from(name)) {
            return false;
        }
        self.preamble.push_str(definition);
        true
    }

    fn warn(&mut self, warning: RenderWarning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }
}

/// Render one video element for `target`, appending to `pass`.
///
/// Targets without a renderer produce no markup at all, only a warning
/// naming the platform, so the rest of the document still builds.
pub fn render(
    request: &VideoRequest,
    platform: &Platform,
    target: &OutputTarget,
    pass: &mut DocumentPass,
) -> Rendered {
    match target {
        OutputTarget::Html => {
            let markup = html::render_html(request, platform.base_url());
            log::debug!(
                "{}: rendered {} ({} bytes of html)",
                platform.name(),
                request.id,
                markup.len()
            );
            pass.push_body(&markup);
            Rendered::Emitted
        }
        #[cfg(feature = "latex")]
        OutputTarget::Latex => {
            crate::latex::render_latex(request, platform, pass);
            Rendered::Emitted
        }
        other => {
            pass.warn(RenderWarning::UnsupportedOutputTarget {
                platform: String::from(platform.name()),
                target: String::from(other.name()),
            });
            Rendered::Skipped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::Visibility;

    #[test]
    fn builder_names_map_to_targets() {
        assert_eq!(OutputTarget::from_builder("html"), OutputTarget::Html);
        assert_eq!(OutputTarget::from_builder("dirhtml"), OutputTarget::Html);
        assert_eq!(OutputTarget::from_builder("singlehtml"), OutputTarget::Html);
        assert_eq!(OutputTarget::from_builder("LaTeX"), OutputTarget::Latex);
        assert_eq!(
            OutputTarget::from_builder("man"),
            OutputTarget::Other(String::from("man"))
        );
    }

    #[test]
    fn builtin_platforms() {
        assert_eq!(YOUTUBE.name(), "youtube");
        assert_eq!(YOUTUBE.base_url(), "https://www.youtube.com/embed/");
        assert_eq!(VIMEO.name(), "vimeo");
        assert_eq!(VIMEO.base_url(), "https://player.vimeo.com/video/");
    }

    #[test]
    fn configured_platform_equals_builtin() {
        assert_eq!(
            Platform::new("youtube", "https://www.youtube.com/embed/"),
            YOUTUBE
        );
    }

    #[test]
    fn html_appends_to_body() {
        let mut pass = DocumentPass::new();
        let req = VideoRequest::new("a");
        assert_eq!(
            render(&req, &VIMEO, &OutputTarget::Html, &mut pass),
            Rendered::Emitted
        );
        assert_eq!(pass.body(), html::render_html(&req, "https://player.vimeo.com/video/"));
        assert!(pass.preamble().is_empty());
        assert!(pass.warnings().is_empty());
    }

    #[test]
    fn unsupported_target_warns_once_and_emits_nothing() {
        let mut pass = DocumentPass::new();
        let req = VideoRequest::new("a").visibility(Visibility::hidden("Show"));
        let target = OutputTarget::from_builder("texinfo");
        assert_eq!(render(&req, &YOUTUBE, &target, &mut pass), Rendered::Skipped);
        assert_eq!(pass.body(), "");
        assert_eq!(pass.preamble(), "");
        assert_eq!(
            pass.warnings(),
            &[RenderWarning::UnsupportedOutputTarget {
                platform: String::from("youtube"),
                target: String::from("texinfo"),
            }]
        );
        assert_eq!(
            pass.warnings()[0].to_string(),
            "youtube: unsupported output format (node skipped)"
        );
    }

    #[test]
    fn define_macro_only_once() {
        let mut pass = DocumentPass::new();
        assert!(pass.define_macro("\\m", "def;"));
        assert!(!pass.define_macro("\\m", "def;"));
        assert!(pass.has_macro("\\m"));
        assert_eq!(pass.preamble(), "def;");
    }
}
