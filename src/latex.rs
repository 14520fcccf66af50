//! LaTeX fallback: a boxed hyperlink instead of an embedded player.
//!
//! Geometry options are ignored here. Each platform gets one macro,
//! `\sphinxcontrib<platform>`, defined in the document preamble the first
//! time the platform is used in a pass.

use alloc::format;
use alloc::string::String;

use crate::render::{DocumentPass, Platform};
use crate::request::VideoRequest;

/// Name of the macro for `platform`, including the leading backslash.
pub fn macro_name(platform: &Platform) -> String {
    format!(r"\sphinxcontrib{}", platform.name())
}

/// Preamble definition of the platform macro.
pub fn macro_definition(platform: &Platform) -> String {
    format!(
        "\\newcommand{{{}}}[2]{{\\begin{{quote}}\\begin{{center}}\\fbox{{\\url{{#1#2}}}}\\end{{center}}\\end{{quote}}}}\n",
        macro_name(platform)
    )
}

/// Append the macro invocation for `request` to the pass body, defining the
/// macro first if this pass has not seen the platform yet.
pub fn render_latex(request: &VideoRequest, platform: &Platform, pass: &mut DocumentPass) {
    let name = macro_name(platform);
    if pass.define_macro(&name, &macro_definition(platform)) {
        log::debug!("{}: defined {name} in preamble", platform.name());
    }
    pass.push_body(&format!("{name}{{{}}}{{{}}}\n", platform.base_url(), request.id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{VIMEO, YOUTUBE};
    use crate::size::{Size, Visibility};

    #[test]
    fn invocation_and_definition() {
        let mut pass = DocumentPass::new();
        render_latex(&VideoRequest::new("abc123"), &YOUTUBE, &mut pass);
        assert_eq!(
            pass.body(),
            "\\sphinxcontribyoutube{https://www.youtube.com/embed/}{abc123}\n"
        );
        assert_eq!(
            pass.preamble(),
            "\\newcommand{\\sphinxcontribyoutube}[2]{\\begin{quote}\\begin{center}\
             \\fbox{\\url{#1#2}}\\end{center}\\end{quote}}\n"
        );
    }

    #[test]
    fn macro_defined_once_per_platform() {
        let mut pass = DocumentPass::new();
        render_latex(&VideoRequest::new("a"), &YOUTUBE, &mut pass);
        render_latex(&VideoRequest::new("b"), &YOUTUBE, &mut pass);
        render_latex(&VideoRequest::new("c"), &VIMEO, &mut pass);
        assert_eq!(pass.preamble().matches("\\newcommand").count(), 2);
        assert_eq!(pass.body().lines().count(), 3);
        assert!(pass.has_macro("\\sphinxcontribyoutube"));
        assert!(pass.has_macro("\\sphinxcontribvimeo"));
    }

    #[test]
    fn fresh_pass_defines_again() {
        let mut first = DocumentPass::new();
        render_latex(&VideoRequest::new("a"), &YOUTUBE, &mut first);
        let mut second = DocumentPass::new();
        render_latex(&VideoRequest::new("a"), &YOUTUBE, &mut second);
        assert_eq!(first.preamble(), second.preamble());
        assert!(!second.preamble().is_empty());
    }

    #[test]
    fn geometry_is_ignored() {
        let plain = VideoRequest::new("v");
        let styled = VideoRequest::new("v")
            .width(Size::percent(50))
            .visibility(Visibility::hidden("Show"));
        let mut a = DocumentPass::new();
        let mut b = DocumentPass::new();
        render_latex(&plain, &YOUTUBE, &mut a);
        render_latex(&styled, &YOUTUBE, &mut b);
        assert_eq!(a.body(), b.body());
    }
}
