//! Embeddable video player markup with fixed and responsive geometry.
//!
//! Pure computation over a validated request, `no_std` + `alloc` compatible.
//!
//! # Modules
//!
//! - [`size`] — Parsers for `width`/`height`, `aspect` and `hide` option text
//! - [`request`] — Raw directive options and the validated [`VideoRequest`]
//! - [`layout`] — Geometry resolution: fixed vs responsive layout
//! - [`style`] — Deterministic inline CSS declarations
//! - [`html`] — Wrapper/iframe/reveal-button serialization
//! - [`latex`] — Boxed-link fallback with per-document macro definitions
//! - [`render`] — Output-format dispatch, platforms and the per-document pass
//!
//! # Example
//!
//! ```
//! use vidembed::{DocumentPass, OutputTarget, RawOptions, VideoRequest, YOUTUBE, render};
//!
//! let mut options = RawOptions::new();
//! options.set("width", "50%").unwrap();
//! options.set("hide", "true").unwrap();
//! let request = VideoRequest::from_options("abc123", &options).unwrap();
//!
//! let mut pass = DocumentPass::new();
//! render(&request, &YOUTUBE, &OutputTarget::Html, &mut pass);
//!
//! assert!(pass.body().contains("padding-bottom: 28.125000%"));
//! assert!(pass.body().ends_with(">Display embedded video</button>"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod html;
#[cfg(feature = "latex")]
pub mod latex;
pub mod layout;
pub mod render;
pub mod request;
pub mod size;
pub mod style;

pub use error::EmbedError;
pub use layout::{CONTROL_HEIGHT, DEFAULT_WIDTH, Extent, Geometry, LayoutMode, resolve};
pub use render::{
    DocumentPass, OutputTarget, Platform, RenderWarning, Rendered, VIMEO, YOUTUBE, render,
};
pub use request::{RawOptions, VideoRequest};
pub use size::{AspectRatio, Size, Unit, Visibility, parse_aspect, parse_hide, parse_size};
pub use style::StyleMap;
