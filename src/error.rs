//! Request construction errors.

use alloc::string::String;

use thiserror::Error;

/// Error raised while turning raw directive options into a
/// [`VideoRequest`](crate::VideoRequest).
///
/// Each variant carries the offending raw text so the document author can
/// find and fix it. Once a request exists, resolving and rendering it
/// cannot fail.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EmbedError {
    /// Width or height does not match `digits[%|px]`.
    #[error("invalid size {0:?}")]
    InvalidSizeFormat(String),
    /// Aspect ratio does not match `digits:digits` with positive parts.
    #[error("invalid aspect ratio {0:?}")]
    InvalidAspectFormat(String),
    /// Option name not accepted by the video directive.
    #[error("unknown option {0:?} (expected width, height, aspect or hide)")]
    UnknownOption(String),
    /// The required video id argument is empty.
    #[error("missing video id")]
    MissingVideoId,
}
