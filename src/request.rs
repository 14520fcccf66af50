//! Raw directive options and the validated [`VideoRequest`] built from them.

use alloc::string::String;

use crate::error::EmbedError;
use crate::size::{AspectRatio, Size, Visibility, parse_aspect, parse_hide, parse_size};

/// Unvalidated option text as the directive collaborator received it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawOptions {
    /// `width` option text.
    pub width: Option<String>,
    /// `height` option text.
    pub height: Option<String>,
    /// `aspect` option text.
    pub aspect: Option<String>,
    /// `hide` option text.
    pub hide: Option<String>,
}

impl RawOptions {
    /// No options set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an option by name. Names are case-insensitive; a repeated
    /// name replaces the earlier value.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), EmbedError> {
        let slot = match key.trim().to_ascii_lowercase().as_str() {
            "width" => &mut self.width,
            "height" => &mut self.height,
            "aspect" => &mut self.aspect,
            "hide" => &mut self.hide,
            _ => return Err(EmbedError::UnknownOption(String::from(key))),
        };
        *slot = Some(value.into());
        Ok(())
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Result<Self, EmbedError> {
        self.set(key, value)?;
        Ok(self)
    }
}

/// Everything needed to render one embedded video.
///
/// Built once per element and never mutated afterwards. Either construct it
/// from raw option text with [`from_options`](Self::from_options), or use the
/// builder methods with already-typed values:
///
/// ```
/// use vidembed::{AspectRatio, Size, VideoRequest, Visibility};
///
/// let request = VideoRequest::new("abc123")
///     .width(Size::percent(80))
///     .aspect(AspectRatio::new(4, 3).unwrap())
///     .visibility(Visibility::hidden("Show clip"));
///
/// assert_eq!(request.id, "abc123");
/// assert!(request.visibility.is_hidden());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VideoRequest {
    /// Platform-specific video identifier, appended verbatim to the embed URL.
    pub id: String,
    /// Explicit width, if given.
    pub width: Option<Size>,
    /// Explicit height, if given.
    pub height: Option<Size>,
    /// `None` means the default 16:9.
    pub aspect: Option<AspectRatio>,
    /// Shown directly or behind a reveal control.
    pub visibility: Visibility,
}

impl VideoRequest {
    /// Request with no layout hints.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            width: None,
            height: None,
            aspect: None,
            visibility: Visibility::Shown,
        }
    }

    /// Set the explicit width.
    pub fn width(mut self, width: Size) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the explicit height.
    pub fn height(mut self, height: Size) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the aspect ratio.
    pub fn aspect(mut self, aspect: AspectRatio) -> Self {
        self.aspect = Some(aspect);
        self
    }

    /// Set the visibility toggle.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Validate raw directive options into a request.
    ///
    /// The first malformed value aborts construction, so no markup is ever
    /// produced for a broken element.
    pub fn from_options(id: &str, options: &RawOptions) -> Result<Self, EmbedError> {
        if id.is_empty() {
            return Err(EmbedError::MissingVideoId);
        }
        let aspect = options.aspect.as_deref().map(parse_aspect).transpose()?;
        let width = options.width.as_deref().map(parse_size).transpose()?;
        let height = options.height.as_deref().map(parse_size).transpose()?;
        Ok(Self {
            id: String::from(id),
            width,
            height,
            aspect,
            visibility: parse_hide(options.hide.as_deref()),
        })
    }

    /// Aspect ratio with the 16:9 default applied.
    pub fn aspect_or_default(&self) -> AspectRatio {
        self.aspect.unwrap_or_default()
    }
}
