//! Geometry resolution for embedded video frames.
//!
//! Fills in whichever of width and height the author left out, using the
//! aspect ratio, and picks one of two layouts:
//!
//! - **Fixed**: both dimensions resolve to absolute values and the frame is
//!   sized directly. The frame height gets [`CONTROL_HEIGHT`] extra pixels
//!   for the player's control bar.
//! - **Responsive**: width is a percentage and height is left out. The
//!   container keeps its aspect ratio through `padding-bottom` and the frame
//!   fills it absolutely.
//!
//! # Example
//!
//! ```
//! use vidembed::{Extent, LayoutMode, VideoRequest, resolve};
//!
//! let geometry = resolve(&VideoRequest::new("abc123"));
//! assert_eq!(
//!     geometry.mode,
//!     LayoutMode::Fixed {
//!         width: Extent::pixels(560),
//!         height: Extent::pixels(345),
//!     }
//! );
//! assert_eq!(geometry.frame.to_string(), "border: 0; height: 345px; width: 560px");
//! ```

use alloc::format;
use core::fmt;

use crate::request::VideoRequest;
use crate::size::{AspectRatio, Size, Unit, Visibility};
use crate::style::StyleMap;

/// Vertical allowance reserved for the player's control bar.
pub const CONTROL_HEIGHT: u32 = 30;

/// Frame width when neither width nor height is given.
pub const DEFAULT_WIDTH: u32 = 560;

/// A resolved fixed-layout dimension.
///
/// Wider than [`Size`]: a derived width can exceed the largest size an
/// author may write.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Extent {
    /// Magnitude, truncated toward zero.
    pub magnitude: u64,
    /// Unit of `magnitude`.
    pub unit: Unit,
}

impl Extent {
    /// Extent in pixels.
    pub const fn pixels(magnitude: u64) -> Self {
        Self {
            magnitude,
            unit: Unit::Pixels,
        }
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit)
    }
}

/// The selected layout, with the values that drove it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LayoutMode {
    /// Absolute frame box. `height` includes [`CONTROL_HEIGHT`]; both
    /// magnitudes are truncated toward zero.
    Fixed { width: Extent, height: Extent },
    /// Percentage-width container; `padding_bottom` is the unrounded
    /// percentage that keeps the aspect ratio.
    Responsive { width: Size, padding_bottom: f64 },
}

impl LayoutMode {
    /// Whether the percentage-width layout was selected.
    pub fn is_responsive(&self) -> bool {
        matches!(self, Self::Responsive { .. })
    }
}

/// Fully resolved layout of one embedded video.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    /// Selected layout mode.
    pub mode: LayoutMode,
    /// Declarations for the wrapping container.
    pub container: StyleMap,
    /// Declarations for the embedded frame.
    pub frame: StyleMap,
    /// Visibility carried over from the request.
    pub visibility: Visibility,
}

/// Resolve the geometry of a request.
///
/// Responsive layout is chosen exactly when height is absent and width is a
/// percentage; everything else is a fixed layout.
pub fn resolve(request: &VideoRequest) -> Geometry {
    let aspect = request.aspect_or_default();
    let (mode, container, frame) = match (request.width, request.height) {
        (Some(width), None) if width.is_percent() => responsive(width, aspect),
        (width, height) => fixed(width, height, aspect, &request.visibility),
    };
    Geometry {
        mode,
        container,
        frame,
        visibility: request.visibility.clone(),
    }
}

fn responsive(width: Size, aspect: AspectRatio) -> (LayoutMode, StyleMap, StyleMap) {
    let padding_bottom = ratio(width.magnitude, aspect.height, aspect.width);
    let container = StyleMap::new()
        .with("padding-top", format!("{CONTROL_HEIGHT}px"))
        .with("padding-bottom", format!("{padding_bottom:.6}%"))
        .with("width", format!("{width}"))
        .with("position", "relative");
    let frame = StyleMap::new()
        .with("position", "absolute")
        .with("top", "0")
        .with("left", "0")
        .with("width", "100%")
        .with("height", "100%")
        .with("border", "0");
    (
        LayoutMode::Responsive {
            width,
            padding_bottom,
        },
        container,
        frame,
    )
}

fn fixed(
    width: Option<Size>,
    height: Option<Size>,
    aspect: AspectRatio,
    visibility: &Visibility,
) -> (LayoutMode, StyleMap, StyleMap) {
    // Derived magnitudes stay fractional until printed. A derived height
    // always comes from an integer width (explicit or default).
    let (w, w_unit) = match (width, height) {
        (Some(w), _) => (f64::from(w.magnitude), w.unit),
        (None, None) => (f64::from(DEFAULT_WIDTH), Unit::Pixels),
        (None, Some(h)) => (ratio(h.magnitude, aspect.width, aspect.height), Unit::Pixels),
    };
    let (h, h_unit) = match (height, width) {
        (Some(h), _) => (f64::from(h.magnitude), h.unit),
        (None, Some(w)) => (ratio(w.magnitude, aspect.height, aspect.width), Unit::Pixels),
        (None, None) => (ratio(DEFAULT_WIDTH, aspect.height, aspect.width), Unit::Pixels),
    };

    let width = Extent {
        magnitude: truncate(w),
        unit: w_unit,
    };
    let height = Extent {
        magnitude: truncate(h + f64::from(CONTROL_HEIGHT)),
        unit: h_unit,
    };

    let frame = StyleMap::new()
        .with("width", format!("{width}"))
        .with("height", format!("{height}"))
        .with("border", "0");
    let display = if visibility.is_hidden() { "none" } else { "block" };
    let container = StyleMap::new().with("display", display);
    (LayoutMode::Fixed { width, height }, container, frame)
}

/// `magnitude * num / den` in floating point.
fn ratio(magnitude: u32, num: u32, den: u32) -> f64 {
    (u64::from(magnitude) * u64::from(num)) as f64 / f64::from(den)
}

/// Truncate toward zero. Inputs are at most `u32::MAX * u32::MAX`, so the
/// `u64` range is never exceeded.
fn truncate(v: f64) -> u64 {
    v as u64
}
