//! Composite frame layout for portrait (9:16) output.
//!
//! The layout splits the output vertically: the overlay region scaled to
//! the top 30% of the source height, and a centered 9:16-derived crop of
//! the main content scaled to the bottom 70%.
//!
//! # Codec constraints
//!
//! libx264 rejects odd frame dimensions, so every derived dimension is
//! rounded down to even via [`even`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rect::OverlayRect;

/// Fraction of the source height occupied by the overlay panel.
pub const TOP_FRACTION: f64 = 0.30;

/// Fraction of the source height occupied by the main-content panel.
pub const BOTTOM_FRACTION: f64 = 0.70;

/// Round a dimension down to the nearest even number.
#[inline]
pub fn even(value: u32) -> u32 {
    value - value % 2
}

/// Geometry errors. All of these abort a render run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("overlay rect {rect} does not fit inside {frame_width}x{frame_height} frame")]
    OverlayOutOfFrame {
        rect: OverlayRect,
        frame_width: u32,
        frame_height: u32,
    },

    #[error("degenerate dimension: {0}")]
    DegenerateDimension(String),

    #[error("invalid rect spec '{0}', expected x,y,width,height")]
    InvalidRectSpec(String),

    #[error("window stride {stride_secs}s must be shorter than window length {window_secs}s")]
    InvalidWindowPlan { window_secs: f64, stride_secs: f64 },
}

/// Derived output geometry for one source video.
///
/// Computed once per source and reused for every window; the values are
/// pure functions of the source dimensions and the overlay rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeLayout {
    /// Source frame width
    pub source_width: u32,
    /// Source frame height
    pub source_height: u32,
    /// Overlay region in source pixels
    pub overlay: OverlayRect,
    /// Output width: even-adjusted floor(source_height * 9 / 16)
    pub target_width: u32,
    /// Height of the top (overlay) panel, even-adjusted
    pub top_height: u32,
    /// Height of the bottom (main content) panel, even-adjusted
    pub bottom_height: u32,
    /// X offset for the centered main-content crop
    pub center_crop_x: u32,
}

impl CompositeLayout {
    /// Derive the layout for a source frame.
    ///
    /// Fails when the overlay rect falls outside the frame or when any
    /// derived dimension collapses to zero.
    pub fn for_source(
        source_width: u32,
        source_height: u32,
        overlay: OverlayRect,
    ) -> Result<Self, GeometryError> {
        overlay.validate(source_width, source_height)?;

        let target_width = even((source_height as f64 * 9.0 / 16.0).floor() as u32);
        let top_height = even((source_height as f64 * TOP_FRACTION).floor() as u32);
        let bottom_height = even((source_height as f64 * BOTTOM_FRACTION).floor() as u32);

        if target_width == 0 {
            return Err(GeometryError::DegenerateDimension(format!(
                "target width 0 for {}x{} source",
                source_width, source_height
            )));
        }
        if top_height == 0 || bottom_height == 0 {
            return Err(GeometryError::DegenerateDimension(format!(
                "panel heights {}+{} for {}px source height",
                top_height, bottom_height, source_height
            )));
        }
        if target_width > source_width {
            return Err(GeometryError::DegenerateDimension(format!(
                "target width {} exceeds source width {}",
                target_width, source_width
            )));
        }

        let center_crop_x = (source_width - target_width) / 2;

        Ok(Self {
            source_width,
            source_height,
            overlay,
            target_width,
            top_height,
            bottom_height,
            center_crop_x,
        })
    }

    /// Width of the overlay panel after aspect-preserving scale to
    /// `top_height`, even-adjusted.
    pub fn scaled_overlay_width(&self) -> u32 {
        let scaled =
            (self.overlay.width as f64 * self.top_height as f64 / self.overlay.height as f64)
                .round() as u32;
        even(scaled.max(2))
    }
}
