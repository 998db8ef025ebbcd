//! Overlay rectangle in source pixel coordinates.

use serde::{Deserialize, Serialize};

use crate::layout::GeometryError;

/// A pixel rectangle marking the overlay region (e.g. a webcam feed)
/// inside the source frame.
///
/// Coordinates are absolute source pixels, never inferred from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayRect {
    /// X coordinate of the top-left corner
    pub x: u32,
    /// Y coordinate of the top-left corner
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl OverlayRect {
    /// Create a new overlay rectangle.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check that the rectangle lies fully inside a frame of the given size.
    pub fn fits_within(&self, frame_width: u32, frame_height: u32) -> bool {
        self.width > 0
            && self.height > 0
            && self.x + self.width <= frame_width
            && self.y + self.height <= frame_height
    }

    /// Validate the rectangle against a frame, returning a typed error
    /// when it does not fit.
    pub fn validate(&self, frame_width: u32, frame_height: u32) -> Result<(), GeometryError> {
        if !self.fits_within(frame_width, frame_height) {
            return Err(GeometryError::OverlayOutOfFrame {
                rect: *self,
                frame_width,
                frame_height,
            });
        }
        Ok(())
    }

    /// Parse a rectangle from a `x,y,width,height` string (env/CLI form).
    pub fn parse(s: &str) -> Result<Self, GeometryError> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(GeometryError::InvalidRectSpec(s.to_string()));
        }
        let mut values = [0u32; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| GeometryError::InvalidRectSpec(s.to_string()))?;
        }
        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }
}

impl std::fmt::Display for OverlayRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width, self.height, self.x, self.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_inside_frame() {
        // Webcam region from a 1920x1080 streamer layout
        let rect = OverlayRect::new(0, 231, 370, 338);
        assert!(rect.fits_within(1920, 1080));
        assert!(rect.validate(1920, 1080).is_ok());
    }

    #[test]
    fn test_rect_extends_past_right_edge() {
        let rect = OverlayRect::new(1800, 0, 200, 100);
        assert!(!rect.fits_within(1920, 1080));
        assert!(matches!(
            rect.validate(1920, 1080),
            Err(GeometryError::OverlayOutOfFrame { .. })
        ));
    }

    #[test]
    fn test_rect_extends_past_bottom_edge() {
        let rect = OverlayRect::new(0, 1000, 100, 100);
        assert!(!rect.fits_within(1920, 1080));
    }

    #[test]
    fn test_rect_exactly_at_edge_is_valid() {
        let rect = OverlayRect::new(1820, 980, 100, 100);
        assert!(rect.fits_within(1920, 1080));
    }

    #[test]
    fn test_zero_sized_rect_is_invalid() {
        assert!(!OverlayRect::new(0, 0, 0, 100).fits_within(1920, 1080));
        assert!(!OverlayRect::new(0, 0, 100, 0).fits_within(1920, 1080));
    }

    #[test]
    fn test_parse() {
        let rect = OverlayRect::parse("0, 231, 370, 338").unwrap();
        assert_eq!(rect, OverlayRect::new(0, 231, 370, 338));

        assert!(OverlayRect::parse("1,2,3").is_err());
        assert!(OverlayRect::parse("a,b,c,d").is_err());
    }
}
