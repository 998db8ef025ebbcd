//! Vertical composite filter construction.
//!
//! Turns a [`CompositeLayout`] into a single-pass FFmpeg `filter_complex`
//! that crops the overlay region, center-crops the main content to the
//! 9:16-derived width, scales each panel to its height fraction and
//! stacks them vertically.
//!
//! The two panels are normalized independently, so their widths may
//! differ by the even-rounding tolerance. `vstack` requires equal widths,
//! so the narrower panel is padded (centered) to the wider one; the
//! content itself is never stretched to compensate.

use vshorts_models::{even, CompositeLayout};

/// Output label of the composite video chain.
pub const COMPOSITE_LABEL: &str = "vout";

/// Width of the main-content panel after aspect-preserving scale to the
/// bottom height, even-adjusted.
pub fn scaled_main_width(layout: &CompositeLayout) -> u32 {
    let scaled = (layout.target_width as f64 * layout.bottom_height as f64
        / layout.source_height as f64)
        .round() as u32;
    even(scaled.max(2))
}

/// Stacked output width: the wider of the two normalized panels.
pub fn stacked_width(layout: &CompositeLayout) -> u32 {
    layout.scaled_overlay_width().max(scaled_main_width(layout))
}

/// Build the composite `filter_complex` for one window's sub-clip.
///
/// The filter reads the sub-clip as input 0 and leaves the stacked video
/// under [`COMPOSITE_LABEL`]; audio mapping is the caller's concern.
pub fn composite_filter(layout: &CompositeLayout) -> String {
    let top_width = layout.scaled_overlay_width();
    let bottom_width = scaled_main_width(layout);
    let stack_width = stacked_width(layout);

    format!(
        "[0:v]crop={ow}:{oh}:{ox}:{oy},\
         scale={tw}:{th}:flags=lanczos,\
         pad={sw}:{th}:(ow-iw)/2:0,\
         setsar=1,format=yuv420p[top];\
         [0:v]crop={mw}:{mh}:{mx}:0,\
         scale={bw}:{bh}:flags=lanczos,\
         pad={sw}:{bh}:(ow-iw)/2:0,\
         setsar=1,format=yuv420p[bottom];\
         [top][bottom]vstack=inputs=2[{label}]",
        ow = layout.overlay.width,
        oh = layout.overlay.height,
        ox = layout.overlay.x,
        oy = layout.overlay.y,
        tw = top_width,
        th = layout.top_height,
        mw = layout.target_width,
        mh = layout.source_height,
        mx = layout.center_crop_x,
        bw = bottom_width,
        bh = layout.bottom_height,
        sw = stack_width,
        label = COMPOSITE_LABEL,
    )
}
