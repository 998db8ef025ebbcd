//! Shared data models for the vshorts pipeline.
//!
//! This crate provides the pure core of the system:
//! - Overlay rectangle and composite layout geometry
//! - Segment window planning
//! - Encoding configuration
//! - Work item lifecycle state
//!
//! Nothing in this crate performs I/O; the media and publish crates
//! consume these types.

pub mod encoding;
pub mod layout;
pub mod rect;
pub mod window;
pub mod work_item;

pub use encoding::EncodingConfig;
pub use layout::{even, CompositeLayout, GeometryError};
pub use rect::OverlayRect;
pub use window::{Window, WindowPlan};
pub use work_item::{WorkItem, WorkItemState, DONE_PREFIX};
