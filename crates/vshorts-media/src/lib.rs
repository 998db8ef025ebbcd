//! FFmpeg CLI wrapper for the vshorts render pipeline.
//!
//! This crate provides:
//! - Type-safe FFmpeg command building and execution
//! - FFprobe-based source inspection
//! - Stream-copy segment extraction
//! - Vertical composite filter construction (overlay over main content)
//! - The windowed render pipeline that ties them together

pub mod clip;
pub mod command;
pub mod compose;
pub mod error;
pub mod probe;
pub mod render;

pub use clip::extract_segment;
pub use command::{check_ffmpeg, check_ffprobe, FfmpegCommand, FfmpegRunner};
pub use compose::composite_filter;
pub use error::{MediaError, MediaResult};
pub use probe::{probe_video, SourceInfo};
pub use render::{render_shorts, RenderRequest, RenderSummary};
