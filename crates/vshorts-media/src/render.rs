//! Windowed render pipeline.
//!
//! Walks the window plan over one source recording and produces one
//! vertical clip per window. Each window gets its own scoped temp
//! directory for the extracted segment, so the intermediate file is
//! released on every exit path. Any failure aborts the whole run; the
//! pipeline is re-run wholesale after the cause is fixed.

use std::path::{Path, PathBuf};
use tracing::info;

use vshorts_models::{work_item, CompositeLayout, EncodingConfig, OverlayRect, WindowPlan};

use crate::clip::extract_segment;
use crate::command::{check_ffmpeg, check_ffprobe, FfmpegCommand, FfmpegRunner};
use crate::compose::{composite_filter, COMPOSITE_LABEL};
use crate::error::MediaResult;
use crate::probe::probe_video;

/// One render run over a single source recording.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Source recording path
    pub input: PathBuf,
    /// Directory receiving the numbered clips
    pub output_dir: PathBuf,
    /// Overlay region in source pixels
    pub overlay: OverlayRect,
    /// Window length and stride
    pub plan: WindowPlan,
    /// Encode collaborator parameters
    pub encoding: EncodingConfig,
}

/// Outcome of a completed render run.
#[derive(Debug, Clone)]
pub struct RenderSummary {
    /// Number of clips written
    pub clips_rendered: usize,
    /// Geometry used for every clip
    pub layout: CompositeLayout,
}

/// Render every window of the source into a numbered vertical clip.
///
/// Geometry is validated and derived once, before any window is touched,
/// so an invalid overlay rect aborts before a single artifact exists.
pub async fn render_shorts(request: &RenderRequest) -> MediaResult<RenderSummary> {
    check_ffmpeg()?;
    check_ffprobe()?;

    let source = probe_video(&request.input).await?;
    info!(
        "Source: {}x{} @ {:.2}fps, {:.2}s",
        source.width, source.height, source.fps, source.duration
    );

    let layout = CompositeLayout::for_source(source.width, source.height, request.overlay)?;
    let filter = composite_filter(&layout);

    tokio::fs::create_dir_all(&request.output_dir).await?;

    let mut clips_rendered = 0;
    for (index, window) in request.plan.windows(source.duration).enumerate() {
        let output = request.output_dir.join(work_item::part_file_name(index + 1));
        info!(
            "Rendering window {} [{:.1}s, {:.1}s) -> {}",
            index + 1,
            window.start_secs,
            window.end_secs,
            output.display()
        );

        render_window(
            &request.input,
            &output,
            window.start_secs,
            window.duration(),
            &filter,
            &request.encoding,
        )
        .await?;
        clips_rendered += 1;
    }

    info!("Render run complete: {} clips", clips_rendered);
    Ok(RenderSummary {
        clips_rendered,
        layout,
    })
}

/// Extract one window into a scoped temp dir, then composite-encode it.
async fn render_window(
    input: &Path,
    output: &Path,
    start_secs: f64,
    duration_secs: f64,
    filter: &str,
    encoding: &EncodingConfig,
) -> MediaResult<()> {
    // TempDir removes the segment on drop, including the error paths.
    let temp_dir = tempfile::tempdir()?;
    let segment = temp_dir.path().join("segment.mp4");

    extract_segment(input, &segment, start_secs, duration_secs).await?;

    let cmd = FfmpegCommand::new(&segment, output)
        .filter_complex(filter, COMPOSITE_LABEL)
        .output_args(encoding.to_ffmpeg_args());

    FfmpegRunner::new().run(&cmd).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use vshorts_models::work_item::part_file_name;

    #[test]
    fn test_output_naming_is_deterministic() {
        // Window index n (0-based) always maps to part n+1
        assert_eq!(part_file_name(1), "shorts_part_001.mp4");
        assert_eq!(part_file_name(8), "shorts_part_008.mp4");
    }

    #[tokio::test]
    async fn test_missing_input_fails_before_writing_anything() {
        let out = tempfile::tempdir().unwrap();
        let request = RenderRequest {
            input: PathBuf::from("/nonexistent/source.mp4"),
            output_dir: out.path().join("clips"),
            overlay: OverlayRect::new(0, 0, 100, 100),
            plan: WindowPlan::default(),
            encoding: EncodingConfig::default(),
        };

        let result = render_shorts(&request).await;
        assert!(result.is_err());
        // No partial output directory contents
        assert!(!out.path().join("clips").exists());
    }
}
