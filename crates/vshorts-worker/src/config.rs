//! Environment-driven configuration for the binaries.

use std::path::PathBuf;

use anyhow::{bail, Context};
use vshorts_models::{EncodingConfig, OverlayRect, WindowPlan};
use vshorts_publish::ScheduleConfig;

/// Default work directory shared by render output and upload input.
pub const DEFAULT_WORK_DIR: &str = "./shorts";

fn env_f64(name: &str, default: f64) -> f64 {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn env_i64(name: &str, default: i64) -> i64 {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Configuration for `vshorts-render`.
#[derive(Debug, Clone)]
pub struct RenderEnvConfig {
    /// Source recording
    pub input: PathBuf,
    /// Directory receiving numbered clips
    pub output_dir: PathBuf,
    /// Overlay region in source pixels
    pub overlay: OverlayRect,
    /// Window length and stride
    pub plan: WindowPlan,
    /// Encoding parameters
    pub encoding: EncodingConfig,
}

impl RenderEnvConfig {
    /// Read configuration from the environment.
    ///
    /// `SHORTS_INPUT` is required; `SHORTS_OVERLAY_RECT` takes
    /// `x,y,width,height` and defaults to a common streamer layout
    /// (webcam on the left edge of a 1080p frame).
    pub fn from_env() -> anyhow::Result<Self> {
        let input = std::env::var("SHORTS_INPUT")
            .context("SHORTS_INPUT must point at the source recording")?;
        let input = PathBuf::from(input);
        if input.as_os_str().is_empty() {
            bail!("SHORTS_INPUT is empty");
        }

        let output_dir = PathBuf::from(
            std::env::var("SHORTS_OUTPUT_DIR").unwrap_or_else(|_| DEFAULT_WORK_DIR.to_string()),
        );

        let overlay = match std::env::var("SHORTS_OVERLAY_RECT") {
            Ok(spec) => OverlayRect::parse(&spec)
                .with_context(|| format!("bad SHORTS_OVERLAY_RECT '{}'", spec))?,
            Err(_) => OverlayRect::new(0, 231, 370, 338),
        };

        let plan = WindowPlan::new(
            env_f64("SHORTS_WINDOW_SECS", 30.0),
            env_f64("SHORTS_STRIDE_SECS", 5.0),
        )
        .context("invalid window/stride configuration")?;

        Ok(Self {
            input,
            output_dir,
            overlay,
            plan,
            encoding: EncodingConfig::default(),
        })
    }
}

/// Configuration for `vshorts-upload`.
#[derive(Debug, Clone)]
pub struct UploadEnvConfig {
    /// Directory of pending clips
    pub work_dir: PathBuf,
    /// Slot timing
    pub schedule: ScheduleConfig,
}

impl UploadEnvConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        let schedule = ScheduleConfig {
            initial_offset_secs: env_i64(
                "SHORTS_INITIAL_OFFSET_SECS",
                ScheduleConfig::default().initial_offset_secs,
            ),
            slot_interval_secs: env_i64(
                "SHORTS_SLOT_INTERVAL_SECS",
                ScheduleConfig::default().slot_interval_secs,
            ),
            min_lead_secs: env_i64(
                "SHORTS_MIN_LEAD_SECS",
                ScheduleConfig::default().min_lead_secs,
            ),
        };

        Self {
            work_dir: PathBuf::from(
                std::env::var("SHORTS_WORK_DIR").unwrap_or_else(|_| DEFAULT_WORK_DIR.to_string()),
            ),
            schedule,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_config_defaults() {
        // No env overrides set for these names in the test environment
        let config = UploadEnvConfig::from_env();
        assert_eq!(config.schedule.initial_offset_secs, 7200);
        assert_eq!(config.schedule.slot_interval_secs, 7200);
        assert_eq!(config.schedule.min_lead_secs, 900);
    }
}
