//! Render binary: slice one landscape recording into vertical clips.

use tracing::{error, info};

use vshorts_media::{render_shorts, RenderRequest};
use vshorts_worker::{init_tracing, RenderEnvConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    info!("Starting vshorts-render");

    let config = match RenderEnvConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {:#}", e);
            std::process::exit(1);
        }
    };
    info!("Render config: {:?}", config);

    let request = RenderRequest {
        input: config.input,
        output_dir: config.output_dir,
        overlay: config.overlay,
        plan: config.plan,
        encoding: config.encoding,
    };

    match render_shorts(&request).await {
        Ok(summary) => {
            info!(
                "Rendered {} clips at {}x{} (+{}x{})",
                summary.clips_rendered,
                summary.layout.target_width,
                summary.layout.top_height,
                summary.layout.target_width,
                summary.layout.bottom_height,
            );
        }
        Err(e) => {
            // Geometry and encode failures abort the whole run; a partial,
            // renumbered output set would be worse than a clean rerun.
            error!("Render run failed: {}", e);
            std::process::exit(1);
        }
    }
}
