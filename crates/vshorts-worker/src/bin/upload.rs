//! Upload binary: publish pending clips on a staggered schedule.

use tracing::{error, info};

use vshorts_publish::{
    load_access_token, DirQueue, ScheduleConfig, Scheduler, SystemClock, YouTubePublisher,
};
use vshorts_worker::{init_tracing, UploadEnvConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    info!("Starting vshorts-upload");

    let config = UploadEnvConfig::from_env();
    info!("Upload config: {:?}", config);

    // Credentials are acquired once per run, before any item is touched.
    let token = match load_access_token() {
        Ok(t) => t,
        Err(e) => {
            error!("Credential acquisition failed: {}", e);
            std::process::exit(1);
        }
    };

    let queue = DirQueue::new(&config.work_dir);
    info!("Scanning work directory {}", queue.dir().display());

    let publisher = YouTubePublisher::new(token);
    let schedule: ScheduleConfig = config.schedule;
    let scheduler = Scheduler::new(queue, publisher, SystemClock, schedule);

    match scheduler.run().await {
        Ok(report) => {
            info!(
                "Run complete: {} published, {} left pending",
                report.published.len(),
                report.failed.len()
            );
            if !report.failed.is_empty() {
                info!("Failed items retry on the next run: {:?}", report.failed);
            }
        }
        Err(e) => {
            error!("Scheduler run failed: {}", e);
            std::process::exit(1);
        }
    }
}
