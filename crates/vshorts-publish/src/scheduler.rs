//! Staggered upload scheduler.
//!
//! Walks the pending items one at a time (the hosting service mandates
//! serialized submission) and threads the candidate publish time through
//! the loop as a plain value. A failed upload leaves its item pending
//! and its slot unused; the candidate still advances so later items keep
//! their spacing within the run.

use tracing::{info, warn};

use crate::clock::Clock;
use crate::error::{PublishError, PublishResult};
use crate::publisher::{PublishRequest, Publisher};
use crate::queue::WorkQueue;
use crate::schedule::{next_publish_slot, ScheduleConfig};

/// Outcome of one scheduler run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// File names published and marked done
    pub published: Vec<String>,
    /// File names whose upload failed; left pending for the next run
    pub failed: Vec<String>,
}

/// Drives pending items through the publish collaborator.
pub struct Scheduler<Q, P, C> {
    queue: Q,
    publisher: P,
    clock: C,
    config: ScheduleConfig,
}

impl<Q, P, C> Scheduler<Q, P, C>
where
    Q: WorkQueue,
    P: Publisher,
    C: Clock,
{
    /// Create a scheduler.
    pub fn new(queue: Q, publisher: P, clock: C, config: ScheduleConfig) -> Self {
        Self {
            queue,
            publisher,
            clock,
            config,
        }
    }

    /// Run once over the current pending set.
    ///
    /// Credential failures from the publisher abort the run; per-item
    /// upload failures are logged and the run continues.
    pub async fn run(&self) -> PublishResult<RunReport> {
        let items = self.queue.list_pending().await?;
        info!("Scheduler run: {} pending items", items.len());

        let mut report = RunReport::default();
        let mut candidate = self.clock.now() + self.config.initial_offset();

        for item in items {
            // Single "now" read per item, at submission time.
            let now = self.clock.now();
            let publish_at = next_publish_slot(candidate, now, self.config.min_lead());

            let request = PublishRequest::for_clip(
                self.queue.resolve(&item),
                &item.file_name,
                Some(publish_at),
            );

            match self.publisher.publish(&request).await {
                Ok(video_id) => {
                    self.queue.mark_done(&item).await?;
                    info!(
                        "Published {} as {} (goes live {})",
                        item.file_name, video_id, publish_at
                    );
                    report.published.push(item.file_name);
                }
                Err(e @ PublishError::CredentialFailure(_)) => return Err(e),
                Err(e) => {
                    warn!("Upload failed for {}, left pending: {}", item.file_name, e);
                    report.failed.push(item.file_name);
                }
            }

            // Advance unconditionally so a failed item's slot is not
            // reassigned to a later item within this run.
            candidate += self.config.slot_interval();
        }

        info!(
            "Scheduler run complete: {} published, {} failed",
            report.published.len(),
            report.failed.len()
        );
        Ok(report)
    }
}
