//! Upload scheduling for rendered clips.
//!
//! This crate drives the second half of the pipeline:
//! - A work-queue abstraction over the shared clip directory
//! - The rename-driven idempotency state machine
//! - The staggered publish schedule (one slot per item, strictly
//!   increasing, floored to a minimum lead time)
//! - A `Publisher` trait with a YouTube Data API implementation

pub mod clock;
pub mod error;
pub mod publisher;
pub mod queue;
pub mod schedule;
pub mod scheduler;
pub mod youtube;

pub use clock::{Clock, SystemClock};
pub use error::{PublishError, PublishResult};
pub use publisher::{Privacy, PublishRequest, Publisher};
pub use queue::{DirQueue, WorkQueue};
pub use schedule::{next_publish_slot, ScheduleConfig};
pub use scheduler::{RunReport, Scheduler};
pub use youtube::{load_access_token, AccessToken, YouTubePublisher};
