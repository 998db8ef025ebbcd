//! Work queue over the shared clip directory.
//!
//! The render pipeline enqueues by writing `*.mp4` files; the scheduler
//! dequeues eligible items and marks them done. The trait exists so a
//! ledger-backed store could replace the directory listing without
//! touching the scheduling logic.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use vshorts_models::{WorkItem, WorkItemState};

use crate::error::{PublishError, PublishResult};

/// Queue of artifacts awaiting publication.
#[async_trait]
pub trait WorkQueue: Send + Sync {
    /// List items still in `pending` state, in a stable order.
    async fn list_pending(&self) -> PublishResult<Vec<WorkItem>>;

    /// Transition an item `pending` -> `done`. At most once per item;
    /// an already-done item is never listed again.
    async fn mark_done(&self, item: &WorkItem) -> PublishResult<()>;

    /// Absolute path of the item's media file.
    fn resolve(&self, item: &WorkItem) -> PathBuf;
}

/// Directory-backed queue; the `done_` rename is the persisted state.
#[derive(Debug, Clone)]
pub struct DirQueue {
    dir: PathBuf,
}

impl DirQueue {
    /// Create a queue over a work directory.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// The underlying directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl WorkQueue for DirQueue {
    async fn list_pending(&self) -> PublishResult<Vec<WorkItem>> {
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        let mut items = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if let Some(item) = WorkItem::from_file_name(name) {
                if item.is_pending() {
                    items.push(item);
                }
            }
        }

        // Directory order is arbitrary; sort so schedule slots are
        // assigned in clip order across runs.
        items.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        debug!("Listed {} pending items in {}", items.len(), self.dir.display());
        Ok(items)
    }

    async fn mark_done(&self, item: &WorkItem) -> PublishResult<()> {
        if item.state == WorkItemState::Done {
            return Err(PublishError::upload_failed(format!(
                "item {} is already done",
                item.file_name
            )));
        }
        let from = self.dir.join(&item.file_name);
        let to = self.dir.join(item.done_file_name());
        tokio::fs::rename(&from, &to).await?;
        debug!("Marked done: {} -> {}", from.display(), to.display());
        Ok(())
    }

    fn resolve(&self, item: &WorkItem) -> PathBuf {
        self.dir.join(&item.file_name)
    }
}
