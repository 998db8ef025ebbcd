//! Work item lifecycle state.
//!
//! The render pipeline and the upload scheduler are coupled only through
//! a shared directory of artifacts; the naming convention here is that
//! contract. An artifact is `pending` until a successful publish renames
//! it with the [`DONE_PREFIX`].

use serde::{Deserialize, Serialize};

/// Filename prefix marking an already-published artifact.
pub const DONE_PREFIX: &str = "done_";

/// Extension produced by the render pipeline and accepted by the scheduler.
pub const CLIP_EXTENSION: &str = "mp4";

/// Two-valued publication state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkItemState {
    /// Rendered, not yet published
    Pending,
    /// Published; never selected again
    Done,
}

/// One artifact awaiting (or past) publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Bare file name within the work directory
    pub file_name: String,
    /// Current lifecycle state
    pub state: WorkItemState,
}

impl WorkItem {
    /// Classify a directory entry by the naming convention.
    ///
    /// Returns `None` for files that are not clips at all.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        if !file_name.ends_with(&format!(".{}", CLIP_EXTENSION)) {
            return None;
        }
        let state = if file_name.starts_with(DONE_PREFIX) {
            WorkItemState::Done
        } else {
            WorkItemState::Pending
        };
        Some(Self {
            file_name: file_name.to_string(),
            state,
        })
    }

    /// File name this item carries once marked done.
    pub fn done_file_name(&self) -> String {
        format!("{}{}", DONE_PREFIX, self.file_name)
    }

    /// Whether the scheduler should pick this item up.
    pub fn is_pending(&self) -> bool {
        self.state == WorkItemState::Pending
    }
}

/// Deterministic output name for the nth rendered window (1-based).
pub fn part_file_name(index: usize) -> String {
    format!("shorts_part_{:03}.{}", index, CLIP_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_classification() {
        let item = WorkItem::from_file_name("shorts_part_001.mp4").unwrap();
        assert!(item.is_pending());
        assert_eq!(item.done_file_name(), "done_shorts_part_001.mp4");
    }

    #[test]
    fn test_done_classification() {
        let item = WorkItem::from_file_name("done_shorts_part_001.mp4").unwrap();
        assert_eq!(item.state, WorkItemState::Done);
        assert!(!item.is_pending());
    }

    #[test]
    fn test_non_clip_files_ignored() {
        assert!(WorkItem::from_file_name("notes.txt").is_none());
        assert!(WorkItem::from_file_name("clip.mp4.part").is_none());
        assert!(WorkItem::from_file_name("thumb.jpg").is_none());
    }

    #[test]
    fn test_part_file_name() {
        assert_eq!(part_file_name(1), "shorts_part_001.mp4");
        assert_eq!(part_file_name(42), "shorts_part_042.mp4");
        // Render output is immediately eligible for the scheduler
        assert!(WorkItem::from_file_name(&part_file_name(1))
            .unwrap()
            .is_pending());
    }
}
