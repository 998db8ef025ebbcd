//! Hosting publish collaborator contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::PublishResult;

/// Category id for "People & Blogs".
pub const DEFAULT_CATEGORY_ID: &str = "22";

/// Default tags attached to every published clip.
pub const DEFAULT_TAGS: &[&str] = &["gaming", "shorts", "clips"];

/// Visibility of a published video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    /// Hidden until the scheduled publish time
    Private,
    /// Immediately visible
    Public,
}

/// One publish request handed to the hosting collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishRequest {
    /// Media file to upload
    pub file_path: PathBuf,
    /// Video title
    pub title: String,
    /// Video description
    pub description: String,
    /// Tags
    pub tags: Vec<String>,
    /// Hosting-service category id
    pub category_id: String,
    /// Visibility while (and after) the scheduled time
    pub privacy: Privacy,
    /// Scheduled go-live time; `None` publishes immediately
    pub publish_at: Option<DateTime<Utc>>,
}

impl PublishRequest {
    /// Build the standard request for a rendered clip.
    ///
    /// A future publish time implies `private` visibility; the hosting
    /// service flips it open at the scheduled moment.
    pub fn for_clip(file_path: PathBuf, file_name: &str, publish_at: Option<DateTime<Utc>>) -> Self {
        let privacy = if publish_at.is_some() {
            Privacy::Private
        } else {
            Privacy::Public
        };
        Self {
            file_path,
            title: format!("Scheduled Upload for {}", file_name),
            description: "This video is scheduled to go live dynamically.".to_string(),
            tags: DEFAULT_TAGS.iter().map(|t| t.to_string()).collect(),
            category_id: DEFAULT_CATEGORY_ID.to_string(),
            privacy,
            publish_at,
        }
    }
}

/// Hosting collaborator: uploads one video, all-or-nothing.
///
/// Chunked transfer and transport retries live behind this boundary.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Upload and schedule one video; returns the hosted video id.
    async fn publish(&self, request: &PublishRequest) -> PublishResult<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_scheduled_request_is_private() {
        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let request = PublishRequest::for_clip(
            PathBuf::from("/work/shorts_part_001.mp4"),
            "shorts_part_001.mp4",
            Some(at),
        );
        assert_eq!(request.privacy, Privacy::Private);
        assert_eq!(request.title, "Scheduled Upload for shorts_part_001.mp4");
        assert_eq!(request.category_id, "22");
        assert_eq!(request.publish_at, Some(at));
    }

    #[test]
    fn test_immediate_request_is_public() {
        let request = PublishRequest::for_clip(
            PathBuf::from("/work/clip.mp4"),
            "clip.mp4",
            None,
        );
        assert_eq!(request.privacy, Privacy::Public);
        assert!(request.publish_at.is_none());
    }
}
