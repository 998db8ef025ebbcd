//! YouTube Data API v3 publisher.

use async_trait::async_trait;
use reqwest::multipart;
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::error::{PublishError, PublishResult};
use crate::publisher::{Privacy, PublishRequest, Publisher};

/// Env var carrying a raw OAuth access token.
pub const TOKEN_ENV: &str = "YT_ACCESS_TOKEN";

/// Env var pointing at a JSON token file (`{"access_token": "..."}`).
pub const TOKEN_FILE_ENV: &str = "YT_TOKEN_FILE";

/// Default upload endpoint base.
pub const DEFAULT_UPLOAD_BASE: &str = "https://www.googleapis.com/upload/youtube/v3";

/// An OAuth bearer token for the upload scope.
///
/// The interactive flow that produces it is outside this crate; the
/// scheduler only consumes the resulting token, once per run.
#[derive(Debug, Clone)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap an already-acquired token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Bearer token value.
    pub fn secret(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, serde::Deserialize)]
struct TokenFile {
    access_token: String,
}

/// Load credentials from the environment.
///
/// Checks `YT_ACCESS_TOKEN` first, then the file named by
/// `YT_TOKEN_FILE`. Failure here aborts the scheduler run before any
/// item is processed.
pub fn load_access_token() -> PublishResult<AccessToken> {
    if let Ok(token) = std::env::var(TOKEN_ENV) {
        if !token.trim().is_empty() {
            return Ok(AccessToken::new(token.trim()));
        }
    }

    if let Ok(path) = std::env::var(TOKEN_FILE_ENV) {
        let raw = std::fs::read_to_string(&path)
            .map_err(|e| PublishError::credential(format!("cannot read {}: {}", path, e)))?;
        let file: TokenFile = serde_json::from_str(&raw)
            .map_err(|e| PublishError::credential(format!("malformed token file {}: {}", path, e)))?;
        return Ok(AccessToken::new(file.access_token));
    }

    Err(PublishError::credential(format!(
        "set {} or {}",
        TOKEN_ENV, TOKEN_FILE_ENV
    )))
}

/// Wire form of the videos.insert metadata part.
#[derive(Debug, Serialize)]
struct VideoResource {
    snippet: serde_json::Value,
    status: serde_json::Value,
}

/// Publisher backed by the YouTube Data API `videos.insert` call.
pub struct YouTubePublisher {
    client: reqwest::Client,
    token: AccessToken,
    upload_base: String,
}

impl YouTubePublisher {
    /// Create a publisher with the default endpoint.
    pub fn new(token: AccessToken) -> Self {
        Self::with_base(token, DEFAULT_UPLOAD_BASE)
    }

    /// Create a publisher against a custom endpoint base (tests).
    pub fn with_base(token: AccessToken, upload_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            upload_base: upload_base.into(),
        }
    }

    fn metadata(request: &PublishRequest) -> VideoResource {
        let privacy = match request.privacy {
            Privacy::Private => "private",
            Privacy::Public => "public",
        };
        VideoResource {
            snippet: json!({
                "title": request.title,
                "description": request.description,
                "tags": request.tags,
                "categoryId": request.category_id,
            }),
            status: json!({
                "privacyStatus": privacy,
                "publishAt": request
                    .publish_at
                    .map(|t| t.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)),
            }),
        }
    }
}

#[async_trait]
impl Publisher for YouTubePublisher {
    async fn publish(&self, request: &PublishRequest) -> PublishResult<String> {
        let metadata = serde_json::to_string(&Self::metadata(request))?;
        let media = tokio::fs::read(&request.file_path).await?;

        info!(
            "Uploading {} ({} bytes)",
            request.file_path.display(),
            media.len()
        );

        let form = multipart::Form::new()
            .part(
                "metadata",
                multipart::Part::text(metadata)
                    .mime_str("application/json")
                    .map_err(|e| PublishError::upload_failed(e.to_string()))?,
            )
            .part(
                "media",
                multipart::Part::bytes(media)
                    .file_name(
                        request
                            .file_path
                            .file_name()
                            .map(|n| n.to_string_lossy().to_string())
                            .unwrap_or_default(),
                    )
                    .mime_str("video/mp4")
                    .map_err(|e| PublishError::upload_failed(e.to_string()))?,
            );

        let url = format!(
            "{}/videos?uploadType=multipart&part=snippet,status",
            self.upload_base
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.token.secret())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: serde_json::Value = response.json().await?;
        let id = body
            .get("id")
            .and_then(|v| v.as_str())
            .ok_or_else(|| PublishError::upload_failed("response missing video id"))?;

        info!("Upload successful, video id: {}", id);
        Ok(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::path::PathBuf;

    #[test]
    fn test_metadata_for_scheduled_upload() {
        let at = chrono::Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let request = PublishRequest::for_clip(
            PathBuf::from("/work/shorts_part_001.mp4"),
            "shorts_part_001.mp4",
            Some(at),
        );

        let meta = YouTubePublisher::metadata(&request);
        assert_eq!(meta.status["privacyStatus"], "private");
        assert_eq!(meta.status["publishAt"], "2023-11-14T22:13:20Z");
        assert_eq!(meta.snippet["categoryId"], "22");
        assert_eq!(
            meta.snippet["title"],
            "Scheduled Upload for shorts_part_001.mp4"
        );
    }

    #[test]
    fn test_metadata_for_immediate_upload() {
        let request =
            PublishRequest::for_clip(PathBuf::from("/work/clip.mp4"), "clip.mp4", None);
        let meta = YouTubePublisher::metadata(&request);
        assert_eq!(meta.status["privacyStatus"], "public");
        assert_eq!(meta.status["publishAt"], serde_json::Value::Null);
    }

    #[test]
    fn test_access_token_from_literal() {
        let token = AccessToken::new("ya29.test");
        assert_eq!(token.secret(), "ya29.test");
    }
}
