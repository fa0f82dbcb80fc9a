use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::error::{AppError, Result};
use crate::playlist::{MoodRequest, PlaylistResult};
use crate::server::GENERATE_PLAYLIST_PATH;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the playlist service.
pub struct PlaylistApi {
    http_client: Client,
    endpoint: Url,
}

impl PlaylistApi {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base.join(GENERATE_PLAYLIST_PATH.trim_start_matches('/'))?;

        Ok(Self {
            http_client: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send one mood description and return the generated playlist.
    pub async fn submit_mood(&self, text: &str) -> Result<PlaylistResult> {
        debug!("POST {}", self.endpoint);

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(&MoodRequest::new(text))
            .send()
            .await
            .map_err(|e| {
                warn!("Playlist service unreachable: {}", e);
                AppError::Service(
                    "Could not reach the playlist service. Is the backend running?".into(),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ErrorBody>(&error_text) {
                Ok(body) if !body.error.trim().is_empty() => body.error,
                _ => format!("Request failed with status {}", status.as_u16()),
            };
            return Err(AppError::Service(message));
        }

        response.json().await.map_err(|e| {
            warn!("Unexpected playlist service response: {}", e);
            AppError::Service("The playlist service sent an unexpected response.".into())
        })
    }
}
