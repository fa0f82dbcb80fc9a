use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{AppError, Result};
use crate::playlist::models::{MoodRequest, PlaylistResult, Track};
use crate::playlist::prompt::{MAX_TOKENS, PLAYLIST_LENGTH, SYSTEM_PROMPT, TEMPERATURE};
use crate::playlist::validator::{artwork_url, extract_tracks, normalize_mood, parse_reply};
use crate::provider::{CompletionRequest, MoodProvider};

/// Turns mood text into a playlist through a single provider call.
#[derive(Clone)]
pub struct PlaylistGenerator {
    provider: Arc<dyn MoodProvider>,
}

impl PlaylistGenerator {
    pub fn new(provider: Arc<dyn MoodProvider>) -> Self {
        Self { provider }
    }

    pub async fn generate_playlist(&self, request: &MoodRequest) -> Result<PlaylistResult> {
        let text = request.validated_text()?;
        info!("Generating playlist for text: \"{}\"", text);

        let completion = CompletionRequest {
            system: SYSTEM_PROMPT.to_string(),
            user: text.to_string(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let raw = self.provider.complete(&completion).await?;
        debug!("Raw JSON response from {}: {}", self.provider.name(), raw);

        let reply = parse_reply(&raw)?;
        let mood = normalize_mood(&reply.mood).to_string();
        let tracks = extract_tracks(&reply.playlist);

        if tracks.is_empty() {
            warn!(
                "No valid tracks in provider reply ({} entries received)",
                reply.playlist.len()
            );
            return Err(AppError::NoValidTracks);
        }

        if tracks.len() != PLAYLIST_LENGTH {
            debug!(
                "Provider suggested {} usable tracks (asked for {})",
                tracks.len(),
                PLAYLIST_LENGTH
            );
        }

        let playlist: Vec<Track> = tracks
            .into_iter()
            .enumerate()
            .map(|(index, track)| Track {
                artwork_url: artwork_url(&mood, &track.name, index),
                name: track.name,
                artist: track.artist,
            })
            .collect();

        info!("Generated {} playlist with {} tracks", mood, playlist.len());

        Ok(PlaylistResult { mood, playlist })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Replays a fixed reply and records what it was asked.
    struct ScriptedProvider {
        reply: Result<String>,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedProvider {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing(status: u16, message: &str) -> Self {
            Self {
                reply: Err(AppError::ProviderUnavailable {
                    status: Some(status),
                    message: message.to_string(),
                }),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl MoodProvider for ScriptedProvider {
        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn complete(&self, request: &CompletionRequest) -> Result<String> {
            self.requests.lock().unwrap().push(request.clone());
            match &self.reply {
                Ok(reply) => Ok(reply.clone()),
                Err(AppError::ProviderUnavailable { status, message }) => {
                    Err(AppError::ProviderUnavailable {
                        status: *status,
                        message: message.clone(),
                    })
                }
                Err(_) => Err(AppError::EmptyProviderResponse),
            }
        }
    }

    fn generator(provider: &Arc<ScriptedProvider>) -> PlaylistGenerator {
        PlaylistGenerator::new(provider.clone())
    }

    #[tokio::test]
    async fn test_blank_text_never_reaches_provider() {
        let provider = Arc::new(ScriptedProvider::replying("{}"));
        let err = generator(&provider)
            .generate_playlist(&MoodRequest::new("   "))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_sends_trimmed_text_with_prompt() {
        let provider = Arc::new(ScriptedProvider::replying(
            r#"{"mood": "Calm", "playlist": [{"name": "Weightless", "artist": "Marconi Union"}]}"#,
        ));
        generator(&provider)
            .generate_playlist(&MoodRequest::new("  lazy afternoon  "))
            .await
            .unwrap();

        let requests = provider.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].user, "lazy afternoon");
        assert_eq!(requests[0].system, SYSTEM_PROMPT);
        assert_eq!(requests[0].max_tokens, MAX_TOKENS);
    }

    #[tokio::test]
    async fn test_normalizes_mood_and_attaches_artwork() {
        let provider = Arc::new(ScriptedProvider::replying(
            r#"{"mood": " sad ", "playlist": [
                {"name": " Hurt ", "artist": "Johnny Cash"},
                {"name": "", "artist": "Nobody"},
                {"name": "Everybody Hurts", "artist": "R.E.M."}
            ]}"#,
        ));
        let result = generator(&provider)
            .generate_playlist(&MoodRequest::new("rough day"))
            .await
            .unwrap();

        assert_eq!(result.mood, "Sad");
        assert_eq!(result.playlist.len(), 2);
        assert_eq!(result.playlist[0].name, "Hurt");
        assert_eq!(result.playlist[0].artwork_url, artwork_url("Sad", "Hurt", 0));
        assert_eq!(
            result.playlist[1].artwork_url,
            artwork_url("Sad", "Everybody Hurts", 1)
        );
    }

    #[tokio::test]
    async fn test_empty_mood_defaults_to_neutral() {
        let provider = Arc::new(ScriptedProvider::replying(
            r#"{"mood": "", "playlist": [{"name": "Nightcall", "artist": "Kavinsky"}]}"#,
        ));
        let result = generator(&provider)
            .generate_playlist(&MoodRequest::new("not sure"))
            .await
            .unwrap();
        assert_eq!(result.mood, "Neutral");
    }

    #[tokio::test]
    async fn test_all_tracks_invalid_fails() {
        let provider = Arc::new(ScriptedProvider::replying(
            r#"{"mood": "Happy", "playlist": [{"name": "  ", "artist": "x"}, {"title": "y"}]}"#,
        ));
        let err = generator(&provider)
            .generate_playlist(&MoodRequest::new("great day"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NoValidTracks));
    }

    #[tokio::test]
    async fn test_malformed_json_is_reported() {
        let provider = Arc::new(ScriptedProvider::replying("mood: happy"));
        let err = generator(&provider)
            .generate_playlist(&MoodRequest::new("great day"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MalformedProviderJson));
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let provider = Arc::new(ScriptedProvider::failing(429, "Rate limit reached"));
        let err = generator(&provider)
            .generate_playlist(&MoodRequest::new("great day"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::ProviderUnavailable {
                status: Some(429),
                ..
            }
        ));
    }
}
