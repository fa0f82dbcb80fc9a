#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use moodtunes::provider::CompletionRequest;
use moodtunes::{AppError, AppState, MoodProvider, PlaylistGenerator, Result};

pub const HAPPY_REPLY: &str = r#"{"mood": "Happy", "playlist": [
    {"name": "Good Vibrations", "artist": "The Beach Boys"},
    {"name": "Walking on Sunshine", "artist": "Katrina & The Waves"},
    {"name": "Happy", "artist": "Pharrell Williams"},
    {"name": "Don't Stop Me Now", "artist": "Queen"},
    {"name": "September", "artist": "Earth, Wind & Fire"},
    {"name": "Mr. Blue Sky", "artist": "Electric Light Orchestra"},
    {"name": "Uptown Funk", "artist": "Mark Ronson ft. Bruno Mars"}
]}"#;

/// Answers each call with the next scripted reply and counts calls.
pub struct StubProvider {
    replies: Mutex<VecDeque<Result<String>>>,
    calls: Mutex<usize>,
}

impl StubProvider {
    pub fn new(replies: Vec<Result<String>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(0),
        })
    }

    pub fn replying(replies: &[&str]) -> Arc<Self> {
        Self::new(replies.iter().map(|r| Ok(r.to_string())).collect())
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl MoodProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn complete(&self, _request: &CompletionRequest) -> Result<String> {
        *self.calls.lock().unwrap() += 1;
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(AppError::EmptyProviderResponse))
    }
}

pub fn app_state(provider: &Arc<StubProvider>) -> AppState {
    AppState::new(PlaylistGenerator::new(provider.clone()))
}
