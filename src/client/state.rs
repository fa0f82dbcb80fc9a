use crate::error::Result;
use crate::playlist::PlaylistResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientState {
    Idle,
    Loading,
    Success(PlaylistResult),
    Error(String),
}

/// UI state for one client: the text being edited plus what is on screen.
///
/// At most one request is in flight; `begin_submit` refuses while loading.
#[derive(Debug, Clone)]
pub struct MoodSession {
    text: String,
    state: ClientState,
}

impl Default for MoodSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MoodSession {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            state: ClientState::Idle,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == ClientState::Loading
    }

    /// Replace the input text. Clearing it outside a request drops the last result.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if self.text.trim().is_empty() && !self.is_loading() {
            self.state = ClientState::Idle;
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty() && !self.is_loading()
    }

    /// Enter `Loading` and return the text to send, or `None` if submitting is not allowed.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.state = ClientState::Loading;
        Some(self.text.trim().to_string())
    }

    /// Record the outcome of the in-flight request. Ignored when nothing is loading.
    pub fn finish(&mut self, outcome: Result<PlaylistResult>) {
        if !self.is_loading() {
            return;
        }
        self.state = match outcome {
            Ok(result) => ClientState::Success(result),
            Err(e) => ClientState::Error(e.to_string()),
        };
    }
}
