use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodRequest {
    pub text: String,
}

impl MoodRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The trimmed text, or `InvalidInput` when nothing is left.
    pub fn validated_text(&self) -> Result<&str> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(AppError::InvalidInput("Text input is required.".into()));
        }
        Ok(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub artist: String,
    #[serde(rename = "artworkUrl")]
    pub artwork_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistResult {
    pub mood: String,
    pub playlist: Vec<Track>,
}

/// A song suggestion as it comes back from the provider, before artwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestedTrack {
    pub name: String,
    pub artist: String,
}

impl SuggestedTrack {
    /// Reads `name` and `artist` from one playlist entry; `None` unless both are strings.
    pub fn from_value(value: &Value) -> Option<Self> {
        Some(Self {
            name: value.get("name")?.as_str()?.to_string(),
            artist: value.get("artist")?.as_str()?.to_string(),
        })
    }
}

/// Top-level shape of a provider reply that passed schema validation.
#[derive(Debug, Clone)]
pub struct ProviderReply {
    pub mood: String,
    pub playlist: Vec<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Sad,
    Calm,
    Energetic,
    Angry,
    Anxious,
    Reflective,
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Calm,
        Mood::Energetic,
        Mood::Angry,
        Mood::Anxious,
        Mood::Reflective,
        Mood::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Calm => "Calm",
            Mood::Energetic => "Energetic",
            Mood::Angry => "Angry",
            Mood::Anxious => "Anxious",
            Mood::Reflective => "Reflective",
            Mood::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
impl SuggestedTrack {
    pub fn mock(name: &str, artist: &str) -> Self {
        Self {
            name: name.to_string(),
            artist: artist.to_string(),
        }
    }
}
