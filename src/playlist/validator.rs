use serde_json::Value;
use strsim::jaro_winkler;
use tracing::{error, warn};

use crate::error::{AppError, Result};
use crate::playlist::models::{Mood, ProviderReply, SuggestedTrack};

const MOOD_MATCH_THRESHOLD: f64 = 0.85;
const ARTWORK_BASE_URL: &str = "https://picsum.photos/seed/";
const ARTWORK_SIZE: u32 = 150;
const SEED_NAME_CHARS: usize = 24;

/// Parse raw provider text and check the top-level shape.
pub fn parse_reply(raw: &str) -> Result<ProviderReply> {
    let value: Value = serde_json::from_str(raw).map_err(|e| {
        error!("Failed to parse provider JSON: {}", e);
        error!("Invalid JSON string: {}", raw);
        AppError::MalformedProviderJson
    })?;

    let mood = value.get("mood").and_then(Value::as_str);
    let playlist = value.get("playlist").and_then(Value::as_array);

    match (mood, playlist) {
        (Some(mood), Some(playlist)) => Ok(ProviderReply {
            mood: mood.to_string(),
            playlist: playlist.clone(),
        }),
        _ => {
            error!("Provider JSON is missing required keys: {}", value);
            let detail = match (mood, playlist) {
                (None, None) => "expected string 'mood' and array 'playlist'",
                (None, _) => "expected string 'mood'",
                _ => "expected array 'playlist'",
            };
            Err(AppError::InvalidProviderSchema(detail.to_string()))
        }
    }
}

/// Keep tracks whose name and artist are non-empty after trimming.
/// Order is preserved and the output is trimmed, so filtering twice is a no-op.
pub fn filter_tracks(tracks: Vec<SuggestedTrack>) -> Vec<SuggestedTrack> {
    tracks
        .into_iter()
        .filter_map(|track| {
            let name = track.name.trim();
            let artist = track.artist.trim();
            if name.is_empty() || artist.is_empty() {
                warn!("Dropping invalid track entry: {:?}", track);
                return None;
            }
            Some(SuggestedTrack {
                name: name.to_string(),
                artist: artist.to_string(),
            })
        })
        .collect()
}

/// Turn raw playlist entries into validated tracks, dropping anything malformed.
pub fn extract_tracks(entries: &[Value]) -> Vec<SuggestedTrack> {
    let mut candidates = Vec::with_capacity(entries.len());
    for entry in entries {
        match SuggestedTrack::from_value(entry) {
            Some(track) => candidates.push(track),
            None => warn!("Dropping malformed playlist entry: {}", entry),
        }
    }
    filter_tracks(candidates)
}

/// Map the provider's mood onto the closed set. Blank or unrecognized labels become `Neutral`.
pub fn normalize_mood(raw: &str) -> Mood {
    let label = raw.trim();
    if label.is_empty() {
        return Mood::Neutral;
    }

    if let Some(mood) = Mood::ALL
        .iter()
        .find(|m| m.as_str().eq_ignore_ascii_case(label))
    {
        return *mood;
    }

    let lowered = label.to_lowercase();
    let mut best: Option<Mood> = None;
    let mut best_score: f64 = 0.0;

    for mood in Mood::ALL {
        let score = jaro_winkler(&lowered, &mood.as_str().to_lowercase());
        if score > best_score && score >= MOOD_MATCH_THRESHOLD {
            best_score = score;
            best = Some(mood);
        }
    }

    best.unwrap_or_else(|| {
        warn!("Provider returned unknown mood '{}', using Neutral", label);
        Mood::Neutral
    })
}

/// Placeholder artwork seeded by mood, truncated name and position.
pub fn artwork_url(mood: &str, name: &str, index: usize) -> String {
    let short_name: String = name.chars().take(SEED_NAME_CHARS).collect();
    let seed = format!("{}-{}-{}", mood, short_name, index);
    placeholder_url(&seed)
}

/// Artwork seeded only by the track name, for when the primary image cannot be shown.
pub fn fallback_artwork_url(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        placeholder_url("track")
    } else {
        placeholder_url(name)
    }
}

fn placeholder_url(seed: &str) -> String {
    format!(
        "{}{}/{}/{}",
        ARTWORK_BASE_URL,
        urlencoding::encode(seed),
        ARTWORK_SIZE,
        ARTWORK_SIZE
    )
}
