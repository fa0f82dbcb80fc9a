pub mod generator;
pub mod models;
pub mod prompt;
pub mod validator;

pub use generator::PlaylistGenerator;
pub use models::{Mood, MoodRequest, PlaylistResult, SuggestedTrack, Track};
