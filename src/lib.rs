pub mod client;
pub mod config;
pub mod error;
pub mod playlist;
pub mod provider;
pub mod server;

pub use client::{ClientState, MoodSession, PlaylistApi};
pub use config::Config;
pub use error::{AppError, Result};
pub use playlist::{Mood, MoodRequest, PlaylistGenerator, PlaylistResult, Track};
pub use provider::{MoodProvider, OpenAiProvider};
pub use server::{AppState, create_router};
