pub mod api;
pub mod render;
pub mod state;

pub use api::PlaylistApi;
pub use render::{loading_spinner, render};
pub use state::{ClientState, MoodSession};
