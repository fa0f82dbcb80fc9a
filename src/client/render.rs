use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::client::state::ClientState;
use crate::playlist::Track;
use crate::playlist::validator::fallback_artwork_url;

/// Text shown for a session state. `Loading` pairs with [`loading_spinner`].
pub fn render(state: &ClientState) -> String {
    match state {
        ClientState::Idle => format!(
            "{}",
            "Describe how you feel and press Enter to get a playlist.".dimmed()
        ),
        ClientState::Loading => format!("{}", "Analyzing mood...".cyan()),
        ClientState::Error(message) => format!("{}", message.red()),
        ClientState::Success(result) => {
            let mut out = String::new();
            out.push_str(&format!("Mood: {}\n", result.mood.bold().green()));
            out.push_str(&"=".repeat(50));
            out.push('\n');

            if result.playlist.is_empty() {
                out.push_str(&format!("{}", "No tracks found".yellow()));
                return out;
            }

            for (i, track) in result.playlist.iter().enumerate() {
                out.push_str(&format!(
                    "{:2}. {} - {}\n    {}\n",
                    i + 1,
                    track.name.green(),
                    track.artist,
                    artwork_for(track).dimmed()
                ));
            }
            out
        }
    }
}

fn artwork_for(track: &Track) -> String {
    if track.artwork_url.trim().is_empty() {
        fallback_artwork_url(&track.name)
    } else {
        track.artwork_url.clone()
    }
}

/// Indeterminate progress indicator shown while a request is in flight.
pub fn loading_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Analyzing mood...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
