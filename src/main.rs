use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use moodtunes::client::{loading_spinner, render};
use moodtunes::config::{self, Config};
use moodtunes::{AppError, MoodSession, PlaylistApi, server};

#[derive(Parser)]
#[command(name = "moodtunes")]
#[command(about = "Turn a mood description into a playlist")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the playlist service
    Serve {
        /// Port to listen on; overrides the PORT env var
        #[arg(long)]
        port: Option<u16>,
    },

    /// Generate one playlist and print it
    Generate {
        /// How you feel, in your own words
        #[arg(required = true)]
        text: Vec<String>,

        /// Playlist service URL (or set MOODTUNES_API_URL env var)
        #[arg(long, env = "MOODTUNES_API_URL")]
        api_url: Option<String>,
    },

    /// Describe moods line by line; an empty line clears, :q quits
    Interactive {
        /// Playlist service URL (or set MOODTUNES_API_URL env var)
        #[arg(long, env = "MOODTUNES_API_URL")]
        api_url: Option<String>,
    },
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { port } => {
            serve(port).await?;
        }
        Commands::Generate { text, api_url } => {
            generate(&text.join(" "), api_url).await?;
        }
        Commands::Interactive { api_url } => {
            interactive(api_url).await?;
        }
    }

    Ok(())
}

async fn serve(port: Option<u16>) -> Result<()> {
    let config = match Config::from_env(port) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "FATAL ERROR:".red().bold(), e);
            if let AppError::MissingEnv(var) = e {
                eprintln!(
                    "{}",
                    format!("Set {} in your environment or .env file.", var).yellow()
                );
            }
            std::process::exit(1);
        }
    };

    server::run(&config)
        .await
        .context("Playlist service stopped")?;

    Ok(())
}

fn connect(api_url: Option<String>) -> Result<PlaylistApi> {
    let api_url = api_url.unwrap_or_else(config::client_api_url);
    PlaylistApi::new(&api_url).with_context(|| format!("Invalid service URL: {}", api_url))
}

async fn run_request(session: &mut MoodSession, api: &PlaylistApi) {
    let Some(text) = session.begin_submit() else {
        return;
    };

    let spinner = loading_spinner();
    let outcome = api.submit_mood(&text).await;
    spinner.finish_and_clear();

    session.finish(outcome);
    println!("{}", render(session.state()));
}

async fn generate(text: &str, api_url: Option<String>) -> Result<()> {
    let api = connect(api_url)?;
    let mut session = MoodSession::new();
    session.set_text(text);

    if !session.can_submit() {
        println!("{}", "Please describe your mood first.".yellow());
        std::process::exit(1);
    }

    run_request(&mut session, &api).await;

    if let moodtunes::ClientState::Error(_) = session.state() {
        std::process::exit(1);
    }

    Ok(())
}

async fn interactive(api_url: Option<String>) -> Result<()> {
    let api = connect(api_url)?;
    let mut session = MoodSession::new();

    println!("{}", "MoodTunes".cyan().bold());
    println!("{}", "=".repeat(50));
    println!("{}", render(session.state()));

    loop {
        print!("\n{} ", ">".cyan());
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim() == ":q" {
            break;
        }

        session.set_text(line);
        if session.can_submit() {
            run_request(&mut session, &api).await;
        } else {
            println!("{}", render(session.state()));
        }
    }

    Ok(())
}
