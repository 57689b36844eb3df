use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, bail};
use log::info;

mod cli;

use cli::{Cli, OutputFormat};
use ytmood::sentiment::LexiconScorer;

const DEFAULT_COUNT: usize = 1000;

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytmood.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytmood")
        .join("logs")
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;
    let cli = Cli::parse();

    // Load config file (non-fatal if missing/invalid)
    let config = ytmood::config::Config::load().unwrap_or_default();

    let count = cli
        .count
        .map(|c| c as usize)
        .or(config.default_count)
        .unwrap_or(DEFAULT_COUNT);

    let format = cli.format.unwrap_or(match config.default_format.as_deref() {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    });

    let api_key = config.api_key().ok_or_else(|| {
        eyre::eyre!(
            "no YouTube API key configured\n\nSet the YOUTUBE_API_KEY environment variable or add\n  api_key = \"...\"\nto {}",
            ytmood::config::config_path().display()
        )
    })?;

    let client = reqwest::Client::new();
    let api = ytmood::youtube::YouTubeApi::new(client, api_key);

    if cli.trending {
        let videos = ytmood::trending::fetch_trending(&api)
            .await
            .map_err(|e| e.wrap_err("failed to fetch trending videos"))?;
        println!("{}", ytmood::output::render_trending(&videos));
        return Ok(());
    }

    // Collect URLs: from arg or stdin
    let urls = if let Some(ref url) = cli.url {
        vec![url.clone()]
    } else {
        let stdin = io::stdin();
        stdin.lock().lines().collect::<Result<Vec<_>, _>>()?
    };

    if urls.is_empty() {
        bail!("no URL or video ID provided\n\nUsage: ytmood <URL>\n       echo <URL> | ytmood");
    }

    let scorer = LexiconScorer::new();

    for url_input in &urls {
        let url_input = url_input.trim();
        if url_input.is_empty() {
            continue;
        }

        let video_id = ytmood::extract_video_id(url_input)
            .ok_or_else(|| eyre::eyre!("invalid YouTube link: {url_input}\n\nSupported formats:\n  https://www.youtube.com/watch?v=ID\n  https://youtu.be/ID\n  https://www.youtube.com/embed/ID\n  https://www.youtube.com/shorts/ID\n  <11-character video ID>"))?;

        let outcome = ytmood::collect::collect_comments(&api, &video_id, count)
            .await
            .map_err(|e| e.wrap_err("failed to fetch comments"))?;

        let collected = outcome.comments.len();
        if outcome.exhausted && collected < count {
            eprintln!("No more comments available ({collected} of {count} requested).");
        }
        if cli.verbose {
            eprintln!("Video: {video_id}\nCollected: {collected}\nTarget: {count}");
        }

        let sample = ytmood::sample::draw(outcome.comments, count);
        let report =
            ytmood::aggregate::analyze(&scorer, &video_id, sample, collected, outcome.exhausted);

        let rendered = match format {
            OutputFormat::Text => ytmood::output::render_text(&report),
            OutputFormat::Json => ytmood::output::render_json(&report)?,
        };

        if let Some(ref path) = cli.output {
            std::fs::write(path, &rendered)?;
            if cli.verbose {
                eprintln!("Output written to: {}", path.display());
            }
        } else {
            println!("{rendered}");
        }
    }

    Ok(())
}
