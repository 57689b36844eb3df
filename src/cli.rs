use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "ytmood", about = "YouTube comment sentiment analyzer", version)]
pub struct Cli {
    /// YouTube video URL or video ID (reads from stdin if omitted)
    pub url: Option<String>,

    /// Target number of comments to analyze
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=10000))]
    pub count: Option<u32>,

    /// Output format: text (default), json
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// List trending videos with comments instead of analyzing
    #[arg(short, long)]
    pub trending: bool,

    /// Show collection progress and metadata
    #[arg(short, long)]
    pub verbose: bool,
}
