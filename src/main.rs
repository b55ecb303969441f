use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use video_player::shell::{load_player, DEFAULT_PROMPT};
use video_player::{Session, ShellConfig};

#[derive(Parser, Debug)]
#[command(name = "video-player")]
#[command(about = "Interactive video catalog player", long_about = None)]
struct Args {
    /// Path to the video catalog (pipe-delimited text, or .xml)
    #[arg(short = 'c', long, default_value = "data/videos.txt")]
    catalog: String,

    /// Prompt printed before each command
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Seed for PLAY_RANDOM (reproducible picks)
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout is reserved for player output
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let catalog_path = shellexpand::tilde(&args.catalog);

    let mut config =
        ShellConfig::new(PathBuf::from(catalog_path.into_owned())).with_prompt(args.prompt);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    log::info!("Loading catalog from {:?}", config.catalog_path);
    let player = load_player(&config)?;
    log::info!("Catalog loaded: {} videos", player.catalog().video_count());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(player, stdin.lock(), stdout.lock(), &config);
    session.run()?;

    Ok(())
}
