use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{info, warn};

use plum_board::assets::artwork_cache::ArtworkCache;
use plum_board::config::{ConfigOverrides, ViewerConfig};
use plum_board::editor::command_loop::run_stdio_loop;
use plum_board::editor::selection::EditorSession;
use plum_board::utils::fen_parser::parse_fen;

#[derive(Parser)]
#[command(author, version, about = "Terminal chessboard viewer/editor", long_about = None)]
struct Cli {
    /// TOML config file; missing keys use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting position as a FEN placement (or full FEN).
    #[arg(long)]
    fen: Option<String>,

    /// Tile side length in pixels.
    #[arg(long)]
    tile_size: Option<u32>,

    /// Directory holding piece artwork and its stamp file.
    #[arg(long)]
    artwork_dir: Option<PathBuf>,

    /// Fix the RNG seed used by the `random` command.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the effective config as TOML and exit.
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ViewerConfig::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    config
        .apply_overrides(ConfigOverrides {
            start_position: cli.fen,
            tile_size: cli.tile_size,
            artwork_dir: cli.artwork_dir,
        })
        .context("applying command-line flags")?;

    if cli.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let cache = ArtworkCache::new(
        &config.artwork_dir,
        config.artwork_base_url.as_str(),
        config.artwork_theme.as_str(),
    );
    match cache.refresh_plan(config.tile_size) {
        Ok(plan) if plan.is_empty() => info!("piece artwork up to date at {}px", config.tile_size),
        Ok(plan) => {
            for entry in &plan {
                info!("artwork {} needs fetching from {}", entry.code, entry.url);
            }
        }
        Err(err) => warn!("artwork cache unavailable: {err}"),
    }

    let board = parse_fen(&config.start_position)
        .with_context(|| format!("parsing start position '{}'", config.start_position))?;
    info!("starting with {} pieces, type 'help' for commands", board.pieces().len());

    run_stdio_loop(EditorSession::new(board, config.tile_size), cli.seed)?;
    Ok(())
}
