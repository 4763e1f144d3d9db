mod challenge;
mod config;
mod console;
mod game;
mod kv;
mod matcher;
mod save;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use challenge::curriculum;
use console::StdConsole;
use game::Session;

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("Game error: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    // RUST_LOG overrides; default keeps the game's own output clean.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    // An optional first argument points at a directory of lesson_*.toml
    // files; otherwise the embedded curriculum is used.
    let challenges = match std::env::args().nth(1) {
        Some(dir) => curriculum::load_dir(Path::new(&dir))?,
        None => curriculum::builtin()?,
    };

    let config = config::load_config(Path::new(config::DEFAULT_CONFIG_FILE))?
        .unwrap_or_else(config::default_config);
    let console = StdConsole::new(config.get_bool("color", true));

    let mut session = Session::new(
        challenges,
        console,
        config,
        PathBuf::from(save::DEFAULT_SAVE_FILE),
    );
    session.run()
}
