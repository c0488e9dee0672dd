//! Binary entrypoint for the Tilequest CLI.
//!
//! Commands:
//! - `play [--new]` - run the game, resuming the save file when one exists
//! - `init` - create a starter `tilequest.toml`
//! - `status` - print a summary of the save file without starting the game
//!
//! See the library crate docs for module-level details: `tilequest::`.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::io;
use std::path::{Path, PathBuf};

use tilequest::command::Interpreter;
use tilequest::config::Config;
use tilequest::errors::GameError;
use tilequest::game::Game;
use tilequest::save;
use tilequest::world::seed;

#[derive(Parser)]
#[command(name = "tilequest")]
#[command(about = "A turn-based tile-map text adventure for the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "tilequest.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game, resuming the save file when one exists
    Play {
        /// Ignore any existing save and start a new game
        #[arg(long)]
        new: bool,
    },
    /// Initialize a new configuration file
    Init,
    /// Show a summary of the save file
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init writes the config file itself; everything else reads it, falling
    // back to defaults when the file does not exist yet.
    let config = match cli.command {
        Commands::Init => Config::default(),
        _ => load_or_default(&cli.config)?,
    };
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Play { new } => {
            info!("Starting Tilequest v{}", env!("CARGO_PKG_VERSION"));
            let save_path = PathBuf::from(&config.storage.save_file);
            let (player, map) = if new || !save_path.exists() {
                info!("starting a new game as {}", config.game.player_name);
                (
                    seed::starting_player(&config.game.player_name),
                    seed::starter_world(),
                )
            } else {
                let loaded = save::load_game(&save_path).with_context(|| {
                    format!(
                        "failed to load save file {} (use --new to start over)",
                        save_path.display()
                    )
                })?;
                info!("resuming game saved at {}", loaded.saved_at);
                (loaded.player, loaded.world)
            };
            let mut game = Game::new(Interpreter::new(save_path), player, map);
            game.run()?;
        }
        Commands::Init => {
            info!("Initializing new configuration");
            Config::create_default(&cli.config)?;
            info!("Configuration file created at {}", cli.config);
            println!("Wrote default configuration to {}.", cli.config);
        }
        Commands::Status => {
            let save_path = PathBuf::from(&config.storage.save_file);
            match save::load_game(&save_path) {
                Ok(loaded) => {
                    println!("Save file: {}", save_path.display());
                    println!(
                        "Saved at:  {}",
                        loaded.saved_at.format("%Y-%m-%dT%H:%M:%SZ")
                    );
                    println!("Player:    {}", loaded.player.name);
                    println!("HP:        {}/{}", loaded.player.hp, loaded.player.max_hp);
                    println!("Gold:      {}", loaded.player.gold);
                    println!(
                        "Position:  row {}, col {} in {}",
                        loaded.player.coords.row, loaded.player.coords.col, loaded.world.name
                    );
                }
                Err(GameError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                    println!("No saved game at {}.", save_path.display());
                }
                Err(err) => {
                    return Err(err).context("failed to read the save file");
                }
            }
        }
    }

    Ok(())
}

fn load_or_default(path: &str) -> Result<Config> {
    if Path::new(path).exists() {
        Config::load(path)
    } else {
        Ok(Config::default())
    }
}

fn init_logging(config: &Config, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .logging
            .level
            .parse()
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    if let Some(ref file) = config.logging.file {
        if let Ok(f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
        {
            let sink = std::sync::Arc::new(std::sync::Mutex::new(f));

            // If stdout is a terminal, echo log lines to the console as
            // well; under redirection only the file gets them.
            let is_tty = atty::is(atty::Stream::Stdout);

            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut guard) = sink.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        } else {
            builder.format(plain_format);
        }
    } else {
        builder.format(plain_format);
    }
    let _ = builder.try_init();
}

fn plain_format(
    fmt: &mut env_logger::fmt::Formatter,
    record: &log::Record,
) -> std::io::Result<()> {
    use std::io::Write;
    writeln!(
        fmt,
        "{} [{}] {}",
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
        record.level(),
        record.args()
    )
}
