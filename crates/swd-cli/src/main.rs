//! CLI frontend for the Star Wars narrative dice roller.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "swd",
    about = "Star Wars: Edge of the Empire dice roller",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a dice pool, e.g. `swd roll 2ca,2pe,3di,1be,2co`
    Roll {
        /// Dice notation; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        dice: Vec<String>,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Most dice allowed in one roll
        #[arg(long, default_value_t = swd_dice::config::DEFAULT_MAX_DICE)]
        max_dice: u32,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List die kinds with their codes and faces
    Dice,

    /// Start an interactive chat session with the dice bot
    Chat {
        /// Username to chat as
        #[arg(short, long, default_value = "player")]
        user: String,

        /// Whitelist file; without one every user is allowed
        #[arg(short, long)]
        whitelist: Option<PathBuf>,

        /// Starting language: en or es
        #[arg(short, long)]
        lang: Option<String>,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Directory holding face images for picture mode
        #[arg(long)]
        assets: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "swd=debug,swd_dice=debug,swd_bot=debug"
    } else {
        "swd=warn,swd_dice=warn,swd_bot=warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Roll {
            dice,
            seed,
            max_dice,
            json,
        } => commands::roll::run(&dice.join(" "), seed, max_dice, json),
        Commands::Dice => commands::dice::run(),
        Commands::Chat {
            user,
            whitelist,
            lang,
            seed,
            assets,
        } => commands::chat::run(commands::chat::ChatOptions {
            user,
            whitelist,
            lang,
            seed,
            assets,
        }),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
