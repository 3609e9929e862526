use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;

use swd_bot::{Bot, BotConfig, Language, SessionStore, User};

/// Local chat user id; there is only ever one.
const CHAT_USER_ID: u64 = 1;

pub struct ChatOptions {
    pub user: String,
    pub whitelist: Option<PathBuf>,
    pub lang: Option<String>,
    pub seed: Option<u64>,
    pub assets: Option<PathBuf>,
}

pub fn run(opts: ChatOptions) -> Result<(), String> {
    let mut config = BotConfig::from_env().map_err(|e| e.to_string())?;
    if let Some(path) = opts.whitelist {
        config = config.with_whitelist(path);
    }
    if let Some(lang) = opts.lang.as_deref() {
        let language: Language = lang.parse().map_err(|e: swd_bot::BotError| e.to_string())?;
        config = config.with_language(language);
    }
    if let Some(seed) = opts.seed {
        config = config.with_seed(seed);
    }
    if let Some(dir) = opts.assets {
        config = config.with_assets_dir(dir);
    }

    let mut sessions = SessionStore::new(config.default_language);
    let mut bot = Bot::new(config).map_err(|e| format!("failed to start bot: {e}"))?;
    let user = User::new(CHAT_USER_ID, opts.user);
    tracing::debug!(
        username = ?user.username,
        language = %bot.config().default_language,
        "chat session started"
    );

    println!("  {} Star Wars dice bot", "Starting".bold());
    println!("  Chatting as '{}'", user.username.as_deref().unwrap_or(""));
    println!("  Type /start for help, /quit to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("/quit") || input.eq_ignore_ascii_case("/q") {
            println!("Goodbye!");
            break;
        }

        let session = sessions.session_mut(user.id);
        match bot.handle(&user, session, input) {
            Ok(reply) => {
                println!("{}", reply.text.trim_end());
                for image in &reply.images {
                    println!("  {} {}", "[image]".cyan(), image.display());
                }
                println!();
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
