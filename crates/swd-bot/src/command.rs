//! Parsing chat messages into bot commands.

use crate::error::{BotError, BotResult};

/// A command sent to the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/start`: greet the user and reset their language.
    Start,
    /// `/roll <dice...>`: roll a dice pool. Arguments are joined with spaces.
    Roll(String),
    /// `/language [code]`: change reply language.
    Language(Option<String>),
    /// `/list_dice`: list the available dice.
    ListDice,
    /// `/mode [text|picture]`: change how rolls are shown.
    Mode(Option<String>),
    /// `/help`: same text as `/start`, without touching the session.
    Help,
}

impl Command {
    /// Parse a message such as `/roll 2ca, 1di` or `/roll@SomeBot 2ca`.
    pub fn parse(text: &str) -> BotResult<Self> {
        let trimmed = text.trim();
        let Some(body) = trimmed.strip_prefix('/') else {
            return Err(BotError::NotACommand(trimmed.to_string()));
        };

        let mut words = body.split_whitespace();
        let head = words.next().unwrap_or("");
        // Group chats address commands as /name@botname.
        let name = head.split('@').next().unwrap_or("").to_lowercase();
        let args: Vec<&str> = words.collect();
        let first = args.first().map(|s| s.to_string());

        match name.as_str() {
            "start" => Ok(Self::Start),
            "roll" | "r" => Ok(Self::Roll(args.join(" "))),
            "language" | "lang" => Ok(Self::Language(first)),
            "list_dice" | "dice" => Ok(Self::ListDice),
            "mode" => Ok(Self::Mode(first)),
            "help" => Ok(Self::Help),
            _ => Err(BotError::UnknownCommand(name)),
        }
    }
}
