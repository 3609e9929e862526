//! Message handling.
//!
//! `Bot` owns the whitelist and the roller. Everything specific to the
//! sender arrives with the message: the [`User`] and a mutable borrow of
//! their [`Session`].

use swd_dice::{Roller, parse_dice_pool};

use crate::assets::images_for;
use crate::command::Command;
use crate::config::BotConfig;
use crate::error::BotResult;
use crate::locale::{self, Catalog, Language};
use crate::reply::{self, Reply};
use crate::session::{Mode, Session};
use crate::whitelist::Whitelist;

/// The sender of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Stable numeric id.
    pub id: u64,
    /// Public username, if the user has one.
    pub username: Option<String>,
}

impl User {
    /// A user with a username.
    pub fn new(id: u64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: Some(username.into()),
        }
    }
}

/// The dice roller bot.
pub struct Bot {
    config: BotConfig,
    whitelist: Option<Whitelist>,
    roller: Roller,
}

impl Bot {
    /// Create a bot, loading the whitelist file if one is configured.
    pub fn new(config: BotConfig) -> BotResult<Self> {
        let whitelist = match &config.whitelist_path {
            Some(path) => Some(Whitelist::load(path)?),
            None => None,
        };
        Ok(Self::with_whitelist(config, whitelist))
    }

    /// Create a bot with an already loaded whitelist; `None` admits everyone.
    pub fn with_whitelist(config: BotConfig, whitelist: Option<Whitelist>) -> Self {
        let roller = Roller::new(&config.roll_config());
        Self {
            config,
            whitelist,
            roller,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Whether `user` may use the bot.
    pub fn is_allowed(&self, user: &User) -> bool {
        match (&self.whitelist, &user.username) {
            (None, _) => true,
            (Some(list), Some(name)) => list.contains(name),
            (Some(_), None) => false,
        }
    }

    /// Handle one message from `user`, updating their `session`.
    ///
    /// Users missing from the whitelist get the subscription notice.
    /// Errors are returned only for messages that are not a known
    /// command.
    pub fn handle(&mut self, user: &User, session: &mut Session, text: &str) -> BotResult<Reply> {
        let command = Command::parse(text)?;

        if !self.is_allowed(user) {
            tracing::warn!(user = user.id, username = ?user.username, "user not subscribed");
            let catalog = Catalog::for_language(session.language);
            return Ok(Reply::text(catalog.tr(locale::NOT_SUBSCRIBED)));
        }

        tracing::info!(user = user.id, ?command, "handling command");

        let reply = match command {
            Command::Start => {
                session.language = Language::En;
                Reply::text(locale::WELCOME)
            }
            Command::Help => Reply::text(catalog(session).tr(locale::WELCOME)),
            Command::Language(code) => set_language(session, code.as_deref()),
            Command::Mode(mode) => set_mode(session, mode.as_deref()),
            Command::ListDice => Reply::text(reply::format_dice_list(&catalog(session))),
            Command::Roll(input) => self.roll(session, &input),
        };
        Ok(reply)
    }

    fn roll(&mut self, session: &Session, input: &str) -> Reply {
        let catalog = catalog(session);
        if input.trim().is_empty() {
            return Reply::text(catalog.tr(locale::ROLL_USAGE));
        }

        let pool = parse_dice_pool(input);
        let result = match self.roller.try_roll(&pool) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %e, "roll rejected");
                return Reply::text(format!("{}: {e}", catalog.tr(locale::ERROR_PREFIX)));
            }
        };

        match session.mode {
            Mode::Text => Reply::text(reply::format_roll(&catalog, &result)),
            Mode::Picture => Reply::text(reply::format_tally(&catalog, &result.tally))
                .with_images(images_for(&self.config.assets_dir, &result.log)),
        }
    }
}

fn catalog(session: &Session) -> Catalog {
    Catalog::for_language(session.language)
}

fn set_language(session: &mut Session, code: Option<&str>) -> Reply {
    let Some(code) = code else {
        return Reply::text(catalog(session).tr(locale::LANGUAGE_USAGE));
    };
    match Language::parse(code) {
        Some(language) => {
            session.language = language;
            Reply::text(catalog(session).tr(locale::LANGUAGE_SET))
        }
        None => Reply::text(catalog(session).tr(locale::LANGUAGE_INVALID)),
    }
}

fn set_mode(session: &mut Session, mode: Option<&str>) -> Reply {
    match mode.and_then(Mode::parse) {
        Some(mode) => {
            session.mode = mode;
            Reply::text(catalog(session).tr(locale::MODE_SET))
        }
        None => Reply::text(catalog(session).tr(locale::MODE_USAGE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BotError;
    use std::path::PathBuf;

    fn open_bot() -> Bot {
        Bot::with_whitelist(BotConfig::default().with_seed(42), None)
    }

    fn luke() -> User {
        User::new(1, "luke")
    }

    #[test]
    fn start_greets_and_resets_language() {
        let mut bot = open_bot();
        let mut session = Session::new(Language::Es);
        let reply = bot.handle(&luke(), &mut session, "/start").unwrap();
        assert!(reply.text.starts_with("Welcome to the Star Wars Dice Roller bot!"));
        assert_eq!(session.language, Language::En);
    }

    #[test]
    fn help_uses_session_language() {
        let mut bot = open_bot();
        let mut session = Session::new(Language::Es);
        let reply = bot.handle(&luke(), &mut session, "/help").unwrap();
        assert!(reply.text.starts_with("¡Bienvenido"));
        assert_eq!(session.language, Language::Es);
    }

    #[test]
    fn language_command() {
        let mut bot = open_bot();
        let mut session = Session::default();

        let reply = bot.handle(&luke(), &mut session, "/language").unwrap();
        assert_eq!(reply.text, "Usage: /language <en|es>");

        let reply = bot.handle(&luke(), &mut session, "/language fr").unwrap();
        assert_eq!(reply.text, "Invalid language. Use 'en' or 'es'.");
        assert_eq!(session.language, Language::En);

        let reply = bot.handle(&luke(), &mut session, "/language ES").unwrap();
        assert_eq!(reply.text, "Idioma configurado correctamente.");
        assert_eq!(session.language, Language::Es);
    }

    #[test]
    fn roll_without_dice_shows_usage() {
        let mut bot = open_bot();
        let mut session = Session::default();
        let reply = bot.handle(&luke(), &mut session, "/roll").unwrap();
        assert_eq!(reply.text, "Usage: /roll <dice_input>");
    }

    #[test]
    fn roll_lists_each_die_and_totals() {
        let mut bot = open_bot();
        let mut session = Session::default();
        let reply = bot
            .handle(&luke(), &mut session, "/roll 2ca, 1di 1xx")
            .unwrap();
        let lines: Vec<_> = reply.text.lines().collect();
        assert_eq!(lines[0], "🎲 **Individual Rolls:**");
        assert!(lines[1].starts_with("- ability: "));
        assert!(lines[2].starts_with("- ability: "));
        assert!(lines[3].starts_with("- difficulty: "));
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "**Final Results:**");
        assert_eq!(lines.len(), 14);
        assert!(reply.images.is_empty());
    }

    #[test]
    fn unparseable_roll_gives_zero_totals() {
        let mut bot = open_bot();
        let mut session = Session::default();
        let reply = bot.handle(&luke(), &mut session, "/roll lots of dice").unwrap();
        assert!(reply.text.contains("- success: 0"));
        assert!(reply.text.contains("- dark: 0"));
    }

    #[test]
    fn roll_over_limit_is_reported() {
        let mut bot = Bot::with_whitelist(BotConfig::default().with_max_dice(5), None);
        let mut session = Session::default();
        let reply = bot.handle(&luke(), &mut session, "/roll 6fu").unwrap();
        assert_eq!(reply.text, "Error: pool has 6 dice, the limit is 5");
    }

    #[test]
    fn picture_mode_attaches_images() {
        let config = BotConfig::default()
            .with_seed(3)
            .with_assets_dir("faces");
        let mut bot = Bot::with_whitelist(config, None);
        let mut session = Session::default();

        let reply = bot.handle(&luke(), &mut session, "/mode picture").unwrap();
        assert_eq!(reply.text, "Mode set successfully.");
        assert_eq!(session.mode, Mode::Picture);

        let reply = bot.handle(&luke(), &mut session, "/roll 3fu").unwrap();
        assert_eq!(reply.images.len(), 3);
        assert!(reply.images.iter().all(|p| p.starts_with(PathBuf::from("faces/force"))));
        assert!(reply.text.starts_with("**Final Results:**"));
        assert!(!reply.text.contains("Individual Rolls"));
    }

    #[test]
    fn mode_without_argument_shows_usage() {
        let mut bot = open_bot();
        let mut session = Session::default();
        let reply = bot.handle(&luke(), &mut session, "/mode sepia").unwrap();
        assert_eq!(reply.text, "Usage: /mode <text|picture>");
        assert_eq!(session.mode, Mode::Text);
    }

    #[test]
    fn list_dice_in_spanish() {
        let mut bot = open_bot();
        let mut session = Session::new(Language::Es);
        let reply = bot.handle(&luke(), &mut session, "/list_dice").unwrap();
        assert!(reply.text.contains("- Capacidad (ca)"));
        assert!(reply.text.contains("- Fuerza (fu)"));
    }

    #[test]
    fn whitelist_blocks_unknown_users() {
        let list = Whitelist::from_lines("leia\n");
        let mut bot = Bot::with_whitelist(BotConfig::default(), Some(list));
        let mut session = Session::default();

        let reply = bot.handle(&luke(), &mut session, "/roll 1ca").unwrap();
        assert_eq!(reply.text, locale::NOT_SUBSCRIBED);

        let anonymous = User {
            id: 9,
            username: None,
        };
        assert!(!bot.is_allowed(&anonymous));
        assert!(bot.is_allowed(&User::new(2, "leia")));
    }

    #[test]
    fn subscription_notice_is_localised() {
        let mut bot = Bot::with_whitelist(BotConfig::default(), Some(Whitelist::new()));
        let mut session = Session::new(Language::Es);
        let reply = bot.handle(&luke(), &mut session, "/list_dice").unwrap();
        assert!(reply.text.starts_with("Lo siento"));
    }

    #[test]
    fn non_commands_are_errors() {
        let mut bot = open_bot();
        let mut session = Session::default();
        let err = bot.handle(&luke(), &mut session, "hello").unwrap_err();
        assert!(matches!(err, BotError::NotACommand(_)));
        let err = bot.handle(&luke(), &mut session, "/dance").unwrap_err();
        assert!(matches!(err, BotError::UnknownCommand(_)));
    }

    #[test]
    fn seeded_bots_roll_the_same() {
        let mut a = open_bot();
        let mut b = open_bot();
        let mut session = Session::default();
        let ra = a.handle(&luke(), &mut session, "/roll 4pe 2de").unwrap();
        let rb = b.handle(&luke(), &mut session, "/roll 4pe 2de").unwrap();
        assert_eq!(ra, rb);
    }

    #[test]
    fn new_loads_whitelist_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("whitelist.txt");
        std::fs::write(&path, "luke\n").unwrap();
        let bot = Bot::new(BotConfig::default().with_whitelist(&path)).unwrap();
        assert!(bot.is_allowed(&luke()));
        assert!(!bot.is_allowed(&User::new(5, "vader")));
    }
}
