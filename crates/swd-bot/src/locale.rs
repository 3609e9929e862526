//! Message catalogs for the languages the bot speaks.
//!
//! Message ids are the English text itself. A lookup that has no
//! translation returns the id unchanged, so English needs no table and
//! any untranslated message falls back to English.

use serde::{Deserialize, Serialize};

use swd_dice::{DieKind, Symbol};

use crate::error::BotError;

/// A supported reply language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Spanish.
    Es,
}

impl Language {
    /// Parse a language code ("en" or "es"), ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }

    /// The two-letter code.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| BotError::InvalidLanguage(s.to_string()))
    }
}

/// Shown to users missing from the whitelist.
pub const NOT_SUBSCRIBED: &str =
    "I'm sorry, you're not subscribed. Go to swdicebot.matesncode.com to subscribe.";
/// Reply to `/start`.
pub const WELCOME: &str = "Welcome to the Star Wars Dice Roller bot!\n\
    Use /roll <dice_input> to roll your dice.\n\
    Use /language <en|es> to set your language.\n\
    Use /list_dice to see available dice options.\n\
    Use /mode <text|picture> to choose how rolls are shown.\n\
    Example: /roll 2ca,2pe,3di,1be,2co";
/// `/language` without an argument.
pub const LANGUAGE_USAGE: &str = "Usage: /language <en|es>";
/// `/language` with an unsupported code.
pub const LANGUAGE_INVALID: &str = "Invalid language. Use 'en' or 'es'.";
/// `/language` succeeded.
pub const LANGUAGE_SET: &str = "Language set successfully.";
/// `/mode` without a valid argument.
pub const MODE_USAGE: &str = "Usage: /mode <text|picture>";
/// `/mode` succeeded.
pub const MODE_SET: &str = "Mode set successfully.";
/// `/roll` without dice.
pub const ROLL_USAGE: &str = "Usage: /roll <dice_input>";
/// Header of the dice listing.
pub const DICE_HEADER: &str = "Available dice options:";
/// Header of the per-die section of a roll reply.
pub const ROLLS_HEADER: &str = "🎲 **Individual Rolls:**";
/// Header of the totals section of a roll reply.
pub const RESULTS_HEADER: &str = "**Final Results:**";
/// Label for a die that landed on a blank face.
pub const BLANK: &str = "blank";
/// Prefix for errors reported back to the user.
pub const ERROR_PREFIX: &str = "Error";

const SPANISH: &[(&str, &str)] = &[
    (
        NOT_SUBSCRIBED,
        "Lo siento, no estás suscrito. Visita swdicebot.matesncode.com para suscribirte.",
    ),
    (
        WELCOME,
        "¡Bienvenido al bot de dados de Star Wars!\n\
         Usa /roll <dados> para tirar tus dados.\n\
         Usa /language <en|es> para elegir tu idioma.\n\
         Usa /list_dice para ver los dados disponibles.\n\
         Usa /mode <text|picture> para elegir cómo se muestran las tiradas.\n\
         Ejemplo: /roll 2ca,2pe,3di,1be,2co",
    ),
    (LANGUAGE_USAGE, "Uso: /language <en|es>"),
    (LANGUAGE_INVALID, "Idioma no válido. Usa 'en' o 'es'."),
    (LANGUAGE_SET, "Idioma configurado correctamente."),
    (MODE_USAGE, "Uso: /mode <text|picture>"),
    (MODE_SET, "Modo configurado correctamente."),
    (ROLL_USAGE, "Uso: /roll <dados>"),
    (DICE_HEADER, "Dados disponibles:"),
    (ROLLS_HEADER, "🎲 **Tiradas individuales:**"),
    (RESULTS_HEADER, "**Resultados finales:**"),
    (BLANK, "vacío"),
    (ERROR_PREFIX, "Error"),
    ("ability", "capacidad"),
    ("proficiency", "pericia"),
    ("difficulty", "dificultad"),
    ("challenge", "desafío"),
    ("boost", "beneficio"),
    ("setback", "contratiempo"),
    ("force", "fuerza"),
    ("success", "éxito"),
    ("advantage", "ventaja"),
    ("triumph", "triunfo"),
    ("failure", "fracaso"),
    ("threat", "amenaza"),
    ("despair", "desesperación"),
    ("light", "luz"),
    ("dark", "oscuridad"),
];

/// Translation lookup for one language.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [(&'static str, &'static str)],
}

impl Catalog {
    /// The catalog for a language.
    pub fn for_language(language: Language) -> Self {
        let entries: &'static [(&'static str, &'static str)] = match language {
            Language::En => &[],
            Language::Es => SPANISH,
        };
        Self { entries }
    }

    /// Translate a message id, falling back to the id itself.
    pub fn tr<'a>(&self, msgid: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(id, _)| *id == msgid)
            .map_or(msgid, |(_, text)| *text)
    }

    /// Localised die kind name.
    pub fn die_name(&self, kind: DieKind) -> &'static str {
        self.tr(kind.name())
    }

    /// Localised symbol name.
    pub fn symbol_name(&self, symbol: Symbol) -> &'static str {
        self.tr(symbol.name())
    }

    /// Localised face outcome: each `+`-joined symbol translated, or the
    /// blank label for an empty face.
    pub fn face(&self, face: &str) -> String {
        if face.is_empty() {
            return self.tr(BLANK).to_string();
        }
        face.split('+')
            .map(|part| self.tr(part))
            .collect::<Vec<_>>()
            .join("+")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_language() {
        assert_eq!(Language::parse("en"), Some(Language::En));
        assert_eq!(Language::parse(" ES "), Some(Language::Es));
        assert_eq!(Language::parse("fr"), None);
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn english_is_identity() {
        let en = Catalog::for_language(Language::En);
        assert_eq!(en.tr(LANGUAGE_SET), LANGUAGE_SET);
        assert_eq!(en.die_name(DieKind::Challenge), "challenge");
        assert_eq!(en.face(""), "blank");
    }

    #[test]
    fn spanish_translations() {
        let es = Catalog::for_language(Language::Es);
        assert_eq!(es.tr(LANGUAGE_SET), "Idioma configurado correctamente.");
        assert_eq!(es.die_name(DieKind::Setback), "contratiempo");
        assert_eq!(es.symbol_name(Symbol::Despair), "desesperación");
        assert_eq!(es.face("success+advantage"), "éxito+ventaja");
        assert_eq!(es.face(""), "vacío");
    }

    #[test]
    fn untranslated_falls_back_to_english() {
        let es = Catalog::for_language(Language::Es);
        assert_eq!(es.tr("Something new"), "Something new");
    }

    #[test]
    fn spanish_covers_every_die_and_symbol() {
        let es = Catalog::for_language(Language::Es);
        for kind in DieKind::ALL {
            assert_ne!(es.die_name(kind), kind.name(), "{kind}");
        }
        for symbol in Symbol::ALL {
            assert_ne!(es.symbol_name(symbol), symbol.name(), "{symbol}");
        }
    }

    #[test]
    fn spanish_codes_follow_die_names() {
        // The primary codes are the first two letters of the Spanish names.
        let es = Catalog::for_language(Language::Es);
        for kind in DieKind::ALL {
            assert!(es.die_name(kind).starts_with(kind.code()), "{kind}");
        }
    }
}
