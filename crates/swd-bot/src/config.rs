//! Configuration for the bot.

use std::path::PathBuf;

use swd_dice::RollConfig;
use swd_dice::config::DEFAULT_MAX_DICE;

use crate::error::{BotError, BotResult};
use crate::locale::Language;

/// Configuration for a [`crate::Bot`].
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Whitelist file; `None` lets every user in.
    pub whitelist_path: Option<PathBuf>,
    /// Root directory of the picture-mode face images.
    pub assets_dir: PathBuf,
    /// Language of newly seen users.
    pub default_language: Language,
    /// RNG seed for reproducible rolls; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Most dice a single `/roll` may contain.
    pub max_dice: u32,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            whitelist_path: None,
            assets_dir: PathBuf::from("assets"),
            default_language: Language::En,
            seed: None,
            max_dice: DEFAULT_MAX_DICE,
        }
    }
}

impl BotConfig {
    /// Defaults overlaid with `SWD_WHITELIST`, `SWD_ASSETS`, `SWD_LANG`
    /// and `SWD_SEED` from the environment.
    pub fn from_env() -> BotResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`, keyed by the same
    /// variable names as [`BotConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> BotResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("SWD_WHITELIST") {
            config = config.with_whitelist(path);
        }
        if let Some(dir) = lookup("SWD_ASSETS") {
            config = config.with_assets_dir(dir);
        }
        if let Some(lang) = lookup("SWD_LANG") {
            config = config.with_language(lang.parse()?);
        }
        if let Some(seed) = lookup("SWD_SEED") {
            let parsed = seed.trim().parse().map_err(|_| BotError::InvalidConfig {
                key: "SWD_SEED".to_string(),
                value: seed.clone(),
            })?;
            config = config.with_seed(parsed);
        }

        Ok(config)
    }

    /// Set the whitelist file.
    pub fn with_whitelist(mut self, path: impl Into<PathBuf>) -> Self {
        self.whitelist_path = Some(path.into());
        self
    }

    /// Set the image directory.
    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    /// Set the default language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the dice cap (at least 1).
    pub fn with_max_dice(mut self, max_dice: u32) -> Self {
        self.max_dice = max_dice.max(1);
        self
    }

    /// Roller settings derived from this configuration.
    pub fn roll_config(&self) -> RollConfig {
        let config = RollConfig::default().with_max_dice(self.max_dice);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let cfg = BotConfig::default();
        assert_eq!(cfg.whitelist_path, None);
        assert_eq!(cfg.assets_dir, PathBuf::from("assets"));
        assert_eq!(cfg.default_language, Language::En);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.max_dice, 100);
    }

    #[test]
    fn builder_methods() {
        let cfg = BotConfig::default()
            .with_whitelist("users.txt")
            .with_language(Language::Es)
            .with_seed(7)
            .with_max_dice(0);
        assert_eq!(cfg.whitelist_path, Some(PathBuf::from("users.txt")));
        assert_eq!(cfg.default_language, Language::Es);
        assert_eq!(cfg.max_dice, 1);
        let roll = cfg.roll_config();
        assert_eq!(roll.seed, Some(7));
        assert_eq!(roll.max_dice, 1);
    }

    #[test]
    fn lookup_overrides_defaults() {
        let cfg = BotConfig::from_lookup(lookup(&[
            ("SWD_WHITELIST", "/etc/swd/whitelist.txt"),
            ("SWD_ASSETS", "/srv/dice"),
            ("SWD_LANG", "es"),
            ("SWD_SEED", "42"),
        ]))
        .unwrap();
        assert_eq!(
            cfg.whitelist_path,
            Some(PathBuf::from("/etc/swd/whitelist.txt"))
        );
        assert_eq!(cfg.assets_dir, PathBuf::from("/srv/dice"));
        assert_eq!(cfg.default_language, Language::Es);
        assert_eq!(cfg.seed, Some(42));
    }

    #[test]
    fn empty_lookup_gives_defaults() {
        let cfg = BotConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.whitelist_path, None);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn invalid_values_are_errors() {
        let err = BotConfig::from_lookup(lookup(&[("SWD_SEED", "lots")])).unwrap_err();
        assert_eq!(err.to_string(), "invalid config value for SWD_SEED: lots");

        let err = BotConfig::from_lookup(lookup(&[("SWD_LANG", "klingon")])).unwrap_err();
        assert!(matches!(err, BotError::InvalidLanguage(_)));
    }
}
