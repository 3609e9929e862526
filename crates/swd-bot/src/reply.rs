//! Replies and the text formatting of roll results.

use std::path::PathBuf;

use serde::Serialize;

use swd_dice::{DieKind, RollEntry, RollResult, Tally};

use crate::locale::{self, Catalog};

/// What the bot sends back for one message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// Message text.
    pub text: String,
    /// Images to send along with the text, in order.
    pub images: Vec<PathBuf>,
}

impl Reply {
    /// A text-only reply.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            images: Vec::new(),
        }
    }

    /// Attach images to the reply.
    pub fn with_images(mut self, images: Vec<PathBuf>) -> Self {
        self.images = images;
        self
    }
}

/// The "Individual Rolls" section: one `- <die>: <face>` line per die.
pub fn format_rolls(catalog: &Catalog, log: &[RollEntry]) -> String {
    let mut out = format!("{}\n", catalog.tr(locale::ROLLS_HEADER));
    for entry in log {
        out.push_str(&format!(
            "- {}: {}\n",
            catalog.die_name(entry.kind),
            catalog.face(&entry.face)
        ));
    }
    out
}

/// The "Final Results" section: every symbol with its count.
pub fn format_tally(catalog: &Catalog, tally: &Tally) -> String {
    let mut out = format!("{}\n", catalog.tr(locale::RESULTS_HEADER));
    for (symbol, count) in tally.iter() {
        out.push_str(&format!("- {}: {count}\n", catalog.symbol_name(symbol)));
    }
    out
}

/// Full text reply for a roll: individual rolls, a blank line, totals.
pub fn format_roll(catalog: &Catalog, result: &RollResult) -> String {
    format!(
        "{}\n{}",
        format_rolls(catalog, &result.log),
        format_tally(catalog, &result.tally)
    )
}

/// The dice listing: `- <name> (<code>)` for every kind.
pub fn format_dice_list(catalog: &Catalog) -> String {
    let mut out = format!("{}\n", catalog.tr(locale::DICE_HEADER));
    for kind in DieKind::ALL {
        let name = capitalize(catalog.die_name(kind));
        out.push_str(&format!("- {name} ({})\n", kind.code()));
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Language;
    use insta::assert_snapshot;
    use swd_dice::{DicePool, roll_pool_with};

    fn sample_roll() -> RollResult {
        let pool = DicePool::new()
            .add(DieKind::Ability, 1)
            .add(DieKind::Proficiency, 1)
            .add(DieKind::Setback, 1);
        // ability: success, proficiency: success+advantage, setback: blank
        let mut picks = [1, 6, 0].into_iter();
        roll_pool_with(&pool, |_, _| picks.next().unwrap_or(0))
    }

    #[test]
    fn roll_in_english() {
        let catalog = Catalog::for_language(Language::En);
        assert_snapshot!(format_roll(&catalog, &sample_roll()), @r"
        🎲 **Individual Rolls:**
        - ability: success
        - proficiency: success+advantage
        - setback: blank

        **Final Results:**
        - success: 2
        - advantage: 1
        - triumph: 0
        - failure: 0
        - threat: 0
        - despair: 0
        - light: 0
        - dark: 0
        ");
    }

    #[test]
    fn roll_in_spanish() {
        let catalog = Catalog::for_language(Language::Es);
        assert_snapshot!(format_rolls(&catalog, &sample_roll().log), @r"
        🎲 **Tiradas individuales:**
        - capacidad: éxito
        - pericia: éxito+ventaja
        - contratiempo: vacío
        ");
    }

    #[test]
    fn empty_roll_lists_all_symbols() {
        let catalog = Catalog::for_language(Language::En);
        let text = format_roll(&catalog, &RollResult::default());
        assert!(text.starts_with("🎲 **Individual Rolls:**\n\n**Final Results:**\n"));
        assert_eq!(text.lines().filter(|l| l.ends_with(": 0")).count(), 8);
    }

    #[test]
    fn dice_list() {
        let catalog = Catalog::for_language(Language::En);
        assert_snapshot!(format_dice_list(&catalog), @r"
        Available dice options:
        - Ability (ca)
        - Proficiency (pe)
        - Difficulty (di)
        - Challenge (de)
        - Boost (be)
        - Setback (co)
        - Force (fu)
        ");
    }

    #[test]
    fn dice_list_in_spanish() {
        let catalog = Catalog::for_language(Language::Es);
        let text = format_dice_list(&catalog);
        assert!(text.starts_with("Dados disponibles:\n"));
        assert!(text.contains("- Desafío (de)\n"));
    }

    #[test]
    fn reply_builders() {
        let reply = Reply::text("hi").with_images(vec![PathBuf::from("a.png")]);
        assert_eq!(reply.text, "hi");
        assert_eq!(reply.images.len(), 1);
    }
}
