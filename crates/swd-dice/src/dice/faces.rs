//! Static face tables for each die kind.

use serde::Serialize;

use super::Symbol::{Advantage, Dark, Despair, Failure, Light, Success, Threat, Triumph};
use super::{DieKind, Symbol};

/// One face of a die: its outcome label and the symbols it shows.
///
/// The label is either empty (a blank face) or the symbol names joined
/// by `+`, e.g. `"success+advantage"`. Faces are static data, so they
/// serialize but never deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Face {
    label: &'static str,
    symbols: &'static [Symbol],
}

impl Face {
    const fn new(label: &'static str, symbols: &'static [Symbol]) -> Self {
        Self { label, symbols }
    }

    /// The outcome string, verbatim.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Symbols shown on this face, each counted once.
    pub fn symbols(&self) -> &'static [Symbol] {
        self.symbols
    }

    /// True for a face with no symbols.
    pub fn is_blank(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label)
    }
}

const BLANK: Face = Face::new("", &[]);
const S: Face = Face::new("success", &[Success]);
const A: Face = Face::new("advantage", &[Advantage]);
const SA: Face = Face::new("success+advantage", &[Success, Advantage]);
const AA: Face = Face::new("advantage+advantage", &[Advantage, Advantage]);
const TRI: Face = Face::new("triumph", &[Triumph]);
const F: Face = Face::new("failure", &[Failure]);
const T: Face = Face::new("threat", &[Threat]);
const FT: Face = Face::new("failure+threat", &[Failure, Threat]);
const TT: Face = Face::new("threat+threat", &[Threat, Threat]);
const DES: Face = Face::new("despair", &[Despair]);
const L: Face = Face::new("light", &[Light]);
const LL: Face = Face::new("light+light", &[Light, Light]);
const D: Face = Face::new("dark", &[Dark]);

const ABILITY: [Face; 8] = [BLANK, S, S, A, S, A, A, A];
const PROFICIENCY: [Face; 12] = [BLANK, S, S, S, S, A, SA, SA, A, A, AA, TRI];
const DIFFICULTY: [Face; 8] = [BLANK, F, F, T, F, T, T, TT];
const CHALLENGE: [Face; 12] = [BLANK, F, F, F, F, T, FT, FT, T, T, TT, DES];
const BOOST: [Face; 6] = [BLANK, BLANK, S, SA, A, A];
const SETBACK: [Face; 6] = [BLANK, BLANK, F, F, T, T];
const FORCE: [Face; 12] = [D, D, D, D, D, D, D, D, L, L, LL, LL];

/// The ordered face list of a die kind. Every face is equally likely.
pub fn faces(kind: DieKind) -> &'static [Face] {
    match kind {
        DieKind::Ability => &ABILITY,
        DieKind::Proficiency => &PROFICIENCY,
        DieKind::Difficulty => &DIFFICULTY,
        DieKind::Challenge => &CHALLENGE,
        DieKind::Boost => &BOOST,
        DieKind::Setback => &SETBACK,
        DieKind::Force => &FORCE,
    }
}
