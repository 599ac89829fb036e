//! Language codes used by the console's bad-word list files.
//!
//! Each list directory contains one file per language. File stems are either
//! a decimal index into the canonical language order or the literal `common`
//! (entries applied regardless of the account language).

use std::fmt;

/// A language-specific bad-word list, in the console's canonical order.
///
/// The first letter encodes the region family the list was introduced for
/// (e.g. `jja` for Japan, `pen` for the European/American English list).
/// The derived `Ord` follows the declaration order, which is the order the
/// console firmware ships the files in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    Jja,
    Een,
    Efr,
    Ees,
    Pen,
    Pfr,
    Pde,
    Pit,
    Pes,
    Pnl,
    Kko,
    Czh,
    Ppt,
    Pru,
    Ept,
    Tzh,
    Ten,
    Common,
}

impl Language {
    /// All languages in canonical order. File stem `N` maps to `ALL[N]`.
    pub const ALL: [Language; 18] = [
        Language::Jja,
        Language::Een,
        Language::Efr,
        Language::Ees,
        Language::Pen,
        Language::Pfr,
        Language::Pde,
        Language::Pit,
        Language::Pes,
        Language::Pnl,
        Language::Kko,
        Language::Czh,
        Language::Ppt,
        Language::Pru,
        Language::Ept,
        Language::Tzh,
        Language::Ten,
        Language::Common,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::Jja => "jja",
            Language::Een => "een",
            Language::Efr => "efr",
            Language::Ees => "ees",
            Language::Pen => "pen",
            Language::Pfr => "pfr",
            Language::Pde => "pde",
            Language::Pit => "pit",
            Language::Pes => "pes",
            Language::Pnl => "pnl",
            Language::Kko => "kko",
            Language::Czh => "czh",
            Language::Ppt => "ppt",
            Language::Pru => "pru",
            Language::Ept => "ept",
            Language::Tzh => "tzh",
            Language::Ten => "ten",
            Language::Common => "common",
        }
    }

    /// Resolve a list file stem (`"0"`..`"16"` or `"common"`) to a language.
    pub fn from_stem(stem: &str) -> Option<Language> {
        if stem == "common" {
            return Some(Language::Common);
        }
        let index: usize = stem.parse().ok()?;
        // Common is addressed by name only; 17 is not a valid stem.
        Language::ALL[..17].get(index).copied()
    }

    /// Resolve a language code (`"jja"`, `"common"`, ...) to a language.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.iter().copied().find(|l| l.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
