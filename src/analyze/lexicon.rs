// src/analyze/lexicon.rs
//! Static reference data for the engine: word polarity weights, negators and
//! the theme keyword table.
//!
//! Everything here is read-only after first use. The lexicon keeps its
//! declaration order because the fuzzy fallback in `scoring` returns the
//! *first* key within tolerance, so the order is part of the observable
//! behaviour.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Word → polarity weight, in declaration order.
const ENTRIES: &[(&str, i32)] = &[
    // positive
    ("shiny", 2),
    ("elegant", 3),
    ("comfortable", 2),
    ("premium", 3),
    ("beautiful", 2),
    ("great", 2),
    ("love", 3),
    ("perfect", 3),
    ("good", 1),
    ("amazing", 3),
    ("nice", 2),
    ("lustrous", 3),
    ("sparkle", 2),
    ("sparkling", 2),
    ("durable", 2),
    ("sturdy", 2),
    ("classy", 2),
    ("delicate", 1),
    ("intricate", 2),
    ("smooth", 1),
    ("gift", 1),
    ("worth", 2),
    ("timeless", 3),
    ("stunning", 3),
    ("authentic", 2),
    ("awesome", 3),
    ("excellent", 3),
    ("fantastic", 3),
    ("fast", 2),
    ("quick", 2),
    ("helpful", 2),
    ("best", 3),
    ("happy", 2),
    ("satisfied", 2),
    ("impressive", 2),
    ("solid", 1),
    ("pretty", 2),
    ("cute", 2),
    ("fine", 1),
    ("recommend", 3),
    ("glad", 2),
    // negative
    ("tarnish", -4),
    ("dull", -2),
    ("broke", -5),
    ("uncomfortable", -3),
    ("heavy", -2),
    ("bad", -2),
    ("poor", -3),
    ("cheap", -3),
    ("fragile", -3),
    ("fake", -5),
    ("scratched", -2),
    ("bent", -3),
    ("loose", -2),
    ("faded", -3),
    ("rough", -2),
    ("tight", -2),
    ("painful", -3),
    ("flimsy", -3),
    ("disappointed", -3),
    ("oxidized", -2),
    ("broken", -5),
    ("worst", -4),
    ("hate", -3),
    ("terrible", -4),
    ("horrible", -4),
    ("slow", -2),
    ("rude", -3),
    ("awful", -4),
    ("useless", -3),
    ("waste", -3),
    ("dirty", -2),
    ("damaged", -4),
    ("wrong", -2),
    ("regret", -3),
    ("sad", -2),
    ("annoying", -2),
    ("hard", -1),
    ("issues", -2),
    ("issue", -2),
    ("horrendous", -4),
    ("disgusting", -4),
    ("fail", -3),
    ("return", -2),
];

/// Tokens that flip the polarity of the token right after them.
pub const NEGATORS: &[&str] = &[
    "not", "never", "no", "hardly", "barely", "don't", "doesn't", "cant", "can't", "wouldn't",
    "won't",
];

/// Process-wide lexicon, built on first use.
pub static LEXICON: Lazy<Lexicon> = Lazy::new(|| Lexicon::from_entries(ENTRIES));

/// Ordered word → weight table with an O(1) exact-match index.
#[derive(Debug)]
pub struct Lexicon {
    entries: &'static [(&'static str, i32)],
    index: HashMap<&'static str, i32>,
}

impl Lexicon {
    pub fn from_entries(entries: &'static [(&'static str, i32)]) -> Self {
        let index = entries.iter().copied().collect();
        Self { entries, index }
    }

    /// Exact lookup.
    #[inline]
    pub fn get(&self, word: &str) -> Option<i32> {
        self.index.get(word).copied()
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[inline]
pub fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token)
}

/// Closed set of review topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Theme {
    Comfort,
    Durability,
    Appearance,
}

impl Theme {
    /// Declaration order; theme detection walks themes in this order.
    pub const ALL: [Theme; 3] = [Theme::Comfort, Theme::Durability, Theme::Appearance];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Comfort => "Comfort",
            Theme::Durability => "Durability",
            Theme::Appearance => "Appearance",
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Theme::Comfort => &[
                "light",
                "heavy",
                "fit",
                "wearable",
                "comfortable",
                "uncomfortable",
                "size",
                "tight",
                "loose",
                "painful",
                "weight",
                "sharp",
                "edges",
                "soft",
                "hard",
            ],
            Theme::Durability => &[
                "broke", "durable", "strong", "quality", "fragile", "tarnish", "lasting", "bent",
                "scratched", "flimsy", "faded", "oxidized", "plating", "stone", "sturdy", "solid",
            ],
            Theme::Appearance => &[
                "shiny", "dull", "design", "polish", "elegant", "beautiful", "look", "sparkle",
                "style", "finish", "color", "gold", "silver", "rose", "pretty", "cute",
            ],
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
