//! Quick input: pull an amount and a note out of a chat-like phrase.
//!
//! Supported shapes:
//!   "50k breakfast"            -> 50000, "breakfast"
//!   "breakfast 50k"            -> 50000, "breakfast"
//!   "ăn 35k trưa nay"          -> 35000, "ăn  trưa nay"
//!
//! Grammars are tried in order; the first one that matches wins.
//! Only one number is ever captured per input.

use famfin_core::DEFAULT_NOTE;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::{debug, trace};

use crate::magnitude::{multiplier, suffix_alternation};

const NUMBER: &str = r"([0-9]+(?:\.[0-9]+)?)";

/// Which grammar produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Grammar {
    /// `<number>[suffix] <rest>`
    NumberFirst,
    /// `<text> <number>[suffix]`
    NumberLast,
    /// first `<number>[suffix]` anywhere
    NumberAnywhere,
}

/// Amount and note extracted from one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedAmount {
    /// `base * multiplier(suffix)`
    pub amount: f64,
    /// Numeral exactly as typed, before scaling
    pub base: f64,
    pub suffix: Option<String>,
    /// Trimmed residual text, or the placeholder when nothing is left
    pub note: String,
    pub grammar: Grammar,
}

impl ParsedAmount {
    fn from_parts(base: &str, suffix: Option<&str>, note: &str, grammar: Grammar) -> Option<Self> {
        let base: f64 = base.parse().ok()?;
        let note = note.trim();
        Some(Self {
            amount: base * multiplier(suffix),
            base,
            suffix: suffix.map(str::to_string),
            note: if note.is_empty() {
                DEFAULT_NOTE.to_string()
            } else {
                note.to_string()
            },
            grammar,
        })
    }

    pub fn multiplier(&self) -> f64 {
        multiplier(self.suffix.as_deref())
    }
}

fn number_first_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"^{NUMBER}\s*({})?\s*(.*)$", suffix_alternation()))
            .expect("invalid number-first regex")
    })
}

fn number_last_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"^(.*?)\s+{NUMBER}\s*({})?$", suffix_alternation()))
            .expect("invalid number-last regex")
    })
}

fn number_anywhere_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"{NUMBER}\s*({})?", suffix_alternation()))
            .expect("invalid number-anywhere regex")
    })
}

fn group<'t>(caps: &Captures<'t>, i: usize) -> Option<&'t str> {
    caps.get(i).map(|m| m.as_str())
}

fn number_first(text: &str) -> Option<ParsedAmount> {
    let caps = number_first_re().captures(text)?;
    ParsedAmount::from_parts(
        group(&caps, 1)?,
        group(&caps, 2),
        group(&caps, 3).unwrap_or(""),
        Grammar::NumberFirst,
    )
}

fn number_last(text: &str) -> Option<ParsedAmount> {
    let caps = number_last_re().captures(text)?;
    ParsedAmount::from_parts(
        group(&caps, 2)?,
        group(&caps, 3),
        group(&caps, 1).unwrap_or(""),
        Grammar::NumberLast,
    )
}

fn number_anywhere(text: &str) -> Option<ParsedAmount> {
    let caps = number_anywhere_re().captures(text)?;
    let span = caps.get(0)?;
    let note = format!("{}{}", &text[..span.start()], &text[span.end()..]);
    ParsedAmount::from_parts(group(&caps, 1)?, group(&caps, 2), &note, Grammar::NumberAnywhere)
}

/// Grammars in priority order
const GRAMMARS: [fn(&str) -> Option<ParsedAmount>; 3] = [number_first, number_last, number_anywhere];

/// Extract amount + note from raw text. `None` when the text is blank or
/// holds no number at all.
pub fn extract_amount(input: &str) -> Option<ParsedAmount> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        trace!("quick input is blank");
        return None;
    }

    let parsed = GRAMMARS.iter().find_map(|attempt| attempt(trimmed));
    match &parsed {
        Some(p) => debug!(
            grammar = ?p.grammar,
            amount = p.amount,
            suffix = p.suffix.as_deref().unwrap_or(""),
            "quick input matched"
        ),
        None => debug!(input = trimmed, "no number in quick input"),
    }
    parsed
}

/// Like [`extract_amount`] but accepts a missing input, which fails the same way.
pub fn parse_quick_input(input: Option<&str>) -> Option<ParsedAmount> {
    input.and_then(extract_amount)
}
