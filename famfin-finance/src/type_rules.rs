//! Keyword rules guessing whether a quick input is income or expense.
//!
//! Plain substring matching over two fixed lists, income first. Short
//! keywords can fire inside longer words ("bán" inside "bánh"); that is
//! accepted, there is no word-boundary check.

use famfin_core::DetectedType;
use tracing::trace;

/// Checked first, in order
pub const INCOME_KEYWORDS: &[&str] = &[
    "lương",
    "salary",
    "thưởng",
    "bonus",
    "thu nhập",
    "income",
    "freelance",
    "bán",
    "sell",
    "hoàn tiền",
    "refund",
    "lãi",
];

/// Checked only when no income keyword matched
pub const EXPENSE_KEYWORDS: &[&str] = &[
    "coffee",
    "cafe",
    "ăn",
    "mua",
    "buy",
    "grab",
    "taxi",
    "xăng",
    "điện",
    "nước",
    "breakfast",
    "lunch",
    "dinner",
    "trà sữa",
    "sáng",
    "trưa",
    "tối",
];

/// The first keyword contained in `text`, with the type it stands for.
pub fn matched_keyword(text: &str) -> Option<(DetectedType, &'static str)> {
    let lower = text.to_lowercase();

    let hit = INCOME_KEYWORDS
        .iter()
        .find(|kw| lower.contains(*kw))
        .map(|kw| (DetectedType::Income, *kw))
        .or_else(|| {
            EXPENSE_KEYWORDS
                .iter()
                .find(|kw| lower.contains(*kw))
                .map(|kw| (DetectedType::Expense, *kw))
        });

    if let Some((kind, kw)) = hit {
        trace!(keyword = kw, %kind, "type keyword matched");
    }
    hit
}

/// INCOME, EXPENSE, or UNKNOWN when no keyword is present.
pub fn classify(text: &str) -> DetectedType {
    matched_keyword(text)
        .map(|(kind, _)| kind)
        .unwrap_or(DetectedType::Unknown)
}
