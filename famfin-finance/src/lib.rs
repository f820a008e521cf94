//! famfin-finance: quick input parser, type rules, and transaction drafting

pub mod batch;
pub mod magnitude;
pub mod quick_add;
pub mod quick_input;
pub mod type_rules;

pub use batch::{BatchRow, draft_lines, write_csv};
pub use magnitude::multiplier;
pub use quick_add::{QuickAdd, QuickAddRequest, parse, parse_input};
pub use quick_input::{Grammar, ParsedAmount, extract_amount, parse_quick_input};
pub use type_rules::{classify, matched_keyword};
