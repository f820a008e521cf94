//! Transaction types produced by quick input and handed to storage

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder note used whenever a quick input leaves no text behind.
pub const DEFAULT_NOTE: &str = "Quick expense";

/// Direction of money for a stored transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    /// Case-insensitive: accepts `income`, `INCOME`, `Expense`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INCOME" => Ok(TransactionType::Income),
            "EXPENSE" => Ok(TransactionType::Expense),
            other => Err(format!("unknown transaction type: {other}")),
        }
    }
}

/// Outcome of keyword classification. `Unknown` is a normal value, not an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DetectedType {
    Income,
    Expense,
    Unknown,
}

impl DetectedType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectedType::Income => "INCOME",
            DetectedType::Expense => "EXPENSE",
            DetectedType::Unknown => "UNKNOWN",
        }
    }

    /// Collapse to a storable type, using `default` when unclassified
    pub fn resolve(self, default: TransactionType) -> TransactionType {
        match self {
            DetectedType::Income => TransactionType::Income,
            DetectedType::Expense => TransactionType::Expense,
            DetectedType::Unknown => default,
        }
    }
}

impl fmt::Display for DetectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full result of parsing one quick input phrase
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedInput {
    /// Base number times its magnitude multiplier
    pub amount: f64,
    /// Residual text, never empty
    pub note: String,
    #[serde(rename = "type")]
    pub kind: DetectedType,
}

impl ParsedInput {
    pub fn new(amount: f64, note: impl Into<String>, kind: DetectedType) -> Self {
        let note = note.into();
        Self {
            amount,
            note: if note.trim().is_empty() {
                DEFAULT_NOTE.to_string()
            } else {
                note
            },
            kind,
        }
    }
}

/// A transaction ready to be written by the storage layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionDraft {
    pub amount: f64,
    pub note: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Date of the transaction (YYYY-MM-DD)
    pub transaction_date: NaiveDate,
    pub category_id: Option<String>,
}

impl TransactionDraft {
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Signed amount: positive = income, negative = expense
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_resolves_to_default() {
        assert_eq!(
            DetectedType::Unknown.resolve(TransactionType::Expense),
            TransactionType::Expense
        );
        assert_eq!(
            DetectedType::Income.resolve(TransactionType::Expense),
            TransactionType::Income
        );
    }

    #[test]
    fn test_parse_transaction_type() {
        assert_eq!("income".parse::<TransactionType>(), Ok(TransactionType::Income));
        assert_eq!(" EXPENSE ".parse::<TransactionType>(), Ok(TransactionType::Expense));
        assert!("transfer".parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_blank_note_gets_placeholder() {
        let p = ParsedInput::new(50000.0, "  ", DetectedType::Unknown);
        assert_eq!(p.note, DEFAULT_NOTE);
    }

    #[test]
    fn test_parsed_input_serializes_type_field() {
        let p = ParsedInput::new(10_000_000.0, "lương", DetectedType::Income);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["type"], "INCOME");
        assert_eq!(json["note"], "lương");
    }

    #[test]
    fn test_signed_amount() {
        let draft = TransactionDraft {
            amount: 25000.0,
            note: "coffee".to_string(),
            kind: TransactionType::Expense,
            transaction_date: NaiveDate::from_ymd_opt(2026, 2, 18).unwrap(),
            category_id: None,
        };
        assert!(draft.is_expense());
        assert_eq!(draft.signed_amount(), -25000.0);
    }
}
