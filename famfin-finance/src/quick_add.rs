//! Quick add: turn a free-text request into a transaction draft.
//!
//! Extraction and classification run independently on the raw input; an
//! explicit type on the request always beats the keyword guess.

use chrono::NaiveDate;
use famfin_core::{ParsedInput, QuickInputError, TransactionDraft, TransactionType};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::quick_input::extract_amount;
use crate::type_rules::classify;

/// Body of a quick-add request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QuickAddRequest {
    pub input: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<TransactionType>,
}

impl QuickAddRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: Some(input.into()),
            kind: None,
        }
    }

    pub fn with_type(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }
}

/// Full pipeline on one string: amount, note and detected type.
pub fn parse(input: &str) -> Option<ParsedInput> {
    let amount = extract_amount(input)?;
    Some(ParsedInput::new(amount.amount, amount.note, classify(input)))
}

/// Like [`parse`], but reports why nothing came out.
///
/// Missing or empty input is `MissingInput`; anything else without a number
/// (including whitespace-only text) is `Unparseable`.
pub fn parse_input(input: Option<&str>) -> Result<ParsedInput, QuickInputError> {
    match input {
        None | Some("") => Err(QuickInputError::MissingInput),
        Some(text) => parse(text).ok_or(QuickInputError::Unparseable),
    }
}

/// Builds drafts; `default_type` fills in when no keyword matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAdd {
    pub default_type: TransactionType,
}

impl Default for QuickAdd {
    fn default() -> Self {
        Self {
            default_type: TransactionType::Expense,
        }
    }
}

impl QuickAdd {
    pub fn new(default_type: TransactionType) -> Self {
        Self { default_type }
    }

    /// Resolve the type for `input`: explicit override, else keyword guess,
    /// else the default.
    pub fn resolve_type(&self, input: &str, explicit: Option<TransactionType>) -> TransactionType {
        explicit.unwrap_or_else(|| classify(input).resolve(self.default_type))
    }

    pub fn draft(
        &self,
        request: &QuickAddRequest,
        today: NaiveDate,
    ) -> Result<TransactionDraft, QuickInputError> {
        let input = match request.input.as_deref() {
            None | Some("") => return Err(QuickInputError::MissingInput),
            Some(text) => text,
        };

        let parsed = extract_amount(input).ok_or(QuickInputError::Unparseable)?;
        let kind = self.resolve_type(input, request.kind);

        debug!(
            amount = parsed.amount,
            %kind,
            explicit = request.kind.is_some(),
            "quick add drafted"
        );

        Ok(TransactionDraft {
            amount: parsed.amount,
            note: parsed.note,
            kind,
            transaction_date: today,
            category_id: None,
        })
    }
}
