//! famfin-core: Core types shared by the family finance tools

pub mod error;
pub mod time;
pub mod transaction;

pub use error::{ApiError, ApiErrorBody, QuickInputError};
pub use time::{local_date, parse_timezone};
pub use transaction::{DEFAULT_NOTE, DetectedType, ParsedInput, TransactionDraft, TransactionType};
