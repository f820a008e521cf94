//! Quick input failure taxonomy and the error body shown to API callers

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuickInputError {
    /// Request carried no text at all
    #[error("Input is required")]
    MissingInput,

    /// Text was present but no number could be found in it
    #[error("Could not parse input. Try: \"breakfast 50k\" or \"50000 lunch\"")]
    Unparseable,
}

impl QuickInputError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            QuickInputError::MissingInput => "INVALID_INPUT",
            QuickInputError::Unparseable => "PARSE_ERROR",
        }
    }

    pub fn to_api_error(&self) -> ApiError {
        ApiError {
            success: false,
            error: ApiErrorBody {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        }
    }
}

/// `{"success": false, "error": {"code": ..., "message": ...}}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    pub success: bool,
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(QuickInputError::MissingInput.code(), "INVALID_INPUT");
        assert_eq!(QuickInputError::Unparseable.code(), "PARSE_ERROR");
    }

    #[test]
    fn test_api_error_envelope() {
        let body = serde_json::to_value(QuickInputError::Unparseable.to_api_error()).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "PARSE_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("breakfast 50k"));
    }
}
