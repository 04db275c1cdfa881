use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Заявка с формы обратной связи (значения уже обрезаны и провалидированы)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl ContactRequest {
    pub fn new(name: &str, phone: &str, message: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            message: message.trim().to_string(),
            submitted_at: Utc::now(),
        }
    }
}

/// Why a submission did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission rejected: {reason}")]
    Rejected { reason: String },

    #[error("submission service unavailable")]
    Unavailable,
}

impl SubmitError {
    /// Text for the failure notice shown under the form
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Rejected { .. } => {
                "We could not accept your message. Please check the details and try again."
            }
            SubmitError::Unavailable => {
                "Sending failed. Please try again in a moment or give us a call."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_trims_values() {
        let request = ContactRequest::new("  Ana ", " +381 64 123 4567", "Kitchen renovation  ");
        assert_eq!(request.name, "Ana");
        assert_eq!(request.phone, "+381 64 123 4567");
        assert_eq!(request.message, "Kitchen renovation");
    }

    #[test]
    fn test_request_serializes_snake_case_fields() {
        let request = ContactRequest::new("Ana", "0641234567", "Bathroom tiles");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["name"], "Ana");
        assert!(json.get("submitted_at").is_some());
        assert_eq!(json["id"].as_str().map(str::len), Some(36));
    }

    #[test]
    fn test_error_messages_are_distinct() {
        let rejected = SubmitError::Rejected {
            reason: "spam".to_string(),
        };
        assert_eq!(rejected.to_string(), "submission rejected: spam");
        assert_ne!(rejected.user_message(), SubmitError::Unavailable.user_message());
    }
}
