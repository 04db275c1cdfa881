//! Таблица правил для полей формы обратной связи и валидатор.

use crate::shared::validation::FieldRule;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Tracked contact form fields, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Name,
    Phone,
    Message,
}

impl FieldId {
    /// Declaration order; aggregate validation and focus follow it
    pub const ALL: [FieldId; 3] = [FieldId::Name, FieldId::Phone, FieldId::Message];

    /// HTML id of the input element
    pub fn dom_id(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Phone => "phone",
            FieldId::Message => "message",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.dom_id() == id)
    }

    pub fn index(&self) -> usize {
        match self {
            FieldId::Name => 0,
            FieldId::Phone => 1,
            FieldId::Message => 2,
        }
    }

    pub fn rule(&self) -> &'static FieldRule {
        &RULES[self.index()]
    }
}

/// 7..=20 characters counting an optional leading `+`; the rest are digits,
/// plain spaces, hyphens, parentheses or periods
pub const PHONE_PATTERN: &str = r"^(?:\+[0-9 ().-]{6,19}|[0-9 ().-]{7,20})$";

static RULES: Lazy<[FieldRule; 3]> = Lazy::new(|| {
    [
        FieldRule::required("Please enter your name.")
            .with_min_length(2, "Your name should be at least 2 characters long."),
        FieldRule::required("Please enter your phone number.").with_pattern(
            Regex::new(PHONE_PATTERN).expect("phone pattern is a valid regex"),
            "Please enter a valid phone number (7–20 digits).",
        ),
        FieldRule::required("Please tell us a little about your project.")
            .with_min_length(10, "Your message should be at least 10 characters long."),
    ]
});

/// Message for the first violated constraint of `field`, `None` when valid
pub fn validate_field(field: FieldId, raw: &str) -> Option<&'static str> {
    field.rule().message_for(raw)
}

/// String-keyed entry point: empty string means valid.
///
/// Unknown field ids have no rule and are therefore always valid.
pub fn validate(field_id: &str, raw: &str) -> String {
    FieldId::from_dom_id(field_id)
        .and_then(|field| validate_field(field, raw))
        .map(str::to_string)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::ViolationKind;

    #[test]
    fn test_required_wins_for_blank_values() {
        for field in FieldId::ALL {
            for blank in ["", "   ", "\t\n "] {
                assert_eq!(
                    field.rule().check(blank).map_err(|(kind, _)| kind),
                    Err(ViolationKind::Required),
                    "{:?} with {:?}",
                    field,
                    blank
                );
            }
        }
    }

    #[test]
    fn test_short_non_empty_value_reports_length() {
        assert_eq!(
            validate("name", " J "),
            "Your name should be at least 2 characters long."
        );
        assert_eq!(
            validate("message", "Hi there"),
            "Your message should be at least 10 characters long."
        );
    }

    #[test]
    fn test_phone_pattern() {
        assert_eq!(validate("phone", "+381 64 123 4567"), "");
        assert_eq!(validate("phone", "(011) 555-01.23"), "");
        assert_eq!(
            validate("phone", "abc"),
            "Please enter a valid phone number (7–20 digits)."
        );
        assert_eq!(
            validate("phone", &"1".repeat(21)),
            "Please enter a valid phone number (7–20 digits)."
        );
        assert_eq!(validate("phone", &"1".repeat(20)), "");
        assert_ne!(validate("phone", "123456"), "");
    }

    #[test]
    fn test_phone_length_counts_leading_plus() {
        assert_eq!(validate("phone", &format!("+{}", "1".repeat(19))), "");
        assert_eq!(
            validate("phone", &format!("+{}", "1".repeat(20))),
            "Please enter a valid phone number (7–20 digits)."
        );
        assert_eq!(validate("phone", "+123456"), "");
        assert_ne!(validate("phone", "+12345"), "");
    }

    #[test]
    fn test_phone_rejects_tabs_and_newlines() {
        assert_ne!(validate("phone", "064\t123 4567"), "");
        assert_ne!(validate("phone", "064 123\n4567"), "");
    }

    #[test]
    fn test_unknown_field_is_always_valid() {
        assert_eq!(validate("email", ""), "");
        assert_eq!(validate("", "anything"), "");
    }

    #[test]
    fn test_every_declared_constraint_has_a_message() {
        for field in FieldId::ALL {
            let rule = field.rule();
            assert!(rule.is_required());
            assert!(!rule.required.unwrap_or_default().is_empty());
            if let Some(length) = &rule.min_length {
                assert!(!length.message.is_empty());
            }
            if let Some(pattern) = &rule.pattern {
                assert!(!pattern.message.is_empty());
            }
        }
    }

    #[test]
    fn test_dom_id_round_trip() {
        for field in FieldId::ALL {
            assert_eq!(FieldId::from_dom_id(field.dom_id()), Some(field));
        }
    }
}
