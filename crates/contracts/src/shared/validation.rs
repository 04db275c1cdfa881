//! Validation rules for form fields
//!
//! Each constraint carries its own message, so a rule cannot declare a
//! constraint without saying what the user sees when it is violated.

use regex::Regex;

/// Kind of constraint that rejected a value, in check priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    Required,
    MinLength,
    Pattern,
}

/// Minimum length constraint (counted in characters, after trimming)
#[derive(Debug, Clone)]
pub struct LengthRule {
    pub min: usize,
    pub message: &'static str,
}

/// Regex constraint applied to non-empty values
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub regex: Regex,
    pub message: &'static str,
}

/// Validation rules for a single field
#[derive(Debug, Clone, Default)]
pub struct FieldRule {
    /// Message shown when the trimmed value is empty; `None` means optional
    pub required: Option<&'static str>,
    pub min_length: Option<LengthRule>,
    pub pattern: Option<PatternRule>,
}

impl FieldRule {
    /// Create empty validation rules (all optional, no constraints)
    pub fn none() -> Self {
        Self::default()
    }

    pub fn required(message: &'static str) -> Self {
        Self {
            required: Some(message),
            ..Self::default()
        }
    }

    pub fn with_min_length(mut self, min: usize, message: &'static str) -> Self {
        self.min_length = Some(LengthRule { min, message });
        self
    }

    /// Attach a pattern. The regex is compiled once when the rule table is built.
    pub fn with_pattern(mut self, regex: Regex, message: &'static str) -> Self {
        self.pattern = Some(PatternRule { regex, message });
        self
    }

    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }

    /// Check a raw value. The first failing constraint wins:
    /// required → min_length → pattern.
    pub fn check(&self, raw: &str) -> Result<(), (ViolationKind, &'static str)> {
        let value = raw.trim();

        if value.is_empty() {
            return match self.required {
                Some(message) => Err((ViolationKind::Required, message)),
                None => Ok(()),
            };
        }

        if let Some(rule) = &self.min_length {
            if value.chars().count() < rule.min {
                return Err((ViolationKind::MinLength, rule.message));
            }
        }

        if let Some(rule) = &self.pattern {
            if !rule.regex.is_match(value) {
                return Err((ViolationKind::Pattern, rule.message));
            }
        }

        Ok(())
    }

    /// Message for the first violated constraint, `None` when valid
    pub fn message_for(&self, raw: &str) -> Option<&'static str> {
        self.check(raw).err().map(|(_, message)| message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FieldRule {
        FieldRule::required("required")
            .with_min_length(3, "short")
            .with_pattern(Regex::new(r"^[a-z]+$").unwrap(), "pattern")
    }

    #[test]
    fn test_priority_order() {
        let rule = sample();
        assert_eq!(rule.check("   "), Err((ViolationKind::Required, "required")));
        assert_eq!(rule.check("A1"), Err((ViolationKind::MinLength, "short")));
        assert_eq!(rule.check("ABC"), Err((ViolationKind::Pattern, "pattern")));
        assert_eq!(rule.check("  abc  "), Ok(()));
    }

    #[test]
    fn test_optional_field_accepts_empty_but_checks_content() {
        let rule = FieldRule::none().with_min_length(2, "short");
        assert_eq!(rule.message_for(""), None);
        assert_eq!(rule.message_for("x"), Some("short"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let rule = FieldRule::required("required").with_min_length(3, "short");
        assert_eq!(rule.message_for("ćšž"), None);
        assert_eq!(rule.message_for("ćš"), Some("short"));
    }
}
