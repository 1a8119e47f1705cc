use crate::errors::ValidationError;
use crate::ledger::EntryKind;

/// Unvalidated form contents, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub kind: String,
    pub description: String,
    pub value: String,
}

impl RawInput {
    pub fn new(
        kind: impl Into<String>,
        description: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            description: description.into(),
            value: value.into(),
        }
    }

    /// Applies the add-entry rules: known kind, non-blank description, and a
    /// finite value above zero.
    pub fn validate(&self) -> Result<ValidatedInput, ValidationError> {
        let kind = self.kind.parse::<EntryKind>()?;

        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let value_text = self.value.trim();
        let value = value_text
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ValidationError::InvalidValue(value_text.to_string()))?;
        if value <= 0.0 {
            return Err(ValidationError::NonPositiveValue(value));
        }

        Ok(ValidatedInput {
            kind,
            description: description.to_string(),
            value,
        })
    }
}

/// Input that passed the validation gate.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub kind: EntryKind,
    pub description: String,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_trims_description_and_value() {
        let input = RawInput::new("inc", "  Salary ", " 1000 ").validate().unwrap();
        assert_eq!(input.description, "Salary");
        assert_eq!(input.value, 1000.0);
        assert_eq!(input.kind, EntryKind::Income);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let check = |value: &str| RawInput::new("exp", "x", value).validate().unwrap_err();
        assert_eq!(check("abc"), ValidationError::InvalidValue("abc".into()));
        assert_eq!(check(""), ValidationError::InvalidValue(String::new()));
        assert_eq!(check("NaN"), ValidationError::InvalidValue("NaN".into()));
        assert_eq!(check("inf"), ValidationError::InvalidValue("inf".into()));
        assert_eq!(check("0"), ValidationError::NonPositiveValue(0.0));
        assert_eq!(check("-5"), ValidationError::NonPositiveValue(-5.0));
    }

    #[test]
    fn validate_rejects_blank_description() {
        let err = RawInput::new("exp", "   ", "5").validate().unwrap_err();
        assert_eq!(err, ValidationError::EmptyDescription);
    }
}
