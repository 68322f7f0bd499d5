use thiserror::Error;

/// Parse errors for the typed identifier wrappers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must be at most 13 characters of '.', 'a'-'z' or '1'-'5': '{value}'")]
    InvalidName { value: String },
    #[error("symbol code must be 1 to 7 uppercase ASCII letters: '{value}'")]
    InvalidSymbolCode { value: String },
    #[error("symbol must be a precision digit, a comma and a symbol code: '{value}'")]
    InvalidSymbol { value: String },
    #[error("invalid name kind '{value}', expected one of name, permission, action, account, table")]
    InvalidNameKind { value: String },
}

/// Classification of rule failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleErrorKind {
    /// The value's dynamic type is not one the rule understands.
    TypeMismatch,
    /// The text does not match the required grammar.
    GrammarViolation,
    /// The text parsed but is out of range.
    RangeViolation,
    /// A fixed length or list cardinality bound was not met.
    LengthViolation,
    /// The registry has no rule under the requested name.
    UnknownRule,
}

/// Error returned by a field validation rule.
///
/// The rendered message names the field and is meant to be shown to the user
/// as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("The {field} field must be a string")]
    NotAString { field: String },
    #[error("The {field} field must be a valid EOS block num")]
    InvalidBlockNum { field: String },
    /// Digits only, but outside the signed 64-bit range.
    #[error("The {field} field must be a valid EOS block num")]
    BlockNumOutOfRange { field: String },
    #[error("The {field} field is not a known type for an EOS name")]
    UnknownNameType { field: String },
    #[error("The {field} field must be a valid EOS name")]
    InvalidName { field: String },
    #[error("The {field} field must be a valid hexadecimal")]
    InvalidHex { field: String },
    #[error("The {field} field must have exactly {expected} characters")]
    WrongLength { field: String, expected: usize },
    #[error("The {field} field must have at least 1 element")]
    TooFewElements { field: String },
    #[error("The {field} field must have at most {max} elements")]
    TooManyElements { field: String, max: usize },
    #[error("unknown validation rule '{rule}'")]
    UnknownRule { field: String, rule: String },
}

impl RuleError {
    pub fn kind(&self) -> RuleErrorKind {
        match self {
            Self::NotAString { .. } | Self::UnknownNameType { .. } => RuleErrorKind::TypeMismatch,
            Self::InvalidBlockNum { .. } | Self::InvalidName { .. } | Self::InvalidHex { .. } => {
                RuleErrorKind::GrammarViolation
            }
            Self::BlockNumOutOfRange { .. } => RuleErrorKind::RangeViolation,
            Self::WrongLength { .. }
            | Self::TooFewElements { .. }
            | Self::TooManyElements { .. } => RuleErrorKind::LengthViolation,
            Self::UnknownRule { .. } => RuleErrorKind::UnknownRule,
        }
    }

    /// Label of the field that failed, including any `[i]` list index.
    pub fn field(&self) -> &str {
        match self {
            Self::NotAString { field }
            | Self::InvalidBlockNum { field }
            | Self::BlockNumOutOfRange { field }
            | Self::UnknownNameType { field }
            | Self::InvalidName { field }
            | Self::InvalidHex { field }
            | Self::WrongLength { field, .. }
            | Self::TooFewElements { field }
            | Self::TooManyElements { field, .. }
            | Self::UnknownRule { field, .. } => field,
        }
    }
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let err = RuleError::TooManyElements {
            field: "accounts".to_owned(),
            max: 2,
        };
        assert_eq!(err.to_string(), "The accounts field must have at most 2 elements");
        assert_eq!(err.field(), "accounts");
    }

    #[test]
    fn kinds_follow_taxonomy() {
        let field = || "f".to_owned();
        assert_eq!(
            RuleError::UnknownNameType { field: field() }.kind(),
            RuleErrorKind::TypeMismatch
        );
        assert_eq!(
            RuleError::InvalidHex { field: field() }.kind(),
            RuleErrorKind::GrammarViolation
        );
        assert_eq!(
            RuleError::WrongLength {
                field: field(),
                expected: 64
            }
            .kind(),
            RuleErrorKind::LengthViolation
        );
    }
}
