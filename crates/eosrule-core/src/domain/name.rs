use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::grammar::is_valid_name;
use crate::ValidationError;

/// Nominal flavours of an EOS name. All share the same grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameKind {
    Name,
    Permission,
    Action,
    Account,
    Table,
}

impl NameKind {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Permission,
        Self::Action,
        Self::Account,
        Self::Table,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Permission => "permission",
            Self::Action => "action",
            Self::Account => "account",
            Self::Table => "table",
        }
    }
}

impl Display for NameKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameKind {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "permission" => Ok(Self::Permission),
            "action" => Ok(Self::Action),
            "account" => Ok(Self::Account),
            "table" => Ok(Self::Table),
            _ => Err(ValidationError::InvalidNameKind {
                value: value.to_owned(),
            }),
        }
    }
}

/// A name tagged with what it identifies.
///
/// Construction does not validate; use [`NamedIdentifier::parse`] for that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedIdentifier {
    pub kind: NameKind,
    pub value: String,
}

impl NamedIdentifier {
    pub fn new(kind: NameKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn name(value: impl Into<String>) -> Self {
        Self::new(NameKind::Name, value)
    }

    pub fn permission(value: impl Into<String>) -> Self {
        Self::new(NameKind::Permission, value)
    }

    pub fn action(value: impl Into<String>) -> Self {
        Self::new(NameKind::Action, value)
    }

    pub fn account(value: impl Into<String>) -> Self {
        Self::new(NameKind::Account, value)
    }

    pub fn table(value: impl Into<String>) -> Self {
        Self::new(NameKind::Table, value)
    }

    pub fn parse(kind: NameKind, input: &str) -> Result<Self, ValidationError> {
        if !is_valid_name(input) {
            return Err(ValidationError::InvalidName {
                value: input.to_owned(),
            });
        }

        Ok(Self::new(kind, input))
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Display for NamedIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
