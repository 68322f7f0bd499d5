use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::grammar::{is_valid_symbol, is_valid_symbol_code};
use crate::ValidationError;

/// Asset ticker such as `EOS`.
///
/// [`SymbolCode::new`] does not check the grammar so that hosts can hand over
/// whatever they decoded and let the rules decide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SymbolCode(String);

impl SymbolCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Parse a symbol code, requiring 1 to 7 uppercase ASCII letters.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if !is_valid_symbol_code(input) {
            return Err(ValidationError::InvalidSymbolCode {
                value: input.to_owned(),
            });
        }

        Ok(Self(input.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SymbolCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymbolCode {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for SymbolCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SymbolCode> for String {
    fn from(value: SymbolCode) -> Self {
        value.0
    }
}

/// Asset descriptor: display precision plus ticker, rendered as `4,EOS`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol {
    pub precision: u8,
    pub code: SymbolCode,
}

impl Symbol {
    pub fn new(precision: u8, code: impl Into<String>) -> Self {
        Self {
            precision,
            code: SymbolCode::new(code),
        }
    }

    /// Parse `<digit>,<symbol code>`.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidSymbol {
            value: input.to_owned(),
        };

        if !is_valid_symbol(input) {
            return Err(invalid());
        }

        let (precision, code) = input.split_once(',').ok_or_else(invalid)?;
        let precision = precision.parse::<u8>().map_err(|_| invalid())?;

        Ok(Self {
            precision,
            code: SymbolCode(code.to_owned()),
        })
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.precision, self.code)
    }
}

impl FromStr for Symbol {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.to_string()
    }
}
