use std::borrow::Cow;

use serde_json::Value;

use super::{NamedIdentifier, Symbol, SymbolCode};

/// Which wrapper variants a name rule accepts besides plain strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMode {
    /// Strings and [`NamedIdentifier`]s.
    Basic,
    /// Also [`Symbol`] and [`SymbolCode`].
    Extended,
}

/// A value handed to a rule by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Name(NamedIdentifier),
    Symbol(Symbol),
    SymbolCode(SymbolCode),
    /// Any other dynamic type, carrying its type name.
    Unsupported(&'static str),
}

impl FieldValue {
    /// The raw string, only for [`FieldValue::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Canonical text of the value when `mode` recognizes its type.
    pub fn name_text(&self, mode: NameMode) -> Option<Cow<'_, str>> {
        match (self, mode) {
            (Self::Str(value), _) => Some(Cow::Borrowed(value)),
            (Self::Name(name), _) => Some(Cow::Borrowed(name.as_str())),
            (Self::Symbol(symbol), NameMode::Extended) => Some(Cow::Owned(symbol.to_string())),
            (Self::SymbolCode(code), NameMode::Extended) => Some(Cow::Borrowed(code.as_str())),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Name(_) => "name",
            Self::Symbol(_) => "symbol",
            Self::SymbolCode(_) => "symbol_code",
            Self::Unsupported(type_name) => type_name,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<NamedIdentifier> for FieldValue {
    fn from(value: NamedIdentifier) -> Self {
        Self::Name(value)
    }
}

impl From<Symbol> for FieldValue {
    fn from(value: Symbol) -> Self {
        Self::Symbol(value)
    }
}

impl From<SymbolCode> for FieldValue {
    fn from(value: SymbolCode) -> Self {
        Self::SymbolCode(value)
    }
}

impl From<bool> for FieldValue {
    fn from(_: bool) -> Self {
        Self::Unsupported("bool")
    }
}

impl From<i64> for FieldValue {
    fn from(_: i64) -> Self {
        Self::Unsupported("i64")
    }
}

impl From<u64> for FieldValue {
    fn from(_: u64) -> Self {
        Self::Unsupported("u64")
    }
}

impl From<f64> for FieldValue {
    fn from(_: f64) -> Self {
        Self::Unsupported("f64")
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(value) => Self::Str(value),
            Value::Null => Self::Unsupported("null"),
            Value::Bool(_) => Self::Unsupported("bool"),
            Value::Number(_) => Self::Unsupported("number"),
            Value::Array(_) => Self::Unsupported("array"),
            Value::Object(_) => Self::Unsupported("object"),
        }
    }
}
