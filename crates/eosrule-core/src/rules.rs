//! Field rules exposing the grammar to a host validation framework.
//!
//! Every rule has the [`RuleFn`] shape. `rule` and `message` are the host's
//! rule tag and custom message; they are accepted for compatibility and not
//! used.

use std::num::IntErrorKind;

use crate::domain::{FieldValue, NameMode};
use crate::grammar::{is_valid_extended_name, is_valid_name};
use crate::RuleError;

/// Length of a transaction id in hex characters.
pub const TRX_ID_HEX_LEN: usize = 64;

/// Signature shared by all rules: `(field, rule, message, value)`.
pub type RuleFn = fn(&str, &str, &str, &FieldValue) -> Result<(), RuleError>;

/// Block numbers are signed 64-bit decimal strings.
pub fn block_num_rule(
    field: &str,
    _rule: &str,
    _message: &str,
    value: &FieldValue,
) -> Result<(), RuleError> {
    let text = require_str(field, value)?;

    match text.parse::<i64>() {
        Ok(_) => Ok(()),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Err(RuleError::BlockNumOutOfRange {
                    field: field.to_owned(),
                })
            }
            _ => Err(RuleError::InvalidBlockNum {
                field: field.to_owned(),
            }),
        },
    }
}

pub fn name_rule(
    field: &str,
    _rule: &str,
    _message: &str,
    value: &FieldValue,
) -> Result<(), RuleError> {
    check_name(field, value, NameMode::Basic)
}

/// Like [`name_rule`] but also accepts symbols and symbol codes.
pub fn extended_name_rule(
    field: &str,
    _rule: &str,
    _message: &str,
    value: &FieldValue,
) -> Result<(), RuleError> {
    check_name(field, value, NameMode::Extended)
}

/// Non-empty, even-length string of hex digits in either case.
pub fn hex_rule(
    field: &str,
    _rule: &str,
    _message: &str,
    value: &FieldValue,
) -> Result<(), RuleError> {
    let text = require_str(field, value)?;

    if text.is_empty() || hex::decode(text).is_err() {
        return Err(RuleError::InvalidHex {
            field: field.to_owned(),
        });
    }

    Ok(())
}

/// Hex check first, then the length. A short non-hex id reports the hex error.
pub fn trx_id_rule(
    field: &str,
    rule: &str,
    message: &str,
    value: &FieldValue,
) -> Result<(), RuleError> {
    hex_rule(field, rule, message, value)?;

    let text = require_str(field, value)?;
    if text.len() != TRX_ID_HEX_LEN {
        return Err(RuleError::WrongLength {
            field: field.to_owned(),
            expected: TRX_ID_HEX_LEN,
        });
    }

    Ok(())
}

fn check_name(field: &str, value: &FieldValue, mode: NameMode) -> Result<(), RuleError> {
    let Some(text) = value.name_text(mode) else {
        return Err(RuleError::UnknownNameType {
            field: field.to_owned(),
        });
    };

    let valid = match mode {
        NameMode::Basic => is_valid_name(&text),
        NameMode::Extended => is_valid_extended_name(&text),
    };
    if !valid {
        return Err(RuleError::InvalidName {
            field: field.to_owned(),
        });
    }

    Ok(())
}

pub(crate) fn require_str<'a>(field: &str, value: &'a FieldValue) -> Result<&'a str, RuleError> {
    value.as_str().ok_or_else(|| RuleError::NotAString {
        field: field.to_owned(),
    })
}
