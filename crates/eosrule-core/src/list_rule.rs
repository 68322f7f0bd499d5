use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::FieldValue;
use crate::rules::{extended_name_rule, name_rule, require_str, RuleFn};
use crate::RuleError;

/// Applies one element rule to every part of a separated string.
///
/// The input is split without trimming, so `"a||b"` has three parts and the
/// empty middle one is handed to the element rule. Failures are reported for
/// the first bad element only, labelled `field[i]`.
#[derive(Clone)]
pub struct StringListRule {
    separator: String,
    max_count: usize,
    element_rule: RuleFn,
}

impl StringListRule {
    pub fn new(separator: impl Into<String>, max_count: usize, element_rule: RuleFn) -> Self {
        Self {
            separator: separator.into(),
            max_count,
            element_rule,
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    pub fn validate(
        &self,
        field: &str,
        rule: &str,
        message: &str,
        value: &FieldValue,
    ) -> Result<(), RuleError> {
        let text = require_str(field, value)?;

        let parts = self.split(text);
        if parts.is_empty() || (parts.len() == 1 && parts[0].is_empty()) {
            return Err(RuleError::TooFewElements {
                field: field.to_owned(),
            });
        }

        if parts.len() > self.max_count {
            return Err(RuleError::TooManyElements {
                field: field.to_owned(),
                max: self.max_count,
            });
        }

        for (index, part) in parts.into_iter().enumerate() {
            let element_field = format!("{field}[{index}]");
            if let Err(err) = (self.element_rule)(&element_field, rule, message, &part.into()) {
                debug!(field, index, kind = ?err.kind(), "list element rejected");
                return Err(err);
            }
        }

        Ok(())
    }

    /// An empty separator splits into single characters, with nothing for an
    /// empty input.
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        if self.separator.is_empty() {
            return text
                .char_indices()
                .map(|(start, ch)| &text[start..start + ch.len_utf8()])
                .collect();
        }

        text.split(self.separator.as_str()).collect()
    }
}

impl Debug for StringListRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringListRule")
            .field("separator", &self.separator)
            .field("max_count", &self.max_count)
            .finish_non_exhaustive()
    }
}

/// List of plain names, e.g. `eosio|eosio.token`.
pub fn names_list_rule(separator: impl Into<String>, max_count: usize) -> StringListRule {
    StringListRule::new(separator, max_count, name_rule)
}

/// List of names, symbols or symbol codes, e.g. `eosio.token|4,EOS`.
pub fn extended_names_list_rule(separator: impl Into<String>, max_count: usize) -> StringListRule {
    StringListRule::new(separator, max_count, extended_name_rule)
}

/// Element grammar of a configured list rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListElement {
    Name,
    ExtendedName,
}

/// Configuration of a named list rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRuleConfig {
    pub name: String,
    pub separator: String,
    #[serde(default = "default_max_count")]
    pub max_count: usize,
    pub element: ListElement,
}

fn default_max_count() -> usize {
    1
}

impl ListRuleConfig {
    pub fn build(&self) -> StringListRule {
        match self.element {
            ListElement::Name => names_list_rule(self.separator.as_str(), self.max_count),
            ListElement::ExtendedName => {
                extended_names_list_rule(self.separator.as_str(), self.max_count)
            }
        }
    }
}
