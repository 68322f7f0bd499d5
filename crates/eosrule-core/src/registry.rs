//! Named rule table for hosts that dispatch rules by string tag.
//!
//! ```rust
//! use eosrule_core::{FieldValue, RuleRegistry};
//!
//! let registry = RuleRegistry::with_defaults();
//! registry
//!     .validate("eos.name", "account", "", &FieldValue::from("eosio.token"))
//!     .expect("valid account name");
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::FieldValue;
use crate::list_rule::{ListRuleConfig, StringListRule};
use crate::rules::{block_num_rule, extended_name_rule, hex_rule, name_rule, trx_id_rule, RuleFn};
use crate::{CoreError, RuleError};

pub const BLOCK_NUM_RULE: &str = "eos.blockNum";
pub const NAME_RULE: &str = "eos.name";
pub const EXTENDED_NAME_RULE: &str = "eos.extendedName";
pub const TRX_ID_RULE: &str = "eos.trxId";
pub const HEX_RULE: &str = "hex";

/// A registered rule.
#[derive(Debug, Clone)]
pub enum Rule {
    Scalar(RuleFn),
    List(StringListRule),
}

impl Rule {
    pub fn validate(
        &self,
        field: &str,
        rule: &str,
        message: &str,
        value: &FieldValue,
    ) -> Result<(), RuleError> {
        match self {
            Self::Scalar(rule_fn) => rule_fn(field, rule, message, value),
            Self::List(list) => list.validate(field, rule, message, value),
        }
    }
}

impl From<RuleFn> for Rule {
    fn from(value: RuleFn) -> Self {
        Self::Scalar(value)
    }
}

impl From<StringListRule> for Rule {
    fn from(value: StringListRule) -> Self {
        Self::List(value)
    }
}

/// Registry configuration, usually loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub list_rules: Vec<ListRuleConfig>,
}

impl RegistryConfig {
    pub fn from_json(input: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(input)?)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Rule>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the block number, name, extended name, transaction id
    /// and hex rules.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(BLOCK_NUM_RULE, block_num_rule as RuleFn);
        registry.register(NAME_RULE, name_rule as RuleFn);
        registry.register(EXTENDED_NAME_RULE, extended_name_rule as RuleFn);
        registry.register(TRX_ID_RULE, trx_id_rule as RuleFn);
        registry.register(HEX_RULE, hex_rule as RuleFn);
        registry
    }

    /// Defaults plus the configured list rules. A list rule may replace a
    /// default of the same name.
    pub fn from_config(config: &RegistryConfig) -> Self {
        let mut registry = Self::with_defaults();
        for list in &config.list_rules {
            registry.register(list.name.as_str(), list.build());
        }
        registry
    }

    /// Registers `rule` under `name`, returning the rule it replaced.
    pub fn register(&mut self, name: impl Into<String>, rule: impl Into<Rule>) -> Option<Rule> {
        self.rules.insert(name.into(), rule.into())
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered rule names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn validate(
        &self,
        rule_name: &str,
        field: &str,
        message: &str,
        value: &FieldValue,
    ) -> Result<(), RuleError> {
        debug!(rule = rule_name, field, "dispatching rule");

        let rule = self.get(rule_name).ok_or_else(|| RuleError::UnknownRule {
            field: field.to_owned(),
            rule: rule_name.to_owned(),
        })?;

        rule.validate(field, rule_name, message, value)
            .inspect_err(|err| debug!(rule = rule_name, field, kind = ?err.kind(), "rule rejected value"))
    }

    /// Validates several fields, collecting one error per failing field in
    /// input order.
    pub fn validate_all(&self, fields: &[(&str, &str, FieldValue)]) -> Vec<RuleError> {
        fields
            .iter()
            .filter_map(|(rule_name, field, value)| {
                self.validate(rule_name, field, "", value).err()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_rule::names_list_rule;
    use crate::RuleErrorKind;

    #[test]
    fn defaults_are_registered() {
        let registry = RuleRegistry::with_defaults();
        assert_eq!(
            registry.names(),
            vec!["eos.blockNum", "eos.extendedName", "eos.name", "eos.trxId", "hex"]
        );
    }

    #[test]
    fn unknown_rule_is_reported() {
        let registry = RuleRegistry::new();
        let err = registry
            .validate("eos.name", "account", "", &"eosio".into())
            .expect_err("empty registry");
        assert_eq!(err.kind(), RuleErrorKind::UnknownRule);
        assert_eq!(err.to_string(), "unknown validation rule 'eos.name'");
    }

    #[test]
    fn register_replaces_existing_rule() {
        let mut registry = RuleRegistry::with_defaults();
        let previous = registry.register(NAME_RULE, names_list_rule("|", 2));
        assert!(matches!(previous, Some(Rule::Scalar(_))));
        assert!(matches!(registry.get(NAME_RULE), Some(Rule::List(_))));
    }
}
