//! # eosrule Core
//!
//! Field validation rules for EOSIO-style identifiers.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Grammar predicates** for names, symbol codes and symbols
//! - **Rule adapters** that render user-facing errors for a host validation framework
//! - **List rules** applying an element rule across a separated string with count bounds
//! - **A rule registry** for hosts that dispatch rules by string tag
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Identifier wrappers and the [`FieldValue`] sum type |
//! | [`error`] | Rule and parse error types |
//! | [`grammar`] | Name, symbol code and symbol predicates |
//! | [`list_rule`] | Separated list rule and its configuration |
//! | [`registry`] | Named rule table |
//! | [`rules`] | Block number, name, hex and transaction id rules |
//!
//! ## Quick Start
//!
//! ```rust
//! use eosrule_core::{name_rule, names_list_rule, FieldValue, NamedIdentifier};
//!
//! assert!(name_rule("account", "", "", &FieldValue::from("eosio.token")).is_ok());
//! assert!(name_rule("account", "", "", &NamedIdentifier::account("eosio").into()).is_ok());
//!
//! let accounts = names_list_rule("|", 2);
//! let err = accounts
//!     .validate("accounts", "", "", &FieldValue::from("eosio|6"))
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "The accounts[1] field must be a valid EOS name");
//! ```
//!
//! ## Error Handling
//!
//! Rules return [`RuleError`]; its message is meant for the end user and
//! [`RuleError::kind`] classifies it:
//!
//! ```rust
//! use eosrule_core::{trx_id_rule, FieldValue, RuleErrorKind};
//!
//! let err = trx_id_rule("id", "", "", &FieldValue::from("abcd")).unwrap_err();
//! assert_eq!(err.kind(), RuleErrorKind::LengthViolation);
//! ```

pub mod domain;
pub mod error;
pub mod grammar;
pub mod list_rule;
pub mod registry;
pub mod rules;

pub use domain::{FieldValue, NameKind, NameMode, NamedIdentifier, Symbol, SymbolCode};
pub use error::{CoreError, RuleError, RuleErrorKind, ValidationError};
pub use grammar::{
    explode_names, is_valid_extended_name, is_valid_name, is_valid_symbol, is_valid_symbol_code,
};
pub use list_rule::{
    extended_names_list_rule, names_list_rule, ListElement, ListRuleConfig, StringListRule,
};
pub use registry::{RegistryConfig, Rule, RuleRegistry};
pub use rules::{
    block_num_rule, extended_name_rule, hex_rule, name_rule, trx_id_rule, RuleFn, TRX_ID_HEX_LEN,
};
