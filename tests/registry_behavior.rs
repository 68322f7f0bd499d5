//! Behavior-driven tests for rule dispatch by name and registry configuration

use eosrule_core::{
    CoreError, FieldValue, ListElement, NamedIdentifier, RegistryConfig, Rule, RuleErrorKind,
    RuleRegistry,
};
use serde_json::json;

#[test]
fn when_host_dispatches_by_tag_the_matching_rule_runs() {
    // Given: the default registry
    let registry = RuleRegistry::with_defaults();

    // When/Then: each tag resolves to its rule
    assert!(registry
        .validate("eos.blockNum", "block", "", &"10".into())
        .is_ok());
    assert!(registry
        .validate("eos.name", "actor", "", &NamedIdentifier::account("eosio").into())
        .is_ok());
    assert!(registry
        .validate("eos.extendedName", "scope", "", &"4,EOS".into())
        .is_ok());
    assert!(registry.validate("hex", "data", "", &"00ff".into()).is_ok());

    let err = registry
        .validate("eos.trxId", "id", "", &"00ff".into())
        .expect_err("too short");
    assert_eq!(err.to_string(), "The id field must have exactly 64 characters");
}

#[test]
fn when_tag_is_unknown_host_gets_unknown_rule_error() {
    let registry = RuleRegistry::with_defaults();
    let err = registry
        .validate("eos.asset", "quantity", "", &"1.0000 EOS".into())
        .expect_err("not registered");
    assert_eq!(err.kind(), RuleErrorKind::UnknownRule);
    assert_eq!(err.field(), "quantity");
}

#[test]
fn configured_list_rules_are_registered_next_to_defaults() {
    // Given: a JSON config with two list rules
    let config = RegistryConfig::from_json(
        &json!({
            "list_rules": [
                { "name": "eos.accounts", "separator": "|", "max_count": 2, "element": "name" },
                { "name": "eos.scopes", "separator": ",", "max_count": 3, "element": "extended_name" }
            ]
        })
        .to_string(),
    )
    .expect("config should parse");
    assert_eq!(config.list_rules[1].element, ListElement::ExtendedName);

    // When: the registry is built from it
    let registry = RuleRegistry::from_config(&config);

    // Then: list rules and defaults are both available
    assert!(registry.contains("eos.name"));
    assert!(matches!(registry.get("eos.accounts"), Some(Rule::List(_))));

    let err = registry
        .validate("eos.accounts", "accounts", "", &"a|b|c".into())
        .expect_err("too many");
    assert_eq!(err.to_string(), "The accounts field must have at most 2 elements");

    assert!(registry
        .validate("eos.scopes", "scopes", "", &"eosio,EOS,4,EOS".into())
        .is_err());
    assert!(registry
        .validate("eos.scopes", "scopes", "", &"eosio,EOS".into())
        .is_ok());
}

#[test]
fn malformed_config_is_a_config_error() {
    let result = RegistryConfig::from_json(r#"{"list_rules": [{"name": "x", "element": "asset"}]}"#);
    assert!(matches!(result, Err(CoreError::Config(_))));
}

#[test]
fn empty_config_yields_defaults_only() {
    let config = RegistryConfig::from_json("{}").expect("empty config");
    let registry = RuleRegistry::from_config(&config);
    assert_eq!(registry.names(), RuleRegistry::with_defaults().names());
}

#[test]
fn validate_all_collects_one_error_per_failing_field() {
    let registry = RuleRegistry::with_defaults();
    let errors = registry.validate_all(&[
        ("eos.name", "actor", FieldValue::from("eosio")),
        ("eos.name", "receiver", FieldValue::from("Bad")),
        ("eos.blockNum", "start_block", FieldValue::from(json!(12))),
        ("eos.trxId", "trx", FieldValue::from("zz")),
    ]);

    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec![
            "The receiver field must be a valid EOS name",
            "The start_block field must be a string",
            "The trx field must be a valid hexadecimal",
        ]
    );
}
