//! Pattern matchers for names, symbol codes and symbols.
//!
//! The patterns are compiled on first use and shared read-only afterwards.

use std::sync::LazyLock;

use regex::Regex;

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"^[.a-z1-5]{0,13}$"));
static SYMBOL_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Z]{1,7}$"));
static SYMBOL_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9],[A-Z]{1,7}$"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in grammar pattern should compile")
}

/// Returns `true` when `input` is a valid account/action/permission/table name.
///
/// The empty string is accepted: it is what a zero-valued packed name decodes to.
pub fn is_valid_name(input: &str) -> bool {
    input.is_empty() || NAME_PATTERN.is_match(input)
}

/// Returns `true` when `input` is a name, a symbol code or a symbol.
pub fn is_valid_extended_name(input: &str) -> bool {
    input.is_empty()
        || NAME_PATTERN.is_match(input)
        || SYMBOL_CODE_PATTERN.is_match(input)
        || SYMBOL_PATTERN.is_match(input)
}

/// Returns `true` for 1 to 7 uppercase ASCII letters.
pub fn is_valid_symbol_code(input: &str) -> bool {
    SYMBOL_CODE_PATTERN.is_match(input)
}

/// Returns `true` for `<digit>,<symbol code>`, e.g. `4,EOS`.
pub fn is_valid_symbol(input: &str) -> bool {
    SYMBOL_PATTERN.is_match(input)
}

/// Splits a separated list of names for iteration.
///
/// Segments that are blank once trimmed are dropped, the others are returned
/// untouched. List rules do not go through this: they count blank segments.
pub fn explode_names<'a>(input: &'a str, sep: &str) -> Vec<&'a str> {
    input
        .split(sep)
        .filter(|raw| !raw.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_names_up_to_thirteen_chars() {
        assert!(is_valid_name(""));
        assert!(is_valid_name("e"));
        assert!(is_valid_name("5"));
        assert!(is_valid_name("eosio.tokenfl"));
        assert!(is_valid_name("............."));
    }

    #[test]
    fn rejects_bad_names() {
        assert!(!is_valid_name("abcdefghigklma"));
        assert!(!is_valid_name("6"));
        assert!(!is_valid_name("0"));
        assert!(!is_valid_name("Eosio"));
        assert!(!is_valid_name("eosio token"));
        assert!(!is_valid_name("eosio\n"));
    }

    #[test]
    fn extended_accepts_symbols() {
        assert!(is_valid_extended_name(""));
        assert!(is_valid_extended_name("eosio"));
        assert!(is_valid_extended_name("EOS"));
        assert!(is_valid_extended_name("4,EOS"));
        assert!(is_valid_extended_name("0,ABCDEFG"));
    }

    #[test]
    fn extended_rejects_malformed_symbols() {
        assert!(!is_valid_extended_name("4,eos"));
        assert!(!is_valid_extended_name("ABCDEFGH"));
        assert!(!is_valid_extended_name("10,EOS"));
        assert!(!is_valid_extended_name("4,"));
        assert!(!is_valid_extended_name(",EOS"));
        assert!(!is_valid_extended_name("Eos"));
    }

    #[test]
    fn symbol_code_requires_at_least_one_letter() {
        assert!(!is_valid_symbol_code(""));
        assert!(is_valid_symbol_code("A"));
        assert!(!is_valid_symbol("4,"));
        assert!(is_valid_symbol("9,Z"));
    }

    #[test]
    fn explode_drops_blank_segments_but_keeps_raw_text() {
        let names = explode_names("eosio| bob ||  |alice", "|");
        assert_eq!(names, vec!["eosio", " bob ", "alice"]);
    }

    #[test]
    fn explode_of_empty_input_is_empty() {
        assert!(explode_names("", "|").is_empty());
    }
}
