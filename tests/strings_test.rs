//! Tests for string predicates, trimming and template filling

use rstest::rstest;

use extkit::errors::FillError;
use extkit::strings::{fill, NullOrEmpty, StrExt};

#[rstest]
#[case(None, true, true)]
#[case(Some(""), true, true)]
#[case(Some("  \t\n"), false, true)]
#[case(Some(" x "), false, false)]
fn given_optional_text_when_checking_then_null_rules_apply(
    #[case] value: Option<&str>,
    #[case] null_or_empty: bool,
    #[case] null_or_whitespace: bool,
) {
    assert_eq!(value.is_null_or_empty(), null_or_empty);
    assert_eq!(value.is_null_or_whitespace(), null_or_whitespace);
}

#[test]
fn given_owned_strings_when_checking_then_same_as_str() {
    assert!(String::new().is_null_or_empty());
    assert!(String::from("   ").is_null_or_whitespace());
    assert!(!Some(String::from("a")).is_null_or_empty());
}

#[test]
fn given_text_when_trimming_ends_then_chars_removed() {
    assert_eq!("hello".remove_first_char(), Some("ello"));
    assert_eq!("hello".remove_last_char(), Some("hell"));
    assert_eq!("hello".remove_first(0), Some("hello"));
    assert_eq!("hello".remove_last(5), Some(""));
    assert_eq!("".remove_last_char(), None);
    assert_eq!("日本語".remove_last_char(), Some("日本"));
}

#[test]
fn given_positional_template_when_filling_then_args_substituted() {
    assert_eq!(fill("{0} {1}", &["a", "b"]).unwrap(), "a b");
    assert_eq!(fill("{1}-{0}-{1}", &["x", "y"]).unwrap(), "y-x-y");
    assert_eq!("{0} items".fill(&[3]).unwrap(), "3 items");
}

#[test]
fn given_escaped_braces_when_filling_then_literal_braces() {
    assert_eq!(fill("{{{0}}}", &["v"]).unwrap(), "{v}");
    assert_eq!(fill("{{0}}", &["v"]).unwrap(), "{0}");
}

#[test]
fn given_format_suffix_when_filling_then_ignored() {
    assert_eq!(fill("{0:N2}", &[7]).unwrap(), "7");
}

#[test]
fn given_no_args_when_filling_then_template_unchanged() {
    let none: [&str; 0] = [];
    assert_eq!(fill("{0} {", &none).unwrap(), "{0} {");
}

#[test]
fn given_missing_argument_when_filling_then_index_error() {
    assert_eq!(
        fill("{0} {2}", &["a", "b"]),
        Err(FillError::IndexOutOfRange { index: 2, count: 2 })
    );
}

#[test]
fn given_unclosed_placeholder_when_filling_then_malformed() {
    assert_eq!(
        fill("value: {0", &["a"]),
        Err(FillError::Malformed { position: 7 })
    );
}
