//! Exact failure messages
//!
//! The message template is part of the public contract, so these tests pin
//! it down character by character.

use affirm::prelude::*;
use affirm::{assert_passes, assert_violates};
use rust_decimal::Decimal;

#[test]
fn test_equal_int_passes() {
    assert_passes!(Validator::new(42).checked().be(42));
}

#[test]
fn test_unequal_int_with_reason() {
    assert_violates!(
        Validator::new(42)
            .because("that's the bottom line")
            .checked()
            .be(13),
        "\nvalidator\nis \"42\"\nbut was expected to be \"13\"\nbecause that's the bottom line"
    );
}

#[test]
fn test_decimal_between_echoes_inverted_bounds() {
    assert_violates!(
        Validator::new(Decimal::from(42))
            .because("x")
            .checked()
            .be_between(Decimal::from(130), Decimal::from(13)),
        "\nvalidator\nis \"42\"\nbut was expected to be between \"130\" and \"13\"\nbecause x"
    );
}

#[test]
fn test_null_int_greater_than() {
    assert_violates!(
        Validator::new(None::<i32>)
            .because("x")
            .checked()
            .be_greater_than(42),
        "\nvalidator\nis \"\"\nbut was expected to be greater than \"42\"\nbecause x"
    );
}

#[test]
fn test_inverse_null_string_be_null() {
    assert_violates!(
        Validator::inverse(Text::null()).checked().be(None::<&str>),
        "\nvalidator\nis \"\"\nbut was expected not to be \"\""
    );
}

#[test]
fn test_wildcard_match_passes() {
    assert_passes!(Validator::new(Text::from("string"))
        .checked()
        .match_pattern("st*ng"));
}

#[test]
fn test_inverse_wording_per_predicate() {
    let cases: Vec<(Result<(), AssertionViolation>, &str)> = vec![
        (
            Validator::inverse(5_u8).checked().be_between(1, 10),
            "not to be between \"1\" and \"10\"",
        ),
        (
            Validator::inverse(5_u8).checked().be_greater_than(1),
            "not to be greater than \"1\"",
        ),
        (
            Validator::inverse(-5_i64).checked().be_negative(),
            "not to have a negative value",
        ),
        (
            Validator::inverse(2_u16).checked().be_one_of([1, 2]),
            "not to be one of the following values: \"1\", \"2\"",
        ),
        (
            Validator::inverse(None::<i8>).checked().be_null(),
            "not to be null",
        ),
        (
            Validator::inverse(Text::from("abc"))
                .checked()
                .start_with("a"),
            "to not start with \"a\"",
        ),
        (
            Validator::inverse(Text::from("abc"))
                .checked()
                .match_pattern("a*"),
            "to not match pattern \"a*\"",
        ),
        (
            Validator::inverse(Text::from("abc"))
                .checked()
                .match_regex("b"),
            "to not match regular expression \"b\"",
        ),
        (
            Validator::inverse(Text::from("")).checked().be_empty(),
            "not to be empty",
        ),
    ];

    for (outcome, expectation) in cases {
        let violation = assert_violates!(outcome);
        assert_eq!(violation.expectation(), expectation);
    }
}

#[test]
fn test_positive_wording_per_predicate() {
    let cases: Vec<(Result<(), AssertionViolation>, &str)> = vec![
        (
            Validator::new(5_u32)
                .checked()
                .be_greater_than_or_equal_to(6),
            "to be greater than or equal to \"6\"",
        ),
        (
            Validator::new(5_u32).checked().be_less_than(5),
            "to be less than \"5\"",
        ),
        (
            Validator::new(5_u32).checked().be_less_than_or_equal_to(4),
            "to be less than or equal to \"4\"",
        ),
        (
            Validator::new(-1_isize).checked().be_positive(),
            "to have a positive value",
        ),
        (
            Validator::new(Some(3_usize)).checked().be_null(),
            "to be null",
        ),
        (
            Validator::new(Text::from("abc")).checked().contain("z"),
            "to contain \"z\"",
        ),
        (
            Validator::new(Text::from("abc")).checked().end_with("z"),
            "to end with \"z\"",
        ),
        (
            Validator::new(Text::from("abc")).checked().match_regex("z"),
            "to match regular expression \"z\"",
        ),
        (
            Validator::new(Text::null()).checked().be_empty(),
            "to be empty",
        ),
    ];

    for (outcome, expectation) in cases {
        let violation = assert_violates!(outcome);
        assert_eq!(violation.expectation(), expectation);
    }
}

#[test]
fn test_culture_drives_decimal_separator() {
    let _scope = Culture::with_decimal_separator(',').scope();
    assert_violates!(
        Validator::new(4.5_f64).checked().be(4.25),
        "\nvalidator\nis \"4,5\"\nbut was expected to be \"4,25\""
    );
    assert_violates!(
        Validator::new(Decimal::new(15, 1))
            .checked()
            .be_less_than(Decimal::ONE),
        "\nvalidator\nis \"1,5\"\nbut was expected to be less than \"1\""
    );
}

#[test]
fn test_explicit_culture_beats_scope() {
    let _scope = Culture::with_decimal_separator(',').scope();
    assert_violates!(
        Validator::new(0.5_f32)
            .with_culture(Culture::INVARIANT)
            .checked()
            .be_negative(),
        "\nvalidator\nis \"0.5\"\nbut was expected to have a negative value"
    );
}

#[test]
fn test_integers_ignore_culture() {
    let _scope = Culture::with_decimal_separator(',').scope();
    assert_violates!(
        Validator::new(1000_u64).checked().be(1001),
        "\nvalidator\nis \"1000\"\nbut was expected to be \"1001\""
    );
}

#[test]
fn test_named_subject_and_empty_reason() {
    assert_violates!(
        Validator::new(Text::from("bob"))
            .named("user.name")
            .because("")
            .checked()
            .be_ignoring_case("alice"),
        "\nuser.name\nis \"bob\"\nbut was expected to be \"alice\" (ignoring case)"
    );
}
