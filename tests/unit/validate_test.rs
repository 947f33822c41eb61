//! Tests for RUT validation

use rutcheck::{format_rut, validate_rut, validate_rut_opt};

use crate::common::{CHECK_CHARS, VALID_RUTS, reference_dv};

// =============================================================================
// Accepted Input
// =============================================================================

#[test]
fn accepts_known_ruts() {
    for rut in VALID_RUTS {
        assert!(validate_rut(rut), "{rut} should be valid");
    }
}

#[test]
fn separators_are_insignificant() {
    assert_eq!(validate_rut("12345678-5"), validate_rut("12.345.678-5"));
    assert!(validate_rut("123456785"));
    assert!(validate_rut("1.2.3.4.5.6.7.8.5"));
    assert!(validate_rut("12-345-678-5"));
}

#[test]
fn check_character_is_case_insensitive() {
    assert_eq!(validate_rut("12345678-k"), validate_rut("12345678-K"));
    assert!(validate_rut("10.000.013-k"));
    assert!(validate_rut("10.000.013-K"));
}

#[test]
fn only_the_computed_digit_is_accepted() {
    let body = "7654321";
    let expected = reference_dv(body);
    for c in CHECK_CHARS {
        let rut = format!("{body}-{c}");
        assert_eq!(validate_rut(&rut), c == expected, "{rut}");
    }
}

#[test]
fn single_digit_body_with_k() {
    assert_eq!(validate_rut("1-K"), reference_dv("1") == 'K');
    assert!(!validate_rut("1-K"));
    assert!(validate_rut("6-K"));
}

#[test]
fn accepted_ruts_format_canonically() {
    for rut in VALID_RUTS {
        let plain = rut.replace('.', "");
        assert!(validate_rut(&plain));
        assert_eq!(format_rut(&plain), rut);
    }
}

// =============================================================================
// Rejected Input
// =============================================================================

#[test]
fn rejects_empty_and_absent() {
    assert!(!validate_rut(""));
    assert!(!validate_rut_opt(None));
    assert!(!validate_rut_opt(Some("")));
}

#[test]
fn rejects_too_short() {
    assert!(!validate_rut("5"));
    assert!(!validate_rut("-5"));
    assert!(!validate_rut("..--"));
}

#[test]
fn rejects_non_digit_body() {
    assert!(!validate_rut("ABCDEFG-5"));
    assert!(!validate_rut("1234567K-5"));
    assert!(!validate_rut(" 12345678-5"));
}

#[test]
fn rejects_bad_check_character() {
    assert!(!validate_rut("12345678-X"));
    assert!(!validate_rut("12345678- "));
}

#[test]
fn rejects_wrong_digit() {
    assert!(!validate_rut("12.345.678-4"));
    assert!(!validate_rut("12.345.678-K"));
    assert!(!validate_rut("11.111.111-0"));
}
