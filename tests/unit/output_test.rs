//! Tests for output serialization

use rutcheck::output::{CheckDigitResult, FormatResult, FormattedRut, RutValidation, ValidateResult};

#[test]
fn validate_result_json_shape() {
    let result = ValidateResult::new(vec![
        RutValidation {
            input: "123456785".to_string(),
            valid: true,
            formatted: Some("12.345.678-5".to_string()),
            reason: None,
        },
        RutValidation {
            input: "1-K".to_string(),
            valid: false,
            formatted: None,
            reason: Some("check digit mismatch: expected 9, found K".to_string()),
        },
    ]);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["all_valid"], false);
    assert_eq!(json["valid"], 1);
    assert_eq!(json["invalid"], 1);
    assert_eq!(json["results"][0]["formatted"], "12.345.678-5");
    assert!(json["results"][0].get("reason").is_none());
    assert!(json["results"][1].get("formatted").is_none());
}

#[test]
fn format_result_json_shape() {
    let result = FormatResult {
        ruts: vec![FormattedRut {
            input: "123456785".to_string(),
            formatted: "12.345.678-5".to_string(),
        }],
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["ruts"][0]["input"], "123456785");
    assert_eq!(json["ruts"][0]["formatted"], "12.345.678-5");
}

#[test]
fn check_digit_result_json_shape() {
    let result = CheckDigitResult {
        body: "10000013".to_string(),
        check_digit: "K".to_string(),
        rut: "10.000.013-K".to_string(),
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["check_digit"], "K");
    assert_eq!(json["rut"], "10.000.013-K");
}
