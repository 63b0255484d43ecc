//! Tests for TypeCode parsing and decoding.

use super::code::TypeCode;
use super::letter::{Dichotomy, Letter};
use crate::error::{CodeErrorKind, TypeDynamicsError};

fn parse(input: &str) -> TypeCode {
    TypeCode::parse(input).unwrap()
}

fn reject(input: &str) -> CodeErrorKind {
    match TypeCode::parse(input) {
        Err(TypeDynamicsError::InvalidTypeCode { kind, .. }) => kind,
        other => panic!("expected InvalidTypeCode for {:?}, got {:?}", input, other),
    }
}

#[test]
fn test_positional_decoding() {
    let code = parse("INTP");
    assert_eq!(code.attitude(), Letter::I);
    assert_eq!(code.perceiving_letter(), Letter::N);
    assert_eq!(code.judging_letter(), Letter::T);
    assert_eq!(code.lifestyle(), Letter::P);
}

#[test]
fn test_predicates() {
    let code = parse("INTP");
    assert!(code.is_introvert());
    assert!(!code.is_extravert());
    assert!(code.is_intuitive());
    assert!(!code.is_sensing());
    assert!(code.is_thinking());
    assert!(!code.is_feeling());
    assert!(code.is_perceiving_lifestyle());
    assert!(!code.is_judging_lifestyle());

    let code = parse("ESFJ");
    assert!(code.is_extravert());
    assert!(code.is_sensing());
    assert!(code.is_feeling());
    assert!(code.is_judging_lifestyle());
}

#[test]
fn test_predicates_are_mutually_exclusive() {
    for code in all_codes() {
        assert_ne!(code.is_introvert(), code.is_extravert());
        assert_ne!(code.is_sensing(), code.is_intuitive());
        assert_ne!(code.is_thinking(), code.is_feeling());
        assert_ne!(code.is_judging_lifestyle(), code.is_perceiving_lifestyle());
    }
}

#[test]
fn test_case_insensitive_parse() {
    assert_eq!(parse("intp"), parse("INTP"));
    assert_eq!(parse("EnFp"), parse("ENFP"));
}

#[test]
fn test_rejects_wrong_length() {
    assert_eq!(reject("INT"), CodeErrorKind::WrongLength { actual: 3 });
    assert_eq!(reject("INTPX"), CodeErrorKind::WrongLength { actual: 5 });
    assert_eq!(reject(""), CodeErrorKind::WrongLength { actual: 0 });
}

#[test]
fn test_rejects_unknown_letter() {
    assert_eq!(
        reject("XNTP"),
        CodeErrorKind::UnknownLetter {
            position: 0,
            found: 'X'
        }
    );
    assert_eq!(
        reject("IN7P"),
        CodeErrorKind::UnknownLetter {
            position: 2,
            found: '7'
        }
    );
}

#[test]
fn test_rejects_letter_at_wrong_position() {
    // 'T' is a valid letter but position 0 belongs to E/I
    assert_eq!(
        reject("TNTP"),
        CodeErrorKind::WrongDichotomy {
            position: 0,
            found: 'T',
            expected: Dichotomy::Attitude
        }
    );
    // 'J' cannot stand in for S/N
    assert_eq!(
        reject("IJTP"),
        CodeErrorKind::WrongDichotomy {
            position: 1,
            found: 'J',
            expected: Dichotomy::Perceiving
        }
    );
    // swapped middle letters
    assert_eq!(
        reject("ITNP"),
        CodeErrorKind::WrongDichotomy {
            position: 1,
            found: 'T',
            expected: Dichotomy::Perceiving
        }
    );
}

#[test]
fn test_display_round_trip() {
    for code in all_codes() {
        let rendered = code.to_string();
        assert_eq!(TypeCode::parse(&rendered).unwrap(), code);
    }
}

#[test]
fn test_serde_as_string() {
    let code = parse("ENFP");
    let json = serde_json::to_string(&code).unwrap();
    assert_eq!(json, "\"ENFP\"");
    let back: TypeCode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, code);

    let err = serde_json::from_str::<TypeCode>("\"XNTP\"");
    assert!(err.is_err());
}

/// All 16 valid codes, enumerated inline.
fn all_codes() -> Vec<TypeCode> {
    let mut codes = Vec::with_capacity(16);
    for a in ["E", "I"] {
        for p in ["S", "N"] {
            for j in ["T", "F"] {
                for l in ["J", "P"] {
                    codes.push(parse(&format!("{a}{p}{j}{l}")));
                }
            }
        }
    }
    codes
}
