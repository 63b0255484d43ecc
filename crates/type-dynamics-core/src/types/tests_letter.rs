//! Tests for Letter and Dichotomy.

use super::letter::{Dichotomy, Letter};

#[test]
fn test_opposite_is_involutive() {
    for letter in Letter::all() {
        assert_eq!(
            letter.opposite().opposite(),
            letter,
            "opp(opp({})) should round-trip",
            letter
        );
    }
}

#[test]
fn test_opposite_pairs() {
    assert_eq!(Letter::E.opposite(), Letter::I);
    assert_eq!(Letter::S.opposite(), Letter::N);
    assert_eq!(Letter::T.opposite(), Letter::F);
    assert_eq!(Letter::J.opposite(), Letter::P);
}

#[test]
fn test_opposite_stays_in_dichotomy() {
    for letter in Letter::all() {
        assert_eq!(letter.dichotomy(), letter.opposite().dichotomy());
        assert_ne!(letter, letter.opposite());
    }
}

#[test]
fn test_is_function() {
    assert!(Letter::S.is_function());
    assert!(Letter::N.is_function());
    assert!(Letter::T.is_function());
    assert!(Letter::F.is_function());
    assert!(!Letter::E.is_function());
    assert!(!Letter::I.is_function());
    assert!(!Letter::J.is_function());
    assert!(!Letter::P.is_function());
}

#[test]
fn test_from_char_case_insensitive() {
    assert_eq!(Letter::from_char('n'), Some(Letter::N));
    assert_eq!(Letter::from_char('N'), Some(Letter::N));
    assert_eq!(Letter::from_char('x'), None);
    assert_eq!(Letter::from_char('3'), None);
}

#[test]
fn test_char_round_trip() {
    for letter in Letter::all() {
        assert_eq!(Letter::from_char(letter.as_char()), Some(letter));
    }
}

#[test]
fn test_letter_from_str() {
    assert_eq!("t".parse::<Letter>(), Ok(Letter::T));
    assert!("".parse::<Letter>().is_err());
    assert!("EI".parse::<Letter>().is_err());
}

#[test]
fn test_dichotomy_positions() {
    for dichotomy in Dichotomy::all() {
        assert_eq!(
            Dichotomy::at_position(dichotomy.position()),
            Some(dichotomy)
        );
    }
    assert_eq!(Dichotomy::at_position(4), None);
}

#[test]
fn test_dichotomy_letters_match_membership() {
    for dichotomy in Dichotomy::all() {
        let (a, b) = dichotomy.letters();
        assert_eq!(a.dichotomy(), dichotomy);
        assert_eq!(b.dichotomy(), dichotomy);
        assert_eq!(a.opposite(), b);
    }
}

#[test]
fn test_dichotomy_display() {
    assert_eq!(Dichotomy::Attitude.to_string(), "E/I");
    assert_eq!(Dichotomy::Lifestyle.to_string(), "J/P");
}
