//! Tests for Temperament and Ratio.

use super::letter::Letter;
use super::temperament::{Ratio, Temperament};

#[test]
fn test_classify_quadrants() {
    // sensing types split on lifestyle
    assert_eq!(
        Temperament::classify(Letter::S, Letter::T, Letter::J).unwrap(),
        Temperament::Guardian
    );
    assert_eq!(
        Temperament::classify(Letter::S, Letter::F, Letter::P).unwrap(),
        Temperament::Artisan
    );
    // intuitive types split on decision basis
    assert_eq!(
        Temperament::classify(Letter::N, Letter::F, Letter::J).unwrap(),
        Temperament::Idealist
    );
    assert_eq!(
        Temperament::classify(Letter::N, Letter::T, Letter::P).unwrap(),
        Temperament::Rational
    );
}

#[test]
fn test_classify_rejects_foreign_letters() {
    assert!(Temperament::classify(Letter::E, Letter::T, Letter::J).is_err());
    assert!(Temperament::classify(Letter::S, Letter::T, Letter::E).is_err());
}

#[test]
fn test_display_and_from_str() {
    for temperament in Temperament::all() {
        let rendered = temperament.to_string();
        assert_eq!(rendered.parse::<Temperament>(), Ok(temperament));
        assert_eq!(rendered.to_uppercase().parse::<Temperament>(), Ok(temperament));
    }
    assert!("stoic".parse::<Temperament>().is_err());
}

#[test]
fn test_ratio_from_lifestyle() {
    assert_eq!(Ratio::from_lifestyle(Letter::J).unwrap(), Ratio::Rational);
    assert_eq!(Ratio::from_lifestyle(Letter::P).unwrap(), Ratio::Irrational);
    assert!(Ratio::from_lifestyle(Letter::T).is_err());
}

#[test]
fn test_ratio_negation() {
    assert_eq!(Ratio::Rational.negation(), Ratio::Irrational);
    assert_eq!(Ratio::Irrational.negation(), Ratio::Rational);
}

#[test]
fn test_serde_snake_case() {
    let json = serde_json::to_string(&Temperament::Idealist).unwrap();
    assert_eq!(json, "\"idealist\"");
    let json = serde_json::to_string(&Ratio::Irrational).unwrap();
    assert_eq!(json, "\"irrational\"");
}
