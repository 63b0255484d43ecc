//! End-to-end derivation properties over all 16 type codes.

use type_dynamics_core::resolver::attr;
use type_dynamics_core::{
    derive_profile, Letter, Ratio, Temperament, TypeCode, TypeDynamicsError,
};

const ALL_CODES: [&str; 16] = [
    "ESTJ", "ESTP", "ESFJ", "ESFP", "ENTJ", "ENTP", "ENFJ", "ENFP",
    "ISTJ", "ISTP", "ISFJ", "ISFP", "INTJ", "INTP", "INFJ", "INFP",
];

fn profile_for(code: &str) -> (TypeCode, type_dynamics_core::AttributeProfile) {
    let code: TypeCode = code.parse().unwrap();
    let profile = derive_profile(&code).unwrap();
    (code, profile)
}

#[test]
fn every_code_derives_a_complete_stack() {
    for code in ALL_CODES {
        let (_, profile) = profile_for(code);
        let stack = profile.function_stack().unwrap();
        assert!(
            stack.is_complete(),
            "{} stack {} must use S, N, T, F exactly once",
            code,
            stack
        );
    }
}

#[test]
fn dominant_and_auxiliary_use_opposite_attitudes() {
    for code in ALL_CODES {
        let (_, profile) = profile_for(code);
        let stack = profile.function_stack().unwrap();
        assert_eq!(
            stack.dominant.orientation.opposite(),
            stack.auxiliary.orientation,
            "{}",
            code
        );
        assert_ne!(stack.dominant.function, stack.auxiliary.function, "{}", code);
    }
}

#[test]
fn inferior_mirrors_dominant_through_the_dichotomy_table() {
    for code in ALL_CODES {
        let (_, profile) = profile_for(code);
        let stack = profile.function_stack().unwrap();
        assert_eq!(
            stack.inferior.function,
            stack.dominant.function.opposite(),
            "{}",
            code
        );
        assert_eq!(
            stack.inferior.orientation,
            stack.dominant.orientation.opposite(),
            "{}",
            code
        );
    }
}

#[test]
fn tertiary_carries_the_raw_attitude_letter() {
    for code in ALL_CODES {
        let (parsed, profile) = profile_for(code);
        let stack = profile.function_stack().unwrap();
        assert_eq!(stack.tertiary.orientation, parsed.attitude(), "{}", code);
        assert_eq!(
            stack.tertiary.function,
            stack.auxiliary.function.opposite(),
            "{}",
            code
        );
    }
}

#[test]
fn ratio_is_rational_iff_lifestyle_is_judging() {
    for code in ALL_CODES {
        let (parsed, profile) = profile_for(code);
        let expected = if parsed.lifestyle() == Letter::J {
            Ratio::Rational
        } else {
            Ratio::Irrational
        };
        assert_eq!(profile.ratio().unwrap(), expected, "{}", code);
        assert_eq!(
            profile.flag(attr::PREFERS_RATIONAL).unwrap(),
            parsed.is_judging_lifestyle(),
            "{}",
            code
        );
        assert_ne!(
            profile.flag(attr::PREFERS_RATIONAL).unwrap(),
            profile.flag(attr::PREFERS_IRRATIONAL).unwrap(),
            "{}",
            code
        );
    }
}

#[test]
fn predicates_match_positional_letters() {
    for code in ALL_CODES {
        let (parsed, profile) = profile_for(code);
        assert_eq!(profile.letter(attr::ATTITUDE).unwrap(), parsed.attitude());
        assert_eq!(
            profile.flag(attr::IS_INTROVERT).unwrap(),
            parsed.is_introvert()
        );
        assert_eq!(profile.flag(attr::IS_SENSING).unwrap(), parsed.is_sensing());
        assert_eq!(
            profile.flag(attr::IS_THINKING).unwrap(),
            parsed.is_thinking()
        );
        assert_eq!(
            profile.letter(attr::PREFERRED_ORIENTATION).unwrap(),
            parsed.lifestyle().opposite()
        );
    }
}

#[test]
fn scenario_intp() {
    let (parsed, profile) = profile_for("INTP");
    assert_eq!(parsed.attitude(), Letter::I);
    assert_eq!(parsed.perceiving_letter(), Letter::N);
    assert_eq!(parsed.judging_letter(), Letter::T);
    assert_eq!(parsed.lifestyle(), Letter::P);

    let stack = profile.function_stack().unwrap();
    assert_eq!(stack.dominant.function, Letter::N);
    assert!(stack.dominant.is_introverted());
    assert_eq!(stack.auxiliary.function, Letter::T);
    assert!(stack.auxiliary.is_extraverted());
    assert_eq!(profile.ratio().unwrap(), Ratio::Irrational);
    assert_eq!(profile.temperament().unwrap(), Temperament::Rational);
}

#[test]
fn scenario_enfp() {
    let (_, profile) = profile_for("ENFP");
    let stack = profile.function_stack().unwrap();
    assert_eq!(stack.dominant.to_string(), "Ne");
    assert_eq!(stack.auxiliary.to_string(), "Fi");
    assert_eq!(profile.ratio().unwrap(), Ratio::Irrational);
    assert_eq!(profile.temperament().unwrap(), Temperament::Idealist);
}

#[test]
fn scenario_estj() {
    let (_, profile) = profile_for("ESTJ");
    let stack = profile.function_stack().unwrap();
    assert_eq!(stack.dominant.to_string(), "Te");
    assert_eq!(stack.auxiliary.to_string(), "Si");
    assert_eq!(stack.inferior.to_string(), "Fi");
    assert_eq!(profile.ratio().unwrap(), Ratio::Rational);
    assert_eq!(profile.temperament().unwrap(), Temperament::Guardian);
}

#[test]
fn scenario_isfp() {
    let (_, profile) = profile_for("ISFP");
    assert_eq!(profile.temperament().unwrap(), Temperament::Artisan);
    assert_eq!(profile.ratio().unwrap(), Ratio::Irrational);
}

#[test]
fn temperaments_partition_the_sixteen_codes() {
    let mut counts = [0usize; 4];
    for code in ALL_CODES {
        let (_, profile) = profile_for(code);
        let i = Temperament::all()
            .iter()
            .position(|t| *t == profile.temperament().unwrap())
            .unwrap();
        counts[i] += 1;
    }
    assert_eq!(counts, [4, 4, 4, 4]);
}

#[test]
fn malformed_codes_are_rejected() {
    for input in ["INT", "INTX", "XNTP", "", "INTPJ", "1NTP", "EEEE", "JNTP"] {
        match input.parse::<TypeCode>() {
            Err(TypeDynamicsError::InvalidTypeCode { .. }) => {}
            other => panic!("{:?} should be rejected, got {:?}", input, other),
        }
    }
}
