//! Tests for FunctionPair and FunctionStack.

use super::function::{FunctionPair, FunctionStack};
use super::letter::Letter;

fn pair(orientation: Letter, function: Letter) -> FunctionPair {
    FunctionPair::new(orientation, function).unwrap()
}

#[test]
fn test_pair_display() {
    assert_eq!(pair(Letter::E, Letter::T).to_string(), "Te");
    assert_eq!(pair(Letter::I, Letter::N).to_string(), "Ni");
    assert_eq!(pair(Letter::I, Letter::F).to_string(), "Fi");
}

#[test]
fn test_pair_orientation_predicates() {
    assert!(pair(Letter::E, Letter::S).is_extraverted());
    assert!(!pair(Letter::E, Letter::S).is_introverted());
    assert!(pair(Letter::I, Letter::T).is_introverted());
}

#[test]
fn test_pair_rejects_bad_slots() {
    // function letter in the orientation slot
    assert!(FunctionPair::new(Letter::T, Letter::N).is_err());
    // lifestyle letter in the function slot
    assert!(FunctionPair::new(Letter::E, Letter::J).is_err());
    // attitude letter in the function slot
    assert!(FunctionPair::new(Letter::I, Letter::E).is_err());
}

#[test]
fn test_stack_completeness() {
    // the INTP stack: Ni Te Fi Se (tertiary orientation = raw attitude I)
    let stack = FunctionStack {
        dominant: pair(Letter::I, Letter::N),
        auxiliary: pair(Letter::E, Letter::T),
        tertiary: pair(Letter::I, Letter::F),
        inferior: pair(Letter::E, Letter::S),
    };
    assert!(stack.is_complete());
    assert_eq!(
        stack.function_letters(),
        [Letter::N, Letter::T, Letter::F, Letter::S]
    );
    assert_eq!(stack.to_string(), "Ni Te Fi Se");
}

#[test]
fn test_stack_detects_duplicate_function() {
    let stack = FunctionStack {
        dominant: pair(Letter::I, Letter::N),
        auxiliary: pair(Letter::E, Letter::T),
        tertiary: pair(Letter::I, Letter::T),
        inferior: pair(Letter::E, Letter::S),
    };
    assert!(!stack.is_complete());
}

#[test]
fn test_stack_entries_order() {
    let stack = FunctionStack {
        dominant: pair(Letter::E, Letter::T),
        auxiliary: pair(Letter::I, Letter::S),
        tertiary: pair(Letter::E, Letter::N),
        inferior: pair(Letter::I, Letter::F),
    };
    let entries = stack.entries();
    assert_eq!(entries[0], stack.dominant);
    assert_eq!(entries[3], stack.inferior);
}
