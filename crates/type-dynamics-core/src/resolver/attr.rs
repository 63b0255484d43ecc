//! Attribute names produced by the builtin rule graph.
//!
//! Rules address each other by these names, and callers use them to read
//! the resolved profile. Keeping them as constants avoids stringly-typed
//! call sites.

/// Attitude letter at code position 0 (E or I).
pub const ATTITUDE: &str = "attitude";
/// Information-intake letter at position 1 (S or N).
pub const PERCEIVING_LETTER: &str = "perceiving_letter";
/// Decision-basis letter at position 2 (T or F).
pub const JUDGING_LETTER: &str = "judging_letter";
/// Lifestyle letter at position 3 (J or P).
pub const LIFESTYLE: &str = "lifestyle";

/// True iff the attitude letter is E.
pub const IS_EXTRAVERT: &str = "is_extravert";
/// True iff the attitude letter is I.
pub const IS_INTROVERT: &str = "is_introvert";
/// True iff the information-intake letter is S.
pub const IS_SENSING: &str = "is_sensing";
/// True iff the information-intake letter is N.
pub const IS_INTUITIVE: &str = "is_intuitive";
/// True iff the decision-basis letter is T.
pub const IS_THINKING: &str = "is_thinking";
/// True iff the decision-basis letter is F.
pub const IS_FEELING: &str = "is_feeling";
/// True iff the lifestyle letter is J.
pub const IS_JUDGING_LIFESTYLE: &str = "is_judging_lifestyle";
/// True iff the lifestyle letter is P.
pub const IS_PERCEIVING_LIFESTYLE: &str = "is_perceiving_lifestyle";

/// The lifestyle letter toggled once through the dichotomy table.
pub const PREFERRED_ORIENTATION: &str = "preferred_orientation";
/// The middle-function letter expressed toward the outer world.
pub const EXTRAVERTED_FUNCTION: &str = "extraverted_function";
/// The middle-function letter expressed toward the inner world.
pub const INTROVERTED_FUNCTION: &str = "introverted_function";

/// Dominant stack entry (oriented function).
pub const DOMINANT: &str = "dominant";
/// Auxiliary stack entry (oriented function).
pub const AUXILIARY: &str = "auxiliary";
/// Tertiary stack entry (orientation slot holds the raw attitude letter).
pub const TERTIARY: &str = "tertiary";
/// Inferior stack entry (oriented function).
pub const INFERIOR: &str = "inferior";

/// True iff the lifestyle letter is J (judging-led outer orientation).
pub const PREFERS_RATIONAL: &str = "prefers_rational";
/// Negation of [`PREFERS_RATIONAL`].
pub const PREFERS_IRRATIONAL: &str = "prefers_irrational";
/// Joint rational/irrational label.
pub const RATIO: &str = "ratio";

/// Temperament label.
pub const TEMPERAMENT: &str = "temperament";
