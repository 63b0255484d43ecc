//! The builtin rule set.
//!
//! One named rule per derived attribute: the four positional letters, the
//! eight preference predicates, the orientation markers, the four stack
//! entries, the rational/irrational classification, and the temperament.
//! Dependencies are declared explicitly so the resolver can order and
//! memoize them; each evaluation function stays a thin shim over the pure
//! calculators in [`dynamics`](crate::dynamics) and
//! [`types`](crate::types).

use crate::dynamics;
use crate::error::{Result, TypeDynamicsError};
use crate::types::{Letter, Ratio, Temperament};

use super::attr;
use super::{AttributeValue, Rule, RuleContext};

/// All builtin rules in declaration order.
pub(super) fn builtin_rules() -> Vec<Rule> {
    vec![
        // positional letters
        Rule { name: attr::ATTITUDE, deps: &[], eval: attitude },
        Rule { name: attr::PERCEIVING_LETTER, deps: &[], eval: perceiving_letter },
        Rule { name: attr::JUDGING_LETTER, deps: &[], eval: judging_letter },
        Rule { name: attr::LIFESTYLE, deps: &[], eval: lifestyle },
        // preference predicates
        Rule { name: attr::IS_EXTRAVERT, deps: &[attr::ATTITUDE], eval: is_extravert },
        Rule { name: attr::IS_INTROVERT, deps: &[attr::ATTITUDE], eval: is_introvert },
        Rule { name: attr::IS_SENSING, deps: &[attr::PERCEIVING_LETTER], eval: is_sensing },
        Rule { name: attr::IS_INTUITIVE, deps: &[attr::PERCEIVING_LETTER], eval: is_intuitive },
        Rule { name: attr::IS_THINKING, deps: &[attr::JUDGING_LETTER], eval: is_thinking },
        Rule { name: attr::IS_FEELING, deps: &[attr::JUDGING_LETTER], eval: is_feeling },
        Rule {
            name: attr::IS_JUDGING_LIFESTYLE,
            deps: &[attr::LIFESTYLE],
            eval: is_judging_lifestyle,
        },
        Rule {
            name: attr::IS_PERCEIVING_LIFESTYLE,
            deps: &[attr::LIFESTYLE],
            eval: is_perceiving_lifestyle,
        },
        // orientation markers
        Rule {
            name: attr::PREFERRED_ORIENTATION,
            deps: &[attr::LIFESTYLE],
            eval: preferred_orientation,
        },
        Rule {
            name: attr::EXTRAVERTED_FUNCTION,
            deps: &[attr::LIFESTYLE, attr::PERCEIVING_LETTER, attr::JUDGING_LETTER],
            eval: extraverted_function,
        },
        Rule {
            name: attr::INTROVERTED_FUNCTION,
            deps: &[attr::LIFESTYLE, attr::PERCEIVING_LETTER, attr::JUDGING_LETTER],
            eval: introverted_function,
        },
        // stack entries
        Rule {
            name: attr::DOMINANT,
            deps: &[
                attr::ATTITUDE,
                attr::LIFESTYLE,
                attr::PERCEIVING_LETTER,
                attr::JUDGING_LETTER,
                attr::IS_EXTRAVERT,
                attr::IS_INTROVERT,
                attr::IS_JUDGING_LIFESTYLE,
                attr::IS_PERCEIVING_LIFESTYLE,
            ],
            eval: dominant,
        },
        Rule {
            name: attr::AUXILIARY,
            deps: &[attr::DOMINANT, attr::PERCEIVING_LETTER, attr::JUDGING_LETTER],
            eval: auxiliary,
        },
        Rule {
            name: attr::TERTIARY,
            deps: &[attr::AUXILIARY, attr::ATTITUDE],
            eval: tertiary,
        },
        Rule { name: attr::INFERIOR, deps: &[attr::DOMINANT], eval: inferior },
        // rational/irrational classification
        Rule {
            name: attr::PREFERS_RATIONAL,
            deps: &[attr::LIFESTYLE],
            eval: prefers_rational,
        },
        Rule {
            name: attr::PREFERS_IRRATIONAL,
            deps: &[attr::PREFERS_RATIONAL],
            eval: prefers_irrational,
        },
        Rule { name: attr::RATIO, deps: &[attr::LIFESTYLE], eval: ratio },
        // temperament
        Rule {
            name: attr::TEMPERAMENT,
            deps: &[attr::PERCEIVING_LETTER, attr::JUDGING_LETTER, attr::LIFESTYLE],
            eval: temperament,
        },
    ]
}

fn attitude(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    Ok(AttributeValue::Letter(ctx.code().attitude()))
}

fn perceiving_letter(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    Ok(AttributeValue::Letter(ctx.code().perceiving_letter()))
}

fn judging_letter(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    Ok(AttributeValue::Letter(ctx.code().judging_letter()))
}

fn lifestyle(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    Ok(AttributeValue::Letter(ctx.code().lifestyle()))
}

fn is_extravert(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    Ok(AttributeValue::Flag(ctx.letter(attr::ATTITUDE)? == Letter::E))
}

fn is_introvert(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    Ok(AttributeValue::Flag(ctx.letter(attr::ATTITUDE)? == Letter::I))
}

fn is_sensing(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    Ok(AttributeValue::Flag(
        ctx.letter(attr::PERCEIVING_LETTER)? == Letter::S,
    ))
}

fn is_intuitive(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    Ok(AttributeValue::Flag(
        ctx.letter(attr::PERCEIVING_LETTER)? == Letter::N,
    ))
}

fn is_thinking(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    Ok(AttributeValue::Flag(
        ctx.letter(attr::JUDGING_LETTER)? == Letter::T,
    ))
}

fn is_feeling(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    Ok(AttributeValue::Flag(
        ctx.letter(attr::JUDGING_LETTER)? == Letter::F,
    ))
}

fn is_judging_lifestyle(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    Ok(AttributeValue::Flag(ctx.letter(attr::LIFESTYLE)? == Letter::J))
}

fn is_perceiving_lifestyle(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    Ok(AttributeValue::Flag(ctx.letter(attr::LIFESTYLE)? == Letter::P))
}

fn preferred_orientation(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    Ok(AttributeValue::Letter(
        ctx.letter(attr::LIFESTYLE)?.opposite(),
    ))
}

fn extraverted_function(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    let letter = dynamics::extraverted_function(
        ctx.letter(attr::LIFESTYLE)?,
        ctx.letter(attr::PERCEIVING_LETTER)?,
        ctx.letter(attr::JUDGING_LETTER)?,
    )?;
    Ok(AttributeValue::Letter(letter))
}

fn introverted_function(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    let letter = dynamics::introverted_function(
        ctx.letter(attr::LIFESTYLE)?,
        ctx.letter(attr::PERCEIVING_LETTER)?,
        ctx.letter(attr::JUDGING_LETTER)?,
    )?;
    Ok(AttributeValue::Letter(letter))
}

/// Dominant entry. Also the place where the mutual exclusivity of the
/// attitude and lifestyle predicates is asserted: a code claiming both
/// sides of a dichotomy would corrupt the whole stack, so it fails the
/// pass instead of producing a partial result.
fn dominant(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    if ctx.flag(attr::IS_EXTRAVERT)? == ctx.flag(attr::IS_INTROVERT)? {
        return Err(TypeDynamicsError::Derivation(
            "attitude predicates must be mutually exclusive".to_string(),
        ));
    }
    if ctx.flag(attr::IS_JUDGING_LIFESTYLE)? == ctx.flag(attr::IS_PERCEIVING_LIFESTYLE)? {
        return Err(TypeDynamicsError::Derivation(
            "lifestyle predicates must be mutually exclusive".to_string(),
        ));
    }
    let pair = dynamics::dominant(
        ctx.letter(attr::ATTITUDE)?,
        ctx.letter(attr::LIFESTYLE)?,
        ctx.letter(attr::PERCEIVING_LETTER)?,
        ctx.letter(attr::JUDGING_LETTER)?,
    )?;
    Ok(AttributeValue::Function(pair))
}

fn auxiliary(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    let pair = dynamics::auxiliary(
        ctx.function(attr::DOMINANT)?,
        ctx.letter(attr::PERCEIVING_LETTER)?,
        ctx.letter(attr::JUDGING_LETTER)?,
    )?;
    Ok(AttributeValue::Function(pair))
}

fn tertiary(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    let pair = dynamics::tertiary(
        ctx.function(attr::AUXILIARY)?,
        ctx.letter(attr::ATTITUDE)?,
    )?;
    Ok(AttributeValue::Function(pair))
}

fn inferior(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    let pair = dynamics::inferior(ctx.function(attr::DOMINANT)?)?;
    Ok(AttributeValue::Function(pair))
}

fn prefers_rational(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    Ok(AttributeValue::Flag(ctx.letter(attr::LIFESTYLE)? == Letter::J))
}

fn prefers_irrational(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    Ok(AttributeValue::Flag(!ctx.flag(attr::PREFERS_RATIONAL)?))
}

fn ratio(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    Ok(AttributeValue::Ratio(Ratio::from_lifestyle(
        ctx.letter(attr::LIFESTYLE)?,
    )?))
}

fn temperament(ctx: &RuleContext<'_>) -> Result<AttributeValue> {
    Ok(AttributeValue::Temperament(Temperament::classify(
        ctx.letter(attr::PERCEIVING_LETTER)?,
        ctx.letter(attr::JUDGING_LETTER)?,
        ctx.letter(attr::LIFESTYLE)?,
    )?))
}
