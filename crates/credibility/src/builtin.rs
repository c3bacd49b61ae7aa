//! Built-in rule sets.

use autodiag_catalog::ids::{
    DASH_LIGHTS_DIM_ON_CRANK, ENGINE_CRANKS_SLOWLY, GRINDING_ON_START, JUMP_START_WORKS,
    SINGLE_CLICK_NO_CRANK, STARTS_AFTER_TAPPING_STARTER,
};
use autodiag_types::HypothesisFamily;

use crate::rule::{Check, Condition, CredibilityRule, CredibilityRuleSet, Expectation};

/// Counteracts BATTERY over-selection on no-start problems.
///
/// The three "missing support" rules together stay under the
/// redistribution threshold; only a starter-pointing guardrail moves score
/// to STARTER.
pub fn battery_rule_set() -> CredibilityRuleSet {
    CredibilityRuleSet {
        target: HypothesisFamily::Battery,
        alternate: HypothesisFamily::Starter,
        rules: vec![
            CredibilityRule::new(
                "jump_start_not_confirmed",
                Condition::NoOrAbsent(JUMP_START_WORKS.into()),
                0.15,
            ),
            CredibilityRule::new(
                "dash_lights_hold_on_crank",
                Condition::NoOrAbsent(DASH_LIGHTS_DIM_ON_CRANK.into()),
                0.1,
            ),
            CredibilityRule::new(
                "crank_speed_normal",
                Condition::NoOrAbsent(ENGINE_CRANKS_SLOWLY.into()),
                0.1,
            ),
            CredibilityRule::new(
                "click_then_tap_starts",
                Condition::AllHold(vec![
                    Check::new(SINGLE_CLICK_NO_CRANK, Expectation::Yes),
                    Check::new(STARTS_AFTER_TAPPING_STARTER, Expectation::Yes),
                ]),
                0.8,
            ),
            CredibilityRule::new(
                "click_and_jump_fails",
                Condition::AllHold(vec![
                    Check::new(SINGLE_CLICK_NO_CRANK, Expectation::Yes),
                    Check::new(JUMP_START_WORKS, Expectation::No),
                ]),
                0.6,
            ),
            CredibilityRule::new(
                "grinding_on_start",
                Condition::Yes(GRINDING_ON_START.into()),
                0.3,
            ),
        ],
    }
}
