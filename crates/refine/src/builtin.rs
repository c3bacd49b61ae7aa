//! Built-in refinement rules for every family.

use std::collections::BTreeMap;

use autodiag_catalog::ids::*;
use autodiag_types::HypothesisFamily::{self, *};

use crate::table::{RefinementRule, RefinementTable};

type RuleRow = (&'static str, &'static [&'static str], &'static [&'static str]);

const BATTERY: &[RuleRow] = &[
    ("BATTERY_TERMINAL_CORROSION", &[CORROSION_ON_TERMINALS], &[]),
    ("BATTERY_END_OF_LIFE", &[BATTERY_OVER_5_YEARS, ENGINE_CRANKS_SLOWLY], &[]),
    ("BATTERY_DISCHARGED", &[JUMP_START_WORKS], &[BATTERY_OVER_5_YEARS]),
];

const ALTERNATOR: &[RuleRow] = &[
    ("ALTERNATOR_BEARING", &[WHINING_NOISE_RPM, BATTERY_LIGHT_ON], &[]),
    ("VOLTAGE_REGULATOR", &[HEADLIGHTS_DIM_WHILE_DRIVING, BATTERY_LIGHT_ON], &[]),
    ("SERPENTINE_BELT", &[WHINING_NOISE_RPM], &[BATTERY_LIGHT_ON]),
];

const STARTER: &[RuleRow] = &[
    ("STARTER_MOTOR_DEAD_SPOT", &[STARTS_AFTER_TAPPING_STARTER], &[]),
    ("STARTER_SOLENOID", &[SINGLE_CLICK_NO_CRANK], &[STARTS_AFTER_TAPPING_STARTER]),
    ("STARTER_DRIVE_GEAR", &[GRINDING_ON_START], &[]),
];

const FUEL: &[RuleRow] = &[
    ("OUT_OF_FUEL", &[FUEL_GAUGE_EMPTY], &[]),
    ("FUEL_PUMP", &[CRANKS_NO_START], &[FUEL_GAUGE_EMPTY]),
    ("FUEL_FILTER", &[HESITATION_ACCELERATING, POOR_FUEL_ECONOMY], &[]),
];

const IGNITION: &[RuleRow] = &[
    ("IGNITION_COIL", &[MISFIRE_FELT, CHECK_ENGINE_LIGHT], &[]),
    ("SPARK_PLUGS", &[MISFIRE_FELT, ROUGH_IDLE], &[]),
];

const COOLING: &[RuleRow] = &[
    ("HEAD_GASKET", &[WHITE_SMOKE_EXHAUST, SWEET_SMELL], &[]),
    ("WATER_PUMP", &[COOLANT_LEAK_VISIBLE, TEMP_GAUGE_HIGH], &[]),
    ("RADIATOR_LEAK", &[COOLANT_LEAK_VISIBLE], &[]),
    ("THERMOSTAT", &[TEMP_GAUGE_HIGH], &[COOLANT_LEAK_VISIBLE]),
];

const BRAKES: &[RuleRow] = &[
    ("PADS_WORN_TO_METAL", &[GRINDING_WHEN_BRAKING], &[]),
    ("WARPED_ROTORS", &[BRAKE_PEDAL_VIBRATION], &[]),
    ("STUCK_CALIPER", &[PULLS_WHEN_BRAKING], &[]),
    ("PAD_WEAR_INDICATOR", &[SQUEALING_WHEN_BRAKING], &[GRINDING_WHEN_BRAKING]),
];

const TRANSMISSION: &[RuleRow] = &[
    ("LOW_TRANSMISSION_FLUID", &[RED_FLUID_LEAK, SLIPPING_GEARS], &[]),
    ("SHIFT_SOLENOID", &[HARSH_SHIFTING, DELAYED_ENGAGEMENT], &[]),
];

const SUSPENSION: &[RuleRow] = &[
    ("WHEEL_ALIGNMENT", &[PULLS_TO_ONE_SIDE], &[PULLS_WHEN_BRAKING]),
    ("WHEEL_BALANCE", &[STEERING_WHEEL_SHAKE], &[]),
    ("SWAY_BAR_LINK", &[CLUNK_OVER_BUMPS], &[STEERING_WHEEL_SHAKE]),
    ("WORN_STRUTS", &[BOUNCY_RIDE], &[]),
];

const EXHAUST: &[RuleRow] = &[
    ("CATALYTIC_CONVERTER", &[ROTTEN_EGG_SMELL], &[]),
    ("MUFFLER_LEAK", &[LOUD_EXHAUST], &[]),
    ("HEAT_SHIELD", &[RATTLE_UNDER_CAR], &[]),
];

const ELECTRICAL: &[RuleRow] = &[
    ("GROUND_STRAP", &[ACCESSORIES_INTERMITTENT, CORROSION_ON_TERMINALS], &[]),
    ("BLOWN_FUSE", &[BLOWN_FUSE_FOUND], &[]),
];

const ENGINE_MECHANICAL: &[RuleRow] = &[
    ("ROD_BEARING", &[KNOCKING_ENGINE, OIL_LEVEL_LOW], &[]),
    ("VALVE_SEALS_OR_RINGS", &[BLUE_SMOKE_EXHAUST], &[]),
];

fn rows_for(family: HypothesisFamily) -> &'static [RuleRow] {
    match family {
        Battery => BATTERY,
        Alternator => ALTERNATOR,
        Starter => STARTER,
        Fuel => FUEL,
        Ignition => IGNITION,
        Cooling => COOLING,
        Brakes => BRAKES,
        Transmission => TRANSMISSION,
        Suspension => SUSPENSION,
        Exhaust => EXHAUST,
        Electrical => ELECTRICAL,
        EngineMechanical => ENGINE_MECHANICAL,
    }
}

/// The shipped rules, keyed by family.
pub fn builtin_rules() -> BTreeMap<HypothesisFamily, Vec<RefinementRule>> {
    HypothesisFamily::ALL
        .iter()
        .map(|family| {
            let rules = rows_for(*family)
                .iter()
                .map(|(component, required, excluded)| {
                    RefinementRule::new(component, required, excluded)
                })
                .collect();
            (*family, rules)
        })
        .collect()
}

impl RefinementTable {
    /// Built-in table. Its validity is covered by tests.
    pub fn builtin() -> Self {
        Self::from_trusted(builtin_rules())
    }
}
