//! Built-in observation catalog and mapping table.

use autodiag_types::HypothesisFamily::{self, *};
use autodiag_types::StrengthClass::{self, Medium, Strong, Weak};
use autodiag_types::ObservationId;

use crate::ids::*;
use crate::model::ObservationDomain as D;
use crate::model::{Catalog, CatalogDocument, FamilyMapping, ObservationSpec};

type ObservationRow = (&'static str, StrengthClass, D, &'static str);
type MappingRow = (&'static str, HypothesisFamily, &'static [HypothesisFamily]);

const OBSERVATIONS: &[ObservationRow] = &[
    // Safety
    (OIL_PRESSURE_WARNING, Strong, D::Safety, "Oil pressure warning light is on"),
    (BRAKE_PEDAL_TO_FLOOR, Strong, D::Safety, "Brake pedal sinks to the floor"),
    (FUEL_SMELL_STRONG, Strong, D::Safety, "Strong smell of raw fuel"),
    (SMOKE_FROM_HOOD, Strong, D::Safety, "Smoke coming from under the hood"),
    (TEMP_GAUGE_RED, Strong, D::Safety, "Temperature gauge is in the red"),
    // Starting
    (ENGINE_CRANKS_SLOWLY, Medium, D::Starting, "Engine cranks slowly"),
    (NO_CRANK_NO_CLICK, Medium, D::Starting, "Nothing happens when turning the key"),
    (SINGLE_CLICK_NO_CRANK, Medium, D::Starting, "A single click but no crank"),
    (RAPID_CLICKING, Strong, D::Starting, "Rapid clicking when starting"),
    (CRANKS_NO_START, Medium, D::Starting, "Engine cranks normally but won't start"),
    (JUMP_START_WORKS, Strong, D::Starting, "A jump start gets the car running"),
    (DASH_LIGHTS_DIM_ON_CRANK, Medium, D::Starting, "Dash lights dim while cranking"),
    (BATTERY_OVER_5_YEARS, Weak, D::Starting, "Battery is more than five years old"),
    (CORROSION_ON_TERMINALS, Weak, D::Starting, "Corrosion on the battery terminals"),
    (STARTS_AFTER_TAPPING_STARTER, Strong, D::Starting, "Starts after tapping the starter"),
    (GRINDING_ON_START, Medium, D::Starting, "Grinding noise while starting"),
    (FUEL_GAUGE_EMPTY, Strong, D::Starting, "Fuel gauge reads empty"),
    (STARTS_THEN_DIES, Medium, D::Starting, "Starts, then dies within seconds"),
    // Charging
    (BATTERY_LIGHT_ON, Strong, D::Charging, "Battery warning light on while driving"),
    (HEADLIGHTS_DIM_WHILE_DRIVING, Medium, D::Charging, "Headlights dim while driving"),
    (WHINING_NOISE_RPM, Medium, D::Charging, "Whining noise that rises with RPM"),
    (DIES_WHILE_DRIVING, Medium, D::Charging, "Engine dies while driving"),
    (BLOWN_FUSE_FOUND, Strong, D::Charging, "A blown fuse was found"),
    (ACCESSORIES_INTERMITTENT, Weak, D::Charging, "Accessories work intermittently"),
    // Engine
    (CHECK_ENGINE_LIGHT, Weak, D::Engine, "Check engine light is on"),
    (ROUGH_IDLE, Medium, D::Engine, "Rough or shaky idle"),
    (MISFIRE_FELT, Medium, D::Engine, "Engine stumbles or misfires"),
    (HESITATION_ACCELERATING, Medium, D::Engine, "Hesitation when accelerating"),
    (POOR_FUEL_ECONOMY, Weak, D::Engine, "Fuel economy has dropped"),
    (KNOCKING_ENGINE, Medium, D::Engine, "Knocking from the engine"),
    (OIL_LEVEL_LOW, Medium, D::Engine, "Oil level is low on the dipstick"),
    (BLUE_SMOKE_EXHAUST, Strong, D::Engine, "Blue smoke from the exhaust"),
    // Cooling
    (TEMP_GAUGE_HIGH, Medium, D::Cooling, "Temperature gauge above normal"),
    (COOLANT_LEAK_VISIBLE, Strong, D::Cooling, "Coolant puddle under the car"),
    (SWEET_SMELL, Medium, D::Cooling, "Sweet smell from the engine bay"),
    (HEATER_BLOWS_COLD, Weak, D::Cooling, "Heater blows cold air"),
    (WHITE_SMOKE_EXHAUST, Medium, D::Cooling, "Thick white smoke from the exhaust"),
    // Brakes
    (SQUEALING_WHEN_BRAKING, Medium, D::Brakes, "Squealing when braking"),
    (GRINDING_WHEN_BRAKING, Strong, D::Brakes, "Grinding when braking"),
    (PULLS_WHEN_BRAKING, Medium, D::Brakes, "Car pulls to one side when braking"),
    (BRAKE_PEDAL_VIBRATION, Medium, D::Brakes, "Brake pedal pulses or vibrates"),
    (BRAKE_WARNING_LIGHT, Medium, D::Brakes, "Brake warning light is on"),
    // Drivetrain
    (DELAYED_ENGAGEMENT, Medium, D::Drivetrain, "Delay when shifting into gear"),
    (SLIPPING_GEARS, Strong, D::Drivetrain, "Transmission slips out of gear"),
    (HARSH_SHIFTING, Medium, D::Drivetrain, "Harsh or jerky shifts"),
    (RED_FLUID_LEAK, Strong, D::Drivetrain, "Red fluid leaking under the car"),
    // Chassis
    (CLUNK_OVER_BUMPS, Medium, D::Chassis, "Clunk when driving over bumps"),
    (PULLS_TO_ONE_SIDE, Medium, D::Chassis, "Car drifts to one side"),
    (STEERING_WHEEL_SHAKE, Medium, D::Chassis, "Steering wheel shakes at speed"),
    (BOUNCY_RIDE, Weak, D::Chassis, "Ride feels bouncy"),
    // Exhaust
    (LOUD_EXHAUST, Strong, D::Exhaust, "Exhaust is much louder than usual"),
    (ROTTEN_EGG_SMELL, Medium, D::Exhaust, "Rotten egg smell"),
    (RATTLE_UNDER_CAR, Weak, D::Exhaust, "Rattle from under the car"),
];

const MAPPINGS: &[MappingRow] = &[
    // Safety
    (OIL_PRESSURE_WARNING, EngineMechanical, &[]),
    (BRAKE_PEDAL_TO_FLOOR, Brakes, &[]),
    (FUEL_SMELL_STRONG, Fuel, &[]),
    (SMOKE_FROM_HOOD, Cooling, &[Electrical]),
    (TEMP_GAUGE_RED, Cooling, &[]),
    // Starting
    (ENGINE_CRANKS_SLOWLY, Battery, &[Starter]),
    (NO_CRANK_NO_CLICK, Battery, &[Starter, Electrical]),
    (SINGLE_CLICK_NO_CRANK, Starter, &[Battery]),
    (RAPID_CLICKING, Battery, &[Starter]),
    (CRANKS_NO_START, Fuel, &[Ignition]),
    (JUMP_START_WORKS, Battery, &[Alternator]),
    (DASH_LIGHTS_DIM_ON_CRANK, Battery, &[Alternator]),
    (BATTERY_OVER_5_YEARS, Battery, &[]),
    (CORROSION_ON_TERMINALS, Battery, &[Electrical]),
    (STARTS_AFTER_TAPPING_STARTER, Starter, &[]),
    (GRINDING_ON_START, Starter, &[Transmission]),
    (FUEL_GAUGE_EMPTY, Fuel, &[]),
    (STARTS_THEN_DIES, Fuel, &[Ignition]),
    // Charging
    (BATTERY_LIGHT_ON, Alternator, &[Battery]),
    (HEADLIGHTS_DIM_WHILE_DRIVING, Alternator, &[Battery, Electrical]),
    (WHINING_NOISE_RPM, Alternator, &[]),
    (DIES_WHILE_DRIVING, Alternator, &[Fuel, Ignition]),
    (BLOWN_FUSE_FOUND, Electrical, &[]),
    (ACCESSORIES_INTERMITTENT, Electrical, &[Alternator]),
    // Engine
    (CHECK_ENGINE_LIGHT, Ignition, &[Fuel, Exhaust]),
    (ROUGH_IDLE, Ignition, &[Fuel]),
    (MISFIRE_FELT, Ignition, &[Fuel]),
    (HESITATION_ACCELERATING, Fuel, &[Ignition, Transmission]),
    (POOR_FUEL_ECONOMY, Fuel, &[Ignition, Exhaust]),
    (KNOCKING_ENGINE, EngineMechanical, &[Ignition]),
    (OIL_LEVEL_LOW, EngineMechanical, &[]),
    (BLUE_SMOKE_EXHAUST, EngineMechanical, &[Exhaust]),
    // Cooling
    (TEMP_GAUGE_HIGH, Cooling, &[]),
    (COOLANT_LEAK_VISIBLE, Cooling, &[]),
    (SWEET_SMELL, Cooling, &[]),
    (HEATER_BLOWS_COLD, Cooling, &[]),
    (WHITE_SMOKE_EXHAUST, Cooling, &[EngineMechanical]),
    // Brakes
    (SQUEALING_WHEN_BRAKING, Brakes, &[]),
    (GRINDING_WHEN_BRAKING, Brakes, &[]),
    (PULLS_WHEN_BRAKING, Brakes, &[Suspension]),
    (BRAKE_PEDAL_VIBRATION, Brakes, &[Suspension]),
    (BRAKE_WARNING_LIGHT, Brakes, &[]),
    // Drivetrain
    (DELAYED_ENGAGEMENT, Transmission, &[]),
    (SLIPPING_GEARS, Transmission, &[]),
    (HARSH_SHIFTING, Transmission, &[]),
    (RED_FLUID_LEAK, Transmission, &[Suspension]),
    // Chassis
    (CLUNK_OVER_BUMPS, Suspension, &[]),
    (PULLS_TO_ONE_SIDE, Suspension, &[Brakes]),
    (STEERING_WHEEL_SHAKE, Suspension, &[Brakes]),
    (BOUNCY_RIDE, Suspension, &[]),
    // Exhaust
    (LOUD_EXHAUST, Exhaust, &[]),
    (ROTTEN_EGG_SMELL, Exhaust, &[Fuel]),
    (RATTLE_UNDER_CAR, Exhaust, &[Suspension]),
];

/// The catalog shipped with the crate.
pub fn builtin_document() -> CatalogDocument {
    let observations = OBSERVATIONS
        .iter()
        .map(|(id, strength, domain, label)| ObservationSpec {
            id: ObservationId::new(*id),
            default_strength: *strength,
            domain: *domain,
            safety_critical: SAFETY_TRIGGERS.contains(id),
            label: (*label).to_string(),
        })
        .collect();
    let mappings = MAPPINGS
        .iter()
        .map(|(id, primary, secondary)| FamilyMapping {
            observation: ObservationId::new(*id),
            primary: *primary,
            secondary: secondary.to_vec(),
        })
        .collect();
    CatalogDocument {
        observations,
        mappings,
    }
}

impl Catalog {
    /// The built-in catalog. Its validity is covered by tests.
    pub fn builtin() -> Self {
        Catalog::assemble(builtin_document())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
