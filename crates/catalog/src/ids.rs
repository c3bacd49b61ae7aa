//! Identifiers of the built-in observations.

// ── Safety triggers ─────────────────────────────────────────────────────

pub const OIL_PRESSURE_WARNING: &str = "OIL_PRESSURE_WARNING";
pub const BRAKE_PEDAL_TO_FLOOR: &str = "BRAKE_PEDAL_TO_FLOOR";
pub const FUEL_SMELL_STRONG: &str = "FUEL_SMELL_STRONG";
pub const SMOKE_FROM_HOOD: &str = "SMOKE_FROM_HOOD";
pub const TEMP_GAUGE_RED: &str = "TEMP_GAUGE_RED";

/// The five fixed safety-critical symptoms. A YES on any of them stops the
/// diagnosis.
pub const SAFETY_TRIGGERS: [&str; 5] = [
    OIL_PRESSURE_WARNING,
    BRAKE_PEDAL_TO_FLOOR,
    FUEL_SMELL_STRONG,
    SMOKE_FROM_HOOD,
    TEMP_GAUGE_RED,
];

// ── Starting ────────────────────────────────────────────────────────────

pub const ENGINE_CRANKS_SLOWLY: &str = "ENGINE_CRANKS_SLOWLY";
pub const NO_CRANK_NO_CLICK: &str = "NO_CRANK_NO_CLICK";
pub const SINGLE_CLICK_NO_CRANK: &str = "SINGLE_CLICK_NO_CRANK";
pub const RAPID_CLICKING: &str = "RAPID_CLICKING";
pub const CRANKS_NO_START: &str = "CRANKS_NO_START";
pub const JUMP_START_WORKS: &str = "JUMP_START_WORKS";
pub const DASH_LIGHTS_DIM_ON_CRANK: &str = "DASH_LIGHTS_DIM_ON_CRANK";
pub const BATTERY_OVER_5_YEARS: &str = "BATTERY_OVER_5_YEARS";
pub const CORROSION_ON_TERMINALS: &str = "CORROSION_ON_TERMINALS";
pub const STARTS_AFTER_TAPPING_STARTER: &str = "STARTS_AFTER_TAPPING_STARTER";
pub const GRINDING_ON_START: &str = "GRINDING_ON_START";
pub const FUEL_GAUGE_EMPTY: &str = "FUEL_GAUGE_EMPTY";
pub const STARTS_THEN_DIES: &str = "STARTS_THEN_DIES";

// ── Charging ────────────────────────────────────────────────────────────

pub const BATTERY_LIGHT_ON: &str = "BATTERY_LIGHT_ON";
pub const HEADLIGHTS_DIM_WHILE_DRIVING: &str = "HEADLIGHTS_DIM_WHILE_DRIVING";
pub const WHINING_NOISE_RPM: &str = "WHINING_NOISE_RPM";
pub const DIES_WHILE_DRIVING: &str = "DIES_WHILE_DRIVING";
pub const BLOWN_FUSE_FOUND: &str = "BLOWN_FUSE_FOUND";
pub const ACCESSORIES_INTERMITTENT: &str = "ACCESSORIES_INTERMITTENT";

// ── Engine ──────────────────────────────────────────────────────────────

pub const CHECK_ENGINE_LIGHT: &str = "CHECK_ENGINE_LIGHT";
pub const ROUGH_IDLE: &str = "ROUGH_IDLE";
pub const MISFIRE_FELT: &str = "MISFIRE_FELT";
pub const HESITATION_ACCELERATING: &str = "HESITATION_ACCELERATING";
pub const POOR_FUEL_ECONOMY: &str = "POOR_FUEL_ECONOMY";
pub const KNOCKING_ENGINE: &str = "KNOCKING_ENGINE";
pub const OIL_LEVEL_LOW: &str = "OIL_LEVEL_LOW";
pub const BLUE_SMOKE_EXHAUST: &str = "BLUE_SMOKE_EXHAUST";

// ── Cooling ─────────────────────────────────────────────────────────────

pub const TEMP_GAUGE_HIGH: &str = "TEMP_GAUGE_HIGH";
pub const COOLANT_LEAK_VISIBLE: &str = "COOLANT_LEAK_VISIBLE";
pub const SWEET_SMELL: &str = "SWEET_SMELL";
pub const HEATER_BLOWS_COLD: &str = "HEATER_BLOWS_COLD";
pub const WHITE_SMOKE_EXHAUST: &str = "WHITE_SMOKE_EXHAUST";

// ── Brakes ──────────────────────────────────────────────────────────────

pub const SQUEALING_WHEN_BRAKING: &str = "SQUEALING_WHEN_BRAKING";
pub const GRINDING_WHEN_BRAKING: &str = "GRINDING_WHEN_BRAKING";
pub const PULLS_WHEN_BRAKING: &str = "PULLS_WHEN_BRAKING";
pub const BRAKE_PEDAL_VIBRATION: &str = "BRAKE_PEDAL_VIBRATION";
pub const BRAKE_WARNING_LIGHT: &str = "BRAKE_WARNING_LIGHT";

// ── Drivetrain ──────────────────────────────────────────────────────────

pub const DELAYED_ENGAGEMENT: &str = "DELAYED_ENGAGEMENT";
pub const SLIPPING_GEARS: &str = "SLIPPING_GEARS";
pub const HARSH_SHIFTING: &str = "HARSH_SHIFTING";
pub const RED_FLUID_LEAK: &str = "RED_FLUID_LEAK";

// ── Chassis ─────────────────────────────────────────────────────────────

pub const CLUNK_OVER_BUMPS: &str = "CLUNK_OVER_BUMPS";
pub const PULLS_TO_ONE_SIDE: &str = "PULLS_TO_ONE_SIDE";
pub const STEERING_WHEEL_SHAKE: &str = "STEERING_WHEEL_SHAKE";
pub const BOUNCY_RIDE: &str = "BOUNCY_RIDE";

// ── Exhaust ─────────────────────────────────────────────────────────────

pub const LOUD_EXHAUST: &str = "LOUD_EXHAUST";
pub const ROTTEN_EGG_SMELL: &str = "ROTTEN_EGG_SMELL";
pub const RATTLE_UNDER_CAR: &str = "RATTLE_UNDER_CAR";
