pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3

// Relative airspeed at or below this is singular for the induced-drag term
pub const MIN_AIRSPEED_THRESHOLD: f64 = 1e-6; // m/s

// The one-sided derivative stencil needs this many samples
pub const MIN_SAMPLES: usize = 4;

// Trailing samples invalidated by the one-sided derivative stencil
pub const TRIMMED_SAMPLES: usize = 3;

// Relative tolerance for the uniform-sampling check
pub const SAMPLING_TOLERANCE: f64 = 1e-9;
