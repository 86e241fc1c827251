// Geodesy
pub const EARTH_RADIUS: f64 = 6_371_000.0; // meters (mean spherical radius)

// Drift integration
pub const FREEFALL_STEP_SIZE: f64 = 100.0; // m of altitude per Simpson interval
pub const CANOPY_STEP_SIZE: f64 = 50.0; // m of altitude per accumulation step

// Simpson's rule weights
pub const SIMPSON_END_WEIGHT: f64 = 1.0;
pub const SIMPSON_ODD_WEIGHT: f64 = 4.0;
pub const SIMPSON_EVEN_WEIGHT: f64 = 2.0;
pub const SIMPSON_NORMALIZATION: f64 = 3.0;

// Safety radius
pub const SAFETY_MARGIN: f64 = 0.7; // fraction of theoretical max canopy distance

// Angles
pub const FULL_CIRCLE_DEG: f64 = 360.0;
pub const HALF_CIRCLE_DEG: f64 = 180.0;
