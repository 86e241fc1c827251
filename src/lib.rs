pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;
pub mod weather_system;

pub use constants::*;
pub use control::exit_point::{
    calculate_drift_breakdown, calculate_exit_points, calculate_profiles, DriftBreakdown,
    ExitCalculationResult, ExitPoint,
};
pub use control::parameters::JumpParameters;
pub use errors::{CalculationError, ValidationError};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::canopy::calculate_canopy_drift;
pub use trajectory_system::freefall::calculate_freefall_drift;
pub use trajectory_system::DriftResult;

// Re-export commonly used items from weather_system
pub use weather_system::forecast::ForecastData;
pub use weather_system::profile::{interpolate_weather, WeatherProfile};

// Re-export commonly used utilities
pub use utils::geodesy::LatLon;
pub use utils::vector2d::{Vector2D, Wind};
