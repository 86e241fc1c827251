use thiserror::Error;

/// Physically inconsistent or missing jump parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Jump altitude must be above the canopy opening altitude")]
    JumpAltitudeNotAboveOpening,

    #[error("Opening altitude must be greater than zero")]
    NonPositiveOpeningAltitude,

    #[error("Setup altitude cannot be negative")]
    NegativeSetupAltitude,

    #[error("Setup altitude must be below the canopy opening altitude")]
    SetupAltitudeNotBelowOpening,

    #[error("Aircraft speed must be greater than zero")]
    NonPositiveAircraftSpeed,

    #[error("Freefall speed must be greater than zero")]
    NonPositiveFreefallSpeed,

    #[error("Canopy descent rate must be greater than zero")]
    NonPositiveDescentRate,

    #[error("Glide ratio cannot be negative")]
    NegativeGlideRatio,

    #[error("Number of groups must be at least one")]
    NoGroups,

    #[error("Time between groups cannot be negative")]
    NegativeTimeBetweenGroups,

    #[error("Landing zone coordinates are missing")]
    MissingLandingZone,

    #[error("Landing zone coordinates cannot be zero")]
    ZeroLandingZone,

    #[error("Landing zone coordinates are out of range: lat {lat}, lon {lon}")]
    LandingZoneOutOfRange { lat: f64, lon: f64 },

    #[error("Parameter {field} must be a finite number")]
    NonFiniteParameter { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    #[error("Invalid jump parameters: {0}")]
    Validation(#[from] ValidationError),

    #[error("No weather data available")]
    NoWeatherData,

    #[error("Invalid weather data: {0}")]
    InvalidWeatherData(String),
}
