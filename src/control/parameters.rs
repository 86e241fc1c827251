use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::utils::geodesy::LatLon;

/// User-entered jump settings. Altitudes are meters AGL, speeds m/s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JumpParameters {
    pub jump_altitude: f64,
    pub aircraft_speed: f64,
    pub freefall_speed: f64,
    pub opening_altitude: f64,
    pub canopy_descent_rate: f64,
    pub glide_ratio: f64,
    pub setup_altitude: f64,
    pub number_of_groups: u32,
    pub time_between_groups: f64, // s
    pub landing_zone: Option<LatLon>,
    #[serde(default)]
    pub flight_direction: Option<f64>, // degrees; None picks the headwind heading
    #[serde(default)]
    pub flight_over_landing_zone: bool,
    pub jump_time: DateTime<Utc>,
}

impl JumpParameters {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.check_finite()?;

        if self.jump_altitude <= self.opening_altitude {
            return Err(ValidationError::JumpAltitudeNotAboveOpening);
        }
        if self.opening_altitude <= 0.0 {
            return Err(ValidationError::NonPositiveOpeningAltitude);
        }
        if self.setup_altitude < 0.0 {
            return Err(ValidationError::NegativeSetupAltitude);
        }
        if self.setup_altitude >= self.opening_altitude {
            return Err(ValidationError::SetupAltitudeNotBelowOpening);
        }
        if self.aircraft_speed <= 0.0 {
            return Err(ValidationError::NonPositiveAircraftSpeed);
        }
        if self.freefall_speed <= 0.0 {
            return Err(ValidationError::NonPositiveFreefallSpeed);
        }
        if self.canopy_descent_rate <= 0.0 {
            return Err(ValidationError::NonPositiveDescentRate);
        }
        if self.glide_ratio < 0.0 {
            return Err(ValidationError::NegativeGlideRatio);
        }
        if self.number_of_groups == 0 {
            return Err(ValidationError::NoGroups);
        }
        if self.time_between_groups < 0.0 {
            return Err(ValidationError::NegativeTimeBetweenGroups);
        }

        self.checked_landing_zone().map(|_| ())
    }

    /// The landing zone, if present, non-zero and within coordinate range.
    pub fn checked_landing_zone(&self) -> Result<LatLon, ValidationError> {
        let landing_zone = self
            .landing_zone
            .ok_or(ValidationError::MissingLandingZone)?;

        if landing_zone.lat == 0.0 || landing_zone.lon == 0.0 {
            return Err(ValidationError::ZeroLandingZone);
        }
        if !landing_zone.is_in_range() {
            return Err(ValidationError::LandingZoneOutOfRange {
                lat: landing_zone.lat,
                lon: landing_zone.lon,
            });
        }

        Ok(landing_zone)
    }

    /// Canopy airspeed from descent rate and glide ratio (m/s).
    pub fn canopy_air_speed(&self) -> f64 {
        self.canopy_descent_rate * (1.0 + self.glide_ratio.powi(2)).sqrt()
    }

    fn check_finite(&self) -> Result<(), ValidationError> {
        let fields = [
            ("jumpAltitude", self.jump_altitude),
            ("aircraftSpeed", self.aircraft_speed),
            ("freefallSpeed", self.freefall_speed),
            ("openingAltitude", self.opening_altitude),
            ("canopyDescentRate", self.canopy_descent_rate),
            ("glideRatio", self.glide_ratio),
            ("setupAltitude", self.setup_altitude),
            ("timeBetweenGroups", self.time_between_groups),
            ("flightDirection", self.flight_direction.unwrap_or(0.0)),
        ];

        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some(&(field, _)) => Err(ValidationError::NonFiniteParameter { field }),
            None => Ok(()),
        }
    }
}
