use serde::{Deserialize, Serialize};

use crate::utils::vector2d::{wind_to_vector, Vector2D, Wind};

/// One forecast sample at a height above ground level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastData {
    pub altitude: f64,  // m AGL
    pub direction: f64, // degrees, direction the wind blows from
    pub speed: f64,     // m/s
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gust_speed: Option<f64>, // m/s
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>, // °C
}

impl ForecastData {
    pub fn new(altitude: f64, direction: f64, speed: f64) -> Self {
        ForecastData {
            altitude,
            direction,
            speed,
            gust_speed: None,
            temperature: None,
        }
    }

    pub fn with_gust_speed(mut self, gust_speed: f64) -> Self {
        self.gust_speed = Some(gust_speed);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn wind(&self) -> Wind {
        Wind::new(self.direction, self.speed)
    }

    pub fn wind_vector(&self) -> Vector2D {
        wind_to_vector(self.direction, self.speed)
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.altitude.is_finite()
            && self.direction.is_finite()
            && self.speed.is_finite()
            && self.gust_speed.map_or(true, f64::is_finite)
            && self.temperature.map_or(true, f64::is_finite)
    }
}
