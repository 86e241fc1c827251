use tracing::trace;

use crate::constants::{FULL_CIRCLE_DEG, HALF_CIRCLE_DEG};
use crate::errors::CalculationError;
use crate::utils::vector2d::{normalize_degrees, Vector2D, Wind};

use super::forecast::ForecastData;

/// Altitude-sorted forecast samples that can be queried at any altitude.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherProfile {
    samples: Vec<ForecastData>,
}

impl WeatherProfile {
    /// Samples must be non-empty, finite and strictly ascending by altitude.
    pub fn new(samples: Vec<ForecastData>) -> Result<Self, CalculationError> {
        if samples.is_empty() {
            return Err(CalculationError::NoWeatherData);
        }

        if let Some(bad) = samples.iter().find(|s| !s.is_finite()) {
            return Err(CalculationError::InvalidWeatherData(format!(
                "sample at altitude {} contains a non-finite value",
                bad.altitude
            )));
        }

        if let Some(pair) = samples
            .windows(2)
            .find(|pair| pair[0].altitude >= pair[1].altitude)
        {
            return Err(CalculationError::InvalidWeatherData(format!(
                "altitudes must be unique and ascending, found {} before {}",
                pair[0].altitude, pair[1].altitude
            )));
        }

        Ok(WeatherProfile { samples })
    }

    pub fn from_slice(samples: &[ForecastData]) -> Result<Self, CalculationError> {
        Self::new(samples.to_vec())
    }

    pub fn samples(&self) -> &[ForecastData] {
        &self.samples
    }

    pub fn at(&self, altitude: f64) -> ForecastData {
        interpolate_sorted(&self.samples, altitude)
    }

    pub fn wind_at(&self, altitude: f64) -> Wind {
        self.at(altitude).wind()
    }

    pub fn wind_vector_at(&self, altitude: f64) -> Vector2D {
        self.at(altitude).wind_vector()
    }
}

/// Interpolates a sample at `altitude` from samples sorted ascending by altitude.
///
/// Returns `None` only when `samples` is empty. Outside the sampled range the
/// nearest boundary sample is reused with its altitude replaced.
pub fn interpolate_weather(samples: &[ForecastData], altitude: f64) -> Option<ForecastData> {
    if samples.is_empty() {
        None
    } else {
        Some(interpolate_sorted(samples, altitude))
    }
}

fn interpolate_sorted(samples: &[ForecastData], altitude: f64) -> ForecastData {
    let first = &samples[0];
    let last = &samples[samples.len() - 1];

    if altitude <= first.altitude {
        return ForecastData {
            altitude,
            ..first.clone()
        };
    }
    if altitude >= last.altitude {
        return ForecastData {
            altitude,
            ..last.clone()
        };
    }

    // first.altitude < altitude < last.altitude, so 1 <= upper_index < len
    let upper_index = samples.partition_point(|s| s.altitude <= altitude);
    let lower = &samples[upper_index - 1];
    let upper = &samples[upper_index];

    let ratio = (altitude - lower.altitude) / (upper.altitude - lower.altitude);
    trace!(
        altitude,
        lower = lower.altitude,
        upper = upper.altitude,
        ratio,
        "interpolating weather"
    );

    ForecastData {
        altitude,
        direction: interpolate_direction(lower.direction, upper.direction, ratio),
        speed: lerp(lower.speed, upper.speed, ratio),
        gust_speed: lerp_optional(lower.gust_speed, upper.gust_speed, ratio),
        temperature: lerp_optional(lower.temperature, upper.temperature, ratio),
    }
}

/// Interpolates along the shortest arc between two compass directions.
pub fn interpolate_direction(from: f64, to: f64, ratio: f64) -> f64 {
    let from = normalize_degrees(from);
    let to = normalize_degrees(to);

    let mut diff = to - from;
    if diff > HALF_CIRCLE_DEG {
        diff -= FULL_CIRCLE_DEG;
    } else if diff < -HALF_CIRCLE_DEG {
        diff += FULL_CIRCLE_DEG;
    }

    normalize_degrees(from + diff * ratio)
}

fn lerp(a: f64, b: f64, ratio: f64) -> f64 {
    a + (b - a) * ratio
}

fn lerp_optional(a: Option<f64>, b: Option<f64>, ratio: f64) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(lerp(a, b, ratio)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f64 = 1e-9;

    fn create_test_profile() -> WeatherProfile {
        WeatherProfile::new(vec![
            ForecastData::new(0.0, 350.0, 4.0)
                .with_temperature(15.0)
                .with_gust_speed(6.0),
            ForecastData::new(1000.0, 10.0, 8.0).with_temperature(9.0),
            ForecastData::new(3000.0, 90.0, 12.0)
                .with_temperature(-3.0)
                .with_gust_speed(18.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_circular_interpolation_through_north() {
        assert_abs_diff_eq!(interpolate_direction(350.0, 10.0, 0.5), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(interpolate_direction(10.0, 350.0, 0.5), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(interpolate_direction(350.0, 10.0, 0.25), 355.0, epsilon = EPSILON);
    }

    #[test]
    fn test_direction_interpolation_without_wrap() {
        assert_abs_diff_eq!(interpolate_direction(90.0, 180.0, 0.5), 135.0, epsilon = EPSILON);
        assert_abs_diff_eq!(interpolate_direction(-90.0, 0.0, 0.5), 315.0, epsilon = EPSILON);
    }

    #[test]
    fn test_clamp_below_lowest_sample() {
        let profile = create_test_profile();
        let sample = profile.at(-50.0);

        assert_eq!(sample.altitude, -50.0);
        assert_eq!(sample.direction, 350.0);
        assert_eq!(sample.speed, 4.0);
        assert_eq!(sample.temperature, Some(15.0));
        assert_eq!(sample.gust_speed, Some(6.0));
    }

    #[test]
    fn test_clamp_above_highest_sample() {
        let profile = create_test_profile();
        let sample = profile.at(4500.0);

        assert_eq!(
            sample,
            ForecastData::new(4500.0, 90.0, 12.0)
                .with_temperature(-3.0)
                .with_gust_speed(18.0)
        );
    }

    #[test]
    fn test_linear_fields_interpolate() {
        let profile = create_test_profile();
        let sample = profile.at(500.0);

        assert_abs_diff_eq!(sample.direction, 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(sample.speed, 6.0, epsilon = EPSILON);
        assert_abs_diff_eq!(sample.temperature.unwrap(), 12.0, epsilon = EPSILON);
    }

    #[test]
    fn test_optional_fields_need_both_brackets() {
        let profile = create_test_profile();

        assert_eq!(profile.at(500.0).gust_speed, None);
        assert_eq!(profile.at(2000.0).gust_speed, None);
        assert!(profile.at(2000.0).temperature.is_some());
    }

    #[test]
    fn test_exact_sample_altitude() {
        let profile = create_test_profile();
        let sample = profile.at(1000.0);

        assert_abs_diff_eq!(sample.direction, 10.0, epsilon = EPSILON);
        assert_abs_diff_eq!(sample.speed, 8.0, epsilon = EPSILON);
    }

    #[test]
    fn test_single_sample_profile() {
        let profile = WeatherProfile::new(vec![ForecastData::new(100.0, 45.0, 3.0)]).unwrap();

        assert_eq!(profile.wind_at(0.0), Wind::new(45.0, 3.0));
        assert_eq!(profile.wind_at(4000.0), Wind::new(45.0, 3.0));
    }

    #[test]
    fn test_empty_profile_rejected() {
        assert_eq!(WeatherProfile::new(vec![]), Err(CalculationError::NoWeatherData));
        assert_eq!(interpolate_weather(&[], 100.0), None);
    }

    #[test]
    fn test_unsorted_profile_rejected() {
        let result = WeatherProfile::new(vec![
            ForecastData::new(1000.0, 0.0, 1.0),
            ForecastData::new(500.0, 0.0, 1.0),
        ]);
        assert!(matches!(result, Err(CalculationError::InvalidWeatherData(_))));

        let duplicate = WeatherProfile::new(vec![
            ForecastData::new(500.0, 0.0, 1.0),
            ForecastData::new(500.0, 10.0, 2.0),
        ]);
        assert!(matches!(duplicate, Err(CalculationError::InvalidWeatherData(_))));
    }

    #[test]
    fn test_non_finite_profile_rejected() {
        let result = WeatherProfile::new(vec![ForecastData::new(0.0, f64::NAN, 1.0)]);
        assert!(matches!(result, Err(CalculationError::InvalidWeatherData(_))));
    }
}
