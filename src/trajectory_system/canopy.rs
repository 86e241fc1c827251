use tracing::{debug, warn};

use crate::constants::CANOPY_STEP_SIZE;
use crate::utils::vector2d::Vector2D;
use crate::weather_system::profile::WeatherProfile;

use super::DriftResult;

/// Ground track under canopy from `start_altitude` down to `target_altitude`.
///
/// The canopy flies a fixed heading `desired_direction` (degrees) at
/// `canopy_air_speed`; the wind at the top of each [`CANOPY_STEP_SIZE`] step
/// is added and the ground vector accumulated over the step duration.
/// With `canopy_air_speed = 0` this is pure passive wind drift.
pub fn calculate_canopy_drift(
    weather: &WeatherProfile,
    start_altitude: f64,
    target_altitude: f64,
    canopy_air_speed: f64,
    descent_rate: f64,
    glide_ratio: f64,
    desired_direction: f64,
) -> DriftResult {
    let altitude_range = start_altitude - target_altitude;
    if altitude_range < 0.0 || descent_rate <= 0.0 {
        warn!(
            start_altitude,
            target_altitude, descent_rate, "degenerate canopy range, no drift applied"
        );
        return DriftResult::zero();
    }
    if altitude_range == 0.0 {
        return DriftResult::zero();
    }

    let total_time = altitude_range / descent_rate;
    let steps = (altitude_range / CANOPY_STEP_SIZE).ceil() as usize;
    let step_size = altitude_range / steps as f64;
    let step_duration = step_size / descent_rate;

    let air_vector = Vector2D::from_bearing(desired_direction) * canopy_air_speed;

    let drift: Vector2D = (0..steps)
        .map(|i| {
            let altitude = start_altitude - i as f64 * step_size;
            let ground_vector = air_vector + weather.wind_vector_at(altitude);
            ground_vector * step_duration
        })
        .sum();

    debug!(
        steps,
        total_time,
        canopy_air_speed,
        glide_ratio,
        drift_x = drift.x,
        drift_y = drift.y,
        "canopy drift"
    );

    DriftResult::new(drift, total_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather_system::forecast::ForecastData;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn uniform_profile(direction: f64, speed: f64) -> WeatherProfile {
        WeatherProfile::new(vec![
            ForecastData::new(0.0, direction, speed),
            ForecastData::new(3000.0, direction, speed),
        ])
        .unwrap()
    }

    #[test]
    fn test_pure_wind_drift() {
        let profile = uniform_profile(0.0, 6.0);
        let result = calculate_canopy_drift(&profile, 1000.0, 300.0, 0.0, 5.0, 2.5, 0.0);

        assert_abs_diff_eq!(result.time, 140.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.drift.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(result.drift.y, -6.0 * 140.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_wind_zero_airspeed() {
        let profile = uniform_profile(0.0, 0.0);
        let result = calculate_canopy_drift(&profile, 1000.0, 300.0, 0.0, 5.0, 2.5, 0.0);

        assert_eq!(result.drift, Vector2D::zero());
    }

    #[test]
    fn test_airspeed_without_wind() {
        let profile = uniform_profile(0.0, 0.0);
        let result = calculate_canopy_drift(&profile, 1000.0, 0.0, 10.0, 5.0, 2.0, 90.0);

        assert_relative_eq!(result.drift.x, 2000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.drift.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_flying_into_wind() {
        // 10 m/s airspeed north against a 4 m/s northerly
        let profile = uniform_profile(0.0, 4.0);
        let result = calculate_canopy_drift(&profile, 500.0, 0.0, 10.0, 5.0, 2.0, 0.0);

        assert_relative_eq!(result.drift.y, 6.0 * 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_partial_final_step() {
        // 130 m is not a multiple of 50 m; duration must still be exact
        let profile = uniform_profile(90.0, 3.0);
        let result = calculate_canopy_drift(&profile, 430.0, 300.0, 0.0, 5.0, 2.0, 0.0);

        assert_abs_diff_eq!(result.time, 26.0, epsilon = 1e-12);
        assert_relative_eq!(result.drift.x, -3.0 * 26.0, epsilon = 1e-9);
    }

    #[test]
    fn test_equal_altitudes_yield_zero() {
        let profile = uniform_profile(90.0, 3.0);
        let result = calculate_canopy_drift(&profile, 300.0, 300.0, 8.0, 5.0, 2.0, 0.0);

        assert_eq!(result, DriftResult::zero());
    }
}
