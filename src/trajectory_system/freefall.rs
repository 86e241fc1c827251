use tracing::{debug, warn};

use crate::constants::{
    FREEFALL_STEP_SIZE, SIMPSON_END_WEIGHT, SIMPSON_EVEN_WEIGHT, SIMPSON_NORMALIZATION,
    SIMPSON_ODD_WEIGHT,
};
use crate::utils::vector2d::Vector2D;
use crate::weather_system::profile::WeatherProfile;

use super::DriftResult;

/// Wind drift while falling from `start_altitude` to `end_altitude` at a
/// constant vertical `freefall_speed`, integrated with Simpson's rule over
/// intervals of at most [`FREEFALL_STEP_SIZE`].
///
/// An empty or inverted altitude range, or a non-positive speed, yields zero drift.
pub fn calculate_freefall_drift(
    weather: &WeatherProfile,
    start_altitude: f64,
    end_altitude: f64,
    freefall_speed: f64,
) -> DriftResult {
    let altitude_range = start_altitude - end_altitude;
    if altitude_range < 0.0 || freefall_speed <= 0.0 {
        warn!(
            start_altitude,
            end_altitude, freefall_speed, "degenerate freefall range, no drift applied"
        );
        return DriftResult::zero();
    }
    if altitude_range == 0.0 {
        return DriftResult::zero();
    }

    let total_time = altitude_range / freefall_speed;
    let steps = (altitude_range / FREEFALL_STEP_SIZE).ceil() as usize;
    let step_size = altitude_range / steps as f64;
    let step_duration = step_size / freefall_speed;

    let weighted_sum: Vector2D = (0..=steps)
        .map(|i| {
            let altitude = start_altitude - i as f64 * step_size;
            weather.wind_vector_at(altitude) * (simpson_weight(i, steps) * step_duration)
        })
        .sum();

    let drift = weighted_sum / SIMPSON_NORMALIZATION;
    debug!(
        steps,
        total_time,
        drift_x = drift.x,
        drift_y = drift.y,
        "freefall drift"
    );

    DriftResult::new(drift, total_time)
}

fn simpson_weight(index: usize, steps: usize) -> f64 {
    if index == 0 || index == steps {
        SIMPSON_END_WEIGHT
    } else if index % 2 == 1 {
        SIMPSON_ODD_WEIGHT
    } else {
        SIMPSON_EVEN_WEIGHT
    }
}
