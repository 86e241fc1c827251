use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::SAFETY_MARGIN;
use crate::errors::CalculationError;
use crate::trajectory_system::{
    canopy::calculate_canopy_drift, freefall::calculate_freefall_drift, DriftResult,
};
use crate::utils::geodesy::{move_point, points_to_vector, LatLon};
use crate::utils::vector2d::{wind_to_vector, Vector2D};
use crate::weather_system::{forecast::ForecastData, profile::WeatherProfile};

use super::parameters::JumpParameters;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitPoint {
    pub location: LatLon,
    pub group_number: u32, // 1-based
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitCalculationResult {
    pub optimal_exit_point: LatLon,
    pub exit_points: Vec<ExitPoint>,
    pub safety_radius: f64,    // m
    pub aircraft_heading: f64, // degrees
    pub ground_speed: f64,     // m/s along the heading
    pub group_spacing: f64,    // m between consecutive groups
    pub canopy_air_speed: f64, // m/s
    pub freefall_time: f64,    // s
    pub canopy_time: f64,      // s, opening to setup altitude
}

/// Passive drift from exit to setup altitude, split by flight phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriftBreakdown {
    pub freefall: DriftResult,
    pub canopy: DriftResult,
    pub total: Vector2D,
}

/// Freefall drift (jump to opening altitude) plus zero-airspeed canopy drift
/// (opening to setup altitude).
pub fn calculate_drift_breakdown(
    parameters: &JumpParameters,
    weather: &WeatherProfile,
) -> DriftBreakdown {
    let freefall = calculate_freefall_drift(
        weather,
        parameters.jump_altitude,
        parameters.opening_altitude,
        parameters.freefall_speed,
    );
    let canopy = calculate_canopy_drift(
        weather,
        parameters.opening_altitude,
        parameters.setup_altitude,
        0.0,
        parameters.canopy_descent_rate,
        parameters.glide_ratio,
        0.0,
    );

    DriftBreakdown {
        freefall,
        canopy,
        total: freefall.drift + canopy.drift,
    }
}

/// Computes the optimal exit point, aircraft heading, per-group exit points
/// and safety radius for one jump.
pub fn calculate_exit_points(
    parameters: &JumpParameters,
    weather: &[ForecastData],
) -> Result<ExitCalculationResult, CalculationError> {
    parameters.validate()?;
    let landing_zone = parameters.checked_landing_zone()?;
    let profile = WeatherProfile::from_slice(weather)?;

    let drift = calculate_drift_breakdown(parameters, &profile);
    let optimal_exit_point = move_point(landing_zone, -drift.total);
    debug!(
        drift_x = drift.total.x,
        drift_y = drift.total.y,
        %optimal_exit_point,
        "optimal exit point"
    );

    let jump_wind = profile.wind_at(parameters.jump_altitude);
    let aircraft_heading = parameters.flight_direction.unwrap_or(jump_wind.direction);
    let heading_unit = Vector2D::from_bearing(aircraft_heading);

    let ground_speed = parameters.aircraft_speed
        + wind_to_vector(jump_wind.direction, jump_wind.speed).dot(&heading_unit);
    let group_spacing = ground_speed * parameters.time_between_groups;
    debug!(aircraft_heading, ground_speed, group_spacing, "flight line");

    let center_point = if parameters.flight_over_landing_zone {
        project_onto_flight_line(landing_zone, optimal_exit_point, heading_unit)
    } else {
        optimal_exit_point
    };

    let exit_points = layout_groups(
        center_point,
        heading_unit,
        group_spacing,
        parameters.number_of_groups,
    );

    let canopy_air_speed = parameters.canopy_air_speed();
    let safety_radius = calculate_safety_radius(parameters, canopy_air_speed);

    info!(
        %optimal_exit_point,
        aircraft_heading,
        groups = exit_points.len(),
        safety_radius,
        "exit points calculated"
    );

    Ok(ExitCalculationResult {
        optimal_exit_point,
        exit_points,
        safety_radius,
        aircraft_heading,
        ground_speed,
        group_spacing,
        canopy_air_speed,
        freefall_time: drift.freefall.time,
        canopy_time: drift.canopy.time,
    })
}

/// Calculates several jump profiles against the same forecast in parallel.
/// Results are returned in input order.
pub fn calculate_profiles(
    profiles: &[JumpParameters],
    weather: &[ForecastData],
) -> Vec<Result<ExitCalculationResult, CalculationError>> {
    profiles
        .par_iter()
        .map(|parameters| calculate_exit_points(parameters, weather))
        .collect()
}

/// Nearest point to `point` on the line through `origin` along `direction` (unit vector).
fn project_onto_flight_line(origin: LatLon, point: LatLon, direction: Vector2D) -> LatLon {
    let offset = points_to_vector(origin, point);
    move_point(origin, direction * offset.dot(&direction))
}

fn layout_groups(
    center: LatLon,
    heading_unit: Vector2D,
    spacing: f64,
    number_of_groups: u32,
) -> Vec<ExitPoint> {
    let middle = (number_of_groups / 2) as f64;

    (0..number_of_groups)
        .map(|i| {
            let offset = (i as f64 - middle) * spacing;
            ExitPoint {
                location: move_point(center, heading_unit * offset),
                group_number: i + 1,
            }
        })
        .collect()
}

fn calculate_safety_radius(parameters: &JumpParameters, canopy_air_speed: f64) -> f64 {
    let canopy_time =
        (parameters.opening_altitude - parameters.setup_altitude) / parameters.canopy_descent_rate;
    SAFETY_MARGIN * canopy_air_speed * canopy_time
}
