use std::fs;

use exit_point_calculation::telemetry_system::{logging::init_logging, report::format_result};
use exit_point_calculation::*;
use serde::Deserialize;
use tracing::{error, info};

/// Scenario file: one primary jump, optional extra profiles, and the forecast.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Scenario {
    parameters: JumpParameters,
    #[serde(default)]
    profiles: Vec<JumpParameters>,
    weather: Vec<ForecastData>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: main <scenario.json>")?;
    let scenario: Scenario = serde_json::from_str(&fs::read_to_string(&path)?)?;
    info!(path = %path, samples = scenario.weather.len(), "loaded scenario");

    let result = calculate_exit_points(&scenario.parameters, &scenario.weather)?;
    info!("\n{}", format_result(&result));
    println!("{}", serde_json::to_string_pretty(&result)?);

    if !scenario.profiles.is_empty() {
        let results = calculate_profiles(&scenario.profiles, &scenario.weather);
        for (index, profile_result) in results.into_iter().enumerate() {
            match profile_result {
                Ok(result) => println!("{}", serde_json::to_string_pretty(&result)?),
                Err(e) => error!(profile = index + 1, "profile failed: {}", e),
            }
        }
    }

    Ok(())
}
