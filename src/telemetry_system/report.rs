use crate::control::exit_point::ExitCalculationResult;
use crate::utils::geodesy::LatLon;

fn format_location(location: &LatLon) -> String {
    format!("lat = {:.6}°, lon = {:.6}°", location.lat, location.lon)
}

fn format_time(seconds: f64) -> String {
    if seconds >= 60.0 {
        let minutes = (seconds / 60.0).floor();
        format!("{:.0}m {:.1}s", minutes, seconds % 60.0)
    } else {
        format!("{:.1}s", seconds)
    }
}

fn format_distance(meters: f64) -> String {
    if meters.abs() >= 1000.0 {
        format!("{:.2} km", meters / 1000.0)
    } else {
        format!("{:.0} m", meters)
    }
}

/// Multi-line plain text summary of a calculation result.
pub fn format_result(result: &ExitCalculationResult) -> String {
    let mut summary = format!(
        "Optimal Exit Point: {}\n\
         Aircraft Heading: {:.1}°\n\
         Ground Speed: {:.1} m/s\n\
         Group Spacing: {}\n\
         Freefall Time: {}\n\
         Canopy Time: {}\n\
         Canopy Airspeed: {:.1} m/s\n\
         Safety Radius: {}\n",
        format_location(&result.optimal_exit_point),
        result.aircraft_heading,
        result.ground_speed,
        format_distance(result.group_spacing),
        format_time(result.freefall_time),
        format_time(result.canopy_time),
        result.canopy_air_speed,
        format_distance(result.safety_radius),
    );

    for exit_point in &result.exit_points {
        summary.push_str(&format!(
            "Group {}: {}\n",
            exit_point.group_number,
            format_location(&exit_point.location)
        ));
    }

    summary
}
