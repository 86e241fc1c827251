pub mod canopy;
pub mod freefall;

use serde::{Deserialize, Serialize};

use crate::utils::vector2d::Vector2D;

/// Horizontal displacement accumulated over one flight phase.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DriftResult {
    pub drift: Vector2D, // m east/north
    pub distance: f64,   // m, magnitude of `drift`
    pub time: f64,       // s
}

impl DriftResult {
    pub fn new(drift: Vector2D, time: f64) -> Self {
        DriftResult {
            drift,
            distance: drift.magnitude(),
            time,
        }
    }

    pub fn zero() -> Self {
        DriftResult::default()
    }
}
