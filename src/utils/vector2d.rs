use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::constants::{FULL_CIRCLE_DEG, HALF_CIRCLE_DEG};

/// Planar displacement or velocity in meters: `x` east, `y` north.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    pub fn zero() -> Self {
        Vector2D::new(0.0, 0.0)
    }

    /// Unit vector pointing along a compass bearing (degrees clockwise from north).
    pub fn from_bearing(bearing: f64) -> Self {
        let rad = bearing.to_radians();
        Vector2D::new(rad.sin(), rad.cos())
    }

    pub fn magnitude(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }

    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            *self
        } else {
            Vector2D::new(self.x / mag, self.y / mag)
        }
    }

    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Compass bearing of the vector in `[0, 360)`; zero for the zero vector.
    pub fn bearing(&self) -> f64 {
        normalize_degrees(self.x.atan2(self.y).to_degrees())
    }
}

impl Sum for Vector2D {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Vector2D::zero(), |a, b| a + b)
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, vector: Vector2D) -> Vector2D {
        Vector2D::new(self * vector.x, self * vector.y)
    }
}

impl Div<f64> for Vector2D {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Vector2D::new(self.x / scalar, self.y / scalar)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Vector2D::new(-self.x, -self.y)
    }
}

/// Meteorological wind: the direction it blows *from* (degrees) and its speed (m/s).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Wind {
    pub direction: f64,
    pub speed: f64,
}

impl Wind {
    pub fn new(direction: f64, speed: f64) -> Self {
        Wind { direction, speed }
    }
}

/// Wraps an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_CIRCLE_DEG);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_CIRCLE_DEG {
        0.0
    } else {
        wrapped
    }
}

pub fn wind_to_vector(direction: f64, speed: f64) -> Vector2D {
    Vector2D::from_bearing(direction + HALF_CIRCLE_DEG) * speed
}

pub fn vector_to_wind(vector: Vector2D) -> Wind {
    let speed = vector.magnitude();
    if speed == 0.0 {
        return Wind::new(0.0, 0.0);
    }
    Wind::new(normalize_degrees(vector.bearing() + HALF_CIRCLE_DEG), speed)
}

pub fn add_vectors(a: Vector2D, b: Vector2D) -> Vector2D {
    a + b
}

pub fn subtract_vectors(a: Vector2D, b: Vector2D) -> Vector2D {
    a - b
}

pub fn scale_vector(vector: Vector2D, scalar: f64) -> Vector2D {
    vector * scalar
}

pub fn vector_magnitude(vector: Vector2D) -> f64 {
    vector.magnitude()
}

pub fn normalize_vector(vector: Vector2D) -> Vector2D {
    vector.normalize()
}
