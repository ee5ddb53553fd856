use crate::errors::RayError;
use crate::*;

/// A ray with a unit direction, which may be infinitely long.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Ray {
    pub(crate) origin: V2,
    pub(crate) direction: V2,
    pub(crate) length: f64,
}

impl Ray {
    pub fn from_angle(origin: V2, length: f64, theta: f64) -> Ray {
        Ray::new(origin, V2::polar(1.0, theta), length)
    }

    /// Build a ray. `direction` must already be normalized.
    pub fn new(origin: V2, direction: V2, length: f64) -> Ray {
        Ray {
            origin,
            direction,
            length,
        }
    }

    /// Build a ray from a source point and a destination point.
    pub fn from_points(source: V2, target: V2) -> Ray {
        let length = source.distance(&target);
        let direction = (target - source).normalize();
        Ray::new(source, direction, length)
    }

    /// The path swept by a point moving at `velocity`, forever.
    ///
    /// Distances along this ray are in the same units as positions, so divide by the speed to get times.
    pub fn from_motion(origin: V2, velocity: V2) -> Result<Ray, RayError> {
        let speed = velocity.length();
        if speed == 0.0 || !speed.is_finite() {
            return Err(RayError::DegenerateDirection);
        }
        Ok(Ray::new(origin, velocity / speed, f64::INFINITY))
    }

    pub fn get_origin(&self) -> &V2 {
        &self.origin
    }

    pub fn get_direction(&self) -> &V2 {
        &self.direction
    }

    pub fn get_length(&self) -> f64 {
        self.length
    }

    /// Evaluate the ray at a given `t`.
    pub fn evaluate(&self, t: f64) -> V2 {
        self.origin + self.direction * t
    }
}
