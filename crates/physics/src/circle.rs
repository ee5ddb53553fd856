//! A simple circle.
use crate::errors::CircleError;
use crate::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    center: V2,
    radius: f64,
}

impl Circle {
    pub fn new(center: V2, radius: f64) -> Result<Circle, CircleError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(CircleError::InvalidRadius(radius));
        }
        if !center.is_finite() {
            return Err(CircleError::InvalidCenter);
        }
        Ok(Circle { center, radius })
    }

    pub fn get_center(&self) -> &V2 {
        &self.center
    }

    pub fn get_radius(&self) -> f64 {
        self.radius
    }

    /// Move the circle to a new position.
    #[must_use = "This doesn't mutate the Circle in-place"]
    pub fn move_circle(&self, new_center: &V2) -> Circle {
        Circle {
            center: *new_center,
            radius: self.radius,
        }
    }

    /// Where this circle is after travelling at `velocity` for `time`.
    #[must_use = "This doesn't mutate the Circle in-place"]
    pub fn advance(&self, velocity: &V2, time: f64) -> Circle {
        self.move_circle(&(self.center + *velocity * time))
    }

    /// Do the two circles touch or overlap?
    pub fn touches(&self, other: &Circle) -> bool {
        let touching_dist_squared = (self.radius + other.radius).powi(2);
        self.center.distance_squared(&other.center) <= touching_dist_squared
    }
}
