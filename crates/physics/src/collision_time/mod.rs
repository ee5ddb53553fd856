//! Continuous collision detection between two moving circles.
//!
//! Every function here answers the same question in a different way: given two circles moving at constant
//! velocities, when do their surfaces first touch?  The answer is the earliest non-negative time, `Some(0.0)` if they
//! already overlap, or `None` if they never touch.
use crate::*;

pub mod bisection;
pub mod kinematic;
pub mod swept;

pub use bisection::bisect_contact_time;
pub use kinematic::time_of_impact;
pub use swept::swept_circle_time;

/// The motion of the second circle's center as seen from the first circle.
#[derive(Debug, Copy, Clone)]
pub(crate) struct RelativeMotion {
    pub(crate) offset: V2,
    pub(crate) velocity: V2,
    /// Center distance at which the surfaces touch.
    pub(crate) contact_distance: f64,
}

impl RelativeMotion {
    pub(crate) fn new(c1: &Circle, v1: V2, c2: &Circle, v2: V2) -> RelativeMotion {
        RelativeMotion {
            offset: *c2.get_center() - *c1.get_center(),
            velocity: v2 - v1,
            contact_distance: c1.get_radius() + c2.get_radius(),
        }
    }

    /// Distance between the surfaces at time `t`; negative while overlapping.
    pub(crate) fn separation(&self, t: f64) -> f64 {
        (self.offset + self.velocity * t).length() - self.contact_distance
    }
}
