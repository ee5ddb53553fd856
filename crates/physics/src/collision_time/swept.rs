//! Time of impact by raycasting.
//!
//! Seen from the first circle, the second circle's center travels along a ray, and the surfaces touch when that ray
//! enters the first circle grown by the second circle's radius.
use crate::*;

pub fn swept_circle_time(c1: &Circle, v1: V2, c2: &Circle, v2: V2) -> Option<f64> {
    // Only fails if the radii sum to infinity.
    let grown = Circle::new(*c1.get_center(), c1.get_radius() + c2.get_radius()).ok()?;
    let relative_velocity = v2 - v1;

    let ray = match Ray::from_motion(*c2.get_center(), relative_velocity) {
        Ok(r) => r,
        // Not moving relative to each other, so it's now or never.
        Err(_) => return c1.touches(c2).then(|| 0.0),
    };

    let hit = ray_circle_test(&ray, &grown)?;
    Some(hit.distance / relative_velocity.length())
}
