//! Closed-form time of impact.
//!
//! With `d` the offset between the centers, `v` the relative velocity and `r` the sum of the radii, the circles touch
//! when `|d + v t| = r`, which is the quadratic `a t^2 + 2 b t + c = 0` with `a = v.v`, `b = d.v`, and `c = d.d - r^2`.
use crate::collision_time::RelativeMotion;
use crate::*;

pub fn time_of_impact(c1: &Circle, v1: V2, c2: &Circle, v2: V2) -> Option<f64> {
    let motion = RelativeMotion::new(c1, v1, c2, v2);
    let r = motion.contact_distance;

    let dist = motion.offset.length();
    let c = (dist - r) * (dist + r);
    if c <= 0.0 {
        return Some(0.0);
    }

    let a = motion.velocity.length_squared();
    let b = motion.offset.dot(&motion.velocity);
    // Not moving relative to each other, or moving apart.
    if a == 0.0 || b >= 0.0 {
        return None;
    }

    // `b^2 - ac` rewritten through `(d.v)^2 + (d x v)^2 = |d|^2 |v|^2`, which avoids subtracting two huge numbers when
    // the circles are far apart.
    let cross = motion.offset.cross(&motion.velocity);
    let discriminant = a * r * r - cross * cross;
    if discriminant < 0.0 {
        return None;
    }

    // The smaller root `(-b - sqrt(disc)) / a`, multiplied through by its conjugate.  `-b > 0` here, so the denominator
    // never cancels.
    Some(c / (-b + discriminant.sqrt()))
}
