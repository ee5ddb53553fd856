//! Time of impact by bisection.
//!
//! The separation between the surfaces is convex in time, so if it ever drops to zero it does so before the time of
//! closest approach, and it is monotonic on that interval.
use crate::collision_time::RelativeMotion;
use crate::*;

/// Enough halvings to exhaust the precision of an f64 for any interval we can produce.
const MAX_ITERATIONS: usize = 2048;

pub fn bisect_contact_time(c1: &Circle, v1: V2, c2: &Circle, v2: V2) -> Option<f64> {
    let motion = RelativeMotion::new(c1, v1, c2, v2);

    if motion.separation(0.0) <= 0.0 {
        return Some(0.0);
    }

    let speed_squared = motion.velocity.length_squared();
    if speed_squared == 0.0 {
        return None;
    }

    let t_closest = -motion.offset.dot(&motion.velocity) / speed_squared;
    if t_closest <= 0.0 || motion.separation(t_closest) > 0.0 {
        return None;
    }

    // Invariant: separated at `lo`, touching or overlapping at `hi`.
    let (mut lo, mut hi) = (0.0f64, t_closest);
    for _ in 0..MAX_ITERATIONS {
        let mid = lo + (hi - lo) / 2.0;
        if mid <= lo || mid >= hi {
            break;
        }

        if motion.separation(mid) > 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Some(hi)
}
