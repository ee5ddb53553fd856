//! Test a ray against a circle.
use crate::raycasting::*;
use crate::*;

pub fn ray_circle_test(ray: &Ray, circle: &Circle) -> Option<RaycastingResult> {
    // Project the vector from the start of the ray to the center of the circle
    // onto the ray itself to get the t at which the ray is closest to the
    // center.  Projecting onto the ray rotated 90 degrees gives the distance
    // from the center to the ray.
    //
    // If that distance is within the radius, the ray crosses the circle along
    // a chord of half-width `sqrt(r^2-x^2)`, so `t_closest+-half_chord` are
    // the two t values on the ray which pass through the circle.

    // Translated center of the circle, so that the ray is at the origin.
    let translated_center = *circle.get_center() - ray.origin;
    let dist_proj = ray
        .direction
        .perpendicular()
        .dot(&translated_center)
        .abs();
    if dist_proj > circle.get_radius() {
        return None;
    }

    let t_centered = ray.direction.dot(&translated_center);
    // Factored so that nearly tangential rays don't lose everything to cancellation.
    let radius = circle.get_radius();
    let half_chord = ((radius - dist_proj) * (radius + dist_proj)).sqrt();
    let t1 = t_centered - half_chord;
    let t2 = t_centered + half_chord;

    // `t2 >= t1`.  If `t2 < 0` the circle is entirely behind the ray; if
    // `t1 > length` it is entirely past the end.
    if t2 < 0.0 || t1 > ray.length {
        return None;
    }

    // The ray starts inside, so there is no meaningful normal.
    if t1 <= 0.0 {
        return Some(RaycastingResult {
            point: ray.origin,
            distance: 0.0,
            normal: None,
            inside: true,
        });
    }

    let point = ray.evaluate(t1);
    let normal = (*circle.get_center() - point).normalize();
    Some(RaycastingResult {
        point,
        distance: t1,
        normal: Some(normal),
        inside: false,
    })
}
