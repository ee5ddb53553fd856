use crate::*;

mod ray_circle;

pub use ray_circle::*;

/// The result of performing a raycasting test.
#[derive(Debug)]
pub struct RaycastingResult {
    /// Where did the ray hit the other shape?
    pub point: V2,
    /// How far along the ray is `point`?
    pub distance: f64,
    /// If the ray didn't start inside the other shape, what is the normal?
    pub normal: Option<V2>,
    /// Did the ray start inside the shape?
    pub inside: bool,
}
