#[derive(Debug, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum CircleError {
    #[error("Attempted to create a circle with radius {0}; radii must be finite and non-negative")]
    InvalidRadius(f64),

    #[error("Attempted to create a circle with a non-finite center")]
    InvalidCenter,
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum RayError {
    #[error("Cannot build a ray from a zero or non-finite direction")]
    DegenerateDirection,
}
