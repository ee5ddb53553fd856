//! A crate for physics related modules.

mod circle;
pub mod collision_time;
pub mod errors;
mod ray;
mod raycasting;
mod v2;

pub use circle::*;
pub use collision_time::{bisect_contact_time, swept_circle_time, time_of_impact};
pub use ray::*;
pub use raycasting::*;
pub use v2::*;
