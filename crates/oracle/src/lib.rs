//! A test oracle for continuous collision detection between two circles.
//!
//! Scenarios are built backwards from a chosen collision, so the time at which the two particles first touch is known
//! exactly.  The harness then runs any number of collision-time functions against many such scenarios.
mod adapters;
mod domains;
mod errors;
mod harness;
mod particle;
mod scenario;
pub mod strategies;
mod trace;

pub use adapters::*;
pub use domains::*;
pub use errors::*;
pub use harness::*;
pub use particle::*;
pub use scenario::*;
pub use trace::*;
