//! Physics module for collision queries
//!
//! Provides the collider capability, a circle shape, and the overlap and
//! swept collision queries the scene exposes for its nodes.

pub mod circle;
pub mod collider;
mod query;

pub use circle::{Circle, CircleCollider};
pub use collider::{Collider, Impact, NO_IMPACT};
