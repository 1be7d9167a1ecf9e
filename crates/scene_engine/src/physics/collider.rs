//! Collider capability
//!
//! Colliders work purely in world space. The scene composes each node's world
//! matrix and hands it to the collider as its pose, so a collider never needs
//! to know about the hierarchy it lives in.

use crate::foundation::math::{Mat3, Vec2};
use std::any::Any;
use std::fmt;

/// Fraction reported when a sweep hits nothing within the move
pub const NO_IMPACT: f32 = f32::MAX;

/// Result of a swept collision test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    /// Safe fraction of the proposed displacement.
    ///
    /// `0.0` means the objects already overlap and the move would make it
    /// worse. Values of `1.0` or more mean no contact within the move.
    pub fraction: f32,

    /// Collision normal at first contact, pointing toward the moving object.
    /// Zero when there is no contact.
    pub normal: Vec2,
}

impl Impact {
    /// Create an impact at the given fraction
    pub fn new(fraction: f32, normal: Vec2) -> Self {
        Self { fraction, normal }
    }

    /// No contact within the move
    pub fn none() -> Self {
        Self {
            fraction: NO_IMPACT,
            normal: Vec2::zeros(),
        }
    }

    /// Whether contact happens before the full move completes
    pub fn is_hit(&self) -> bool {
        self.fraction < 1.0
    }
}

/// Shape capability used by the collision queries
///
/// `pose` is always the owning node's world matrix.
pub trait Collider: fmt::Debug {
    /// Whether this shape overlaps `other`
    fn overlaps(&self, pose: &Mat3, other: &dyn Collider, other_pose: &Mat3) -> bool;

    /// Whether the world-space point lies inside this shape
    fn contains_point(&self, pose: &Mat3, point: Vec2) -> bool;

    /// Sweep this shape by the world-space `velocity` against a static `other`
    fn time_of_impact(
        &self,
        pose: &Mat3,
        other: &dyn Collider,
        other_pose: &Mat3,
        velocity: Vec2,
    ) -> Impact;

    /// Downcasting support for pairwise shape dispatch
    fn as_any(&self) -> &dyn Any;
}
