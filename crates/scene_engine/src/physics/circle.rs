//! Circle collider

use super::collider::{Collider, Impact};
use crate::foundation::math::{Mat3, Point2, Vec2};
use log::trace;
use std::any::Any;

/// A circle in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Centre in world space
    pub center: Vec2,
    /// Radius in world units
    pub radius: f32,
}

impl Circle {
    /// Creates a new circle
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if this circle intersects another (touching counts)
    pub fn intersects(&self, other: &Circle) -> bool {
        let distance_squared = (self.center - other.center).magnitude_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared <= radius_sum * radius_sum
    }

    /// Check if a point lies inside or on the circle
    pub fn contains(&self, point: Vec2) -> bool {
        (point - self.center).magnitude_squared() <= self.radius * self.radius
    }

    /// Sweep this circle by `velocity` against a static circle.
    ///
    /// Solves `|d + t·v| = r` for the earliest `t`, where `d` is the offset
    /// between centres and `r` the radius sum.
    pub fn sweep(&self, other: &Circle, velocity: Vec2) -> Impact {
        let offset = self.center - other.center;
        let radius_sum = self.radius + other.radius;
        let c = offset.magnitude_squared() - radius_sum * radius_sum;
        let approach = offset.dot(&velocity);

        if c < 0.0 {
            // Already overlapping: only block moves that deepen the overlap.
            if approach < 0.0 {
                return Impact::new(0.0, direction_or_zero(offset));
            }
            return Impact::none();
        }

        // Not closing in; also covers a zero velocity
        if approach >= 0.0 {
            return Impact::none();
        }

        let a = velocity.magnitude_squared();

        let b = 2.0 * approach;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Impact::none();
        }

        let t = ((-b - discriminant.sqrt()) / (2.0 * a)).max(0.0);
        let contact_offset = offset + velocity * t;
        Impact::new(t, direction_or_zero(contact_offset))
    }
}

fn direction_or_zero(v: Vec2) -> Vec2 {
    v.try_normalize(f32::EPSILON).unwrap_or_else(Vec2::zeros)
}

/// Circular collision shape in the owner's local space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleCollider {
    /// Centre in local space
    pub center: Vec2,
    /// Radius in local units
    pub radius: f32,
}

impl CircleCollider {
    /// Circle centred on the owner's origin
    pub fn new(radius: f32) -> Self {
        Self {
            center: Vec2::zeros(),
            radius,
        }
    }

    /// Circle with a local centre offset
    pub fn with_center(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// World-space circle for the given pose.
    ///
    /// The radius grows with the larger of the two axis scales.
    pub fn world_circle(&self, pose: &Mat3) -> Circle {
        let center = pose.transform_point(&Point2::from(self.center)).coords;
        let scale_x = Vec2::new(pose[(0, 0)], pose[(1, 0)]).magnitude();
        let scale_y = Vec2::new(pose[(0, 1)], pose[(1, 1)]).magnitude();
        Circle::new(center, self.radius * scale_x.max(scale_y))
    }
}

fn other_circle(other: &dyn Collider, other_pose: &Mat3) -> Option<Circle> {
    let circle = other.as_any().downcast_ref::<CircleCollider>();
    if circle.is_none() {
        trace!("Circle collider paired with unsupported shape {other:?}");
    }
    circle.map(|c| c.world_circle(other_pose))
}

impl Collider for CircleCollider {
    fn overlaps(&self, pose: &Mat3, other: &dyn Collider, other_pose: &Mat3) -> bool {
        other_circle(other, other_pose)
            .is_some_and(|circle| self.world_circle(pose).intersects(&circle))
    }

    fn contains_point(&self, pose: &Mat3, point: Vec2) -> bool {
        self.world_circle(pose).contains(point)
    }

    fn time_of_impact(
        &self,
        pose: &Mat3,
        other: &dyn Collider,
        other_pose: &Mat3,
        velocity: Vec2,
    ) -> Impact {
        other_circle(other, other_pose)
            .map_or_else(Impact::none, |circle| self.world_circle(pose).sweep(&circle, velocity))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
