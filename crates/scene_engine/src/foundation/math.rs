//! Math utilities and types
//!
//! Provides the 2D math types used by the scene graph, plus the local
//! transform every node owns.

pub use nalgebra::{Matrix3, Vector2};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// 3x3 homogeneous matrix type (2D affine transforms)
pub type Mat3 = Matrix3<f32>;

/// 2D rotation type
pub type Rotation2 = nalgebra::Rotation2<f32>;

/// Local-space transform capability.
///
/// Maps points and directions between an object's own local space and its
/// parent's space. Implementations know nothing about ancestors; composition
/// through the hierarchy is done by the scene.
pub trait Transformable {
    /// Map a local point into parent space
    fn transform_local_point(&self, point: Vec2) -> Vec2;

    /// Map a local direction into parent space, ignoring translation
    fn transform_local_direction(&self, direction: Vec2) -> Vec2;

    /// Map a parent-space point into local space
    fn inverse_transform_local_point(&self, point: Vec2) -> Vec2;

    /// Map a parent-space direction into local space, ignoring translation
    fn inverse_transform_local_direction(&self, direction: Vec2) -> Vec2;

    /// Homogeneous local-to-parent matrix
    fn local_matrix(&self) -> Mat3;
}

/// Transform representing position, rotation, and scale in 2D
///
/// Rotation is stored in degrees, counter-clockwise. A local point is scaled,
/// then rotated, then translated into parent space.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform2D {
    /// Position in parent space
    pub position: Vec2,

    /// Rotation in degrees
    pub rotation: f32,

    /// Scale factors
    pub scale: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }
}

impl Transform2D {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Builder pattern: Set position
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// Builder pattern: Set rotation in degrees
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Builder pattern: Set scale (uniform)
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec2::new(scale, scale);
        self
    }

    /// Builder pattern: Set scale (non-uniform)
    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    /// X coordinate in parent space
    pub fn x(&self) -> f32 {
        self.position.x
    }

    /// Y coordinate in parent space
    pub fn y(&self) -> f32 {
        self.position.y
    }

    /// Set the position in parent space
    pub fn set_xy(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Move by a parent-space offset
    pub fn translate(&mut self, offset: Vec2) {
        self.position += offset;
    }

    /// Add to the rotation, in degrees
    pub fn rotate(&mut self, degrees: f32) {
        self.rotation += degrees;
    }

    /// Set both scale factors
    pub fn set_scale(&mut self, sx: f32, sy: f32) {
        self.scale = Vec2::new(sx, sy);
    }

    fn rotation_2d(&self) -> Rotation2 {
        Rotation2::new(utils::deg_to_rad(self.rotation))
    }
}

impl Transformable for Transform2D {
    fn transform_local_point(&self, point: Vec2) -> Vec2 {
        self.transform_local_direction(point) + self.position
    }

    fn transform_local_direction(&self, direction: Vec2) -> Vec2 {
        self.rotation_2d() * direction.component_mul(&self.scale)
    }

    fn inverse_transform_local_point(&self, point: Vec2) -> Vec2 {
        self.inverse_transform_local_direction(point - self.position)
    }

    fn inverse_transform_local_direction(&self, direction: Vec2) -> Vec2 {
        let unrotated = self.rotation_2d().inverse() * direction;
        unrotated.component_div(&self.scale)
    }

    fn local_matrix(&self) -> Mat3 {
        Mat3::new_translation(&self.position)
            * self.rotation_2d().to_homogeneous()
            * Mat3::new_nonuniform_scaling(&self.scale)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_identity_maps_points_unchanged() {
        let transform = Transform2D::identity();
        let p = Vec2::new(3.0, -4.0);

        assert_relative_eq!(transform.transform_local_point(p), p, epsilon = EPSILON);
        assert_relative_eq!(transform.inverse_transform_local_point(p), p, epsilon = EPSILON);
    }

    #[test]
    fn test_scale_rotate_translate_order() {
        let transform = Transform2D::from_position(Vec2::new(10.0, 0.0))
            .with_rotation(90.0)
            .with_uniform_scale(2.0);

        // (1,0) -> scaled (2,0) -> rotated (0,2) -> translated (10,2)
        let p = transform.transform_local_point(Vec2::new(1.0, 0.0));
        assert_relative_eq!(p, Vec2::new(10.0, 2.0), epsilon = EPSILON);
    }

    #[test]
    fn test_direction_ignores_translation() {
        let transform = Transform2D::from_position(Vec2::new(100.0, 50.0)).with_rotation(180.0);
        let d = transform.transform_local_direction(Vec2::new(1.0, 0.0));

        assert_relative_eq!(d, Vec2::new(-1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_inverse_roundtrip_non_uniform_scale() {
        let transform = Transform2D::from_position(Vec2::new(-3.0, 7.0))
            .with_rotation(33.0)
            .with_scale(Vec2::new(2.0, 0.5));
        let p = Vec2::new(1.25, -8.0);

        let there = transform.transform_local_point(p);
        assert_relative_eq!(transform.inverse_transform_local_point(there), p, epsilon = 1e-4);

        let dir = transform.transform_local_direction(p);
        assert_relative_eq!(transform.inverse_transform_local_direction(dir), p, epsilon = 1e-4);
    }

    #[test]
    fn test_matrix_agrees_with_point_mapping() {
        let transform = Transform2D::from_position(Vec2::new(4.0, 2.0))
            .with_rotation(-45.0)
            .with_scale(Vec2::new(3.0, 1.5));
        let p = Vec2::new(0.5, 2.0);

        let via_matrix = transform.local_matrix().transform_point(&Point2::from(p)).coords;
        assert_relative_eq!(via_matrix, transform.transform_local_point(p), epsilon = EPSILON);
    }

    #[test]
    fn test_translate_and_set_xy() {
        let mut transform = Transform2D::identity();
        transform.set_xy(1.0, 2.0);
        transform.translate(Vec2::new(0.5, -1.0));

        assert_relative_eq!(transform.x(), 1.5);
        assert_relative_eq!(transform.y(), 1.0);
    }

    #[test]
    fn test_angle_conversions() {
        assert_relative_eq!(utils::deg_to_rad(180.0), constants::PI, epsilon = EPSILON);
        assert_relative_eq!(utils::rad_to_deg(constants::PI / 2.0), 90.0, epsilon = 1e-4);
    }
}
