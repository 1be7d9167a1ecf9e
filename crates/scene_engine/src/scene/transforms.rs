//! Coordinate-space conversions through the hierarchy
//!
//! World-space values are never cached: each call walks from the node up to
//! its root and composes the local transforms on the way.

use super::error::Result;
use super::Scene;
use crate::foundation::collections::NodeId;
use crate::foundation::math::{Mat3, Transformable, Vec2};

impl Scene {
    /// Map a point from the node's local space to world space
    pub fn transform_point(&self, id: NodeId, point: Vec2) -> Result<Vec2> {
        let node = self.node(id)?;
        let in_parent = node.transform().transform_local_point(point);
        match node.parent() {
            Some(parent) => self.transform_point(parent, in_parent),
            None => Ok(in_parent),
        }
    }

    /// Map a direction from the node's local space to world space.
    /// Only rotation and scale apply.
    pub fn transform_direction(&self, id: NodeId, direction: Vec2) -> Result<Vec2> {
        let node = self.node(id)?;
        let in_parent = node.transform().transform_local_direction(direction);
        match node.parent() {
            Some(parent) => self.transform_direction(parent, in_parent),
            None => Ok(in_parent),
        }
    }

    /// Map a point from world space to the node's local space
    pub fn inverse_transform_point(&self, id: NodeId, point: Vec2) -> Result<Vec2> {
        let node = self.node(id)?;
        let in_parent = match node.parent() {
            Some(parent) => self.inverse_transform_point(parent, point)?,
            None => point,
        };
        Ok(node.transform().inverse_transform_local_point(in_parent))
    }

    /// Map a direction from world space to the node's local space
    pub fn inverse_transform_direction(&self, id: NodeId, direction: Vec2) -> Result<Vec2> {
        let node = self.node(id)?;
        let in_parent = match node.parent() {
            Some(parent) => self.inverse_transform_direction(parent, direction)?,
            None => direction,
        };
        Ok(node.transform().inverse_transform_local_direction(in_parent))
    }

    /// Homogeneous local-to-world matrix of the node
    pub fn world_matrix(&self, id: NodeId) -> Result<Mat3> {
        let node = self.node(id)?;
        let local = node.transform().local_matrix();
        match node.parent() {
            Some(parent) => Ok(self.world_matrix(parent)? * local),
            None => Ok(local),
        }
    }

    /// World-space position of the node's origin
    pub fn world_position(&self, id: NodeId) -> Result<Vec2> {
        self.transform_point(id, Vec2::zeros())
    }
}

#[cfg(test)]
mod tests {
    use crate::foundation::collections::NodeId;
    use crate::foundation::math::{Point2, Vec2};
    use crate::scene::{Pivot, Scene};
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-4;

    fn chain() -> (Scene, [NodeId; 3]) {
        let mut scene = Scene::default();
        let root = scene.spawn("root", Pivot);
        let mid = scene.spawn("mid", Pivot);
        let leaf = scene.spawn("leaf", Pivot);
        scene.add_child(root, mid).unwrap();
        scene.add_child(mid, leaf).unwrap();

        {
            let t = scene.node_mut(root).unwrap().transform_mut();
            t.set_xy(100.0, 50.0);
            t.rotation = 90.0;
        }
        {
            let t = scene.node_mut(mid).unwrap().transform_mut();
            t.set_xy(10.0, 0.0);
            t.set_scale(2.0, 2.0);
        }
        scene.node_mut(leaf).unwrap().transform_mut().set_xy(3.0, 1.0);
        (scene, [root, mid, leaf])
    }

    #[test]
    fn test_root_transform_is_local() {
        let mut scene = Scene::default();
        let root = scene.spawn("root", Pivot);
        scene.node_mut(root).unwrap().transform_mut().set_xy(4.0, -2.0);

        assert_relative_eq!(scene.transform_point(root, Vec2::new(1.0, 1.0)).unwrap(), Vec2::new(5.0, -1.0));
    }

    #[test]
    fn test_three_level_composition() {
        let (scene, [_, _, leaf]) = chain();

        // leaf origin -> mid: (3,1) -> scaled by mid (6,2) + (10,0) = (16,2)
        // -> root: rotate 90 => (-2,16) + (100,50) = (98,66)
        let world = scene.transform_point(leaf, Vec2::zeros()).unwrap();
        assert_relative_eq!(world, Vec2::new(98.0, 66.0), epsilon = EPSILON);
        assert_relative_eq!(scene.world_position(leaf).unwrap(), world, epsilon = EPSILON);
    }

    #[test]
    fn test_direction_ignores_translation() {
        let (scene, [_, _, leaf]) = chain();

        let dir = scene.transform_direction(leaf, Vec2::new(1.0, 0.0)).unwrap();
        assert_relative_eq!(dir, Vec2::new(0.0, 2.0), epsilon = EPSILON);
    }

    #[test]
    fn test_inverse_roundtrip() {
        let (scene, [_, mid, leaf]) = chain();
        let p = Vec2::new(-7.5, 12.25);

        let local = scene.inverse_transform_point(leaf, p).unwrap();
        assert_relative_eq!(scene.transform_point(leaf, local).unwrap(), p, epsilon = EPSILON);

        let local_dir = scene.inverse_transform_direction(mid, p).unwrap();
        assert_relative_eq!(scene.transform_direction(mid, local_dir).unwrap(), p, epsilon = EPSILON);
    }

    #[test]
    fn test_world_matrix_matches_point_mapping() {
        let (scene, [_, _, leaf]) = chain();
        let p = Vec2::new(0.5, -1.5);

        let via_matrix = scene.world_matrix(leaf).unwrap().transform_point(&Point2::from(p)).coords;
        assert_relative_eq!(via_matrix, scene.transform_point(leaf, p).unwrap(), epsilon = EPSILON);
    }

    #[test]
    fn test_reparenting_changes_world_position() {
        let (mut scene, [root, mid, leaf]) = chain();
        scene.set_parent(leaf, Some(root)).unwrap();
        // (3,1) rotated 90 => (-1,3) + (100,50)
        assert_relative_eq!(scene.world_position(leaf).unwrap(), Vec2::new(99.0, 53.0), epsilon = EPSILON);

        scene.set_parent(leaf, None).unwrap();
        assert_relative_eq!(scene.world_position(leaf).unwrap(), Vec2::new(3.0, 1.0), epsilon = EPSILON);
        assert!(scene.children(mid).unwrap().is_empty());
    }
}
