//! Collision queries on scene nodes
//!
//! Discrete overlap and point tests, swept time of impact, and the
//! "move until collision" helpers built on top of them.

use super::collider::Impact;
use crate::foundation::collections::NodeId;
use crate::foundation::math::Vec2;
use crate::scene::{Result, Scene};
use log::trace;

impl Scene {
    /// Tests if two nodes overlap in world space.
    ///
    /// Nodes without a collider never collide.
    pub fn hit_test(&self, a: NodeId, b: NodeId) -> Result<bool> {
        let (node_a, node_b) = (self.node(a)?, self.node(b)?);
        let (Some(collider_a), Some(collider_b)) = (node_a.collider(), node_b.collider()) else {
            return Ok(false);
        };

        Ok(collider_a.overlaps(&self.world_matrix(a)?, collider_b, &self.world_matrix(b)?))
    }

    /// Tests if a world-space point lies inside the node's collider
    pub fn hit_test_point(&self, id: NodeId, point: Vec2) -> Result<bool> {
        let Some(collider) = self.node(id)?.collider() else {
            return Ok(false);
        };

        Ok(collider.contains_point(&self.world_matrix(id)?, point))
    }

    /// All other registered nodes currently overlapping `id`.
    ///
    /// Tests `id` against every node in the registry, so this is meant for
    /// convenience rather than inner loops.
    pub fn get_collisions(&self, id: NodeId) -> Result<Vec<NodeId>> {
        self.node(id)?;
        let overlaps = |other: NodeId| self.hit_test(id, other).unwrap_or(false);
        Ok(self.registry.collisions_for(id, &overlaps))
    }

    /// How far `a` can move by `velocity` before touching `b`.
    ///
    /// `velocity` is expressed in `a`'s parent space, like a translation. The
    /// returned fraction is `0.0` when the nodes already overlap and the move
    /// would deepen it, below `1.0` for a contact within the move (with the
    /// collision normal), and `1.0` or more otherwise.
    ///
    /// A node without a parent has no parent space to move in and reports no
    /// impact, as does a pair with a missing collider.
    pub fn time_of_impact(&self, a: NodeId, b: NodeId, velocity: Vec2) -> Result<Impact> {
        let (node_a, node_b) = (self.node(a)?, self.node(b)?);
        let (Some(collider_a), Some(collider_b), Some(parent)) =
            (node_a.collider(), node_b.collider(), node_a.parent())
        else {
            return Ok(Impact::none());
        };

        let world_velocity = self.transform_direction(parent, velocity)?;
        let impact = collider_a.time_of_impact(
            &self.world_matrix(a)?,
            collider_b,
            &self.world_matrix(b)?,
            world_velocity,
        );
        trace!("TOI {} -> {}: {:?}", node_a, node_b, impact);
        Ok(impact)
    }

    /// Moves `id` by `velocity` (parent space) until it touches one of
    /// `candidates`.
    ///
    /// Returns the collision normal of the first contact, or zero when the
    /// full move completes. On equal fractions the earliest candidate wins.
    pub fn move_until_collision_with(
        &mut self,
        id: NodeId,
        velocity: Vec2,
        candidates: &[NodeId],
    ) -> Result<Vec2> {
        self.node(id)?;
        if candidates.is_empty() {
            self.node_mut(id)?.transform_mut().translate(velocity);
            return Ok(Vec2::zeros());
        }

        let mut min_toi = 1.0;
        let mut normal = Vec2::zeros();
        for &other in candidates {
            let impact = self.time_of_impact(id, other, velocity)?;
            if impact.fraction < min_toi {
                min_toi = impact.fraction;
                normal = impact.normal;
            }
        }

        self.node_mut(id)?.transform_mut().translate(velocity * min_toi);
        Ok(normal)
    }

    /// Moves `id` by `velocity` (parent space) until it touches another
    /// registered node.
    ///
    /// Candidates are the nodes overlapping `id` at the destination, found
    /// with a discrete test. Obstacles passed over between start and end are
    /// not considered, so fast movers can tunnel through thin objects. Use
    /// [`Scene::move_until_collision_with`] when the candidate set is known.
    pub fn move_until_collision(&mut self, id: NodeId, velocity: Vec2) -> Result<Vec2> {
        let start = self.node(id)?.transform().position;

        self.node_mut(id)?.transform_mut().translate(velocity);
        let overlaps = self.get_collisions(id);
        self.node_mut(id)?.transform_mut().position = start;

        self.move_until_collision_with(id, velocity, &overlaps?)
    }
}
