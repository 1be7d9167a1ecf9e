//! # Scene Engine
//!
//! A 2D scene graph with hierarchical transforms and swept collision queries.
//!
//! ## Features
//!
//! - **Hierarchy**: arena-backed node tree with cycle protection and z-ordering
//! - **Transforms**: point and direction conversion through the ancestor chain
//! - **Collision**: overlap tests, point tests and time-of-impact sweeps
//! - **Lifecycle**: recursive, idempotent destruction with teardown hooks
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::prelude::*;
//!
//! let mut scene = Scene::default();
//! let root = scene.spawn("root", Pivot);
//! let ship = scene.spawn("ship", CircleBody::new(0.5));
//! let rock = scene.spawn("rock", CircleBody::new(0.5));
//! scene.add_child(root, ship).unwrap();
//! scene.node_mut(rock).unwrap().transform_mut().set_xy(4.0, 0.0);
//!
//! let normal = scene.move_until_collision(ship, Vec2::new(5.0, 0.0)).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod physics;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, SceneConfig},
        foundation::{
            collections::NodeId,
            math::{Mat3, Transform2D, Transformable, Vec2},
        },
        physics::{CircleCollider, Collider, Impact},
        scene::{CircleBody, Node, NodeBehavior, Pivot, RenderSink, Scene, SceneError},
    };
}
