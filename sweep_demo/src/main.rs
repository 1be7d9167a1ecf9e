//! Sweep demo
//!
//! Bounces a circle body around a field of randomly scattered obstacles,
//! stopping it at every contact with `move_until_collision` and reflecting
//! its velocity about the reported normal. Each frame is rendered into a
//! sink that logs the world position of every drawn node.

use rand::Rng;
use scene_engine::prelude::*;
use scene_engine::scene::TransformStack;
use thiserror::Error;

const FRAMES: usize = 240;
const OBSTACLE_COUNT: usize = 12;
const FIELD_HALF_EXTENT: f32 = 20.0;
const PLAYER_RADIUS: f32 = 0.75;
const OBSTACLE_RADIUS: f32 = 1.5;
const PLAYER_SPEED: f32 = 0.6;
const ARENA_ROTATION_PER_FRAME: f32 = 0.25;

/// Demo errors
#[derive(Error, Debug)]
enum DemoError {
    /// Scene operation failed
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
}

/// Render sink that logs where each node ends up
struct LogSink {
    stack: TransformStack,
}

impl LogSink {
    fn new() -> Self {
        Self {
            stack: TransformStack::new(),
        }
    }
}

impl RenderSink for LogSink {
    fn push_transform(&mut self, matrix: &Mat3) {
        self.stack.push_transform(matrix);
        let world = self.stack.current();
        log::trace!(
            "{:indent$}draw at ({:.2}, {:.2})",
            "",
            world[(0, 2)],
            world[(1, 2)],
            indent = self.stack.depth() * 2
        );
    }

    fn pop_transform(&mut self) {
        self.stack.pop_transform();
    }
}

struct SweepDemo {
    scene: Scene,
    world: NodeId,
    arena: NodeId,
    player: NodeId,
    velocity: Vec2,
    contacts: usize,
}

impl SweepDemo {
    fn new(mut scene: Scene) -> Self {
        let world = scene.spawn("world", Pivot);
        let arena = scene.spawn("arena", Pivot);
        let player = scene.spawn("player", CircleBody::new(PLAYER_RADIUS));

        Self {
            scene,
            world,
            arena,
            player,
            velocity: Vec2::new(PLAYER_SPEED, PLAYER_SPEED * 0.35),
            contacts: 0,
        }
    }

    fn initialize(&mut self) -> Result<(), DemoError> {
        log::info!("Initializing sweep demo...");
        self.scene.add_child(self.world, self.arena)?;
        self.scene.add_child(self.arena, self.player)?;

        let mut rng = rand::thread_rng();
        for i in 0..OBSTACLE_COUNT {
            let rock = self.scene.spawn(format!("rock{i}"), CircleBody::new(OBSTACLE_RADIUS));
            let x = rng.gen_range(-FIELD_HALF_EXTENT..FIELD_HALF_EXTENT);
            let y = rng.gen_range(-FIELD_HALF_EXTENT..FIELD_HALF_EXTENT);
            // Keep the spawn point clear
            if x.hypot(y) < OBSTACLE_RADIUS + PLAYER_RADIUS + 1.0 {
                self.scene.destroy(rock);
                continue;
            }
            self.scene.add_child(self.world, rock)?;
            self.scene.node_mut(rock)?.transform_mut().set_xy(x, y);
        }

        log::info!(
            "Scene ready with {} nodes ({} tracked)",
            self.scene.len(),
            self.scene.registry().tracked().len()
        );
        Ok(())
    }

    fn run(&mut self) -> Result<(), DemoError> {
        for frame in 0..FRAMES {
            self.update(frame)?;
            self.render_frame()?;
        }
        log::info!("Finished {FRAMES} frames with {} contacts", self.contacts);
        Ok(())
    }

    fn update(&mut self, frame: usize) -> Result<(), DemoError> {
        // The arena slowly turns, so parent-space moves curve in world space
        self.scene.node_mut(self.arena)?.transform_mut().rotate(ARENA_ROTATION_PER_FRAME);

        let normal = self.scene.move_until_collision(self.player, self.velocity)?;
        if normal != Vec2::zeros() {
            self.contacts += 1;
            // Normal is in world space; reflect in the arena's frame
            let local_normal = self
                .scene
                .inverse_transform_direction(self.arena, normal)?
                .try_normalize(f32::EPSILON)
                .unwrap_or(normal);
            self.velocity -= 2.0 * self.velocity.dot(&local_normal) * local_normal;
            log::debug!(
                "Frame {frame}: contact, normal ({:.2}, {:.2})",
                normal.x,
                normal.y
            );
        }

        let position = self.scene.node(self.player)?.transform().position;
        if position.x.abs() > FIELD_HALF_EXTENT || position.y.abs() > FIELD_HALF_EXTENT {
            self.velocity = -self.velocity;
        }
        Ok(())
    }

    fn render_frame(&mut self) -> Result<(), DemoError> {
        let mut sink = LogSink::new();
        self.scene.render(self.world, &mut sink)?;
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting sweep demo");

    let scene = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading scene config from {path}");
            Scene::from_config_file(&path)?
        }
        None => Scene::default(),
    };

    let mut app = SweepDemo::new(scene);
    app.initialize()?;

    match app.run() {
        Ok(()) => {
            log::info!("Sweep demo completed successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Sweep demo failed: {e:?}");
            Err(e.into())
        }
    }
}
