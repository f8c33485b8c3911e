//! Movement engine: continuous motion blended with a discrete grid step.
//!
//! Every frame the head advances along its heading and the tail slides
//! toward the part ahead of it, so the body never visibly jumps. Every lag
//! interval the whole chain snaps one cell forward ("follow the leader"),
//! which is also when self-collision is checked. Apples are picked up on
//! the snapped head cell after a step and again after every frame's motion.

use glam::DVec3;
use log::{debug, info, trace};

use snake3d_core::config::GameConfig;
use snake3d_core::enums::StepStatus;
use snake3d_core::error::SimError;
use snake3d_core::events::GameEvent;
use snake3d_core::types::AppleId;

use crate::store::EntityStore;
use crate::systems::wrap::BoundaryWrapper;

#[derive(Debug, Clone)]
pub struct MovementEngine {
    lag_interval: f64,
    cell_size: f64,
    epsilon: f64,
    snap_threshold: f64,
    wrapper: BoundaryWrapper,
    elapsed: f64,
    /// Tail direction used on the previous frame.
    tail_direction: DVec3,
    /// Scratch list of consumed apples, reused across frames.
    eaten: Vec<(AppleId, DVec3)>,
}

impl MovementEngine {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            lag_interval: config.lag_interval,
            cell_size: config.cell_size,
            epsilon: config.collision_epsilon,
            snap_threshold: config.tail_snap_threshold,
            wrapper: BoundaryWrapper::from_config(config),
            elapsed: 0.0,
            tail_direction: DVec3::ZERO,
            eaten: Vec::new(),
        }
    }

    /// Advance the snake by `dt` seconds.
    ///
    /// Returns `StepStatus::Lost` if the discrete step found the head on the
    /// body; nothing else moves on that frame.
    pub fn update(
        &mut self,
        store: &mut EntityStore,
        dt: f64,
        events: &mut Vec<GameEvent>,
    ) -> Result<StepStatus, SimError> {
        self.elapsed += dt;
        let mut eaten = 0;

        // 1. Discrete step, then pickup on the freshly snapped head cell.
        if self.elapsed > self.lag_interval {
            self.elapsed = 0.0;
            let parts = store.require_snake_mut()?.parts_mut();
            if discrete_step(parts, self.cell_size, self.epsilon) == StepStatus::Lost {
                info!("head collided with body at {}", parts[0]);
                return Ok(StepStatus::Lost);
            }
            trace!("discrete step, head now at {}", parts[0]);
            eaten += self.pick_up_apples(store, events)?;
        }

        // 2. Continuous motion.
        let snake = store.require_snake_mut()?;
        let distance = dt * snake.speed;
        let heading = snake.heading;
        let parts = snake.parts_mut();
        parts[0] = self.wrapper.wrap(parts[0] + heading.vector() * distance);

        let last = parts.len() - 1;
        let target = parts[last - 1];
        let position = parts[last];
        let direction = if target.distance(position) > self.snap_threshold {
            self.tail_direction
        } else {
            (target - position)
                .try_normalize()
                .unwrap_or(self.tail_direction)
        };
        self.tail_direction = direction;
        parts[last] = self.wrapper.wrap(position + direction * distance);

        // 3. Apple pickup.
        eaten += self.pick_up_apples(store, events)?;
        if eaten > 0 {
            let length = store.require_snake()?.len();
            events.push(GameEvent::SnakeGrew { length });
        }

        Ok(StepStatus::Continue)
    }

    /// Consume every apple touching the head and grow once per apple.
    /// Returns the number of apples eaten.
    fn pick_up_apples(
        &mut self,
        store: &mut EntityStore,
        events: &mut Vec<GameEvent>,
    ) -> Result<usize, SimError> {
        self.eaten.clear();

        let head = store.require_snake()?.head();
        for (id, apple) in store.apples() {
            if head.distance(apple.position) < self.epsilon {
                self.eaten.push((id, apple.position));
            }
        }

        let snake = store.require_snake_mut()?;
        for _ in 0..self.eaten.len() {
            snake.grow();
        }

        for &(id, position) in &self.eaten {
            store.despawn_apple(id);
            debug!("apple {id} eaten at {position}");
            events.push(GameEvent::AppleEaten { id, position });
        }

        Ok(self.eaten.len())
    }

    /// Forget timers and the remembered tail direction.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.tail_direction = DVec3::ZERO;
    }
}

/// Collision check followed by the grid shift.
///
/// The head is tested against every other part before anything moves. If it
/// is clear, each part from the tail forward takes the snapped position of
/// the part ahead of it, and finally the head itself is snapped.
pub fn discrete_step(parts: &mut [DVec3], cell_size: f64, epsilon: f64) -> StepStatus {
    if head_collides(parts, epsilon) {
        return StepStatus::Lost;
    }

    for i in (1..parts.len()).rev() {
        parts[i] = snap_to_cell(parts[i - 1], cell_size);
    }
    parts[0] = snap_to_cell(parts[0], cell_size);

    StepStatus::Continue
}

/// Nearest cell centre in the board plane. Height is left alone.
pub fn snap_to_cell(position: DVec3, cell_size: f64) -> DVec3 {
    DVec3::new(
        (position.x / cell_size).round() * cell_size,
        position.y,
        (position.z / cell_size).round() * cell_size,
    )
}

/// True if the head is within `epsilon` of any other part.
pub fn head_collides(parts: &[DVec3], epsilon: f64) -> bool {
    let Some((head, body)) = parts.split_first() else {
        return false;
    };
    body.iter().any(|part| head.distance(*part) < epsilon)
}
