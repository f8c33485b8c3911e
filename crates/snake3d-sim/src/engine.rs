//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the entity store, applies player commands, runs
//! every system in order once per frame, and produces `FrameSnapshot`s.
//! Completely headless, and deterministic for a given seed and input
//! sequence.

use std::collections::VecDeque;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use snake3d_core::commands::PlayerCommand;
use snake3d_core::config::GameConfig;
use snake3d_core::enums::{GamePhase, StepStatus};
use snake3d_core::error::SimError;
use snake3d_core::events::GameEvent;
use snake3d_core::input::InputSource;
use snake3d_core::render::RenderSink;
use snake3d_core::state::FrameSnapshot;
use snake3d_core::types::SimTime;

use crate::store::EntityStore;
use crate::systems;
use crate::systems::apple_spawner::AppleSpawner;
use crate::systems::input::InputResolver;
use crate::systems::movement::MovementEngine;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same apples.
    pub seed: u64,
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

/// The simulation engine. Owns the store and all sim state.
pub struct SimulationEngine {
    store: EntityStore,
    config: GameConfig,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    resolver: InputResolver,
    movement: MovementEngine,
    spawner: AppleSpawner,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Validate the config and build the starting world.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        let game = config.game;
        game.validate()?;

        let mut store = EntityStore::new();
        world_setup::setup_world(&mut store, &game)?;

        Ok(Self {
            store,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            resolver: InputResolver::new(game.lag_interval, game.initial_heading),
            movement: MovementEngine::new(&game),
            spawner: AppleSpawner::new(&game),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            config: game,
        })
    }

    /// Queue a player command for processing at the start of the next frame.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame of `dt` seconds and return the
    /// resulting snapshot.
    ///
    /// While paused or lost, commands are still processed but nothing moves
    /// and input is not read.
    pub fn frame(
        &mut self,
        dt: f64,
        input: &impl InputSource,
    ) -> Result<FrameSnapshot, SimError> {
        self.process_commands()?;

        if self.phase == GamePhase::Playing {
            self.run_systems(dt, input)?;
        }

        let events = std::mem::take(&mut self.events);
        Ok(self.build_snapshot(events))
    }

    /// Hand the current world to a render sink and present it.
    pub fn render(&self, sink: &mut impl RenderSink) {
        systems::render::run(&self.store, &self.config, sink);
    }

    /// Snapshot of the current state without events.
    pub fn snapshot(&self) -> FrameSnapshot {
        self.build_snapshot(Vec::new())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only access to the entity store.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Mutable access to the store, for arranging test scenarios.
    #[cfg(test)]
    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    fn build_snapshot(&self, events: Vec<GameEvent>) -> FrameSnapshot {
        systems::snapshot::build_snapshot(&self.store, self.time, self.phase, events)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) -> Result<(), SimError> {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command)?;
        }
        Ok(())
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) -> Result<(), SimError> {
        match command {
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Playing {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::Restart => self.restart()?,
        }
        Ok(())
    }

    fn restart(&mut self) -> Result<(), SimError> {
        world_setup::setup_world(&mut self.store, &self.config)?;
        self.resolver.reset(self.config.initial_heading);
        self.movement.reset();
        self.time = SimTime::default();
        self.phase = GamePhase::Playing;
        info!("game restarted");
        Ok(())
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64, input: &impl InputSource) -> Result<(), SimError> {
        let snake = self.store.require_snake_mut()?;

        // 1. Input resolution
        self.resolver.sample(snake.heading, input);
        if input.grow_held() {
            snake.grow();
            self.events.push(GameEvent::SnakeGrew {
                length: snake.len(),
            });
        }

        // 2. Heading commit
        if let Some((from, to)) = self.resolver.commit(snake, dt) {
            if from != to {
                debug!("heading {from:?} -> {to:?}");
                self.events.push(GameEvent::HeadingChanged { from, to });
            }
        }

        // 3. Discrete step, continuous motion, pickup
        let status = self.movement.update(&mut self.store, dt, &mut self.events)?;
        self.time.advance(dt);

        if status == StepStatus::Lost {
            let length = self.store.require_snake()?.len();
            info!(
                "snake lost at frame {} with {length} parts",
                self.time.frame
            );
            self.events.push(GameEvent::SnakeLost {
                frame: self.time.frame,
                length,
            });
            self.phase = GamePhase::Lost;
            return Ok(());
        }

        // 4. Apple spawning
        self.spawner
            .update(&mut self.store, &mut self.rng, &mut self.events)?;

        Ok(())
    }
}
