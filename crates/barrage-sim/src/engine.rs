//! Simulation engine — the core of the bombardment ability.
//!
//! `SimulationEngine` owns the hecs ECS world, the tick scheduler, and the
//! detonation registry; it processes player commands, runs all systems, and
//! produces `GameStateSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::{HashMap, VecDeque};

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use barrage_core::commands::PlayerCommand;
use barrage_core::enums::GamePhase;
use barrage_core::events::RenderEvent;
use barrage_core::state::GameStateSnapshot;
use barrage_core::types::SimTime;

use crate::detonation::{Detonation, Stats};
use crate::scheduler::{TaskHandle, TickScheduler};
use crate::systems;
use crate::terrain::BlockMap;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    render_events: Vec<RenderEvent>,

    scheduler: TickScheduler,
    /// Active volley trigger per cannon number. The only state shared across
    /// toggle invocations; updated together with the scheduler inside
    /// `tick()`, so a toggle is one atomic read-modify-write.
    bombardments: HashMap<u32, TaskHandle>,
    detonations: HashMap<u32, Detonation>,
    next_detonation_id: u32,
    stats: Stats,
    terrain: BlockMap,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    /// The world starts empty; hosts populate it through `world_mut` and
    /// the `world_setup` factories, and shape terrain through `terrain_mut`.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            render_events: Vec::new(),
            scheduler: TickScheduler::new(),
            bombardments: HashMap::new(),
            detonations: HashMap::new(),
            next_detonation_id: 0,
            stats: Stats::default(),
            terrain: BlockMap::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let render_events = std::mem::take(&mut self.render_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.bombardments,
            &self.detonations,
            &self.stats,
            render_events,
        )
    }

    /// Get the current simulation phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world (for host world setup).
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get a read-only reference to the block map.
    pub fn terrain(&self) -> &BlockMap {
        &self.terrain
    }

    /// Get a mutable reference to the block map (for host world setup).
    pub fn terrain_mut(&mut self) -> &mut BlockMap {
        &mut self.terrain
    }

    /// Get a read-only reference to the active bombardment registry.
    #[cfg(test)]
    pub fn bombardments(&self) -> &HashMap<u32, TaskHandle> {
        &self.bombardments
    }

    /// Get a read-only reference to the detonation registry.
    #[cfg(test)]
    pub fn detonations(&self) -> &HashMap<u32, Detonation> {
        &self.detonations
    }

    /// Get a read-only reference to the running tallies.
    #[cfg(test)]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Get a read-only reference to the tick scheduler.
    #[cfg(test)]
    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::ToggleBombardment { cannon_number } => {
                systems::bombardment::toggle(
                    &self.world,
                    &mut self.scheduler,
                    &mut self.bombardments,
                    cannon_number,
                    self.time.tick,
                );
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Volley trigger (consume charge, spawn shell / self-cancel)
        systems::bombardment::fire_due_volleys(
            &mut self.world,
            &mut self.scheduler,
            &mut self.bombardments,
            &mut self.stats,
            self.time.tick,
        );
        // 2. Shell flight (advance, terminate, register detonations)
        systems::shell_flight::run(
            &mut self.world,
            &self.terrain,
            &mut self.detonations,
            &mut self.next_detonation_id,
            &mut self.stats,
            &mut self.render_events,
            &mut self.despawn_buffer,
        );
        // 3. Detonation timelines (area damage + burst grid)
        systems::blast::run(
            &mut self.world,
            &mut self.detonations,
            &mut self.rng,
            &mut self.stats,
            &mut self.render_events,
        );
        // 4. Cleanup (actors at zero hit points)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}
