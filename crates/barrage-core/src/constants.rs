//! Simulation constants and tuning parameters.
//!
//! Every period in this crate is a tick count; the engine tick counter is
//! the only timing authority.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 20;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Volley trigger ---

/// Ticks between volley firings while a bombardment is active.
pub const VOLLEY_PERIOD_TICKS: u64 = 40;

/// Distance from the muzzle part to the shell spawn point (blocks).
pub const MUZZLE_OFFSET: f64 = 1.0;

// --- Shell flight ---

/// Blocks travelled along the aim direction per flight step.
pub const SHELL_STEP_LENGTH: f64 = 0.4;

/// Downward offset applied each step, scaled by step index squared.
/// Decorative droop only, not integrated gravity.
pub const SHELL_DROOP_COEFF: f64 = 0.00004;

/// Maximum flight steps before a shell self-detonates.
pub const SHELL_MAX_STEPS: u32 = 120;

/// Flight step at which the launch report is heard.
pub const LAUNCH_CUE_STEP: u32 = 1;

/// A fuse crackle is heard every this many flight steps.
pub const FUSE_CUE_INTERVAL: u32 = 10;

/// Smoke puffs emitted per flight step.
pub const SMOKE_TRAIL_COUNT: u32 = 1;

/// Tracer glints emitted per flight step.
pub const TRACER_GLOW_COUNT: u32 = 3;

// --- Strike detection ---

/// Half-extent of the cubic strike shape carried by shells and grid probes.
pub const STRIKE_HALF_EXTENT: f64 = 0.5;

/// Damage applied to each actor caught in a detonation.
pub const SHELL_DAMAGE: f64 = 17.0;

// --- Detonation timeline ---

/// Total steps in a detonation timeline.
pub const DETONATION_MAX_STEPS: u32 = 30;

/// Only steps that are a multiple of this stride perform work.
pub const DETONATION_SAMPLE_STRIDE: u32 = 5;

/// Angular subdivisions of the burst sphere grid (11 × 11 points).
pub const BURST_GRID_DIVISIONS: usize = 10;

/// Grid points whose running index is a multiple of this also emit a
/// large blast plume.
pub const BLAST_PLUME_STRIDE: usize = 3;

/// Flame particles emitted per burst grid point.
pub const BURST_FLAME_COUNT: u32 = 2;

/// Blast plumes emitted at a plume-stride grid point.
pub const BLAST_PLUME_COUNT: u32 = 1;

/// Half-width of the jitter applied to burst particle locations (blocks).
pub const PARTICLE_JITTER: f64 = 0.1;

// --- Supply search ---

/// Half-extents of the container search volume around the gunner
/// (x/y horizontal, z vertical).
pub const SUPPLY_SEARCH_HALF_X: f64 = 4.0;
pub const SUPPLY_SEARCH_HALF_Y: f64 = 4.0;
pub const SUPPLY_SEARCH_HALF_Z: f64 = 2.0;

// --- Cue parameters ---

/// Launch report volume and pitch.
pub const LAUNCH_CUE_VOLUME: f32 = 3.0;
pub const LAUNCH_CUE_PITCH: f32 = 0.933;

/// Fuse crackle volume and pitch.
pub const FUSE_CUE_VOLUME: f32 = 3.0;
pub const FUSE_CUE_PITCH: f32 = 0.933;

/// Detonation boom volume and pitch.
pub const DETONATION_CUE_VOLUME: f32 = 1.0;
pub const DETONATION_CUE_PITCH: f32 = 1.933;

// --- Actors ---

/// Default hit points for gunners and practice targets.
pub const DEFAULT_ACTOR_HP: f64 = 20.0;
