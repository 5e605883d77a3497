//! Render events emitted by the simulation for the host's audio and
//! particle systems. Fire-and-forget: the core never consults a result.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Sound cues keyed by the host to concrete audio assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CueKind {
    /// Muzzle report shortly after a shell leaves the barrel.
    LaunchBoom,
    /// Periodic crackle along the shell's flight path.
    FuseCrackle,
    /// Detonation report at the center of a burst.
    DetonationBoom,
}

/// Particle kinds keyed by the host to concrete effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    /// Grey puff trailing the shell.
    SmokeTrail,
    /// Bright glint marking the shell itself.
    TracerGlow,
    /// Flame on the expanding burst sphere.
    Flame,
    /// Large plume on selected burst grid points.
    BlastPlume,
}

/// Render events for the frontend effect systems.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderEvent {
    /// Play a positional sound cue.
    PlayCue {
        position: Position,
        cue: CueKind,
        volume: f32,
        pitch: f32,
    },
    /// Emit `count` particles of a kind at a position.
    EmitParticle {
        position: Position,
        kind: ParticleKind,
        count: u32,
    },
}
