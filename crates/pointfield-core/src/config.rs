use glam::Vec2;

use crate::math::{fade_in, fade_in_out, fade_out};

/// How a particle's opacity follows its age.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Fade {
    None  = 0, // Fully opaque for the whole lifetime
    In    = 1, // Transparent at birth, opaque at death
    Out   = 2, // Opaque at birth, transparent at death
    InOut = 3, // Peaks halfway through the lifetime
}

impl Fade {
    pub fn alpha(self, life: f32, ttl: f32) -> f32 {
        match self {
            Fade::None => 1.0,
            Fade::In => fade_in(life, ttl),
            Fade::Out => fade_out(life, ttl),
            Fade::InOut => fade_in_out(life, ttl),
        }
    }
}

/// Tuning for [`crate::field::ParticleField`]. Passed in explicitly; there is
/// no shared configuration state.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Particles active at start
    pub count: usize,
    /// Capacity of every per-particle buffer
    pub max: usize,
    /// Lifetime in ticks given to freshly spawned particles
    pub max_ttl: f32,
    /// Per-axis bound on spawn velocity
    pub speed: f32,
    /// Width and height of the area particles live in
    pub bounds: Vec2,
    pub fade: Fade,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            max: 3000,
            max_ttl: 500.0,
            speed: 2.0,
            bounds: Vec2::new(800.0, 600.0),
            fade: Fade::InOut,
        }
    }
}
