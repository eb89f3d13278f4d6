use glam::Vec2;
use log::{debug, trace};

use crate::array2d::Point2DArray;
use crate::config::FieldConfig;
use crate::controller::ParticleController;
use crate::error::{Error, Result};
use crate::math::{rand, rand_range};
use crate::point2d::Point2D;

/// One stroke for the drawing layer: previous position to current position.
///
/// `#[repr(C)]` and `Pod`, so a `&[Segment]` can be handed to a canvas or GPU
/// as a flat float buffer of stride [`Segment::STRIDE`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Segment {
    pub from: [f32; 2], //  8 bytes
    pub to: [f32; 2],   //  8 bytes
    pub alpha: f32,     //  4 bytes
}

impl Segment {
    /// Floats per segment.
    pub const STRIDE: usize = std::mem::size_of::<Segment>() / std::mem::size_of::<f32>();
}

/// Reference animation driver on top of [`ParticleController`].
///
/// Each tick every active particle ages by one, remembers where it was,
/// moves by its velocity, and respawns once it has outlived its TTL or
/// left the bounds. The previous positions are kept so a drawing layer can
/// stroke a segment per particle.
pub struct ParticleField {
    pub config: FieldConfig,
    particles: ParticleController,
    previous: Point2DArray,
    seed: u32,
}

impl ParticleField {
    pub fn new(config: FieldConfig, seed: u32) -> Result<Self> {
        let particles = ParticleController::new(config.count, config.max)?;
        let previous = Point2DArray::new(config.count, config.max)?;
        let mut field = Self { config, particles, previous, seed };

        // stagger ages so the initial population does not expire in one tick
        for i in 0..field.config.count {
            field.spawn(i);
            let age = rand(&mut field.seed, field.config.max_ttl).round();
            field.particles.set_life(i, age);
        }

        debug!(
            "particle field: count={} max={} bounds={:?}",
            field.config.count, field.config.max, field.config.bounds
        );
        Ok(field)
    }

    pub fn particles(&self) -> &ParticleController {
        &self.particles
    }

    /// Position of every particle before the last [`ParticleField::step`].
    pub fn previous(&self) -> &Point2DArray {
        &self.previous
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.particles.count()
    }

    /// Place particle `i` at a random point inside the bounds with a fresh
    /// lifetime and a random velocity.
    pub fn spawn(&mut self, i: usize) -> &mut Self {
        let FieldConfig { max_ttl, speed, bounds, .. } = self.config;
        let x = rand(&mut self.seed, bounds.x);
        let y = rand(&mut self.seed, bounds.y);
        let vx = rand_range(&mut self.seed, speed);
        let vy = rand_range(&mut self.seed, speed);

        self.particles
            .set_vertex(i, x, y)
            .set_life(i, 0.0)
            .set_ttl(i, max_ttl)
            .set_velocity(i, vx, vy);
        self.previous.set(i, x, y);
        self
    }

    /// Advance one tick. Returns how many particles respawned.
    pub fn step(&mut self) -> usize {
        let bounds = self.config.bounds;
        let mut respawned = 0;

        for i in 0..self.particles.count() {
            let life = self.particles.get_life(i) + 1.0;
            self.particles.set_life(i, life);

            let mut position = self.particles.get_vertex_point2d(i);
            self.previous.set_from_point2d(i, position);
            position.translate(self.particles.get_velocity_vec2d(i));
            self.particles.set_vertex(i, position.x(), position.y());

            if life >= self.particles.get_ttl(i) || out_of_bounds(position, bounds) {
                trace!("respawn particle {i} at age {life}");
                self.spawn(i);
                respawned += 1;
            }
        }

        respawned
    }

    /// Activate `n` more particles, spawning each new slot.
    pub fn add_particles(&mut self, n: usize) -> Result<&mut Self> {
        let start = self.particles.count();
        let max = self.particles.max();
        let end = start
            .checked_add(n)
            .ok_or(Error::CountExceedsMax { count: usize::MAX, max })?;

        self.particles.set_count(end)?;
        self.previous.set_count(end)?;
        for i in start..end {
            self.spawn(i);
        }
        Ok(self)
    }

    /// Deactivate the last `n` particles (or all of them, if fewer are
    /// active) and zero their slots.
    pub fn remove_particles(&mut self, n: usize) -> &mut Self {
        let end = self.particles.count();
        let start = end.saturating_sub(n);
        for i in start..end {
            self.particles.reset(i);
            self.previous.reset(i);
        }
        self.particles.truncate(start);
        self.previous.truncate(start);
        self
    }

    /// Opacity of particle `i` under the configured fade.
    pub fn alpha(&self, i: usize) -> f32 {
        self.config
            .fade
            .alpha(self.particles.get_life(i), self.particles.get_ttl(i))
    }

    /// One [`Segment`] per active particle, in index order.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.count()).map(move |i| Segment {
            from: self.previous.get(i),
            to: self.particles.get_vertex(i),
            alpha: self.alpha(i),
        })
    }

    /// Fill the front of `out` with [`ParticleField::segments`]. Returns how
    /// many were written, which is less than `count` only when `out` is short.
    pub fn write_segments(&self, out: &mut [Segment]) -> usize {
        let mut written = 0;
        for (slot, segment) in out.iter_mut().zip(self.segments()) {
            *slot = segment;
            written += 1;
        }
        written
    }
}

#[inline]
fn out_of_bounds(p: Point2D, bounds: Vec2) -> bool {
    p.x() < 0.0 || p.x() > bounds.x || p.y() < 0.0 || p.y() > bounds.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_edges_are_inside() {
        let bounds = Vec2::new(10.0, 5.0);
        assert!(!out_of_bounds(Point2D::new(0.0, 0.0), bounds));
        assert!(!out_of_bounds(Point2D::new(10.0, 5.0), bounds));
        assert!(out_of_bounds(Point2D::new(10.1, 1.0), bounds));
        assert!(out_of_bounds(Point2D::new(1.0, -0.1), bounds));
    }
}
