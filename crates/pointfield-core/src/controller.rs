use log::debug;

use crate::array2d::{Point2DArray, Vec2DArray};
use crate::error::{check_count, Result};
use crate::point2d::Point2D;
use crate::vec2d::Vec2D;

/// SoA particle storage
///
/// Three bulk stores share one `count`/`max` pair, and slot `i` in each of
/// them belongs to the same particle. There are no particle objects: a
/// particle is its index.
///
/// No simulation happens here. Callers read, compute, and write back.
/// Index preconditions are those of [`crate::array2d::Array2D`].
#[derive(Debug)]
pub struct ParticleController {
    count: usize,
    max: usize,
    /// `(age, time to live)` packed into the x and y buffers
    life: Vec2DArray,
    /// Current position
    vertices: Point2DArray,
    /// Displacement per tick
    velocities: Vec2DArray,
}

impl ParticleController {
    pub fn new(count: usize, max: usize) -> Result<Self> {
        check_count(count, max)?;
        debug!("particle controller: count={count} max={max}");
        Ok(Self {
            count,
            max,
            life: Vec2DArray::new(count, max)?,
            vertices: Point2DArray::new(count, max)?,
            velocities: Vec2DArray::new(count, max)?,
        })
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn max(&self) -> usize {
        self.max
    }

    /// Resize the active window of all three stores together.
    pub fn set_count(&mut self, count: usize) -> Result<&mut Self> {
        check_count(count, self.max)?;
        // cannot fail past the check above, so the stores never disagree
        self.life.set_count(count)?;
        self.vertices.set_count(count)?;
        self.velocities.set_count(count)?;
        self.count = count;
        Ok(self)
    }

    /// Shrink all three stores to `count`; never fails, never grows.
    pub fn truncate(&mut self, count: usize) -> &mut Self {
        let count = self.count.min(count);
        self.life.truncate(count);
        self.vertices.truncate(count);
        self.velocities.truncate(count);
        self.count = count;
        self
    }

    #[inline]
    pub fn get_life(&self, i: usize) -> f32 {
        self.life.get_x(i)
    }

    #[inline]
    pub fn set_life(&mut self, i: usize, life: f32) -> &mut Self {
        self.life.set_x(i, life);
        self
    }

    #[inline]
    pub fn get_ttl(&self, i: usize) -> f32 {
        self.life.get_y(i)
    }

    #[inline]
    pub fn set_ttl(&mut self, i: usize, ttl: f32) -> &mut Self {
        self.life.set_y(i, ttl);
        self
    }

    #[inline]
    pub fn get_vertex(&self, i: usize) -> [f32; 2] {
        self.vertices.get(i)
    }

    pub fn get_vertex_point2d(&self, i: usize) -> Point2D {
        self.vertices.get_point2d(i)
    }

    #[inline]
    pub fn set_vertex(&mut self, i: usize, x: f32, y: f32) -> &mut Self {
        self.vertices.set(i, x, y);
        self
    }

    #[inline]
    pub fn get_velocity(&self, i: usize) -> [f32; 2] {
        self.velocities.get(i)
    }

    pub fn get_velocity_vec2d(&self, i: usize) -> Vec2D {
        self.velocities.get_vec2d(i)
    }

    #[inline]
    pub fn set_velocity(&mut self, i: usize, x: f32, y: f32) -> &mut Self {
        self.velocities.set(i, x, y);
        self
    }

    /// Zero particle `i` in every store.
    pub fn reset(&mut self, i: usize) -> &mut Self {
        self.life.reset(i);
        self.vertices.reset(i);
        self.velocities.reset(i);
        self
    }

    pub fn life(&self) -> &Vec2DArray {
        &self.life
    }

    pub fn vertices(&self) -> &Point2DArray {
        &self.vertices
    }

    pub fn velocities(&self) -> &Vec2DArray {
        &self.velocities
    }

    /// Mutable access to a store for bulk passes such as
    /// [`crate::array2d::Array2D::update`]. The window itself is changed
    /// through [`ParticleController::set_count`] only.
    pub fn life_mut(&mut self) -> StoreMut<'_, Vec2D> {
        StoreMut(&mut self.life)
    }

    pub fn vertices_mut(&mut self) -> StoreMut<'_, Point2D> {
        StoreMut(&mut self.vertices)
    }

    pub fn velocities_mut(&mut self) -> StoreMut<'_, Vec2D> {
        StoreMut(&mut self.velocities)
    }
}

/// Mutable handle on one of the controller's stores that cannot move its
/// `count` out of step with the other two.
pub struct StoreMut<'a, T>(&'a mut crate::array2d::Array2D<T>);

impl<'a, T> StoreMut<'a, T> {
    pub fn set(&mut self, i: usize, x: f32, y: f32) -> &mut Self {
        self.0.set(i, x, y);
        self
    }

    pub fn buffers_mut(&mut self) -> (&mut [f32], &mut [f32]) {
        self.0.buffers_mut()
    }

    pub fn update<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(usize, &mut f32, &mut f32) + Send + Sync,
    {
        self.0.update(f);
        self
    }
}

impl<T> std::ops::Deref for StoreMut<'_, T> {
    type Target = crate::array2d::Array2D<T>;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
