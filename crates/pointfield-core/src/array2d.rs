use std::marker::PhantomData;
use std::ops::Range;

use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{check_count, Error, Result};
use crate::point2d::Point2D;
use crate::vec2d::{Vec2D, Xy};

/// Fixed-capacity SoA storage for many 2D values: one `f32` buffer per axis.
///
/// Both buffers are allocated once at length `max` and never resized. `count`
/// is the logical length: the active prefix `0..count` that callers iterate.
/// Growing or shrinking it only moves that window over the same storage.
///
/// `T` tags what the slots hold ([`Vec2D`] or [`Point2D`]) and decides which
/// value type the materializing accessors hand back. Values are copied out
/// and written back; nothing borrows into the buffers.
///
/// # Indexing
///
/// The per-index accessors are the per-frame hot path and do not compare
/// `i` against `count`: any `i < max` is accepted, including slots past the
/// active prefix. `i >= max` panics (with a descriptive message in debug
/// builds). Use [`Array2D::try_get`] / [`Array2D::try_set`] when the index
/// comes from outside the animation loop.
pub struct Array2D<T> {
    count: usize,
    max: usize,
    x: Vec<f32>,
    y: Vec<f32>,
    _kind: PhantomData<T>,
}

/// Bulk displacement storage.
pub type Vec2DArray = Array2D<Vec2D>;
/// Bulk position storage.
pub type Point2DArray = Array2D<Point2D>;

impl<T> Array2D<T> {
    /// Allocate zeroed buffers of length `max` with `count` slots active.
    pub fn new(count: usize, max: usize) -> Result<Self> {
        check_count(count, max)?;
        debug!("allocated 2D store: count={count} max={max}");
        Ok(Self {
            count,
            max,
            x: vec![0.0; max],
            y: vec![0.0; max],
            _kind: PhantomData,
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

    /// Move the end of the active window. Fails rather than clamps when
    /// `count > max`; slot contents are left as they are.
    pub fn set_count(&mut self, count: usize) -> Result<&mut Self> {
        check_count(count, self.max)?;
        self.count = count;
        Ok(self)
    }

    /// Shrink the active window to `count`. A larger `count` leaves it as is.
    pub fn truncate(&mut self, count: usize) -> &mut Self {
        self.count = self.count.min(count);
        self
    }

    #[inline]
    pub fn active(&self) -> Range<usize> {
        0..self.count
    }

    /// Whole x buffer, `max` long.
    #[inline]
    pub fn xs(&self) -> &[f32] {
        &self.x
    }

    /// Whole y buffer, `max` long.
    #[inline]
    pub fn ys(&self) -> &[f32] {
        &self.y
    }

    #[inline]
    pub fn buffers_mut(&mut self) -> (&mut [f32], &mut [f32]) {
        (&mut self.x, &mut self.y)
    }

    #[inline]
    pub fn get(&self, i: usize) -> [f32; 2] {
        self.debug_check(i);
        [self.x[i], self.y[i]]
    }

    #[inline]
    pub fn get_x(&self, i: usize) -> f32 {
        self.debug_check(i);
        self.x[i]
    }

    #[inline]
    pub fn get_y(&self, i: usize) -> f32 {
        self.debug_check(i);
        self.y[i]
    }

    #[inline]
    pub fn set(&mut self, i: usize, x: f32, y: f32) -> &mut Self {
        self.debug_check(i);
        self.x[i] = x;
        self.y[i] = y;
        self
    }

    #[inline]
    pub fn set_x(&mut self, i: usize, x: f32) -> &mut Self {
        self.debug_check(i);
        self.x[i] = x;
        self
    }

    #[inline]
    pub fn set_y(&mut self, i: usize, y: f32) -> &mut Self {
        self.debug_check(i);
        self.y[i] = y;
        self
    }

    pub fn set_from_components(&mut self, i: usize, [x, y]: [f32; 2]) -> &mut Self {
        self.set(i, x, y)
    }

    /// Zero one slot.
    pub fn reset(&mut self, i: usize) -> &mut Self {
        self.set(i, 0.0, 0.0)
    }

    pub fn try_get(&self, i: usize) -> Result<[f32; 2]> {
        self.check_index(i)?;
        Ok([self.x[i], self.y[i]])
    }

    pub fn try_set(&mut self, i: usize, x: f32, y: f32) -> Result<&mut Self> {
        self.check_index(i)?;
        self.x[i] = x;
        self.y[i] = y;
        Ok(self)
    }

    /// Apply `f(i, &mut x, &mut y)` to every active slot.
    ///
    /// Slots are independent, so with the `parallel` feature the active
    /// range is split across the rayon pool.
    pub fn update<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(usize, &mut f32, &mut f32) + Send + Sync,
    {
        let n = self.count;

        #[cfg(feature = "parallel")]
        {
            self.x[..n]
                .par_iter_mut()
                .zip(self.y[..n].par_iter_mut())
                .enumerate()
                .for_each(|(i, (x, y))| f(i, x, y));
        }

        #[cfg(not(feature = "parallel"))]
        {
            for (i, (x, y)) in self.x[..n].iter_mut().zip(self.y[..n].iter_mut()).enumerate() {
                f(i, x, y);
            }
        }

        self
    }

    #[inline]
    fn check_index(&self, i: usize) -> Result<()> {
        if i >= self.max {
            return Err(Error::IndexOutOfBounds { index: i, max: self.max });
        }
        Ok(())
    }

    #[inline]
    fn debug_check(&self, i: usize) {
        debug_assert!(i < self.max, "index {i} out of bounds for capacity {}", self.max);
    }
}

impl<T: Xy + From<[f32; 2]>> Array2D<T> {
    /// Copy slot `i` out as a value.
    #[inline]
    fn value(&self, i: usize) -> T {
        T::from(self.get(i))
    }

    #[inline]
    fn store(&mut self, i: usize, value: T) -> &mut Self {
        let [x, y] = value.xy();
        self.set(i, x, y)
    }

    /// Iterate the active slots as values.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.active().map(move |i| self.value(i))
    }
}

impl Array2D<Vec2D> {
    /// A fresh [`Vec2D`] copied from slot `i`; mutating it leaves the store untouched.
    pub fn get_vec2d(&self, i: usize) -> Vec2D {
        self.value(i)
    }

    pub fn set_from_vec2d(&mut self, i: usize, v: Vec2D) -> &mut Self {
        self.store(i, v)
    }
}

impl Array2D<Point2D> {
    /// A fresh [`Point2D`] copied from slot `i`; mutating it leaves the store untouched.
    pub fn get_point2d(&self, i: usize) -> Point2D {
        self.value(i)
    }

    pub fn set_from_point2d(&mut self, i: usize, p: Point2D) -> &mut Self {
        self.store(i, p)
    }
}

/// Empty store: `count = max = 0`, no allocation.
impl<T> Default for Array2D<T> {
    fn default() -> Self {
        Self {
            count: 0,
            max: 0,
            x: Vec::new(),
            y: Vec::new(),
            _kind: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for Array2D<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Array2D")
            .field("count", &self.count)
            .field("max", &self.max)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_past_count_are_addressable() {
        let mut a = Vec2DArray::new(2, 8).unwrap();
        a.set(5, 1.0, 2.0);
        assert_eq!(a.get(5), [1.0, 2.0]);
        assert_eq!(a.count(), 2, "writing past count must not grow it");
    }

    #[test]
    #[should_panic]
    fn test_index_at_capacity_panics() {
        let a = Vec2DArray::new(0, 4).unwrap();
        let _ = a.get(4);
    }

    #[test]
    fn test_update_touches_active_prefix_only() {
        let mut a = Vec2DArray::new(3, 5).unwrap();
        a.update(|i, x, y| {
            *x = i as f32;
            *y = 1.0;
        });
        assert_eq!(a.get(2), [2.0, 1.0]);
        assert_eq!(a.get(3), [0.0, 0.0]);
    }
}
