use glam::Vec2;

use crate::math::{lerp, TO_DEG};
use crate::vec2d::{Vec2D, Xy};

/// A position in the plane.
///
/// Same shape as [`Vec2D`], different meaning: points are translated and
/// measured against each other, and the displacement between two points
/// is a `Vec2D`.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Point2D(Vec2);

impl Point2D {
    pub const ORIGIN: Self = Self(Vec2::ZERO);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0.y
    }

    pub fn set_x(&mut self, x: f32) -> &mut Self {
        self.0.x = x;
        self
    }

    pub fn set_y(&mut self, y: f32) -> &mut Self {
        self.0.y = y;
        self
    }

    #[inline]
    pub fn components(&self) -> [f32; 2] {
        self.0.to_array()
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        self.0
    }

    pub fn translate(&mut self, offset: impl Xy) -> &mut Self {
        let [x, y] = offset.xy();
        self.0.x += x;
        self.0.y += y;
        self
    }

    pub fn translate_x(&mut self, x: f32) -> &mut Self {
        self.0.x += x;
        self
    }

    pub fn translate_y(&mut self, y: f32) -> &mut Self {
        self.0.y += y;
        self
    }

    #[inline]
    pub fn add(&mut self, offset: impl Xy) -> &mut Self {
        self.translate(offset)
    }

    pub fn add_x(&mut self, offset: impl Xy) -> &mut Self {
        self.translate_x(offset.xy()[0])
    }

    pub fn add_y(&mut self, offset: impl Xy) -> &mut Self {
        self.translate_y(offset.xy()[1])
    }

    pub fn sub(&mut self, offset: impl Xy) -> &mut Self {
        let [x, y] = offset.xy();
        self.translate([-x, -y])
    }

    pub fn sub_x(&mut self, offset: impl Xy) -> &mut Self {
        self.translate_x(-offset.xy()[0])
    }

    pub fn sub_y(&mut self, offset: impl Xy) -> &mut Self {
        self.translate_y(-offset.xy()[1])
    }

    /// Scale both coordinates about the origin.
    pub fn multiply(&mut self, scalar: f32) -> &mut Self {
        self.0 *= scalar;
        self
    }

    pub fn multiply_x(&mut self, x: f32) -> &mut Self {
        self.0.x *= x;
        self
    }

    pub fn multiply_y(&mut self, y: f32) -> &mut Self {
        self.0.y *= y;
        self
    }

    #[inline]
    pub fn scale(&mut self, scalar: f32) -> &mut Self {
        self.multiply(scalar)
    }

    /// Move toward `target` by `amount`; not clamped, so `amount > 1` overshoots.
    pub fn lerp(&mut self, target: impl Xy, amount: f32) -> &mut Self {
        let [x, y] = target.xy();
        self.0.x = lerp(self.0.x, x, amount);
        self.0.y = lerp(self.0.y, y, amount);
        self
    }

    pub fn distance_to(&self, target: impl Xy) -> f32 {
        let [x, y] = target.xy();
        (x - self.0.x).hypot(y - self.0.y)
    }

    /// Heading from this point toward `target`, in radians.
    pub fn angle_to(&self, target: impl Xy) -> f32 {
        let [x, y] = target.xy();
        (y - self.0.y).atan2(x - self.0.x)
    }

    pub fn angle_to_deg(&self, target: impl Xy) -> f32 {
        self.angle_to(target) * TO_DEG
    }

    /// Displacement from this point to `target`.
    ///
    /// Built from heading and distance, so the result matches
    /// `target - self` up to rounding.
    pub fn vector_between(&self, target: impl Xy) -> Vec2D {
        Vec2D::from_dir_and_mag(self.angle_to(target), self.distance_to(target))
    }
}

impl Xy for Point2D {
    #[inline]
    fn xy(self) -> [f32; 2] {
        self.components()
    }
}

impl From<[f32; 2]> for Point2D {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for Point2D {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl From<Point2D> for [f32; 2] {
    fn from(p: Point2D) -> Self {
        p.components()
    }
}

impl std::ops::Add<Vec2D> for Point2D {
    type Output = Point2D;
    fn add(self, rhs: Vec2D) -> Point2D {
        Point2D(self.0 + rhs.as_vec2())
    }
}

impl std::ops::Sub<Vec2D> for Point2D {
    type Output = Point2D;
    fn sub(self, rhs: Vec2D) -> Point2D {
        Point2D(self.0 - rhs.as_vec2())
    }
}

impl std::ops::Sub for Point2D {
    type Output = Vec2D;
    fn sub(self, rhs: Point2D) -> Vec2D {
        Vec2D::from(self.0 - rhs.0)
    }
}
