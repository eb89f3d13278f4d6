use glam::Vec2;

use crate::math::{lerp, EPSILON, TO_DEG, TO_RAD};

/// Anything that can be read as an `(x, y)` pair.
///
/// Mutating operations on [`Vec2D`] and [`crate::point2d::Point2D`] take
/// `impl Xy`, so a vector, a point, a glam vector or a plain array can be
/// passed interchangeably.
pub trait Xy: Copy {
    fn xy(self) -> [f32; 2];
}

impl Xy for [f32; 2] {
    #[inline]
    fn xy(self) -> [f32; 2] {
        self
    }
}

impl Xy for (f32, f32) {
    #[inline]
    fn xy(self) -> [f32; 2] {
        [self.0, self.1]
    }
}

impl Xy for Vec2 {
    #[inline]
    fn xy(self) -> [f32; 2] {
        self.to_array()
    }
}

/// Free 2D direction/magnitude vector.
///
/// Mutators work in place and return `&mut Self` so calls chain:
///
/// ```
/// use pointfield_core::vec2d::Vec2D;
///
/// let mut v = Vec2D::new(1.0, 0.0);
/// v.add([1.0, 1.0]).scale(2.0).rotate_deg(90.0);
/// assert!((v.x() + 2.0).abs() < 1e-5 && (v.y() - 4.0).abs() < 1e-5);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec2D(Vec2);

impl Vec2D {
    pub const ZERO: Self = Self(Vec2::ZERO);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Build a vector pointing along `direction` (radians) with length `magnitude`.
    pub fn from_dir_and_mag(direction: f32, magnitude: f32) -> Self {
        let (sin, cos) = direction.sin_cos();
        Self::new(magnitude * cos, magnitude * sin)
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

    /// Angle from the positive x-axis in radians, in `(-PI, PI]`.
    #[inline]
    pub fn direction(&self) -> f32 {
        self.0.y.atan2(self.0.x)
    }

    pub fn direction_deg(&self) -> f32 {
        self.direction() * TO_DEG
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.direction()
    }

    #[inline]
    pub fn angle_deg(&self) -> f32 {
        self.direction_deg()
    }

    /// Euclidean length, via `hypot` so large components are not squared.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.0.x.hypot(self.0.y)
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.magnitude()
    }

    /// New vector of length 1 pointing the same way.
    ///
    /// The zero vector has no direction: its unit has `NaN` components.
    /// Use [`Vec2D::try_unit`] when the input may be zero.
    pub fn unit(&self) -> Vec2D {
        Vec2D(self.0 / self.magnitude())
    }

    #[inline]
    pub fn norm(&self) -> Vec2D {
        self.unit()
    }

    /// `None` for zero-length or non-finite vectors.
    pub fn try_unit(&self) -> Option<Vec2D> {
        let m = self.magnitude();
        (m.is_finite() && m > 0.0).then(|| Vec2D(self.0 / m))
    }

    pub fn add(&mut self, other: impl Xy) -> &mut Self {
        let [x, y] = other.xy();
        self.0.x += x;
        self.0.y += y;
        self
    }

    pub fn add_x(&mut self, other: impl Xy) -> &mut Self {
        self.0.x += other.xy()[0];
        self
    }

    pub fn add_y(&mut self, other: impl Xy) -> &mut Self {
        self.0.y += other.xy()[1];
        self
    }

    pub fn sub(&mut self, other: impl Xy) -> &mut Self {
        let [x, y] = other.xy();
        self.0.x -= x;
        self.0.y -= y;
        self
    }

    pub fn sub_x(&mut self, other: impl Xy) -> &mut Self {
        self.0.x -= other.xy()[0];
        self
    }

    pub fn sub_y(&mut self, other: impl Xy) -> &mut Self {
        self.0.y -= other.xy()[1];
        self
    }

    pub fn scale(&mut self, scalar: f32) -> &mut Self {
        self.0 *= scalar;
        self
    }

    pub fn scale_x(&mut self, x: f32) -> &mut Self {
        self.0.x *= x;
        self
    }

    pub fn scale_y(&mut self, y: f32) -> &mut Self {
        self.0.y *= y;
        self
    }

    /// Rotate counter-clockwise by `theta` radians.
    ///
    /// Components whose magnitude ends up at or below [`EPSILON`] become exactly 0.
    pub fn rotate(&mut self, theta: f32) -> &mut Self {
        let (sin, cos) = theta.sin_cos();
        let x2 = cos * self.0.x - sin * self.0.y;
        let y2 = sin * self.0.x + cos * self.0.y;
        self.0.x = snap(x2);
        self.0.y = snap(y2);
        self
    }

    pub fn rotate_deg(&mut self, theta: f32) -> &mut Self {
        self.rotate(theta * TO_RAD)
    }

    /// Move toward `target` by `amount` per component.
    ///
    /// `amount` is not clamped: values above 1 overshoot the target.
    pub fn lerp(&mut self, target: impl Xy, amount: f32) -> &mut Self {
        let [x, y] = target.xy();
        self.0.x = lerp(self.0.x, x, amount);
        self.0.y = lerp(self.0.y, y, amount);
        self
    }

    pub fn dot(&self, other: impl Xy) -> f32 {
        let [x, y] = other.xy();
        self.0.x * x + self.0.y * y
    }

    /// Unsigned angle to `other` in radians, `acos(a.b / (|a| |b|))`, in `[0, PI]`.
    ///
    /// `NaN` when either vector has zero length.
    pub fn angle_between(&self, other: impl Xy) -> f32 {
        let other = Vec2D::from(other.xy());
        let cos = self.dot(other) / (self.magnitude() * other.magnitude());
        // rounding can push |cos| just past 1 for parallel vectors
        cos.clamp(-1.0, 1.0).acos()
    }

    pub fn angle_between_deg(&self, other: impl Xy) -> f32 {
        self.angle_between(other) * TO_DEG
    }

    /// Scale in place to length 1. A zero vector becomes `(NaN, NaN)`.
    pub fn normalize(&mut self) -> &mut Self {
        let m = self.magnitude();
        self.0 /= m;
        self
    }
}

#[inline]
fn snap(v: f32) -> f32 {
    if v.abs() > EPSILON {
        v
    } else {
        0.0
    }
}

impl Xy for Vec2D {
    #[inline]
    fn xy(self) -> [f32; 2] {
        self.components()
    }
}

impl From<[f32; 2]> for Vec2D {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for Vec2D {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl From<Vec2D> for [f32; 2] {
    fn from(v: Vec2D) -> Self {
        v.components()
    }
}

impl std::ops::Add for Vec2D {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Vec2D {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul<f32> for Vec2D {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}

impl std::ops::Neg for Vec2D {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}
