pub use std::f32::consts::{PI, TAU};

pub const HALF_PI: f32 = 0.5 * PI;
pub const TO_DEG: f32 = 180.0 / PI;
pub const TO_RAD: f32 = PI / 180.0;

/// Threshold below which rotated components are snapped to exactly zero.
pub const EPSILON: f32 = f32::EPSILON;

/// Linear interpolation: `(1 - t) * a + t * b`. `t` is not clamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

#[inline]
pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    (x2 - x1).hypot(y2 - y1)
}

/// Angle of `(x, y)` from the positive x-axis, in radians.
#[inline]
pub fn angle(x: f32, y: f32) -> f32 {
    y.atan2(x)
}

/// Ramp from 0 at `t = 0` to 1 at `t = m`.
#[inline]
pub fn fade_in(t: f32, m: f32) -> f32 {
    t / m
}

/// Ramp from 1 at `t = 0` to 0 at `t = m`.
#[inline]
pub fn fade_out(t: f32, m: f32) -> f32 {
    (m - t) / m
}

/// Triangle wave: 0 at `t = 0`, 1 at `t = m / 2`, back to 0 at `t = m`.
#[inline]
pub fn fade_in_out(t: f32, m: f32) -> f32 {
    let hm = 0.5 * m;
    ((t + hm) % m - hm).abs() / hm
}

/// Advance `seed` and return a pseudo-random value in `[0, 1)`.
///
/// PCG-style integer hash; the caller owns the state so runs are reproducible.
pub fn random(seed: &mut u32) -> f32 {
    *seed = seed.wrapping_mul(747_796_405).wrapping_add(2_891_336_453);
    let word = ((*seed >> ((*seed >> 28) + 4)) ^ *seed).wrapping_mul(277_803_737);
    let word = (word >> 22) ^ word;
    (word >> 8) as f32 / (1u32 << 24) as f32
}

/// Random value in `[0, n)`.
#[inline]
pub fn rand(seed: &mut u32, n: f32) -> f32 {
    n * random(seed)
}

/// Random value in `(-n, n]`.
#[inline]
pub fn rand_range(seed: &mut u32, n: f32) -> f32 {
    n - rand(seed, 2.0 * n)
}
