//! 2D vector/point math and struct-of-arrays storage for particle effects.
//!
//! [`vec2d::Vec2D`] and [`point2d::Point2D`] are small scratch values;
//! [`array2d::Array2D`] keeps thousands of them as two flat `f32` buffers,
//! and [`controller::ParticleController`] ties three such stores together
//! under one particle index.

pub mod array2d;
pub mod config;
pub mod controller;
pub mod error;
pub mod field;
pub mod math;
pub mod point2d;
pub mod vec2d;

pub use array2d::{Array2D, Point2DArray, Vec2DArray};
pub use controller::ParticleController;
pub use field::{ParticleField, Segment};
pub use error::{Error, Result};
pub use point2d::Point2D;
pub use vec2d::{Vec2D, Xy};
