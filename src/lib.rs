//! Swept Slide - swept circle/ellipse motion against line segments
//!
//! Core modules:
//! - `geom`: 2D points, rays, planes, circles, ellipses and segments
//! - `sim`: Contact finding, sliding resolution, motion integration, ellipse adapter
//! - `settings`: Tunable motion and walking parameters
//! - `error`: Fatal motion errors

pub mod error;
pub mod geom;
pub mod settings;
pub mod sim;

pub use error::MoveError;
pub use geom::{Circle, Ellipse, Plane, Point, Ray, Segment, Vector};
pub use settings::{MotionSettings, Settings};
pub use sim::{Contact, Motion, move_circle, move_circle_with, move_ellipse};

/// Numeric constants shared by the whole crate
pub mod consts {
    /// Two scalars closer than this are equal.
    ///
    /// Also the pull-back applied after a contact so the next iteration
    /// does not land exactly on the surface it just touched.
    /// Square root of the f64 machine epsilon.
    pub const THRESHOLD: f64 = 1.4901161193847656e-8;
}

use consts::THRESHOLD;

/// Whether two scalars are equal within [`consts::THRESHOLD`]
#[inline]
pub fn float_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < THRESHOLD
}

/// Whether a scalar is zero within [`consts::THRESHOLD`]
#[inline]
pub fn near_zero(x: f64) -> bool {
    float_eq(x, 0.0)
}

/// Component-wise [`float_eq`]
#[inline]
pub fn vec_eq(a: Vector, b: Vector) -> bool {
    float_eq(a.x, b.x) && float_eq(a.y, b.y)
}

/// Whether every component of a vector is zero within [`consts::THRESHOLD`]
#[inline]
pub fn vec_near_zero(v: Vector) -> bool {
    vec_eq(v, Vector::ZERO)
}
