//! Per-tick update of a walking, falling body
//!
//! The body walks under input, falls under gravity while airborne, and
//! settles once it stops making progress.

use serde::{Deserialize, Serialize};

use super::ellipse::move_ellipse;
use crate::error::MoveError;
use crate::geom::{Ellipse, Point, Segment, Vector};
use crate::settings::Settings;
use crate::{near_zero, vec_near_zero};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Desired displacement this tick, before gravity
    pub walk: Vector,
}

impl TickInput {
    /// Walk horizontally (`direction` is -1, 0 or 1)
    pub fn horizontal(direction: f64, settings: &Settings) -> Self {
        Self {
            walk: Vector::new(direction * settings.walk_speed, 0.0),
        }
    }

    /// Jump straight up; the upward push also cancels one tick of gravity
    pub fn jump(settings: &Settings) -> Self {
        Self {
            walk: Vector::new(0.0, settings.walk_speed - settings.gravity),
        }
    }
}

/// A walking body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub shape: Ellipse,
    /// Current vertical fall velocity (negative is down)
    pub fall: f64,
    pub on_ground: bool,
    /// Settled: no input and no meaningful motion
    pub stopped: bool,
}

impl Body {
    pub fn new(shape: Ellipse) -> Self {
        Self {
            shape,
            fall: 0.0,
            on_ground: false,
            stopped: false,
        }
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// Distance the body's center moved
    pub moved: f64,
    /// The body was settled and did not move
    pub skipped: bool,
}

/// Advance a body by one tick
pub fn tick(
    body: &mut Body,
    input: &TickInput,
    segments: &[Segment],
    settings: &Settings,
) -> Result<TickOutcome, MoveError> {
    let idle = vec_near_zero(input.walk);
    if !idle {
        body.stopped = false;
    }
    if body.stopped {
        return Ok(TickOutcome {
            moved: 0.0,
            skipped: true,
        });
    }

    if !body.on_ground && near_zero(input.walk.y) {
        body.fall = (body.fall + settings.gravity).max(settings.terminal_velocity);
    }

    let velocity = input.walk + Vector::new(0.0, body.fall);
    let start = body.shape.center;
    let (shape, on_ground) = move_ellipse(body.shape, velocity, segments, &settings.motion)?;
    body.shape = shape;
    body.on_ground = on_ground;

    let moved = start.distance(body.shape.center);
    body.stopped = idle && moved < settings.stop_factor * body.fall.abs();
    if body.on_ground {
        body.fall = settings.gravity;
    }
    if body.stopped {
        log::debug!("body settled at {}", body.shape.center);
    }

    Ok(TickOutcome { moved, skipped: false })
}

/// Inward-facing walls of a `width` x `height` box with its corner at the origin
pub fn arena(width: f64, height: f64) -> Vec<Segment> {
    let (w, h) = (width - 1.0, height - 1.0);
    vec![
        Segment::new(Point::new(0.0, h), Point::new(0.0, 0.0)),
        Segment::new(Point::new(0.0, 0.0), Point::new(w, 0.0)),
        Segment::new(Point::new(w, 0.0), Point::new(w, h)),
        Segment::new(Point::new(w, h), Point::new(0.0, h)),
    ]
}
