//! Motion integration: repeat sliding steps until the velocity is spent

use super::slide::slide_step;
use crate::error::MoveError;
use crate::geom::{Circle, Point, Segment, Vector};
use crate::settings::MotionSettings;
use crate::vec_near_zero;

/// Result of a full move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Body at its final position
    pub circle: Circle,
    /// Some contact during the move supported the body from below
    pub on_ground: bool,
    /// Resolver steps taken
    pub iterations: u32,
}

/// Move a circle by `velocity`, sliding along any segments it hits
pub fn move_circle(
    circle: Circle,
    velocity: Vector,
    segments: &[Segment],
) -> Result<Circle, MoveError> {
    move_circle_with(circle, velocity, segments, &MotionSettings::default()).map(|m| m.circle)
}

/// Move a circle by `velocity`, sliding along any segments it hits, and
/// report whether it landed on ground
pub fn move_circle_with(
    mut circle: Circle,
    mut velocity: Vector,
    segments: &[Segment],
    settings: &MotionSettings,
) -> Result<Motion, MoveError> {
    let mut on_ground = false;
    let mut iterations = 0;

    while !vec_near_zero(velocity) {
        if iterations >= settings.max_iterations {
            log::warn!(
                "move of {:?} gave up after {} iterations, {} left",
                circle,
                iterations,
                velocity
            );
            return Err(MoveError::IterationLimit { iterations });
        }
        iterations += 1;

        let step = slide_step(&circle, velocity, segments)?;
        let dir = velocity.normalize();
        if let Some(contact) = step.contact {
            let touching = circle.center + dir * contact.distance;
            on_ground |= is_ground_contact(
                touching,
                circle.radius,
                velocity,
                contact.point,
                settings.bottom_factor,
            );
        }
        circle.center += dir * step.travel;
        velocity = step.velocity;
    }

    log::debug!(
        "moved to {} in {} iterations (ground: {})",
        circle.center,
        iterations,
        on_ground
    );
    Ok(Motion {
        circle,
        on_ground,
        iterations,
    })
}

/// Whether a contact supports a body moving downward
///
/// `center` is the body's center at the moment of contact. The contact must
/// lie within the lowest `bottom_factor` of the body's height.
pub fn is_ground_contact(
    center: Point,
    radius: f64,
    velocity: Vector,
    point: Point,
    bottom_factor: f64,
) -> bool {
    if velocity.y >= 0.0 {
        return false;
    }
    let bottom = center.y - radius;
    point.y < bottom + bottom_factor * 2.0 * radius
}
