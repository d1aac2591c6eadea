//! One sliding step: advance to the nearest contact, slide the rest
//!
//! The sliding plane is tangent to the circle at the contact point, not the
//! obstacle's own line. In a corner formed by two segments the tangent plane
//! is what keeps the body from wedging.

use super::contact::{Contact, circle_segment_hit};
use crate::consts::THRESHOLD;
use crate::error::MoveError;
use crate::geom::{Circle, Plane, Ray, Segment, Vector};

/// Outcome of one resolver step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideStep {
    /// Distance to move the center along the current velocity direction
    pub travel: f64,
    /// Displacement still to resolve after this step (zero when unobstructed)
    pub velocity: Vector,
    /// Nearest contact, if any obstacle was hit
    pub contact: Option<Contact>,
}

/// Nearest contact over all obstacles (first found wins ties)
pub fn nearest_contact(
    circle: &Circle,
    velocity: Vector,
    segments: &[Segment],
) -> Option<Contact> {
    let mut nearest: Option<Contact> = None;
    for segment in segments {
        if let Some(hit) = circle_segment_hit(circle, velocity, segment) {
            let best = nearest.map_or(f64::INFINITY, |n| n.distance);
            if hit.distance < best {
                nearest = Some(hit);
            }
        }
    }
    nearest
}

/// Trace a circle along `velocity` until its first contact
///
/// `velocity` must not be zero. The returned travel stops [`THRESHOLD`] short
/// of the contact so the next step does not rediscover it at distance zero.
pub fn slide_step(
    circle: &Circle,
    velocity: Vector,
    segments: &[Segment],
) -> Result<SlideStep, MoveError> {
    let Some(contact) = nearest_contact(circle, velocity, segments) else {
        return Ok(SlideStep {
            travel: velocity.length(),
            velocity: Vector::ZERO,
            contact: None,
        });
    };

    let dir = velocity.normalize();
    let center = circle.center + dir * contact.distance;
    let degenerate = |normal| MoveError::DegenerateSlide {
        contact: contact.point,
        normal,
    };
    let to_contact = contact.point - center;
    let normal = to_contact.try_normalize().ok_or_else(|| degenerate(to_contact))?;
    let slide = Plane::new(contact.point, normal);

    // Where the body would have ended up, dropped onto the sliding plane
    let dest = contact.point + dir * (velocity.length() - contact.distance);
    let d = Ray::new(dest, slide.normal)
        .plane_intersection(&slide)
        .ok_or_else(|| degenerate(slide.normal))?;
    let dest = dest + slide.normal * d;

    log::trace!(
        "contact at {} after {:.6}, slide {}",
        contact.point,
        contact.distance,
        dest - contact.point
    );

    Ok(SlideStep {
        travel: contact.distance - THRESHOLD,
        velocity: dest - contact.point,
        contact: Some(contact),
    })
}
