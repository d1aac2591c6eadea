//! Swept circle vs. segment contact
//!
//! Two passes: first find where the swept circle meets the segment's infinite
//! line, then clamp that point to the segment and re-derive the true distance
//! by casting it back against the circle. The nearest point on a line is not
//! the nearest point on a bounded segment, so the second pass is what makes
//! endpoint hits correct.

use crate::geom::{Circle, Plane, Point, Ray, Segment, Vector};

/// First contact between a moving circle and an obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Distance travelled along the velocity before touching
    pub distance: f64,
    /// Touched point on the obstacle
    pub point: Point,
}

/// Check whether a circle sweeping along `velocity` touches a segment
///
/// Returns the contact if it happens within this step (`distance <= |velocity|`).
/// `velocity` must not be zero.
pub fn circle_segment_hit(circle: &Circle, velocity: Vector, segment: &Segment) -> Option<Contact> {
    let plane_hit = circle_plane_hit(circle, velocity, &segment.line())?;
    let point = segment.nearest_point(plane_hit);

    let ray = Ray::new(point, -velocity.normalize());
    let distance = ray.sphere_intersection(circle)?;
    // Also drops NaN from zero-length segments
    if !(0.0..=velocity.length()).contains(&distance) {
        return None;
    }
    Some(Contact { distance, point })
}

/// Point where a circle sweeping along `velocity` first meets a line
///
/// A circle already overlapping the line meets it at the center's projection.
fn circle_plane_hit(circle: &Circle, velocity: Vector, plane: &Plane) -> Option<Point> {
    let inward = -plane.normal;
    let d = Ray::new(circle.center, inward).plane_intersection(plane)?;
    if d < 0.0 {
        return None;
    }

    // Embedded
    if d <= circle.radius {
        return Some(circle.center + inward * d);
    }

    let ray = Ray::new(circle.center + inward * circle.radius, velocity.normalize());
    let d = ray.plane_intersection(plane)?;
    if d < 0.0 {
        return None;
    }
    Some(ray.at(d))
}
