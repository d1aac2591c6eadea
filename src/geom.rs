//! 2D geometry primitives for swept collision
//!
//! Everything is f64: the contact pull-back is far below f32 resolution.
//! - Ray: origin + unit direction
//! - Plane: origin + unit normal (a line in 2D)
//! - Segment: ordered endpoints, one-sided (collides only from its normal side)

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::float_eq;

/// A location in the plane
pub type Point = DVec2;

/// A direction and magnitude in the plane
pub type Vector = DVec2;

/// A ray with a unit direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Point,
    /// Unit vector
    pub direction: Vector,
}

impl Ray {
    pub fn new(origin: Point, direction: Vector) -> Self {
        Self { origin, direction }
    }

    /// Point at distance `t` along the ray
    #[inline]
    pub fn at(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }

    /// Signed distance along the ray to the plane
    ///
    /// Returns `None` when the ray is parallel to the plane.
    pub fn plane_intersection(&self, plane: &Plane) -> Option<f64> {
        let d = -plane.normal.dot(plane.origin);
        let numer = plane.normal.dot(self.origin) + d;
        let denom = self.direction.dot(plane.normal);
        if float_eq(denom, 0.0) {
            return None;
        }
        Some(-numer / denom)
    }

    /// Signed distance along the ray to the near side of a circle
    ///
    /// Returns `None` when the ray's line misses the circle. The distance is
    /// negative when the near side lies behind the origin.
    pub fn sphere_intersection(&self, circle: &Circle) -> Option<f64> {
        let q = circle.center - self.origin;
        let c = q.length();
        let v = q.dot(self.direction);
        let d = circle.radius * circle.radius - (c * c - v * v);
        if d < 0.0 {
            return None;
        }
        Some(v - d.sqrt())
    }
}

/// An infinite line, stored as a point on it and its unit normal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub origin: Point,
    /// Unit vector
    pub normal: Vector,
}

impl Plane {
    pub fn new(origin: Point, normal: Vector) -> Self {
        Self { origin, normal }
    }

    /// Signed distance from the line to `p` (positive on the normal side)
    pub fn signed_distance(&self, p: Point) -> f64 {
        (p - self.origin).dot(self.normal)
    }
}

/// A circular body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// An axis-aligned elliptical body, one radius per axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub center: Point,
    /// Must be positive on both axes
    pub radii: Vector,
}

impl Ellipse {
    pub fn new(center: Point, radii: Vector) -> Self {
        Self { center, radii }
    }

    /// Lowest point of the body
    pub fn bottom(&self) -> f64 {
        self.center.y - self.radii.y
    }
}

/// A line segment between two ordered endpoints
///
/// The order sets the outward normal: `b - a` turned counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Unit normal on the colliding side
    pub fn normal(&self) -> Vector {
        (self.b - self.a).normalize().perp()
    }

    /// The infinite line through the segment
    pub fn line(&self) -> Plane {
        Plane::new(self.a, self.normal())
    }

    /// Point on the segment nearest to `p`
    pub fn nearest_point(&self, p: Point) -> Point {
        let v = self.b - self.a;
        let len = v.length();
        let dir = v / len;
        let t = dir.dot(p - self.a);
        if t < 0.0 {
            self.a
        } else if t > len {
            self.b
        } else {
            self.a + dir * t
        }
    }

    /// Component-wise scaling of both endpoints
    pub fn scaled(&self, k: Vector) -> Self {
        Self::new(self.a * k, self.b * k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec_eq;
    use std::f64::consts::FRAC_1_SQRT_2;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_ray_plane_intersection_hit() {
        let plane = Plane::new(Point::new(5.0, 0.0), Vector::new(-1.0, 0.0));
        let ray = Ray::new(Point::ZERO, Vector::X);
        let d = ray.plane_intersection(&plane).unwrap();
        assert!((d - 5.0).abs() < EPS);

        // Behind the origin gives a negative distance
        let ray = Ray::new(Point::new(8.0, 3.0), Vector::X);
        let d = ray.plane_intersection(&plane).unwrap();
        assert!((d + 3.0).abs() < EPS);
    }

    #[test]
    fn test_ray_plane_intersection_parallel() {
        let plane = Plane::new(Point::ZERO, Vector::Y);
        let ray = Ray::new(Point::new(0.0, 1.0), Vector::X);
        assert!(ray.plane_intersection(&plane).is_none());
    }

    #[test]
    fn test_ray_plane_intersection_diagonal() {
        let plane = Plane::new(Point::ZERO, Vector::Y);
        let ray = Ray::new(
            Point::new(0.0, 1.0),
            Vector::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
        );
        let d = ray.plane_intersection(&plane).unwrap();
        assert!((d - 2f64.sqrt()).abs() < EPS);
        assert!(vec_eq(ray.at(d), Point::new(1.0, 0.0)));
    }

    #[test]
    fn test_ray_sphere_intersection() {
        let circle = Circle::new(Point::ZERO, 1.0);

        let ray = Ray::new(Point::new(5.0, 0.0), Vector::NEG_X);
        let d = ray.sphere_intersection(&circle).unwrap();
        assert!((d - 4.0).abs() < EPS);

        // Off-center
        let ray = Ray::new(Point::new(5.0, 0.6), Vector::NEG_X);
        let d = ray.sphere_intersection(&circle).unwrap();
        assert!((d - 4.2).abs() < EPS);

        // Miss
        let ray = Ray::new(Point::new(5.0, 1.5), Vector::NEG_X);
        assert!(ray.sphere_intersection(&circle).is_none());

        // Circle behind the ray origin
        let ray = Ray::new(Point::new(5.0, 0.0), Vector::X);
        let d = ray.sphere_intersection(&circle).unwrap();
        assert!(d < 0.0);
    }

    #[test]
    fn test_segment_normal_orientation() {
        // Upward wall faces -x
        let wall = Segment::new(Point::new(5.0, -10.0), Point::new(5.0, 10.0));
        assert!(vec_eq(wall.normal(), Vector::NEG_X));

        // Floor drawn left-to-right faces +y
        let floor = Segment::new(Point::new(-10.0, 0.0), Point::new(10.0, 0.0));
        assert!(vec_eq(floor.normal(), Vector::Y));
        assert!(floor.line().signed_distance(Point::new(0.0, 3.0)) > 0.0);
    }

    #[test]
    fn test_segment_nearest_point() {
        let s = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert!(vec_eq(s.nearest_point(Point::new(4.0, 7.0)), Point::new(4.0, 0.0)));
        assert!(vec_eq(s.nearest_point(Point::new(-3.0, 2.0)), s.a));
        assert!(vec_eq(s.nearest_point(Point::new(13.0, -2.0)), s.b));
    }

    #[test]
    fn test_segment_scaled() {
        let s = Segment::new(Point::new(1.0, 1.0), Point::new(4.0, 5.0));
        let k = s.scaled(Vector::new(2.0, 0.5));
        assert!(vec_eq(k.a, Point::new(2.0, 0.5)));
        assert!(vec_eq(k.b, Point::new(8.0, 2.5)));
    }
}
