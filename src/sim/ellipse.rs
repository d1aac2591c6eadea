//! Ellipse motion by reduction to a unit circle
//!
//! Center, velocity and every obstacle are scaled by the inverse radii, the
//! unit circle is moved, and the result is scaled back. Non-uniform scaling
//! does not preserve angles, so slide directions are exact only for round
//! bodies; for true ellipses this is the accepted approximation.

use super::motion::move_circle_with;
use crate::error::MoveError;
use crate::geom::{Circle, Ellipse, Segment, Vector};
use crate::settings::MotionSettings;

/// Move an ellipse by `velocity`, sliding along any segments it hits
///
/// Returns the moved ellipse and whether it ended the move supported by ground.
pub fn move_ellipse(
    ellipse: Ellipse,
    velocity: Vector,
    segments: &[Segment],
    settings: &MotionSettings,
) -> Result<(Ellipse, bool), MoveError> {
    let radii = ellipse.radii;
    if !(radii.is_finite() && radii.cmpgt(Vector::ZERO).all()) {
        return Err(MoveError::InvalidRadii { radii });
    }

    let scale = radii.recip();
    let circle = Circle::new(ellipse.center * scale, 1.0);
    let scaled: Vec<Segment> = segments.iter().map(|s| s.scaled(scale)).collect();

    let motion = move_circle_with(circle, velocity * scale, &scaled, settings)?;
    Ok((Ellipse::new(motion.circle.center * radii, radii), motion.on_ground))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::THRESHOLD;
    use crate::geom::Point;
    use crate::sim::move_circle;

    fn box_segments() -> Vec<Segment> {
        // Inward-facing walls of a 640x480 box
        vec![
            Segment::new(Point::new(0.0, 479.0), Point::new(0.0, 0.0)),
            Segment::new(Point::new(0.0, 0.0), Point::new(639.0, 0.0)),
            Segment::new(Point::new(639.0, 0.0), Point::new(639.0, 479.0)),
            Segment::new(Point::new(639.0, 479.0), Point::new(0.0, 479.0)),
        ]
    }

    #[test]
    fn test_round_ellipse_matches_circle() {
        let r = 20.0;
        let segments = box_segments();
        let start = Point::new(100.0, 100.0);
        let v = Vector::new(-150.0, -40.0);

        let circle = move_circle(Circle::new(start, r), v, &segments).unwrap();
        let (ellipse, _) = move_ellipse(
            Ellipse::new(start, Vector::splat(r)),
            v,
            &segments,
            &MotionSettings::default(),
        )
        .unwrap();

        // The pull-back is applied in scaled space, so it grows with r
        let tol = 4.0 * THRESHOLD * r;
        assert!((ellipse.center - circle.center).length() < tol);
    }

    #[test]
    fn test_tall_ellipse_lands() {
        let (ellipse, on_ground) = move_ellipse(
            Ellipse::new(Point::new(200.0, 200.0), Vector::new(25.0, 50.0)),
            Vector::new(0.0, -500.0),
            &box_segments(),
            &MotionSettings::default(),
        )
        .unwrap();
        assert!(on_ground);
        assert!((ellipse.bottom() - 0.0).abs() < 1e-5);
        assert!((ellipse.center.x - 200.0).abs() < 1e-9);
        assert_eq!(ellipse.radii, Vector::new(25.0, 50.0));
    }

    #[test]
    fn test_wide_ellipse_stops_at_wall() {
        let (ellipse, on_ground) = move_ellipse(
            Ellipse::new(Point::new(300.0, 200.0), Vector::new(40.0, 10.0)),
            Vector::new(400.0, 0.0),
            &box_segments(),
            &MotionSettings::default(),
        )
        .unwrap();
        assert!(!on_ground);
        assert!((ellipse.center.x - (639.0 - 40.0)).abs() < 1e-5);
        assert!((ellipse.center.y - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_bad_radii() {
        for radii in [Vector::new(0.0, 1.0), Vector::new(1.0, -2.0), Vector::new(f64::NAN, 1.0)] {
            let err = move_ellipse(
                Ellipse::new(Point::ZERO, radii),
                Vector::X,
                &[],
                &MotionSettings::default(),
            )
            .unwrap_err();
            assert!(matches!(err, MoveError::InvalidRadii { .. }));
        }
    }
}
