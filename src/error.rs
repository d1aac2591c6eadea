//! Fatal motion errors
//!
//! A move either yields a complete new position or one of these. "No contact"
//! with an obstacle is never an error.

use crate::geom::{Point, Vector};

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MoveError {
    /// The remaining displacement could not be projected onto the sliding
    /// plane; the obstacle geometry is contradictory.
    #[error("cannot project onto the sliding plane at {contact} (normal {normal})")]
    DegenerateSlide { contact: Point, normal: Vector },

    /// The integrator did not consume the velocity within the iteration cap.
    #[error("velocity not resolved after {iterations} iterations")]
    IterationLimit { iterations: u32 },

    /// Ellipse radii must be positive and finite.
    #[error("invalid ellipse radii {radii}")]
    InvalidRadii { radii: Vector },
}
