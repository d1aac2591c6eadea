//! Collision-resolving motion
//!
//! Everything here is a pure function of its inputs:
//! - Obstacles are borrowed read-only for the duration of a call
//! - No state is kept between calls
//! - Every obstacle is tested on every resolver step (no broad phase)
//!
//! Call chain: `move_ellipse` -> `move_circle_with` -> `slide_step` -> `circle_segment_hit`

pub mod contact;
pub mod ellipse;
pub mod motion;
pub mod slide;
pub mod tick;

pub use contact::{Contact, circle_segment_hit};
pub use ellipse::move_ellipse;
pub use motion::{Motion, is_ground_contact, move_circle, move_circle_with};
pub use slide::{SlideStep, nearest_contact, slide_step};
pub use tick::{Body, TickInput, TickOutcome, arena, tick};
