//! Headless walking demo
//!
//! Usage: `swept-slide [settings.json] [seed]`
//!
//! Drops a body into a walled arena scattered with ledges and walks it to the
//! right, logging where it goes. Run with `RUST_LOG=debug` for per-move detail.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use swept_slide::geom::{Ellipse, Point, Segment, Vector};
use swept_slide::settings::Settings;
use swept_slide::sim::{Body, TickInput, arena, tick};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 480.0;
const LEDGES: usize = 6;
const TICKS: u32 = 300;
const DEFAULT_SEED: u64 = 12345;

fn main() {
    env_logger::init();
    log::info!("Swept Slide demo starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_SEED);
    log::info!("Course seed: {}", seed);

    let mut segments = arena(WIDTH, HEIGHT);
    segments.extend(ledges(&mut Pcg32::seed_from_u64(seed)));

    let mut body = Body::new(Ellipse::new(Point::new(60.0, 400.0), Vector::new(25.0, 50.0)));
    let walk = TickInput::horizontal(1.0, &settings);

    for n in 0..TICKS {
        match tick(&mut body, &walk, &segments, &settings) {
            Ok(outcome) => {
                if n % 20 == 0 {
                    log::info!(
                        "tick {:3}: center ({:.2}, {:.2}) moved {:.3} ground {}",
                        n,
                        body.shape.center.x,
                        body.shape.center.y,
                        outcome.moved,
                        body.on_ground
                    );
                }
            }
            Err(e) => {
                log::error!("tick {} failed: {}", n, e);
                std::process::exit(1);
            }
        }
    }

    println!(
        "final center ({:.3}, {:.3}), on ground: {}",
        body.shape.center.x, body.shape.center.y, body.on_ground
    );
}

/// Upward-facing ledges at random heights, each a gentle ramp
fn ledges(rng: &mut Pcg32) -> Vec<Segment> {
    (0..LEDGES)
        .map(|i| {
            let x0 = 80.0 + i as f64 * 90.0 + rng.random_range(0.0..20.0);
            let len = rng.random_range(40.0..80.0);
            let y0 = rng.random_range(10.0..60.0);
            let rise = rng.random_range(-10.0..10.0);
            Segment::new(Point::new(x0, y0), Point::new(x0 + len, y0 + rise))
        })
        .collect()
}
