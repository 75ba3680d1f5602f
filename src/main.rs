//! Headless demo driver
//!
//! Runs the simulation at a synthetic 60 Hz with a scripted steering pattern
//! and prints the events the UI layer would normally consume. Useful for
//! eyeballing balance changes without a renderer attached.
//!
//! Usage: `orb-roller [seed] [seconds]`

use orb_roller::sim::{GameEvent, GameSession, TickInput, tick};

const DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(42);
    let seconds: f32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(30.0);

    let mut session = GameSession::new(seed);
    session.start();

    let frames = (seconds / DT) as u64;
    for frame in 0..frames {
        // Sweep the held direction every couple of seconds so the demo
        // wanders the arena instead of pinning against one wall
        let leg = (frame / 120) % 4;
        let input = TickInput {
            forward: leg == 0 || leg == 1,
            back: leg == 2,
            left: leg == 1,
            right: leg == 3,
        };

        tick(&mut session, &input, DT);

        for event in session.drain_events() {
            let t = frame as f32 * DT;
            match event {
                GameEvent::Collected { pickup_id, score } => {
                    println!("[{t:7.2}s] collected pickup {pickup_id:3}  score {score}");
                }
                GameEvent::HazardHit { score } => {
                    println!("[{t:7.2}s] hazard hit!           score {score}");
                }
            }
        }
    }

    println!(
        "seed {seed}: final score {} after {seconds}s ({} pickups live)",
        session.score,
        session.pickups.len()
    );
}
