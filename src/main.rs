//! Headless demo driver
//!
//! Runs the simulation without any renderer: scripted control presses, fixed
//! 60 Hz ticks, goal notifications on the log, and a final JSON snapshot on
//! stdout for an external renderer to consume.

use duo_pong::{Control, GameSimulation, Tuning};

fn main() {
    env_logger::init();
    log::info!("duo-pong headless demo starting");

    let mut sim = GameSimulation::new(Tuning::default(), 0xD0_09);
    sim.on_score(|score| {
        log::info!("score is now {} - {}", score.left, score.right);
    });
    sim.start();

    // Thirty simulated seconds; both players chase the ball naively by
    // flipping their held control every half second.
    let dt = 1.0 / 60.0;
    for frame in 0..(30 * 60) {
        if frame % 30 == 0 {
            let moving_down = (frame / 30) % 2 == 0;
            sim.set_input(Control::LeftDown, moving_down);
            sim.set_input(Control::LeftUp, !moving_down);
            sim.set_input(Control::RightDown, !moving_down);
            sim.set_input(Control::RightUp, moving_down);
        }
        sim.update(dt);
    }

    let snapshot = sim.snapshot();
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize snapshot: {err}"),
    }
    log::info!(
        "final score {} - {}",
        snapshot.score.left,
        snapshot.score.right
    );
}
