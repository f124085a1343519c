//! Scenario presets
//!
//! Switches between the normal and fault presets mid-session, like the
//! dashboard's "RESET NORMAL" / "TRIGGER FAULT" buttons, and shows how the
//! pole map reacts. Note that the fault preset lands at damping 0.14 -
//! close to the 0.1 instability threshold but not across it.
//!
//! Run with: cargo run --example 02_scenarios

use turbsim_core::{ControlInputs, Simulation};

fn main() {
    let mut sim = Simulation::new(7);

    for (label, controls) in [
        ("normal", ControlInputs::normal()),
        ("fault", ControlInputs::fault()),
        ("normal again", ControlInputs::normal()),
    ] {
        // A second of timer callbacks per scenario
        let mut last = None;
        for _ in 0..10 {
            last = Some(sim.tick(&controls).expect("finite preset inputs"));
        }
        let report = last.expect("ran at least one tick");
        let poles = sim.poles();

        println!(
            "{:<13} rpm={:>5}  vib={:.1}g  damping={:+.2}  |z|={:.3}  {:?}",
            label,
            controls.rpm,
            controls.vibration_g(),
            poles.damping,
            poles.z.magnitude(),
            report.stability,
        );
    }

    println!(
        "\nclock never resets: t = {:.3}s after 30 ticks",
        sim.elapsed_s()
    );
}
