//! Basic dashboard feed
//!
//! Runs the simulation the way the UI timer would and prints what the
//! renderer would read after each tick: stream windows, spectra, and the
//! pole map.
//!
//! Run with: cargo run --example 01_dashboard_feed

use turbsim_core::{Channel, ControlInputs, Simulation};

fn main() {
    let mut sim = Simulation::new(42);
    let controls = ControlInputs::normal();

    println!("TurbSim dashboard feed (normal preset)\n");

    // Ten timer callbacks' worth of data
    for _ in 0..10 {
        let report = sim.tick(&controls).expect("finite preset inputs");
        println!(
            "tick {:>2}  t={:.3}s  +{} samples/channel  [{:?}]",
            report.tick, report.elapsed_s, report.samples_appended, report.stability
        );
    }

    println!("\nChannel windows:");
    for channel in Channel::ALL {
        let window = sim.streams().get(channel);
        println!(
            "  {:<12} {:>3} samples, last = {:>10.2} {}",
            channel.name(),
            window.len(),
            window.last().unwrap_or(0.0),
            channel.unit(),
        );
    }

    println!("\nSpectral peaks:");
    for channel in Channel::ALL {
        let slots = sim.spectrum(channel).as_slice();
        let (idx, peak) = slots
            .iter()
            .enumerate()
            .fold((0, 0.0f32), |best, (i, &v)| if v > best.1 { (i, v) } else { best });
        println!("  {:<12} max {:>6.1} at slot {}", channel.name(), peak, idx);
    }

    let poles = sim.poles();
    println!(
        "\nPoles: s = {:.3} ± j{:.3}, z = {:.3} ± j{:.3}, damping {:.2} ({:?})",
        poles.s.re, poles.s.im, poles.z.re, poles.z.im, poles.damping, poles.stability
    );
}
