//! Full BB84 run: channel simulation, sifting, QBER estimate, verdict.
//!
//! Prints the per-shot diagnostic table for the first shots, then the
//! numbers a key-exchange front-end would display.

use bb84_sim::prelude::*;

fn basis_label(basis: Basis) -> &'static str {
    match basis {
        Basis::Rectilinear => "Z",
        Basis::Diagonal => "X",
    }
}

fn main() {
    let config = SimConfig {
        shots: 512,
        eve_probability: EveLevel::None.probability(),
        channel_error_probability: 0.0,
    };

    println!("BB84 Quantum Key Distribution Simulation");
    println!("shots = {}, eve = {}, noise = {}", config.shots, config.eve_probability, config.channel_error_probability);
    println!();

    let summary = run(&config, DEFAULT_SAMPLE_FRACTION).expect("valid parameters");

    println!("  shot  a_bit  a_basis  b_basis  b_bit  sifted");
    println!("  ────  ─────  ───────  ───────  ─────  ──────");
    for (i, r) in summary.sim.records.iter().take(16).enumerate() {
        println!(
            "  {:>4}  {:>5}  {:>7}  {:>7}  {:>5}  {:>6}",
            i,
            r.alice_bit as u8,
            basis_label(r.alice_basis),
            basis_label(r.bob_basis),
            r.bob_bit as u8,
            if r.sifted { "yes" } else { "-" },
        );
    }
    println!("  ... ({} shots total)", summary.sim.records.len());
    println!();

    println!("Sifted key length: {}", summary.sifted_len());
    match summary.qber {
        None => println!("Not enough sifted bits to estimate QBER."),
        Some(qber) => {
            println!("Estimated QBER: {:.2}%", qber * 100.0);
            match summary.verdict {
                Some(Verdict::Secure) => {
                    let preview: String = summary
                        .sim
                        .alice_sifted
                        .iter()
                        .take(32)
                        .map(|&b| if b { '1' } else { '0' })
                        .collect();
                    println!("Key is secure. First bits: {}...", preview);
                }
                _ => println!("ABORT: eavesdropping likely (QBER above {:.0}%).", QBER_THRESHOLD * 100.0),
            }
        }
    }
}
