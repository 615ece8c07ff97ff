//! Channel-noise sweep with no eavesdropper present.
//!
//! Noise alone can push the QBER past the detection bound: beyond ~11%
//! bit-flip probability an honest channel becomes indistinguishable from
//! an attacked one and the key must be aborted anyway.

use bb84_sim::prelude::*;

fn main() {
    println!("BB84 Channel Noise Sweep (no eavesdropper)");
    println!();
    println!("  p_noise   sifted   QBER     verdict");
    println!("  ───────   ──────   ──────   ───────");

    for step in 0..=8 {
        let p_noise = step as f64 * 0.025;
        let config = SimConfig {
            shots: 4000,
            eve_probability: 0.0,
            channel_error_probability: p_noise,
        };
        let summary = run(&config, DEFAULT_SAMPLE_FRACTION).expect("valid parameters");
        match summary.qber {
            None => println!("  {:.3}     {:>6}   no estimate", p_noise, summary.sifted_len()),
            Some(qber) => println!(
                "  {:.3}     {:>6}   {:>5.2}%   {}",
                p_noise,
                summary.sifted_len(),
                qber * 100.0,
                match summary.verdict {
                    Some(Verdict::Secure) => "secure",
                    _ => "ABORT",
                },
            ),
        }
    }
}
