//! Sweep of Eve's interception probability, showing the QBER climb past
//! the 11% detection bound.
//!
//! Intercept-resend introduces a wrong-basis collapse on half the
//! intercepted shots, and each collapse disagrees half the time, so the
//! sifted QBER grows as 0.25 * p_eve on a noiseless channel.

use bb84_sim::prelude::*;

fn main() {
    println!("BB84 Eavesdropping Sweep (noiseless channel)");
    println!();
    println!("  p_eve   sifted   QBER     verdict");
    println!("  ─────   ──────   ──────   ───────");

    for step in 0..=10 {
        let p_eve = step as f64 * 0.1;
        let config = SimConfig {
            shots: 4000,
            eve_probability: p_eve,
            channel_error_probability: 0.0,
        };
        let summary = run(&config, DEFAULT_SAMPLE_FRACTION).expect("valid parameters");
        match summary.qber {
            None => println!("  {:.2}    {:>6}   no estimate", p_eve, summary.sifted_len()),
            Some(qber) => println!(
                "  {:.2}    {:>6}   {:>5.2}%   {}",
                p_eve,
                summary.sifted_len(),
                qber * 100.0,
                match summary.verdict {
                    Some(Verdict::Secure) => "secure",
                    _ => "ABORT",
                },
            ),
        }
    }

    println!();
    println!("Detection bound: QBER > {:.0}%", QBER_THRESHOLD * 100.0);
}
