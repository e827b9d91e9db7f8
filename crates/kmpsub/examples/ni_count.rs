//! Counts and replaces "Ni" in a wide-character sentence in a tight loop and
//! reports how long each phase took.
//!
//! Run with
//!
//! ```bash
//! RUST_LOG=kmpsub=debug cargo run -p kmpsub --example ni_count -- 10
//! ```
//!
//! The optional argument is the number of iterations per phase (default
//! 1,000,000). `debug` logging prints one event per call, so keep the count
//! small when enabling it.

use std::time::Instant;

use kmpsub::{Matcher, narrow, wide};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kmpsub=info")),
        )
        .with_target(true)
        .init();

    let iterations: u32 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1_000_000);

    let text = wide("NiNi NI N ni NNi nI Niinii");
    let key = wide("Ni");
    let value = wide("AB");
    let matcher = match Matcher::new(key.as_slice()) {
        Ok(matcher) => matcher,
        Err(err) => {
            tracing::error!(%err, "cannot build matcher");
            std::process::exit(1);
        }
    };

    let started = Instant::now();
    let mut count = 0;
    for _ in 0..iterations {
        count = matcher.count(std::hint::black_box(&text));
    }
    let count_elapsed = started.elapsed();

    let started = Instant::now();
    let mut replaced = Vec::new();
    for _ in 0..iterations {
        replaced = matcher.replace(std::hint::black_box(&text), &value);
    }
    let replace_elapsed = started.elapsed();

    tracing::info!(iterations, ?count_elapsed, ?replace_elapsed, "timing");
    println!(
        "\"Ni\" occurs {count} times. New text: {}",
        narrow(&replaced)
    );
    println!("count:   {count_elapsed:?}");
    println!("replace: {replace_elapsed:?}");
}
