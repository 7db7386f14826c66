//! redblack-soak: randomized workload against the red-black tree
//!
//! Inserts a random permutation of distinct keys, optionally removes a subset,
//! drains the rest with `pop`, and validates every tree invariant along the
//! way. Exits non-zero on the first violation.
//!
//! ## Configuration
//! - REDBLACK_CONFIG: YAML config path (default: redblack.yaml, optional)
//! - REDBLACK_SOAK_KEYS: number of keys (default: 5000)
//! - REDBLACK_SOAK_SEED: RNG seed (default: random)
//! - REDBLACK_SOAK_KEY_RANGE: keys drawn from [-range, range) (default: 100000)
//! - REDBLACK_SOAK_VALIDATE_EVERY: full check every N mutations (default: 0)
//! - REDBLACK_SOAK_REMOVE_FRACTION: share of keys removed before the pop phase (default: 0.0)
//! - REDBLACK_LOG: tracing filter (default: info)

use tracing::{error, info};

use redblack::config::Config;
use redblack::soak;
use redblack::utils::bootstrap::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = Config::load()?;
    info!(?config, "redblack-soak started");

    match soak::run(&config.soak) {
        Ok(report) => {
            info!(
                seed = report.seed,
                inserted = report.inserted,
                removed = report.removed,
                popped = report.popped,
                max_black_height = report.max_black_height,
                peak_height = report.peak_height,
                "soak passed"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "soak failed");
            Err(e.into())
        }
    }
}
