//! Soak workload
//!
//! Inserts a random permutation of distinct keys, checking `first` against
//! the running minimum after each insertion, optionally deletes a random
//! subset with `remove`, then drains the rest with `pop` and checks the
//! order. Every entry stores the negated key as its value so entries that get
//! separated from their keys during deletion are caught.

use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use redblack_rbtree::{InvariantError, RbTree};
use tracing::{debug, info};

use crate::config::SoakConfig;

/// Summary of a completed soak run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoakReport {
    /// Seed the run used; replay with `REDBLACK_SOAK_SEED`.
    pub seed: u64,
    pub inserted: usize,
    pub removed: usize,
    pub popped: usize,
    /// Largest black height seen at a validation checkpoint.
    pub max_black_height: usize,
    /// Tree height right after the insertion phase.
    pub peak_height: usize,
}

/// Soak failures.
#[derive(Debug, thiserror::Error)]
pub enum SoakError {
    #[error("invariant broken after {mutations} mutations: {source}")]
    Invariant {
        mutations: usize,
        #[source]
        source: InvariantError,
    },

    #[error("first() returned {found:?} after {inserted} insertions, expected {expected}")]
    MinimumMismatch {
        inserted: usize,
        expected: i64,
        found: Option<i64>,
    },

    #[error("remove({0}) found nothing")]
    MissingKey(i64),

    #[error("key {key} came back with value {value}")]
    ValueMismatch { key: i64, value: i64 },

    #[error("pop() returned {key} after {previous}")]
    OrderViolation { previous: i64, key: i64 },

    #[error("popped {popped} entries, expected {expected}")]
    CountMismatch { popped: usize, expected: usize },
}

/// Mutation counter that runs a full validation every `every` steps.
struct Checkpoints {
    every: usize,
    mutations: usize,
}

impl Checkpoints {
    fn step(
        &mut self,
        tree: &RbTree<i64, i64>,
        report: &mut SoakReport,
    ) -> Result<(), SoakError> {
        self.mutations += 1;
        if self.every != 0 && self.mutations % self.every == 0 {
            self.validate(tree, report)?;
        }
        Ok(())
    }

    fn validate(&self, tree: &RbTree<i64, i64>, report: &mut SoakReport) -> Result<(), SoakError> {
        let black_height = tree.black_height().map_err(|source| SoakError::Invariant {
            mutations: self.mutations,
            source,
        })?;
        report.max_black_height = report.max_black_height.max(black_height);
        debug!(mutations = self.mutations, black_height, len = tree.len(), "checkpoint");
        Ok(())
    }
}

/// Run the soak workload described by `config`.
#[tracing::instrument(name = "soak.run", skip_all, fields(keys = config.keys))]
pub fn run(config: &SoakConfig) -> Result<SoakReport, SoakError> {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    info!(seed, key_range = config.key_range, "starting soak");

    let keys = sample_keys(&mut rng, config);
    let mut tree = RbTree::new();
    let mut report = SoakReport {
        seed,
        ..SoakReport::default()
    };
    let mut checkpoints = Checkpoints {
        every: config.validate_every,
        mutations: 0,
    };

    // Insert, tracking the running minimum
    let mut minimum = i64::MAX;
    for &key in &keys {
        tree.add(key, -key);
        report.inserted += 1;
        minimum = minimum.min(key);

        let found = tree.first().map(|(k, _)| *k);
        if found != Some(minimum) {
            return Err(SoakError::MinimumMismatch {
                inserted: report.inserted,
                expected: minimum,
                found,
            });
        }
        checkpoints.step(&tree, &mut report)?;
    }
    checkpoints.validate(&tree, &mut report)?;
    report.peak_height = tree.height();
    info!(
        inserted = report.inserted,
        height = report.peak_height,
        black_height = report.max_black_height,
        "insert phase done"
    );

    // Keys are already shuffled, so a prefix is a random subset
    let remove_count = (keys.len() as f64 * config.remove_fraction).floor() as usize;
    let (doomed, kept) = keys.split_at(remove_count.min(keys.len()));
    for &key in doomed {
        match tree.remove(&key) {
            Some((k, value)) if value == -k => report.removed += 1,
            Some((k, value)) => return Err(SoakError::ValueMismatch { key: k, value }),
            None => return Err(SoakError::MissingKey(key)),
        }
        checkpoints.step(&tree, &mut report)?;
    }
    checkpoints.validate(&tree, &mut report)?;
    if !doomed.is_empty() {
        info!(removed = report.removed, remaining = tree.len(), "remove phase done");
    }

    // Drain in order
    let mut previous: Option<i64> = None;
    while let Some((key, value)) = tree.pop() {
        if value != -key {
            return Err(SoakError::ValueMismatch { key, value });
        }
        if let Some(previous) = previous.filter(|&p| p > key) {
            return Err(SoakError::OrderViolation { previous, key });
        }
        previous = Some(key);
        report.popped += 1;
        checkpoints.step(&tree, &mut report)?;
    }
    if report.popped != kept.len() {
        return Err(SoakError::CountMismatch {
            popped: report.popped,
            expected: kept.len(),
        });
    }

    info!(popped = report.popped, "pop phase done");
    Ok(report)
}

/// Distinct keys from `[-key_range, key_range)` in random order.
fn sample_keys(rng: &mut StdRng, config: &SoakConfig) -> Vec<i64> {
    let span = usize::try_from(config.key_range.saturating_mul(2)).unwrap_or(usize::MAX);
    let amount = config.keys.min(span);
    let mut keys: Vec<i64> = index::sample(rng, span, amount)
        .into_iter()
        .map(|i| i as i64 - config.key_range)
        .collect();
    keys.shuffle(rng);
    keys
}
