//! # perceptron-rs
//!
//! A pure Rust implementation of the classic single-layer perceptron for
//! binary classification of dense feature vectors.
//!
//! Training runs the textbook online rule: weights start at zero, every
//! sample whose margin is not strictly positive moves them by
//! `learning_rate * label * x`, and training ends at the first update-free
//! pass or at the epoch limit. There is no bias term; the decision boundary
//! always passes through the origin.
//!
//! Around the trainer the crate ships the rest of the classic iris workflow:
//! a CSV dataset loader with a configurable positive class, a seeded
//! deterministic shuffle, accuracy scoring, and an interactive query loop
//! over generic readers and writers.

pub mod types;
pub mod error;
pub mod io;
pub mod util;
pub mod train;
pub mod classify;
pub mod metrics;
pub mod interact;

pub use error::PerceptronError;
pub use types::*;

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress or restore progress output on stderr.
///
/// Training prints per-epoch progress by default; pass `true` to silence it
/// (the CLI's `-q` flag does exactly this).
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Print a progress message to stderr unless quiet mode is on.
pub(crate) fn info(msg: &str) {
    if !QUIET.load(Ordering::Relaxed) {
        eprint!("{}", msg);
    }
}
