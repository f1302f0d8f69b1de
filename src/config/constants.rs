//! Central place for all configuration constants.
//!
//! Default values and environment variable key names used by the config
//! builder. Keeping them here avoids magic numbers and repeated string
//! literals across the config module.

/// Environment variable prefix for scalargrad (e.g. `SCALARGRAD_SEED`).
pub(crate) const ENV_PREFIX: &str = "SCALARGRAD_";

// --- Env key suffixes (full key = ENV_PREFIX + suffix) ---

pub(crate) const ENV_SEED: &str = "SEED";
pub(crate) const ENV_INIT_SPAN: &str = "INIT_SPAN";
pub(crate) const ENV_LEARNING_RATE: &str = "LEARNING_RATE";
pub(crate) const ENV_NUM_STEPS: &str = "NUM_STEPS";
pub(crate) const ENV_LOSS_LOG_EVERY: &str = "LOSS_LOG_EVERY";

// --- Default values ---

pub(crate) const DEFAULT_SEED: u64 = 42;
pub(crate) const DEFAULT_INIT_SPAN: f64 = 1.0;
pub(crate) const DEFAULT_LEARNING_RATE: f64 = 0.05;
pub(crate) const DEFAULT_NUM_STEPS: usize = 2000;
pub(crate) const DEFAULT_LOSS_LOG_EVERY: usize = 200;
