//! Handle-carried configuration, replacing the reference implementation's
//! process-wide `BIG_DIM_LENGTH`/`DEBUG` globals (design note in §9).
//!
//! `set_big_dim_length`/`set_hdf5_log` are kept as process-scope setters for
//! compatibility with the external interface, but they are consulted only at
//! handle-construction time (`create_file`/`open_file`), never mid-operation.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use ndmat_core::format::constants::DEFAULT_BIG_DIM_LENGTH;

static BIG_DIM_LENGTH: AtomicU64 = AtomicU64::new(DEFAULT_BIG_DIM_LENGTH);
static HDF5_LOG: AtomicBool = AtomicBool::new(false);

/// Set the core/free classification threshold used by subsequent
/// `create_file` calls made with [`Config::from_process_defaults`].
pub fn set_big_dim_length(n: u64) {
    BIG_DIM_LENGTH.store(n, Ordering::Relaxed);
}

/// Enable or disable verbose diagnostic logging for subsequently constructed
/// handles. Existing handles are unaffected.
pub fn set_hdf5_log(flag: bool) {
    HDF5_LOG.store(flag, Ordering::Relaxed);
}

/// Configuration snapshot attached to a file handle at creation/open time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Extent threshold above which a dimension is classified as core.
    pub big_dim_length: u64,
    /// Whether boundary updates, hyperslab reads, and query planning log at
    /// `trace` level in addition to the crate's ordinary `debug`/`info`
    /// logging.
    pub verbose: bool,
}

impl Config {
    /// Snapshot the process-wide compatibility knobs at the instant this is
    /// called. A handle built from this config is insulated from later
    /// calls to `set_big_dim_length`/`set_hdf5_log`.
    pub fn from_process_defaults() -> Self {
        Self {
            big_dim_length: BIG_DIM_LENGTH.load(Ordering::Relaxed),
            verbose: HDF5_LOG.load(Ordering::Relaxed),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            big_dim_length: DEFAULT_BIG_DIM_LENGTH,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // set_big_dim_length/set_hdf5_log mutate process-wide state; serialize
    // the tests that touch them so they don't race each other.
    static GUARD: Mutex<()> = Mutex::new(());

    #[test]
    fn process_default_reflects_setter() {
        let _guard = GUARD.lock().unwrap();
        set_big_dim_length(42);
        assert_eq!(Config::from_process_defaults().big_dim_length, 42);
        set_big_dim_length(ndmat_core::format::constants::DEFAULT_BIG_DIM_LENGTH);
    }

    #[test]
    fn default_config_matches_spec_default() {
        assert_eq!(Config::default().big_dim_length, 1000);
        assert!(!Config::default().verbose);
    }
}
