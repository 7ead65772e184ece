//! blobtrace-test - Regression test framework for blobtrace
//!
//! Each regression suite creates a [`RegParams`], records numbered
//! comparisons against it, and asserts on [`RegParams::cleanup`] at the
//! end so that every failing comparison is reported, not just the first.
//!
//! # Usage
//!
//! ```ignore
//! use blobtrace_test::RegParams;
//!
//! let mut rp = RegParams::new("chaincode");
//! rp.compare_values(3.0, contour.perimeter(), 1e-9);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: `compare` (default) or `display`. In display mode
//!   rendered images passed to [`RegParams::write_pix`] are saved as PNG
//!   under `tests/regout` for visual inspection.

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // blobtrace-test is at crates/blobtrace-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
