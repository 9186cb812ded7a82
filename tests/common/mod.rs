//! Common test infrastructure
//!
//! Builds throwaway project directories laid out like the app repository so
//! the merge can run against real files.
//! Tests should only import from this module, not from internal submodules.

mod constants;
mod fixtures;

// Public API - this is what tests import
pub use constants::*;
pub use fixtures::{create_test_project, read_json, TestProject};
