//! Unit tests for multidrag.

mod config_tests;
mod perf_tests;
mod registry_tests;
mod snapshot_tests;
