//! Invocation of the external benchmark harness.

pub mod runner;

pub use runner::{BenchmarkHarness, CommandHarness, StaticHarness};
