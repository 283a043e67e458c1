//! Chord Benchmark Visualizer
//!
//! Turns the console output of the Chord DHT benchmark suite into typed
//! datasets and SVG charts.
//!
//! The pipeline runs one way:
//! raw text → section payload → typed dataset → chart.
//!
//! ## Getting Started
//!
//! From the node crate's directory:
//!
//! ```bash
//! chord-bench-viz            # run the suite and chart it
//! chord-bench-viz render --input benchmark_results/raw_output.txt
//! ```

pub mod chart;
pub mod commands;
pub mod harness;
pub mod normalizer;
pub mod output;
pub mod parser;
pub mod utils;
