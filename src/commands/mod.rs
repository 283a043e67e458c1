//! CLI command implementations.
//!
//! Commands orchestrate the library components: harness, extraction,
//! normalization, charting and output.

pub mod models;
pub mod pipeline;
pub mod run;
pub mod utils;

// Re-export main command functions
pub use models::{KindOutcome, KindReport, RunReport};
pub use pipeline::{render_all, render_chart, run_pipeline};
pub use run::{execute_render, execute_run};
pub use utils::{display_version, format_summary_table};
