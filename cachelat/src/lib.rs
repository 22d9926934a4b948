//! Memory access latency benchmark (`cachelat`)
//!
//! Times forward, reverse and pointer-chasing traversals over buffers
//! of varying sizes to observe the latency of each cache level.

// Modules
pub mod buffer;
pub mod config;
pub mod error;
pub mod experiment;
pub mod pattern;
pub mod report;
pub mod set;

// Exports
pub use self::{
	buffer::Buffer,
	config::Config,
	error::{ExperimentError, InvalidArgument},
	experiment::{run_experiment, Experiment, ExperimentOutput, DEFAULT_ITERATIONS},
	pattern::AccessPattern,
	report::{ReportError, ReportWriter},
	set::ExperimentSet,
};
