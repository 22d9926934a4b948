//! Configuration

// Imports
use crate::{AccessPattern, ExperimentSet, InvalidArgument, DEFAULT_ITERATIONS};

/// Configuration.
///
/// Every field is optional in the config file, defaulting to the reference experiment matrix.
#[derive(Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Report title
	pub title: String,

	/// Buffer sizes, in elements
	pub sizes: ExperimentSet,

	/// Timed traversals per experiment
	pub iterations: usize,

	/// Access patterns, in the order they're run
	pub patterns: Vec<AccessPattern>,

	/// Seed for buffer initialization.
	///
	/// If `None`, a seed is drawn from the OS.
	pub seed: Option<u64>,
}

impl Config {
	/// Default report title
	pub const DEFAULT_TITLE: &'static str = "Memory access latency investigation";

	/// Checks that every experiment in this config is runnable.
	///
	/// # Errors
	/// Returns an error if the iteration count or any buffer size is zero.
	pub fn validate(&self) -> Result<(), InvalidArgument> {
		if self.iterations == 0 {
			return Err(InvalidArgument::ZeroIterations);
		}
		if self.sizes.sizes().contains(&0) {
			return Err(InvalidArgument::ZeroBufferSize);
		}

		Ok(())
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			title:      Self::DEFAULT_TITLE.to_owned(),
			sizes:      ExperimentSet::reference(),
			iterations: DEFAULT_ITERATIONS,
			patterns:   AccessPattern::ALL.to_vec(),
			seed:       None,
		}
	}
}
