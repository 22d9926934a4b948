//! Experiment sets

// Imports
use crate::{AccessPattern, Experiment};

/// Kibi (1024) elements
const KI: usize = 1024;

/// Mebi (1024 * 1024) elements
const MI: usize = 1024 * KI;

/// Ordered buffer sizes, in elements, swept for each access pattern
#[derive(PartialEq, Eq, Clone, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ExperimentSet {
	/// Sizes
	sizes: Vec<usize>,
}

impl ExperimentSet {
	/// Sizes of the reference set.
	///
	/// Chosen around the caches of an Intel Core i5-6300HQ
	/// (32 KiB L1d, 256 KiB L2, 6 MiB L3) with 4-byte elements.
	pub const REFERENCE_SIZES: [usize; 5] = [32 * KI, 64 * KI, 512 * KI, 3 * MI, 4 * MI + MI / 2];

	/// Creates a new set from `sizes`
	pub fn new(sizes: Vec<usize>) -> Self {
		Self { sizes }
	}

	/// Creates the reference set
	pub fn reference() -> Self {
		Self::new(Self::REFERENCE_SIZES.to_vec())
	}

	/// Returns all sizes
	pub fn sizes(&self) -> &[usize] {
		&self.sizes
	}

	/// Returns all experiments in this set for `pattern`
	pub fn experiments(&self, pattern: AccessPattern, iterations: usize) -> impl Iterator<Item = Experiment> + '_ {
		self.sizes
			.iter()
			.map(move |&size| Experiment::new(size, pattern, iterations))
	}
}

impl Default for ExperimentSet {
	fn default() -> Self {
		Self::reference()
	}
}
