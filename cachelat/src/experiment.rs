//! Experiments

// Imports
use {
	crate::{AccessPattern, Buffer, ExperimentError, InvalidArgument},
	rand::Rng,
	std::{
		hint,
		time::{Duration, Instant},
	},
};

/// Default number of timed traversals per experiment
pub const DEFAULT_ITERATIONS: usize = 1000;

/// Experiment
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Experiment {
	/// Buffer size, in elements
	pub size: usize,

	/// Access pattern
	pub pattern: AccessPattern,

	/// Number of timed traversals
	pub iterations: usize,
}

impl Experiment {
	/// Creates a new experiment
	pub fn new(size: usize, pattern: AccessPattern, iterations: usize) -> Self {
		Self {
			size,
			pattern,
			iterations,
		}
	}

	/// Runs this experiment, using `rng` to initialize the buffer.
	///
	/// After an untimed warm-up pass, the buffer is traversed `iterations` times,
	/// and the elapsed time is divided over all `iterations * size` accesses.
	///
	/// # Errors
	/// Returns an error if the size or iteration count are invalid, or if the
	/// measurement isn't a finite, non-negative duration.
	pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ExperimentOutput, ExperimentError> {
		if self.iterations == 0 {
			return Err(InvalidArgument::ZeroIterations.into());
		}
		let mut buffer = Buffer::new(self.size, self.pattern, rng)?;

		// Warm up
		hint::black_box(buffer.warm_up());

		// Then measure
		let start_time = Instant::now();
		let mut checksum = 0u64;
		for _ in 0..self.iterations {
			checksum = checksum.wrapping_add(buffer.traverse());
		}
		let elapsed = start_time.elapsed();
		let checksum = hint::black_box(checksum);

		let nanos_per_access = elapsed.as_nanos() as f64 / self.iterations as f64 / self.size as f64;
		if !nanos_per_access.is_finite() || nanos_per_access < 0.0 {
			return Err(ExperimentError::Measurement { nanos_per_access });
		}

		tracing::debug!(
			size = self.size,
			pattern = %self.pattern,
			iterations = self.iterations,
			?elapsed,
			nanos_per_access,
			checksum,
			"Ran experiment"
		);

		Ok(ExperimentOutput {
			buffer_size: self.size,
			pattern: self.pattern,
			iterations: self.iterations,
			elapsed,
			nanos_per_access,
			checksum,
		})
	}
}

/// Runs a single experiment.
///
/// See [`Experiment::run`] for details.
pub fn run_experiment<R: Rng + ?Sized>(
	size: usize,
	pattern: AccessPattern,
	iterations: usize,
	rng: &mut R,
) -> Result<ExperimentOutput, ExperimentError> {
	Experiment::new(size, pattern, iterations).run(rng)
}

/// Output of [`Experiment::run`]
#[derive(Clone, Copy, Debug)]
pub struct ExperimentOutput {
	/// Buffer size, in elements
	pub buffer_size: usize,

	/// Access pattern
	pub pattern: AccessPattern,

	/// Number of timed traversals
	pub iterations: usize,

	/// Total time spent in the timed traversals
	pub elapsed: Duration,

	/// Average time per access, in nanoseconds
	pub nanos_per_access: f64,

	/// Wrapping sum of every value loaded during the timed traversals
	pub checksum: u64,
}

impl ExperimentOutput {
	/// Returns the buffer size, in units of 1024 elements
	pub fn buffer_size_kib(&self) -> usize {
		self.buffer_size / 1024
	}

	/// Returns the total number of timed accesses
	pub fn total_accesses(&self) -> u128 {
		self.iterations as u128 * self.buffer_size as u128
	}
}
