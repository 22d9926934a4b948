//! Errors

/// Invalid argument passed to an experiment
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(thiserror::Error)]
pub enum InvalidArgument {
	/// Buffer size was zero
	#[error("Buffer size must be positive")]
	ZeroBufferSize,

	/// Iteration count was zero
	#[error("Iteration count must be positive")]
	ZeroIterations,

	/// Buffer is too large to be indexed by its own elements
	#[error("Buffer size {size} exceeds the maximum of {max} elements for pointer chasing")]
	BufferTooLarge { size: usize, max: usize },
}

/// Experiment error
#[derive(Debug)]
#[derive(thiserror::Error)]
pub enum ExperimentError {
	/// Invalid argument
	#[error("Invalid argument")]
	InvalidArgument(#[from] InvalidArgument),

	/// Measurement didn't produce a usable value
	#[error("Measured {nanos_per_access} ns per access, which isn't a valid duration")]
	Measurement { nanos_per_access: f64 },
}

impl ExperimentError {
	/// Returns if this error was caused by an invalid argument
	pub fn is_invalid_argument(&self) -> bool {
		matches!(self, Self::InvalidArgument(_))
	}

	/// Returns the invalid argument, if any
	pub fn invalid_argument(&self) -> Option<InvalidArgument> {
		match *self {
			Self::InvalidArgument(arg) => Some(arg),
			Self::Measurement { .. } => None,
		}
	}
}
