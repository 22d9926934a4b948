//! Report
//!
//! The report is a markdown-flavored text document with a heading per
//! access pattern, followed by one record per experiment:
//!
//! ```text
//! # Memory access latency investigation
//!
//! ## Forward
//!
//! - experiment:
//!     number: 1
//!     input_data:
//!       buffer_size: 32
//!     results:
//!       duration: 0.812345
//! ```
//!
//! `buffer_size` is in units of 1024 elements, `duration` in nanoseconds per access.

// Imports
use {
	crate::{run_experiment, AccessPattern, ExperimentError, ExperimentOutput},
	rand::Rng,
	std::{fmt, io},
};

/// Report error
#[derive(Debug)]
#[derive(thiserror::Error)]
pub enum ReportError {
	/// Unable to write to the sink
	#[error("Unable to write report")]
	Io(#[from] io::Error),

	/// Experiment failed
	#[error("Unable to run experiment #{number} ({size} elements)")]
	Experiment {
		number: usize,
		size:   usize,
		#[source]
		source: ExperimentError,
	},
}

/// Report writer.
///
/// Writes to a sink owned by the caller, which is responsible
/// for opening it and closing it.
#[derive(Debug)]
pub struct ReportWriter<W> {
	/// Writer
	writer: W,
}

impl<W: io::Write> ReportWriter<W> {
	/// Creates a new report writer
	pub fn new(writer: W) -> Self {
		Self { writer }
	}

	/// Writes the top-level heading
	pub fn write_header(&mut self, title: &str) -> Result<(), io::Error> {
		writeln!(self.writer, "# {title}")?;
		writeln!(self.writer)
	}

	/// Runs one experiment per size in `sizes` with `pattern` and writes a section with all of them.
	///
	/// Each record is written as soon as its experiment finishes.
	///
	/// # Errors
	/// Returns an error if any experiment fails, or if unable to write.
	/// Nothing is retried, so the section may be left incomplete.
	pub fn write_pattern<R: Rng + ?Sized>(
		&mut self,
		pattern: AccessPattern,
		sizes: &[usize],
		iterations: usize,
		rng: &mut R,
	) -> Result<Vec<ExperimentOutput>, ReportError> {
		writeln!(self.writer, "## {pattern}")?;
		writeln!(self.writer)?;

		let mut outputs = Vec::with_capacity(sizes.len());
		for (idx, &size) in sizes.iter().enumerate() {
			let number = idx + 1;
			let output = run_experiment(size, pattern, iterations, rng)
				.map_err(|source| ReportError::Experiment { number, size, source })?;

			self.write_record(number, &output)?;
			outputs.push(output);
		}

		writeln!(self.writer)?;
		Ok(outputs)
	}

	/// Writes a single record
	pub fn write_record(&mut self, number: usize, output: &ExperimentOutput) -> Result<(), io::Error> {
		write!(self.writer, "{}", Record { number, output })
	}

	/// Flushes the sink
	pub fn flush(&mut self) -> Result<(), io::Error> {
		self.writer.flush()
	}

	/// Returns the sink
	pub fn into_inner(self) -> W {
		self.writer
	}
}

/// Record of a single experiment
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
	/// Number, starting at 1
	pub number: usize,

	/// Experiment output
	pub output: &'a ExperimentOutput,
}

impl fmt::Display for Record<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "- experiment:")?;
		writeln!(f, "    number: {}", self.number)?;
		writeln!(f, "    input_data:")?;
		writeln!(f, "      buffer_size: {}", self.output.buffer_size_kib())?;
		writeln!(f, "    results:")?;
		writeln!(f, "      duration: {:.6}", self.output.nanos_per_access)
	}
}
