//! Buffer

// Imports
use {
	crate::{AccessPattern, InvalidArgument},
	cachelat_util::CyclicShuffle,
	rand::Rng,
	std::hint,
};

/// Stride, in elements, of the warm-up pass.
///
/// 16 `u32`s span a 64-byte cache line.
pub const WARM_UP_STRIDE: usize = 16;

/// Buffer being traversed by an experiment
#[derive(Debug)]
pub struct Buffer {
	/// Values
	values: Vec<u32>,

	/// Pattern we're traversed with
	pattern: AccessPattern,

	/// Index the next pointer chase starts at
	cursor: usize,
}

impl Buffer {
	/// Maximum length of a pointer-chasing buffer.
	///
	/// Every index must fit in a `u32` element.
	pub const MAX_CHASE_LEN: usize = (u32::MAX as usize).saturating_add(1);

	/// Creates a buffer of `size` elements, initialized for `pattern`.
	///
	/// Sequential patterns get random values, while [`AccessPattern::Random`] gets
	/// a permutation of `0..size` forming a single cycle.
	///
	/// # Errors
	/// Returns an error if `size` is zero, or too large for pointer chasing.
	pub fn new<R: Rng + ?Sized>(size: usize, pattern: AccessPattern, rng: &mut R) -> Result<Self, InvalidArgument> {
		if size == 0 {
			return Err(InvalidArgument::ZeroBufferSize);
		}

		let values = match pattern {
			AccessPattern::Forward | AccessPattern::Reverse => (0..size).map(|_| rng.gen::<u32>()).collect(),
			AccessPattern::Random => {
				if size > Self::MAX_CHASE_LEN {
					return Err(InvalidArgument::BufferTooLarge {
						size,
						max: Self::MAX_CHASE_LEN,
					});
				}

				// Note: `size <= MAX_CHASE_LEN`, so every index fits.
				let mut values = (0..size).map(|idx| idx as u32).collect::<Vec<_>>();
				values.cyclic_shuffle(rng);
				values
			},
		};

		Ok(Self {
			values,
			pattern,
			cursor: 0,
		})
	}

	/// Returns the number of elements
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Returns if this buffer is empty.
	///
	/// Buffers are never empty, this exists for completeness.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Returns the pattern this buffer was initialized for
	pub fn pattern(&self) -> AccessPattern {
		self.pattern
	}

	/// Returns all values
	pub fn values(&self) -> &[u32] {
		&self.values
	}

	/// Performs the warm-up pass.
	///
	/// Touches every [`WARM_UP_STRIDE`]th element in this buffer's pattern order.
	/// For pointer chasing, follows `len / WARM_UP_STRIDE` links (rounded up).
	///
	/// Returns the sum of all loaded values.
	pub fn warm_up(&mut self) -> u64 {
		let values = hint::black_box(self.values.as_slice());
		match self.pattern {
			AccessPattern::Forward => self::sum(values.iter().step_by(WARM_UP_STRIDE)),
			AccessPattern::Reverse => self::sum(values.iter().rev().step_by(WARM_UP_STRIDE)),
			AccessPattern::Random => {
				let (cursor, sum) = self::chase(values, self.cursor, values.len().div_ceil(WARM_UP_STRIDE));
				self.cursor = cursor;
				sum
			},
		}
	}

	/// Traverses every element once, in this buffer's pattern order.
	///
	/// Pointer chasing continues from where the previous traversal stopped.
	///
	/// Returns the sum of all loaded values.
	pub fn traverse(&mut self) -> u64 {
		// Note: Hiding the slice on each traversal stops the compiler from reusing
		//       a previous traversal's loads.
		let values = hint::black_box(self.values.as_slice());
		match self.pattern {
			AccessPattern::Forward => self::sum(values.iter()),
			AccessPattern::Reverse => self::sum(values.iter().rev()),
			AccessPattern::Random => {
				let (cursor, sum) = self::chase(values, self.cursor, values.len());
				self.cursor = cursor;
				sum
			},
		}
	}
}

/// Sums all values with wrapping
fn sum<'a>(values: impl Iterator<Item = &'a u32>) -> u64 {
	values.fold(0u64, |acc, &value| acc.wrapping_add(u64::from(value)))
}

/// Follows `hops` links of `values` starting at `start`.
///
/// Returns the index we stopped at and the sum of all loaded values.
fn chase(values: &[u32], start: usize, hops: usize) -> (usize, u64) {
	let mut idx = start;
	let mut sum = 0u64;
	for _ in 0..hops {
		let next = values[idx];
		sum = sum.wrapping_add(u64::from(next));
		idx = next as usize;
	}

	(idx, sum)
}
