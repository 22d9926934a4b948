//! Utilities

// Modules
pub mod logger;

// Imports
use rand::Rng;

/// Extension trait for slices to shuffle them into a single cycle
#[extend::ext(pub, name = CyclicShuffle)]
impl<T> [T] {
	/// Shuffles this slice using Sattolo's algorithm.
	///
	/// When this slice holds the identity permutation `0..len`, the result,
	/// read as `idx -> slice[idx]`, is a single cycle through every index.
	fn cyclic_shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
		for idx in (1..self.len()).rev() {
			// Note: Excluding `idx` itself is what guarantees a single cycle.
			let other_idx = rng.gen_range(0..idx);
			self.swap(idx, other_idx);
		}
	}
}

#[cfg(test)]
mod tests {
	use {
		super::CyclicShuffle,
		rand::{rngs::StdRng, SeedableRng},
	};

	/// Follows `idx -> values[idx]` from `0` and returns how many hops until we're back at `0`
	fn cycle_len(values: &[usize]) -> usize {
		let mut idx = values[0];
		let mut hops = 1;
		while idx != 0 {
			idx = values[idx];
			hops += 1;
		}

		hops
	}

	#[test]
	fn cyclic_shuffle_is_single_cycle() {
		let mut rng = StdRng::seed_from_u64(0x5eed);
		for len in [2, 3, 16, 1000, 4097] {
			let mut values = (0..len).collect::<Vec<_>>();
			values.cyclic_shuffle(&mut rng);
			assert_eq!(cycle_len(&values), len, "Permutation of {len} elements wasn't a single cycle");
		}
	}

	#[test]
	fn cyclic_shuffle_keeps_elements() {
		let mut rng = StdRng::seed_from_u64(7);
		let mut values = (0..512).collect::<Vec<usize>>();
		values.cyclic_shuffle(&mut rng);
		assert_ne!(values, (0..512).collect::<Vec<_>>());

		values.sort_unstable();
		assert_eq!(values, (0..512).collect::<Vec<_>>());
	}

	#[test]
	fn cyclic_shuffle_small() {
		let mut rng = StdRng::seed_from_u64(0);

		let mut empty: [usize; 0] = [];
		empty.cyclic_shuffle(&mut rng);

		let mut single = [0usize];
		single.cyclic_shuffle(&mut rng);
		assert_eq!(single, [0]);

		// Note: The only 2-cycle of 2 elements is the swap
		let mut pair = [0usize, 1];
		pair.cyclic_shuffle(&mut rng);
		assert_eq!(pair, [1, 0]);
	}
}
