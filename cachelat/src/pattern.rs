//! Access patterns

// Imports
use std::fmt;

/// Order in which a buffer is traversed
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessPattern {
	/// From the first element to the last, unit stride
	Forward,

	/// From the last element to the first, unit stride
	Reverse,

	/// Pointer chasing through a random single-cycle permutation
	Random,
}

impl AccessPattern {
	/// All patterns, in the order they're reported
	pub const ALL: [Self; 3] = [Self::Forward, Self::Reverse, Self::Random];

	/// Returns the name of this pattern
	pub fn name(self) -> &'static str {
		match self {
			Self::Forward => "Forward",
			Self::Reverse => "Reverse",
			Self::Random => "Random",
		}
	}

	/// Returns if this pattern walks the buffer sequentially
	pub fn is_sequential(self) -> bool {
		matches!(self, Self::Forward | Self::Reverse)
	}
}

impl fmt::Display for AccessPattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::AccessPattern;

	#[test]
	fn display() {
		let names = AccessPattern::ALL.map(|pattern| pattern.to_string());
		assert_eq!(names, ["Forward", "Reverse", "Random"]);
	}

	#[test]
	fn deserialize_lowercase() {
		let patterns = serde_json::from_str::<Vec<AccessPattern>>(r#"["random", "forward", "reverse"]"#)
			.expect("Unable to parse patterns");
		assert_eq!(patterns, [AccessPattern::Random, AccessPattern::Forward, AccessPattern::Reverse]);

		assert!(serde_json::from_str::<AccessPattern>(r#""Forward""#).is_err());
	}
}
