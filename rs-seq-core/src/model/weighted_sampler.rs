use rand::Rng;

use super::Category;
use crate::error::GenerationError;

/// One registered category keyed by the running total at insertion time.
#[derive(Clone, Copy, Debug)]
struct WeightEntry {
	cumulative: f64,
	category: Category,
}

/// Draws categories from a fixed weighted distribution.
///
/// Entries are stored keyed by cumulative weight, so a draw is a
/// uniform value in `[0, total)` followed by an ordered lookup of the
/// smallest cumulative key greater than or equal to the draw. This
/// keeps sampling in O(log k) for k distinct categories instead of a
/// linear frequency-table scan.
///
/// # Invariants
/// - Cumulative keys are strictly increasing (append-only, positive
///   weights only).
/// - `total` equals the last stored cumulative key.
#[derive(Debug, Default)]
pub struct WeightedSampler {
	entries: Vec<WeightEntry>,
	total: f64,
}

impl WeightedSampler {
	/// Creates an empty sampler. At least one positive-weight entry
	/// must be added before the first draw.
	pub fn new() -> Self {
		Self { entries: Vec::new(), total: 0.0 }
	}

	/// Registers a category with a relative weight.
	///
	/// Zero or negative weights are silently rejected: they change
	/// neither the running total nor the stored entries, and the
	/// category never becomes selectable through this call.
	pub fn add(&mut self, weight: f64, category: Category) {
		if weight <= 0.0 {
			return;
		}
		self.total += weight;
		self.entries.push(WeightEntry { cumulative: self.total, category });
	}

	/// Returns true if no positive-weight entry has been added yet.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Draws a category with probability proportional to its weight.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if no positive-weight entry has
	/// been added.
	pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<Category, GenerationError> {
		if self.entries.is_empty() {
			return Err(GenerationError::InvalidConfiguration(
				"sampler has no positive-weight entries".to_owned(),
			));
		}

		let value = rng.random_range(0.0..self.total);

		// Smallest cumulative key >= value. The draw is strictly below
		// `total`, which is the last key, so the lookup always lands
		// in bounds; the clamp is kept for float-edge safety.
		let index = self.entries.partition_point(|entry| entry.cumulative < value);
		let index = index.min(self.entries.len() - 1);
		Ok(self.entries[index].category)
	}
}
