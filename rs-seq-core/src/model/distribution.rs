use super::{CATEGORY_COUNT, Category};

/// Tracks how many times each category has been placed and whether it
/// may still be placed under its ceiling.
///
/// Ceilings come from a tier table: categories `1..=12` share tier 0,
/// category 13 uses tier 1, category 14 tier 2, and so on up to
/// category 20. The tiers are resolved to one ceiling per category at
/// construction so lookups are a plain index.
///
/// # Invariants
/// - `counts[c] <= limits[c]` for every category `c`, as long as
///   callers only `increment` after `remaining` returned true.
#[derive(Debug)]
pub(crate) struct DistributionTracker {
	counts: [u32; CATEGORY_COUNT],
	limits: [u32; CATEGORY_COUNT],
}

/// Categories `1..=SHARED_TIER_CATEGORIES` share the first ceiling tier.
pub(crate) const SHARED_TIER_CATEGORIES: u32 = 12;

impl DistributionTracker {
	/// Resolves the tier table into per-category ceilings.
	///
	/// The table must already be validated (see
	/// `GenerationInput::validate`): one shared tier plus one tier per
	/// category above the shared range.
	pub(crate) fn new(tiers: &[u32]) -> Self {
		let mut limits = [0u32; CATEGORY_COUNT];
		for (index, limit) in limits.iter_mut().enumerate() {
			let category = index as u32 + 1;
			*limit = tiers[Self::tier(category)];
		}
		Self { counts: [0; CATEGORY_COUNT], limits }
	}

	/// Maps a category to its index in the tier table.
	fn tier(category: Category) -> usize {
		if category <= SHARED_TIER_CATEGORIES {
			0
		} else {
			(category - SHARED_TIER_CATEGORIES) as usize
		}
	}

	/// Returns whether one more placement of `category` stays strictly
	/// below its ceiling. Over-limit queries simply return false.
	pub(crate) fn remaining(&self, category: Category) -> bool {
		let index = (category - 1) as usize;
		self.counts[index] < self.limits[index]
	}

	/// Records one placement of `category`.
	///
	/// Callers must only call this after `remaining` returned true,
	/// exactly once per successful placement.
	pub(crate) fn increment(&mut self, category: Category) {
		self.counts[(category - 1) as usize] += 1;
	}

	/// Per-category placement counts, indexed by `category - 1`.
	pub(crate) fn counts(&self) -> &[u32; CATEGORY_COUNT] {
		&self.counts
	}
}
