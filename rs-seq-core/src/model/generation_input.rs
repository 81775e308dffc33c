use serde::{Deserialize, Serialize};

use super::distribution::SHARED_TIER_CATEGORIES;
use super::{CATEGORY_COUNT, Category};
use crate::error::GenerationError;

/// Number of entries in the ceiling tier table: one shared tier for
/// categories `1..=12` plus one tier per rarer category.
pub const CEILING_TIERS: usize = CATEGORY_COUNT - SHARED_TIER_CATEGORIES as usize + 1;

/// Original weight table, indexed by `category - 1`: the first twelve
/// categories are equally common, the rest taper off sharply.
const DEFAULT_WEIGHTS: [f64; CATEGORY_COUNT] = [
	1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.8, 0.6, 0.4, 0.3, 0.2, 0.1,
	0.01, 0.005,
];

/// Original ceiling tier table: 1-12 (83000), 13 (1000), 14 (500),
/// 15 (250), 16 (100), 17 (50), 18 (25), 19 (10), 20 (5).
const DEFAULT_CEILINGS: [u32; CEILING_TIERS] = [83_000, 1_000, 500, 250, 100, 50, 25, 10, 5];

/// Original target sequence length.
const DEFAULT_LENGTH: usize = 997_940;

/// Input parameters for one generation session.
///
/// `GenerationInput` contains both **simple knobs** (target length,
/// seed, attempt bound, warm-up threshold) and **validated tables**
/// (per-category weights, ceiling tiers). The original's fixed
/// constants are all preserved here as defaults; none of them are
/// assumed optimal, they are tunable parameters.
///
/// # Invariants
/// - `weights` always holds exactly one entry per category.
/// - `ceilings` always holds `CEILING_TIERS` positive, non-increasing
///   entries (enforced by `set_ceilings` and re-checked by `validate`).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GenerationInput {
	/// Target sequence length.
	pub length: usize,

	/// Seed for the session RNG; `None` seeds from OS entropy.
	pub seed: Option<u64>,

	/// Upper bound on placement attempts for a single position before
	/// the build fails with `NonTermination`. `0` disables the guard,
	/// matching the original's unguarded loop.
	pub max_attempts: u64,

	/// Number of positions that must be filled before swap resolution
	/// is attempted. Swapping needs a non-trivial history to search.
	pub warmup: usize,

	/// Relative weight per category, indexed by `category - 1`.
	weights: Vec<f64>,

	/// Ceiling tier table (see `CEILING_TIERS`).
	ceilings: Vec<u32>,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			length: DEFAULT_LENGTH,
			seed: None,
			max_attempts: 0,
			warmup: 10,
			weights: DEFAULT_WEIGHTS.to_vec(),
			ceilings: DEFAULT_CEILINGS.to_vec(),
		}
	}
}

impl GenerationInput {
	/// Sets the relative weight of a specific category.
	///
	/// A weight of zero (or below) makes the category unselectable; it
	/// is kept in the table but never registered with the sampler.
	///
	/// # Errors
	/// Returns an error if the category is outside `1..=20`.
	pub fn set_weight(&mut self, category: Category, weight: f64) -> Result<(), GenerationError> {
		if category == 0 || category as usize > CATEGORY_COUNT {
			return Err(GenerationError::InvalidConfiguration(format!(
				"category {category} is outside 1..={CATEGORY_COUNT}"
			)));
		}
		self.weights[(category - 1) as usize] = weight;
		Ok(())
	}

	/// Replaces the ceiling tier table.
	///
	/// # Errors
	/// Returns an error if the table does not have `CEILING_TIERS`
	/// entries, contains a zero, or increases from one tier to the
	/// next (later tiers describe rarer categories).
	pub fn set_ceilings(&mut self, ceilings: Vec<u32>) -> Result<(), GenerationError> {
		Self::check_ceilings(&ceilings)?;
		self.ceilings = ceilings;
		Ok(())
	}

	fn check_ceilings(ceilings: &[u32]) -> Result<(), GenerationError> {
		if ceilings.len() != CEILING_TIERS {
			return Err(GenerationError::InvalidConfiguration(format!(
				"ceiling table must have {CEILING_TIERS} tiers, got {}",
				ceilings.len()
			)));
		}
		if ceilings.iter().any(|&limit| limit == 0) {
			return Err(GenerationError::InvalidConfiguration(
				"ceiling table entries must be positive".to_owned(),
			));
		}
		if ceilings.windows(2).any(|pair| pair[1] > pair[0]) {
			return Err(GenerationError::InvalidConfiguration(
				"ceiling table must be non-increasing across tiers".to_owned(),
			));
		}
		Ok(())
	}

	/// Returns an iterator over `(category, weight)` pairs.
	pub fn weights(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
		self.weights
			.iter()
			.enumerate()
			.map(|(index, weight)| (index as Category + 1, *weight))
	}

	/// Returns the ceiling tier table.
	pub fn ceilings(&self) -> &[u32] {
		&self.ceilings
	}

	/// Checks the whole configuration before a session starts.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if no category has a positive
	/// weight or the ceiling table is malformed.
	pub(crate) fn validate(&self) -> Result<(), GenerationError> {
		if !self.weights.iter().any(|&weight| weight > 0.0) {
			return Err(GenerationError::InvalidConfiguration(
				"no category has a positive weight".to_owned(),
			));
		}
		Self::check_ceilings(&self.ceilings)
	}
}
