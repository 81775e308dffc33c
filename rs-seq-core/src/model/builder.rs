use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Category;
use super::distribution::DistributionTracker;
use super::generation_input::GenerationInput;
use super::weighted_sampler::WeightedSampler;
use crate::error::GenerationError;

/// One generation session: draws weighted categories and places them
/// into a fixed-length sequence under the adjacency and ceiling
/// constraints, swapping blocked candidates into earlier positions
/// when a direct placement is infeasible.
///
/// # Responsibilities
/// - Own all mutable generation state (sequence, counts, last placed
///   value, RNG) for exactly one run
/// - Enforce the no-immediate-repeat rule at every placement
/// - Defer blocked candidates to swap resolution once enough history
///   exists to search
///
/// # Invariants
/// - `last_placed` mirrors the value at the highest filled position.
/// - Tracker counts match the occurrences of each category in
///   `sequence` at all times.
#[derive(Debug)]
pub struct SequenceBuilder {
	sampler: WeightedSampler,
	tracker: DistributionTracker,
	rng: StdRng,
	sequence: Vec<Category>,
	last_placed: Option<Category>,
	length: usize,
	warmup: usize,
	max_attempts: u64,
}

impl SequenceBuilder {
	/// Creates a session from a validated configuration.
	///
	/// Seeds the session RNG from `input.seed` when present, otherwise
	/// from OS entropy. One RNG instance serves every draw of the run,
	/// weighted draws and swap-index draws alike.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if no category has a positive
	/// weight or the ceiling table is malformed.
	pub fn new(input: &GenerationInput) -> Result<Self, GenerationError> {
		input.validate()?;

		let mut sampler = WeightedSampler::new();
		for (category, weight) in input.weights() {
			sampler.add(weight, category);
		}

		let rng = match input.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};

		Ok(Self {
			sampler,
			tracker: DistributionTracker::new(input.ceilings()),
			rng,
			sequence: Vec::with_capacity(input.length),
			last_placed: None,
			length: input.length,
			warmup: input.warmup,
			max_attempts: input.max_attempts,
		})
	}

	/// Builds the complete sequence and consumes the session.
	///
	/// For each position: draw a candidate, place it directly when it
	/// differs from the last placed value and still has ceiling
	/// headroom; otherwise, once more than `warmup` positions are
	/// filled, try to swap it into a uniformly random earlier position
	/// and append the displaced value here instead. A failed swap (or
	/// a blocked draw during warm-up) redraws for the same position.
	///
	/// The retry loop is not guaranteed to terminate for arbitrary
	/// weight/ceiling configurations: if every remaining unit of
	/// weight routes to categories that are at their ceiling or equal
	/// to the last placed value, and no swap target exists, the loop
	/// spins. That property is inherited from the heuristic itself;
	/// `max_attempts` bounds it per position and turns an exceeded
	/// bound into `NonTermination` rather than looping forever.
	///
	/// # Errors
	/// - `NonTermination` when a position exhausts `max_attempts`.
	/// - `InvalidConfiguration` if the sampler cannot draw (prevented
	///   up front by `new`, kept as a sampler-level guarantee).
	pub fn build(mut self) -> Result<Vec<Category>, GenerationError> {
		for idx in 0..self.length {
			let mut attempts: u64 = 0;
			loop {
				attempts += 1;
				if self.max_attempts > 0 && attempts > self.max_attempts {
					return Err(GenerationError::NonTermination { position: idx, attempts });
				}

				let candidate = self.sampler.sample(&mut self.rng)?;
				if self.last_placed != Some(candidate) && self.tracker.remaining(candidate) {
					self.sequence.push(candidate);
					self.last_placed = Some(candidate);
					self.tracker.increment(candidate);
					break;
				}

				// Swapping needs history to search; during warm-up the
				// only option is to redraw.
				if idx > self.warmup {
					let swap_idx = self.rng.random_range(0..idx);
					if self.resolve_swap(swap_idx, candidate) {
						break;
					}
				}
			}
		}

		debug_assert_eq!(
			self.tracker.counts().iter().map(|&count| count as usize).sum::<usize>(),
			self.length
		);
		Ok(self.sequence)
	}

	/// Attempts to relocate a blocked candidate into `swap_idx`.
	///
	/// The swap is legal when the candidate differs from the value at
	/// `swap_idx` and from both of its in-bounds neighbors (positions
	/// past the filled range are treated as absent and never block),
	/// the candidate still has ceiling headroom, and the displaced
	/// value differs from the last placed one. That last check keeps
	/// the displaced value legal at the append position, which is
	/// where it ends up.
	///
	/// On success the displaced value is appended to the sequence and
	/// becomes the new last placed value, the candidate takes over
	/// `swap_idx`, and its count is incremented.
	fn resolve_swap(&mut self, swap_idx: usize, candidate: Category) -> bool {
		let old = self.sequence[swap_idx];
		let prev = swap_idx.checked_sub(1).map(|i| self.sequence[i]);
		let next = self.sequence.get(swap_idx + 1).copied();

		if candidate == old || prev == Some(candidate) || next == Some(candidate) {
			return false;
		}
		if !self.tracker.remaining(candidate) {
			return false;
		}
		if self.last_placed == Some(old) {
			return false;
		}

		self.sequence.push(old);
		self.sequence[swap_idx] = candidate;
		self.last_placed = Some(old);
		self.tracker.increment(candidate);
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::CATEGORY_COUNT;

	/// Configuration where only the listed categories are selectable,
	/// all with equal weight.
	fn input_with_categories(categories: &[Category]) -> GenerationInput {
		let mut input = GenerationInput::default();
		for category in 1..=CATEGORY_COUNT as Category {
			input.set_weight(category, 0.0).unwrap();
		}
		for &category in categories {
			input.set_weight(category, 1.0).unwrap();
		}
		input
	}

	fn assert_constraints(sequence: &[Category], input: &GenerationInput) {
		assert_eq!(sequence.len(), input.length);
		for pair in sequence.windows(2) {
			assert_ne!(pair[0], pair[1], "adjacent repeat in {sequence:?}");
		}
		// Recounting through a fresh tracker re-checks every ceiling.
		let mut probe = DistributionTracker::new(input.ceilings());
		for &value in sequence {
			assert!(probe.remaining(value), "category {value} exceeded its ceiling");
			probe.increment(value);
		}
		let total: usize = probe.counts().iter().map(|&count| count as usize).sum();
		assert_eq!(total, input.length);
	}

	#[test]
	fn two_balanced_categories_fill_exactly() {
		let mut input = input_with_categories(&[1, 2]);
		input.length = 4;
		input.seed = Some(11);
		input.max_attempts = 10_000;
		input.set_ceilings(vec![2, 1, 1, 1, 1, 1, 1, 1, 1]).unwrap();

		let sequence = SequenceBuilder::new(&input).unwrap().build().unwrap();
		assert_constraints(&sequence, &input);
		let ones = sequence.iter().filter(|&&value| value == 1).count();
		let twos = sequence.iter().filter(|&&value| value == 2).count();
		assert_eq!((ones, twos), (2, 2), "got {sequence:?}");
	}

	#[test]
	fn single_category_of_length_one() {
		let mut input = input_with_categories(&[20]);
		input.length = 1;
		input.seed = Some(5);
		input.max_attempts = 1_000;

		let sequence = SequenceBuilder::new(&input).unwrap().build().unwrap();
		assert_eq!(sequence, vec![20]);
	}

	#[test]
	fn default_distribution_respects_all_constraints() {
		let mut input = GenerationInput::default();
		input.length = 2_000;
		input.seed = Some(99);
		input.max_attempts = 1_000_000;

		let sequence = SequenceBuilder::new(&input).unwrap().build().unwrap();
		assert_constraints(&sequence, &input);
	}

	#[test]
	fn tight_ceilings_still_complete_through_swaps() {
		let mut input = input_with_categories(&[1, 2, 3, 4]);
		input.length = 100;
		input.seed = Some(2024);
		input.max_attempts = 1_000_000;
		input.set_ceilings(vec![30, 1, 1, 1, 1, 1, 1, 1, 1]).unwrap();

		let sequence = SequenceBuilder::new(&input).unwrap().build().unwrap();
		assert_constraints(&sequence, &input);
	}

	#[test]
	fn infeasible_configuration_reports_non_termination() {
		let mut input = input_with_categories(&[1]);
		input.length = 2;
		input.seed = Some(3);
		input.max_attempts = 50;

		// Position 1 can never differ from position 0.
		match SequenceBuilder::new(&input).unwrap().build() {
			Err(GenerationError::NonTermination { position, attempts }) => {
				assert_eq!(position, 1);
				assert!(attempts > 50);
			}
			other => panic!("expected NonTermination, got {other:?}"),
		}
	}

	#[test]
	fn swap_blocked_by_previous_neighbor_leaves_state_unmodified() {
		let input = GenerationInput::default();
		let mut builder = SequenceBuilder::new(&input).unwrap();
		builder.sequence = vec![1, 2, 3, 4, 5];
		builder.last_placed = Some(5);
		for &value in &builder.sequence {
			builder.tracker.increment(value);
		}

		// Candidate 2 equals the neighbor before swap index 2.
		assert!(!builder.resolve_swap(2, 2));
		assert_eq!(builder.sequence, vec![1, 2, 3, 4, 5]);
		assert_eq!(builder.last_placed, Some(5));
		assert_eq!(builder.tracker.counts()[1], 1);
	}

	#[test]
	fn swap_blocked_when_displaced_value_equals_last_placed() {
		let input = GenerationInput::default();
		let mut builder = SequenceBuilder::new(&input).unwrap();
		builder.sequence = vec![7, 1, 2, 3, 7];
		builder.last_placed = Some(7);
		for &value in &builder.sequence {
			builder.tracker.increment(value);
		}

		// Swapping out position 0 would append a 7 right after a 7.
		assert!(!builder.resolve_swap(0, 9));
		assert_eq!(builder.sequence, vec![7, 1, 2, 3, 7]);
	}

	#[test]
	fn legal_swap_appends_displaced_value() {
		let input = GenerationInput::default();
		let mut builder = SequenceBuilder::new(&input).unwrap();
		builder.sequence = vec![1, 2, 3, 4, 5];
		builder.last_placed = Some(5);
		for &value in &builder.sequence {
			builder.tracker.increment(value);
		}

		assert!(builder.resolve_swap(2, 9));
		assert_eq!(builder.sequence, vec![1, 2, 9, 4, 5, 3]);
		assert_eq!(builder.last_placed, Some(3));
		assert_eq!(builder.tracker.counts()[8], 1);
	}

	#[test]
	fn no_positive_weight_fails_at_construction() {
		let input = input_with_categories(&[]);
		assert!(matches!(
			SequenceBuilder::new(&input),
			Err(GenerationError::InvalidConfiguration(_))
		));
	}

	#[test]
	fn seeded_sessions_replay_identically() {
		let mut input = GenerationInput::default();
		input.length = 500;
		input.seed = Some(7_654_321);
		input.max_attempts = 1_000_000;

		let first = SequenceBuilder::new(&input).unwrap().build().unwrap();
		let second = SequenceBuilder::new(&input).unwrap().build().unwrap();
		assert_eq!(first, second);
	}
}
