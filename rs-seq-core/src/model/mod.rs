//! Top-level module for the sequence generation system.
//!
//! This module provides the weighted constrained generator, including:
//! - Weighted random category selection (`WeightedSampler`)
//! - Per-category occurrence bookkeeping (`DistributionTracker`, internal)
//! - Generation configuration (`GenerationInput`)
//! - The placement loop with swap resolution (`SequenceBuilder`)

/// High-level interface for building one sequence per session.
///
/// Exposes construction from a validated `GenerationInput` and a single
/// consuming `build` pass producing the finished sequence.
pub mod builder;

/// Generation configuration structure.
///
/// Stores the target length, seed, attempt bound, warm-up threshold,
/// weight table and ceiling tier table. Used by `SequenceBuilder`.
pub mod generation_input;

/// Weighted random sampling over a fixed set of categories.
///
/// Keyed by cumulative weight and sampled via ordered lookup.
pub mod weighted_sampler;

/// Internal per-category placement counting against ceilings.
///
/// This module is not exposed publicly.
mod distribution;

/// Identifier of one symbolic value placed into the sequence.
///
/// Valid categories are `1..=CATEGORY_COUNT`.
pub type Category = u32;

/// Size of the fixed category alphabet.
pub const CATEGORY_COUNT: usize = 20;
