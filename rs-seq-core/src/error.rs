use thiserror::Error;

/// Errors produced by configuration, generation and persistence.
///
/// # Variants
/// - `InvalidConfiguration`: detected before generation starts; the
///   sampler has no positive-weight entry, the ceiling table is
///   malformed, or a knob references an unknown category.
/// - `NonTermination`: the placement loop exceeded its configured
///   attempt bound for one position. Reported instead of looping
///   forever; never silently truncates the sequence.
/// - `Persistence`: the output artifact could not be written. The
///   in-memory sequence stays valid and can be exported again.
/// - `Encoding`: a generation profile could not be (de)serialized.
#[derive(Debug, Error)]
pub enum GenerationError {
	#[error("invalid configuration: {0}")]
	InvalidConfiguration(String),

	#[error("no placement found for position {position} after {attempts} attempts")]
	NonTermination { position: usize, attempts: u64 },

	#[error("persistence failed: {0}")]
	Persistence(#[from] std::io::Error),

	#[error("profile encoding failed: {0}")]
	Encoding(#[from] postcard::Error),
}
