use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::GenerationError;
use crate::model::Category;
use crate::model::generation_input::GenerationInput;

/// Writes a finished sequence to a text file, one decimal category
/// per line, in sequence order.
///
/// When `watch` names a category, every placement of it is reported
/// through `log::info!` together with its 0-based line index. This is
/// informational only and has no effect on the artifact.
///
/// # Errors
/// Returns `Persistence` if the file cannot be created or written.
/// The in-memory sequence is untouched and can be exported again.
pub fn export_sequence<P: AsRef<Path>>(
	path: P,
	sequence: &[Category],
	watch: Option<Category>,
) -> Result<(), GenerationError> {
	let file = File::create(path)?;
	let mut writer = BufWriter::new(file);

	for (index, value) in sequence.iter().enumerate() {
		writeln!(writer, "{value}")?;
		if watch == Some(*value) {
			log::info!("{value} found on line #{index}");
		}
	}

	writer.flush()?;
	Ok(())
}

/// Persists a generation profile (weights, ceilings, length, knobs)
/// as a compact binary file, so a tuned configuration can be reused
/// across runs.
///
/// # Errors
/// Returns `Encoding` if serialization fails, `Persistence` on I/O
/// failure.
pub fn save_profile<P: AsRef<Path>>(
	path: P,
	input: &GenerationInput,
) -> Result<(), GenerationError> {
	let bytes = postcard::to_stdvec(input)?;
	std::fs::write(path, bytes)?;
	Ok(())
}

/// Loads a generation profile previously written by `save_profile`.
///
/// # Errors
/// Returns `Persistence` if the file cannot be read, `Encoding` if
/// its contents do not decode to a profile.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<GenerationInput, GenerationError> {
	let bytes = std::fs::read(path)?;
	let input = postcard::from_bytes(&bytes)?;
	Ok(input)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn export_writes_one_value_per_line() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("test.output");
		let sequence: Vec<Category> = vec![3, 1, 20, 2, 20];

		export_sequence(&path, &sequence, Some(20)).unwrap();

		let contents = std::fs::read_to_string(&path).unwrap();
		let parsed: Vec<Category> = contents
			.lines()
			.map(|line| line.parse().unwrap())
			.collect();
		assert_eq!(parsed, sequence);
	}

	#[test]
	fn export_to_an_invalid_path_reports_persistence_failure() {
		let dir = tempfile::tempdir().unwrap();
		// A directory cannot be created as a file.
		match export_sequence(dir.path(), &[1, 2], None) {
			Err(GenerationError::Persistence(_)) => (),
			other => panic!("expected Persistence error, got {other:?}"),
		}
	}

	#[test]
	fn profile_round_trips_through_disk() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("profile.dat");

		let mut input = GenerationInput::default();
		input.length = 1_234;
		input.seed = Some(42);
		input.set_weight(20, 0.25).unwrap();
		input.set_ceilings(vec![50, 40, 30, 20, 10, 5, 4, 3, 2]).unwrap();

		save_profile(&path, &input).unwrap();
		let loaded = load_profile(&path).unwrap();

		assert_eq!(loaded.length, 1_234);
		assert_eq!(loaded.seed, Some(42));
		assert_eq!(loaded.ceilings(), input.ceilings());
		let weights: Vec<(Category, f64)> = loaded.weights().collect();
		assert_eq!(weights, input.weights().collect::<Vec<_>>());
	}
}
