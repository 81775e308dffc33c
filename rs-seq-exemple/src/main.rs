use rs_seq_core::io::export_sequence;
use rs_seq_core::model::builder::SequenceBuilder;
use rs_seq_core::model::generation_input::GenerationInput;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Notifications (category 20 sightings) go through the log facade
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Start from the original distribution: 20 categories, the first
    // twelve equally common, 13..=20 increasingly rare, ceilings
    // 83000 down to 5, target length 997940
    let mut input = GenerationInput::default();

    // Seed can be set to a fixed value for reproducible runs,
    // or left as 'None' to seed from OS entropy
    input.seed = None;

    // Bound on placement attempts per position; 0 disables the guard.
    // A pathological weight/ceiling configuration can otherwise loop
    // forever, so production runs should keep a bound
    input.max_attempts = 100_000_000;

    // Number of filled positions required before blocked candidates
    // are swapped into earlier positions instead of redrawn
    input.warmup = 10;

    // Weights can be tuned per category (not normalized)
    input.set_weight(20, 0.005)?;
    input.set_weight(19, 0.01)?;

    // Attempting to set a weight for a category outside the alphabet
    match input.set_weight(42, 1.0) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("Category 42 is outside the alphabet"),
    }

    // The ceiling table must stay positive and non-increasing
    match input.set_ceilings(vec![10, 20, 8, 7, 6, 5, 4, 3, 2]) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("An increasing ceiling table is invalid"),
    }

    // One session per run: build the whole sequence
    let builder = SequenceBuilder::new(&input)?;
    let sequence = builder.build()?;
    println!("Generated {} values", sequence.len());

    // Persist the result, one value per line, and report every
    // placement of the rarest category with its line index
    export_sequence("test.output", &sequence, Some(20))?;

    Ok(())
}
