pub fn run(total_units: i64) -> Result<(), nspire_core::error::NspireError> {
    let sample = nspire_core::sample_size(total_units);
    println!("Total units:     {total_units}");
    println!("Required sample: {sample}");
    Ok(())
}
