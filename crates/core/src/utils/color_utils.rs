use rand::Rng;

/// Generates a random hex color, sampled uniformly from the 24-bit
/// space and zero-padded to the `#rrggbb` form.
pub fn random_hex_color() -> String {
    let value: u32 = rand::thread_rng().gen_range(0..=0xFF_FF_FF);
    format!("#{:06x}", value)
}
