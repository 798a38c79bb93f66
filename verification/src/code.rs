//! One-time-code generation.

use rand::Rng;

/// Source of one-time codes. Abstracted so tests can substitute a
/// deterministic generator.
pub trait CodeGenerator {
    /// A numeric code with exactly `digits` digits (no leading zero).
    fn numeric_code(&self, digits: usize) -> String;
}

/// Uniformly random codes from the thread RNG.
pub struct RandomCodeGen;

impl CodeGenerator for RandomCodeGen {
    fn numeric_code(&self, digits: usize) -> String {
        let digits = digits.clamp(1, 18) as u32;
        let lo = 10u64.pow(digits - 1);
        let hi = 10u64.pow(digits);
        rand::thread_rng().gen_range(lo..hi).to_string()
    }
}
