//! Nullable code generator — deterministic one-time codes.

use aurid_verification::CodeGenerator;
use std::sync::Mutex;

/// Returns pre-configured codes in order, wrapping around at the end.
pub struct NullCodeGen {
    codes: Mutex<Vec<String>>,
    index: Mutex<usize>,
}

impl NullCodeGen {
    /// Create with a sequence of codes handed out in order.
    pub fn sequence(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| (*c).to_owned()).collect()),
            index: Mutex::new(0),
        }
    }

    /// Create with a single code returned for every call.
    pub fn constant(code: &str) -> Self {
        Self::sequence(&[code])
    }
}

impl CodeGenerator for NullCodeGen {
    fn numeric_code(&self, _digits: usize) -> String {
        let codes = self.codes.lock().unwrap();
        let mut idx = self.index.lock().unwrap();
        let current = *idx % codes.len();
        *idx += 1;
        codes[current].clone()
    }
}
