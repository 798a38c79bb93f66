//! Nullable delivery channel — captures codes instead of sending them.

use aurid_types::VerificationKind;
use aurid_verification::DeliveryChannel;
use std::sync::Mutex;

/// Records every (destination, code) pair handed to it.
pub struct NullDelivery {
    sent: Mutex<Vec<(String, String)>>,
    fail_with: Mutex<Option<String>>,
}

impl NullDelivery {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Mutex::new(None),
        }
    }

    /// Everything delivered so far, in order.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    /// Make every subsequent delivery fail with the given message.
    pub fn fail_with(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_owned());
    }
}

impl Default for NullDelivery {
    fn default() -> Self {
        Self::new()
    }
}

impl DeliveryChannel for NullDelivery {
    fn deliver_code(
        &self,
        _kind: VerificationKind,
        destination: &str,
        code: &str,
    ) -> Result<(), String> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(message);
        }
        self.sent
            .lock()
            .unwrap()
            .push((destination.to_owned(), code.to_owned()));
        Ok(())
    }
}
