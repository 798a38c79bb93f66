//! Out-of-band code delivery.
//!
//! The core only generates and checks codes; getting them to the user is an
//! external concern (SMS/email gateway). [`LogDelivery`] is the development
//! stand-in that logs the code instead of sending it — it must be replaced
//! by a real channel integration in production.

use aurid_types::VerificationKind;

pub trait DeliveryChannel {
    /// Deliver `code` to `destination` for the given channel kind.
    fn deliver_code(
        &self,
        kind: VerificationKind,
        destination: &str,
        code: &str,
    ) -> Result<(), String>;
}

/// Development stand-in: logs the code at info level.
pub struct LogDelivery;

impl DeliveryChannel for LogDelivery {
    fn deliver_code(
        &self,
        kind: VerificationKind,
        destination: &str,
        code: &str,
    ) -> Result<(), String> {
        tracing::info!(%kind, destination, code, "dev-mode delivery: code logged, not sent");
        Ok(())
    }
}
