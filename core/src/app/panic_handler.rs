use std::panic;

use crate::thrown::payload_message;

/// Replaces the default panic hook with one that reports panics as `tracing` error events.
///
/// Panics captured by [`Outcome::of`](crate::outcome::Outcome::of) still run the hook, so with this installed they end
/// up in the configured log instead of on stderr.
pub fn install_panic_handler() {
  panic::set_hook(Box::new(|info| {
    let message = payload_message(info.payload()).unwrap_or("<non-text payload>");
    match info.location() {
      Some(location) => tracing::error!(
        file = location.file(),
        line = location.line(),
        "panicked: {}", message
      ),
      None => tracing::error!("panicked: {}", message),
    }
  }));
}
