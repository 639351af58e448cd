//! Process-wide switch for the insecure-TLS warning.
//!
//! Clients built with certificate verification disabled log a `warn!` on every
//! request. Composition roots that knowingly talk to self-signed controllers
//! call [`suppress_insecure_warnings`] once at startup. The switch is
//! write-once: there is no way to turn the warning back on.

use std::sync::atomic::{AtomicBool, Ordering};

static SUPPRESSED: AtomicBool = AtomicBool::new(false);

/// Silence the insecure-TLS warning for the rest of the process. Idempotent.
pub fn suppress_insecure_warnings() {
    SUPPRESSED.store(true, Ordering::Relaxed);
}

pub fn insecure_warnings_suppressed() -> bool {
    SUPPRESSED.load(Ordering::Relaxed)
}

pub(crate) fn warn_insecure(url: &str) {
    if !insecure_warnings_suppressed() {
        tracing::warn!(
            url,
            "Unverified HTTPS request: certificate verification is disabled"
        );
    }
}

