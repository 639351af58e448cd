//! Captures `tracing` output emitted on the current thread.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use restconf_client::{BlockingRestconfClient, ClientConfig};

pub const INSECURE_WARNING: &str = "certificate verification is disabled";

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a WARN-level fmt subscriber installed and return what it logged.
pub fn capture_warnings<F: FnOnce()>(f: F) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = logs.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

/// Issue one request to a closed local port. The request fails; only the
/// logging that precedes it matters.
pub fn request_once(address: &str, verify_tls: bool) {
    let config = ClientConfig::builder()
        .address(address)
        .port(1)
        .verify_tls(verify_tls)
        .timeout(std::time::Duration::from_secs(2))
        .build();
    let client = BlockingRestconfClient::new(config).unwrap();
    let _ = client.get_root();
}
