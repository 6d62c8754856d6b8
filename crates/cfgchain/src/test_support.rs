//! Test helpers for code that reads the process environment or logs.

use std::env;
use std::ffi::OsStr;
use std::io;
use std::sync::{Arc, Mutex};

/// RAII guard: sets an environment variable and removes it on drop.
///
/// Each test uses its own variable names, so parallel tests never share one.
pub struct ScopedEnv(pub &'static str);

impl ScopedEnv {
    pub fn set(key: &'static str, value: &str) -> Self {
        Self::set_os(key, OsStr::new(value))
    }

    pub fn set_os(key: &'static str, value: &OsStr) -> Self {
        env::set_var(key, value);
        Self(key)
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut inner) = self.0.lock() {
            inner.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` under a thread-local subscriber and returns what it logged at
/// WARN and above, one event per line.
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    let logged = buf
        .0
        .lock()
        .map(|b| String::from_utf8_lossy(&b).into_owned())
        .unwrap_or_default();
    (out, logged)
}
