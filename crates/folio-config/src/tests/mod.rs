
use std::env;

use tempfile::TempDir;

/// Captures environment variables and restores them on drop, so
/// env-dependent tests cannot leak state into each other.
pub(crate) struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let mut guard = Self { saved: Vec::new() };
        guard.override_var(key, value);
        guard
    }

    /// Override another variable under the same guard.
    pub(crate) fn and_set(mut self, key: &'static str, value: &str) -> Self {
        self.override_var(key, value);
        self
    }

    fn override_var(&mut self, key: &'static str, value: &str) {
        self.saved.push((key, env::var(key).ok()));
        unsafe { env::set_var(key, value) };
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // Restore in reverse capture order
        while let Some((key, original)) = self.saved.pop() {
            unsafe {
                match original {
                    Some(val) => env::set_var(key, &val),
                    None => env::remove_var(key),
                }
            }
        }
    }
}

/// Temp config directory wired up through FOLIO_CONFIG_DIR.
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("FOLIO_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}
