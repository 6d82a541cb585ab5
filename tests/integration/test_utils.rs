//! Shared test utilities for integration tests
//!
//! Provides isolated config environment setup and fixture files.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
static CONFIG_ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Header template in the shape of nsCSSPropertyID.h.in
pub const SAMPLE_TEMPLATE: &str = "\
enum nsCSSPropertyID : uint16_t {
  eCSSProperty_UNKNOWN = -1,

${property_ids}

  eCSSProperty_COUNT_no_shorthands = ${longhand_count},
  eCSSProperty_COUNT = ${shorthand_count},
};
";

pub const SAMPLE_DATA: &str = r#"
[[property]]
name = "align-content"
type = "longhand"
id = "align_content"

[[property]]
name = "color"
type = "longhand"
id = "color"

[[property]]
name = "margin"
type = "shorthand"
id = "margin"

[[property]]
name = "-webkit-align-content"
type = "alias"
alias_id = "WebkitAlignContent"
target = "align-content"
"#;

/// Environment variable state to restore after test
struct EnvState {
    home: Option<String>,
    xdg_config_home: Option<String>,
    propgen_env: Option<String>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            home: std::env::var("HOME").ok(),
            xdg_config_home: std::env::var("XDG_CONFIG_HOME").ok(),
            propgen_env: std::env::var("PROPGEN_ENV").ok(),
        }
    }

    fn restore(self) {
        restore_var("HOME", self.home);
        restore_var("XDG_CONFIG_HOME", self.xdg_config_home);
        restore_var("PROPGEN_ENV", self.propgen_env);
    }
}

fn restore_var(key: &str, value: Option<String>) {
    match value {
        Some(v) => std::env::set_var(key, v),
        None => std::env::remove_var(key),
    }
}

/// Run `f` with HOME and XDG_CONFIG_HOME pointing into `test_dir` and PROPGEN_ENV unset.
/// Returns the directory that plays the role of XDG_CONFIG_HOME.
pub fn with_config_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce(&Path) -> R,
{
    let _guard = CONFIG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let config_home = test_dir.path().join("xdg-config");
    let home = test_dir.path().join("home");
    std::fs::create_dir_all(&config_home).unwrap();
    std::fs::create_dir_all(&home).unwrap();

    std::env::set_var("HOME", &home);
    std::env::set_var("XDG_CONFIG_HOME", &config_home);
    std::env::remove_var("PROPGEN_ENV");

    let result = f(&config_home);

    env_state.restore();
    result
}

/// Write `contents` to `dir/name`, creating parent directories.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, contents).unwrap();
    path
}
