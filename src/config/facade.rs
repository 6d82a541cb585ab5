//! Config loading entry point.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::PropgenConfig;
use crate::error::GenerateError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Loads `PropgenConfig` from layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the global file, then workspace `config/config.toml`
    /// and `config/{PROPGEN_ENV}.toml`.
    pub fn load(workspace_root: &Path) -> Result<PropgenConfig, GenerateError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let config: PropgenConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Loaded layered configuration");
        Ok(config)
    }

    /// Defaults, then exactly one file. The file must exist.
    pub fn load_from_file(path: &Path) -> Result<PropgenConfig, GenerateError> {
        if !path.exists() {
            return Err(GenerateError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let config: PropgenConfig = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()?;
        debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }
}
