//! CLI route: single route table and run context. Dispatches to the emitter and presentation.

use crate::cli::command_name;
use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{
    format_generate_outcome, format_inspect_json, format_inspect_text, format_validation_json,
    format_validation_text,
};
use crate::config::{ConfigLoader, GenerateConfig, PropgenConfig};
use crate::emitter::{self, PropertyIdList};
use crate::error::GenerateError;
use crate::output::{check_output, write_output, OutputTarget, WriteMode};
use crate::property::PropertyTable;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Text produced by a command, and whether the command succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }
}

/// Runtime context for CLI execution: workspace root and merged configuration.
/// Built from workspace path and optional config path using ConfigLoader only.
pub struct RunContext {
    workspace_root: PathBuf,
    config: PropgenConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, GenerateError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Self::with_config(workspace_root, config)
    }

    /// Create run context from an already loaded configuration.
    pub fn with_config(workspace_root: PathBuf, config: PropgenConfig) -> Result<Self, GenerateError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            GenerateError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(Self {
            workspace_root,
            config,
        })
    }

    pub fn config(&self) -> &PropgenConfig {
        &self.config
    }

    /// Execute a command. Returns the text to print on stdout.
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, GenerateError> {
        let started = Instant::now();
        info!(command = command_name(command), "Running command");

        let result = match command {
            Commands::Generate {
                template,
                data,
                output,
                check,
                write_mode,
            } => self.handle_generate(
                template.as_deref(),
                data.as_deref(),
                output.as_deref(),
                *check,
                *write_mode,
            ),
            Commands::Validate { data, format } => self.handle_validate(data.as_deref(), *format),
            Commands::Inspect { data, format } => self.handle_inspect(data.as_deref(), *format),
        };

        debug!(
            command = command_name(command),
            elapsed_ms = started.elapsed().as_millis() as u64,
            ok = result.as_ref().map(|o| o.success).unwrap_or(false),
            "Command finished"
        );
        result
    }

    fn resolved(&self) -> GenerateConfig {
        self.config.generate.resolve_paths(&self.workspace_root)
    }

    fn data_path(&self, flag: Option<&Path>) -> Result<PathBuf, GenerateError> {
        flag.map(Path::to_path_buf)
            .or(self.resolved().data)
            .ok_or_else(|| {
                GenerateError::ConfigError(
                    "No property data file: pass --data or set generate.data".to_string(),
                )
            })
    }

    fn template_path(&self, flag: Option<&Path>) -> Result<PathBuf, GenerateError> {
        flag.map(Path::to_path_buf)
            .or(self.resolved().template)
            .ok_or_else(|| {
                GenerateError::ConfigError(
                    "No template file: pass --template or set generate.template".to_string(),
                )
            })
    }

    fn handle_generate(
        &self,
        template: Option<&Path>,
        data: Option<&Path>,
        output: Option<&Path>,
        check: bool,
        write_mode: Option<WriteMode>,
    ) -> Result<CommandOutput, GenerateError> {
        let template_path = self.template_path(template)?;
        let data_path = self.data_path(data)?;
        let target = output
            .map(OutputTarget::parse)
            .or_else(|| self.resolved().output.as_deref().map(OutputTarget::parse))
            .unwrap_or(OutputTarget::Stdout);
        let mode = write_mode.unwrap_or(self.config.generate.write_mode);

        match (&target, check) {
            (OutputTarget::Stdout, true) => Err(GenerateError::ConfigError(
                "--check needs a file output".to_string(),
            )),
            (OutputTarget::Stdout, false) => {
                let stdout = std::io::stdout();
                emitter::generate(&mut stdout.lock(), &template_path, &data_path)?;
                Ok(CommandOutput::ok(String::new()))
            }
            (OutputTarget::File(path), true) => {
                let content = emitter::render_files(&template_path, &data_path)?;
                let outcome = check_output(path, &content)?;
                Ok(CommandOutput::ok(format_generate_outcome(&outcome)))
            }
            (OutputTarget::File(path), false) => {
                let content = emitter::render_files(&template_path, &data_path)?;
                let outcome = write_output(path, &content, mode)?;
                Ok(CommandOutput::ok(format_generate_outcome(&outcome)))
            }
        }
    }

    fn handle_validate(
        &self,
        data: Option<&Path>,
        format: OutputFormat,
    ) -> Result<CommandOutput, GenerateError> {
        let table = PropertyTable::load(&self.data_path(data)?)?;
        let report = emitter::validate(&table);
        let text = match format {
            OutputFormat::Text => format_validation_text(&report),
            OutputFormat::Json => format_validation_json(&report)?,
        };
        Ok(CommandOutput {
            text,
            success: report.is_valid(),
        })
    }

    fn handle_inspect(
        &self,
        data: Option<&Path>,
        format: OutputFormat,
    ) -> Result<CommandOutput, GenerateError> {
        let table = PropertyTable::load(&self.data_path(data)?)?;
        let (list, violations) = PropertyIdList::scan(&table);
        let text = match format {
            OutputFormat::Text => format_inspect_text(&table, &list, &violations),
            OutputFormat::Json => format_inspect_json(&table, &list, &violations)?,
        };
        Ok(CommandOutput::ok(text))
    }
}
