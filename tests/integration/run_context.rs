//! Integration tests for CLI command dispatch through RunContext

use clap::Parser;
use propgen::cli::{Cli, Commands, OutputFormat, RunContext};
use propgen::config::PropgenConfig;
use propgen::error::{GenerateError, OutputError};
use propgen::output::WriteMode;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::integration::{write_fixture, SAMPLE_DATA, SAMPLE_TEMPLATE};

fn context_for(workspace: &TempDir) -> RunContext {
    let mut config = PropgenConfig::default();
    config.generate.template = Some(PathBuf::from("in/nsCSSPropertyID.h.in"));
    config.generate.data = Some(PathBuf::from("in/properties.toml"));
    config.generate.output = Some(PathBuf::from("out/nsCSSPropertyID.h"));
    RunContext::with_config(workspace.path().to_path_buf(), config).unwrap()
}

fn setup_workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_fixture(temp.path(), "in/nsCSSPropertyID.h.in", SAMPLE_TEMPLATE);
    write_fixture(temp.path(), "in/properties.toml", SAMPLE_DATA);
    temp
}

fn generate_command(check: bool, write_mode: Option<WriteMode>) -> Commands {
    Commands::Generate {
        template: None,
        data: None,
        output: None,
        check,
        write_mode,
    }
}

#[test]
fn test_generate_uses_config_paths_relative_to_workspace() {
    let ws = setup_workspace();
    let ctx = context_for(&ws);

    let output = ctx.execute(&generate_command(false, None)).unwrap();
    assert!(output.success);
    assert!(output.text.starts_with("Wrote: "), "got: {}", output.text);

    let written = std::fs::read_to_string(ws.path().join("out/nsCSSPropertyID.h")).unwrap();
    assert!(written.contains("  eCSSProperty_color,\n"));
}

#[test]
fn test_generate_if_changed_reports_unchanged() {
    let ws = setup_workspace();
    let ctx = context_for(&ws);

    ctx.execute(&generate_command(false, None)).unwrap();
    let second = ctx.execute(&generate_command(false, None)).unwrap();
    assert!(second.text.starts_with("Unchanged: "), "got: {}", second.text);

    let forced = ctx
        .execute(&generate_command(false, Some(WriteMode::Always)))
        .unwrap();
    assert!(forced.text.starts_with("Wrote: "), "got: {}", forced.text);
}

#[test]
fn test_generate_check_mode() {
    let ws = setup_workspace();
    let ctx = context_for(&ws);

    let err = ctx.execute(&generate_command(true, None)).unwrap_err();
    assert!(matches!(err, GenerateError::Output(OutputError::Missing(_))));

    ctx.execute(&generate_command(false, None)).unwrap();
    let ok = ctx.execute(&generate_command(true, None)).unwrap();
    assert!(ok.text.starts_with("Up to date: "));

    write_fixture(ws.path(), "out/nsCSSPropertyID.h", "stale\n");
    let err = ctx.execute(&generate_command(true, None)).unwrap_err();
    assert!(matches!(err, GenerateError::Output(OutputError::Stale { .. })));
    assert_eq!(
        std::fs::read_to_string(ws.path().join("out/nsCSSPropertyID.h")).unwrap(),
        "stale\n",
        "check mode must not write"
    );
}

#[test]
fn test_generate_flags_override_config() {
    let ws = setup_workspace();
    let ctx = context_for(&ws);
    let other_output = ws.path().join("elsewhere.h");

    let cli = Cli::try_parse_from([
        "propgen",
        "generate",
        "--output",
        other_output.to_str().unwrap(),
        "--write-mode",
        "always",
    ])
    .unwrap();
    ctx.execute(&cli.command).unwrap();

    assert!(other_output.exists());
    assert!(!ws.path().join("out/nsCSSPropertyID.h").exists());
}

#[test]
fn test_generate_without_template_is_config_error() {
    let ws = setup_workspace();
    let ctx = RunContext::with_config(ws.path().to_path_buf(), PropgenConfig::default()).unwrap();

    let err = ctx.execute(&generate_command(false, None)).unwrap_err();
    match err {
        GenerateError::ConfigError(msg) => assert!(msg.contains("--template")),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_check_with_stdout_output_is_rejected() {
    let ws = setup_workspace();
    let mut config = PropgenConfig::default();
    config.generate.template = Some(PathBuf::from("in/nsCSSPropertyID.h.in"));
    config.generate.data = Some(PathBuf::from("in/properties.toml"));
    config.generate.output = Some(PathBuf::from("-"));
    let ctx = RunContext::with_config(ws.path().to_path_buf(), config).unwrap();

    assert!(matches!(
        ctx.execute(&generate_command(true, None)),
        Err(GenerateError::ConfigError(_))
    ));
}

#[test]
fn test_validate_reports_success_and_failure() {
    let ws = setup_workspace();
    let ctx = context_for(&ws);

    let ok = ctx
        .execute(&Commands::Validate {
            data: None,
            format: OutputFormat::Json,
        })
        .unwrap();
    assert!(ok.success);
    let value: serde_json::Value = serde_json::from_str(&ok.text).unwrap();
    assert_eq!(value["total"], 4);
    assert_eq!(value["longhand_marker"], "eCSSProperty_margin");

    let bad = write_fixture(
        ws.path(),
        "bad.toml",
        r#"
[[property]]
name = "margin"
type = "shorthand"
id = "margin"

[[property]]
name = "color"
type = "longhand"
id = "color"
"#,
    );
    let failed = ctx
        .execute(&Commands::Validate {
            data: Some(bad),
            format: OutputFormat::Text,
        })
        .unwrap();
    assert!(!failed.success);
    assert!(failed.text.contains("longhand after a shorthand"));
}

#[test]
fn test_inspect_lists_identifiers() {
    let ws = setup_workspace();
    let ctx = context_for(&ws);

    let out = ctx
        .execute(&Commands::Inspect {
            data: None,
            format: OutputFormat::Json,
        })
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out.text).unwrap();
    let props = value["properties"].as_array().unwrap();
    assert_eq!(props.len(), 4);
    assert_eq!(props[3]["identifier"], "eCSSPropertyAlias_WebkitAlignContent");
    assert_eq!(props[3]["target"], "align-content");
    assert_eq!(value["longhand_count"], 2);
}

#[test]
fn test_invalid_config_is_rejected() {
    let ws = TempDir::new().unwrap();
    let mut config = PropgenConfig::default();
    config.logging.format = "xml".to_string();
    let result = RunContext::with_config(ws.path().to_path_buf(), config);
    assert!(matches!(result, Err(GenerateError::ConfigError(ref m)) if m.contains("xml")));
}
