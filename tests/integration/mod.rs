//! Integration tests for the property ID generator

mod run_context;
mod test_utils;

pub use test_utils::{with_config_env, write_fixture, SAMPLE_DATA, SAMPLE_TEMPLATE};
