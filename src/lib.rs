//! propgen: CSS property ID generator
//!
//! Reads an ordered table of CSS property definitions (longhands, shorthands
//! and aliases) and renders the `nsCSSPropertyID` enumeration into a header
//! template, along with the identifiers that mark the group boundaries.

pub mod cli;
pub mod config;
pub mod emitter;
pub mod error;
pub mod logging;
pub mod output;
pub mod property;
pub mod template;

pub use emitter::{generate, render, PropertyIdList};
pub use error::GenerateError;
pub use property::{PropertyDescriptor, PropertyKind, PropertyTable};
pub use template::Template;
