//! Catalog Types - Shared vocabulary for the agent catalog tools
//!
//! This module defines the content kinds, their closed category vocabularies,
//! the tool whitelist and the validation issue records used by the registry
//! builder and both validators.

pub mod error;
pub mod issue;
pub mod kind;

pub use error::{CatalogError, Result};
pub use issue::{Severity, ValidationIssue};
pub use kind::{ContentKind, COMMAND_CATEGORIES, KNOWN_TOOLS, SUBAGENT_CATEGORIES};
