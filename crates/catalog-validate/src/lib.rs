//! Catalog Validation
//!
//! Checks subagent and command files against their JSON Schemas and a set
//! of content heuristics.
//!
//! ## Severities
//!
//! - Errors are blocking: any error fails the run.
//! - Warnings are advisory: reported, never affect the exit status.
//!
//! ## Validators
//!
//! - [`CommandValidator`]: commands only, line-item console report
//! - [`CatalogValidator`]: both kinds plus cross-file checks, JSON report

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod catalog;
pub mod commands;
pub mod report;
pub mod rules;
pub mod schema;

pub use catalog::{CatalogValidation, CatalogValidator, ValidationEvent};
pub use commands::{CommandFailure, CommandStatus, CommandValidation, CommandValidator};
pub use report::ValidationReport;
pub use schema::{FrontmatterSchema, SchemaSet, SchemaViolation};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{CatalogValidator, CommandValidator, SchemaSet, ValidationReport};
}
