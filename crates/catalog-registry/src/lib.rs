//! Catalog Registry
//!
//! Builds the `registry.json` index consumed by the web catalog: every
//! subagent and command file's frontmatter, projected into a flat entry and
//! sorted by name within its kind.
//!
//! The two content directories are scanned concurrently. Any unreadable or
//! unparseable file aborts the whole build; nothing is written unless the
//! complete registry was assembled.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod builder;
pub mod model;

pub use builder::{write_registry, RegistryBuilder};
pub use model::{CommandEntry, Registry, SubagentEntry, ENTRY_VERSION, REGISTRY_SCHEMA_URL};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Registry, RegistryBuilder};
}
