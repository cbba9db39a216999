//! Catalog content files
//!
//! Subagents and commands are markdown files with a YAML frontmatter block:
//!
//! ```text
//! ---
//! name: rust-pro
//! category: language-specialists
//! description: Writes idiomatic Rust
//! tools: Read, Write, Bash
//! ---
//! You are a Rust expert...
//! ```
//!
//! This crate splits a file into its frontmatter mapping and body, offers
//! typed views over the frontmatter per content kind, and lists the files in
//! a content directory.

#![deny(unsafe_code, unused_imports, unused_variables, missing_docs)]

pub mod discovery;
pub mod document;
pub mod frontmatter;

pub use discovery::{discover, DiscoveredFile, DiscoveryFilter};
pub use document::{split_frontmatter, ContentFile};
pub use frontmatter::{CommandFrontmatter, Frontmatter, SubagentFrontmatter, TypedFrontmatter};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ContentFile, Frontmatter, TypedFrontmatter};
}
