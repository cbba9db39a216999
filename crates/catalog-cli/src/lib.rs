//! Command-line front ends for the catalog tools
//!
//! Three binaries share this library: `generate-registry`,
//! `validate-commands` and `validate-catalog`. Each loads the layered
//! [`Config`], initializes logging and runs one pass.

pub mod config;
pub mod output;
pub mod tools;

pub use config::{Config, Overrides};
