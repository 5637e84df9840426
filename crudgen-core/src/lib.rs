//! Core utilities for the crudgen CRUD scaffolder.
//!
//! This crate provides the two building blocks every generated artifact
//! depends on: case conversion for deriving identifiers from a table name,
//! and file writing with overwrite rules (generated files are always
//! rewritten, shared files are created once and never clobbered).

mod case;
mod file;

// String utilities
pub use case::{to_camel_case, to_camel_case_all, to_pascal_case, to_pascal_case_all};
// File operations
pub use file::{File, FileRules, Overwrite, WriteResult};
