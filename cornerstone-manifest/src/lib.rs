//! Loading of Cornerstone tree files.
//!
//! A tree file is a TOML (or JSON) document holding an `[output]` table and
//! the serialized declaration tree. Parse failures are reported as
//! [`miette`] diagnostics pointing into the source.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod tree_file;
mod validate;

pub use error::{Error, Result};
pub use tree_file::{OutputConfig, TreeFile};
