//! Core utilities for the Cornerstone C++ generator.
//!
//! This crate owns the last step of every generation run: persisting the
//! rendered artifacts to disk.

mod file;

pub use file::{Artifact, persist_all};
