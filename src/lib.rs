//! Filesystem utilities for an HTML page build pipeline.
//!
//! The crate is a flat set of single-purpose helpers invoked by build
//! scripts (or the `pgb` binary): walking a page tree into mutable
//! in-memory records, flushing changed records back, shallow directory
//! listings, guarded file reads, JSON read/write, and a routine that
//! synchronizes version numbers and dependency fields between a root
//! package manifest and a derived build manifest.

pub mod error;
pub mod files;
pub mod manifest;
pub mod models;
pub mod pages;

pub use error::{Error, Result};
