//! Data records for the build helpers.
//!
//! All records are transient: they are created per invocation, mutated in
//! memory during one build step, flushed to disk, and discarded.
//!
//! - [`PageFile`]: one HTML page held in memory while a build step rewrites
//!   its text. Carries a `changed` flag so only touched pages are flushed.
//! - [`DirEntry`]: one immediate child of a directory, tagged file or dir.
//! - [`Version`]: a semantic version, exactly three dot-separated integers.

mod dir_entry;
mod page;
mod version;

pub use dir_entry::*;
pub use page::*;
pub use version::*;
