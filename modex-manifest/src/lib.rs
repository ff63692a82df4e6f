//! Manifest parsing and validation for `modex.toml` files.
//!
//! A manifest declares one or more `[[index]]` targets. Each target names
//! the sources to aggregate, an optional destination, and the
//! path-handling options that govern how the index is built.

mod error;
mod manifest;
mod options;

pub use error::{Error, Result};
pub use manifest::{IndexTarget, Manifest, ModexToml};
pub use options::IndexOptions;
