//! Core types for the modex module-index generator.
//!
//! This crate provides fundamental types used across the modex
//! ecosystem: the output [`Dialect`], the [`Indent`] unit applied per
//! nesting level, and destination file handling.

mod dialect;
mod file;
mod indent;

pub use dialect::Dialect;
pub use file::{File, resolve_dest, write_file};
pub use indent::Indent;
