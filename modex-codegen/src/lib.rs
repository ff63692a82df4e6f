//! Namespace-tree building and rendering for the modex module-index
//! generator.
//!
//! Two stages, evaluated in sequence:
//!
//! - [`ModuleTree::build`] folds an ordered list of relative file paths
//!   into a rooted namespace tree, applying the path-handling options
//!   (extension stripping, directory omission, flattening, prefixing).
//! - [`render_index`] serializes that tree into one of the output
//!   dialects, wrapped in the export prologue and EOF marker.
//!
//! Both stages are pure functions of their inputs; for a fixed path
//! sequence and options the rendered output is byte-identical across
//! runs.

mod entry;
mod render;
mod tree;

pub use entry::ModuleEntry;
pub use render::{CoffeeSyntax, DialectSyntax, JsSyntax, render_body, render_index, syntax_for};
pub use tree::{ModuleTree, Namespace, Node};
