// src/filtering/mod.rs

//! Decides, for every filesystem entry, whether it is visible to the walk.
//!
//! The pattern engines live in [`patterns`] as independently testable units;
//! [`visibility`] combines them with VCS-directory and binary-file exclusion
//! into the single `include` decision consulted by the tree builder.

mod binary;
mod patterns;
mod visibility;

pub use binary::{is_binary, is_binary_buffer};
pub use patterns::{GlobFilter, IgnoreRules};
pub use visibility::VisibilityFilter;
