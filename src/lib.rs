//! Recursive document merging for configuration data.
//!
//! This crate combines two nested documents — mappings, sequences, and
//! scalar leaves — under one of four named strategies (`recurse`,
//! `aggregate`, `overwrite`, `list`) plus a `smart` dispatcher that picks
//! a strategy from the originating document's format hint. Overlay values
//! take precedence on conflict, except where a strategy explicitly
//! collects both sides.
//!
//! The design favours robustness over strictness: merging is best-effort
//! and never fails, so a typo'd strategy name or a type mismatch cannot
//! abort a larger configuration-reconciliation pipeline. Parsing and
//! serialisation stay with the caller; conversions to and from
//! [`serde_json::Value`] are provided behind the default `serde_json`
//! feature.
//!
//! ```rust
//! use serde_json::json;
//! use structured_merge::{Document, merge};
//!
//! let base = Document::from(json!({"a": {"x": 1, "y": 2}, "b": 5}));
//! let overlay = Document::from(json!({"a": {"y": 9}, "c": 3}));
//! let (Some(base), Some(overlay)) = (base.as_mapping(), overlay.as_mapping()) else {
//!     unreachable!("object literals convert to mappings");
//! };
//!
//! let merged = merge(base, overlay, "recurse", "yaml");
//! assert_eq!(
//!     serde_json::Value::from(merged),
//!     json!({"a": {"x": 1, "y": 9}, "b": 5, "c": 3}),
//! );
//! ```

mod aggregate;
mod document;
mod merge;
mod strategy;

pub use aggregate::{Aggregator, DepthBounded};
pub use document::{Document, Mapping, Scalar};
pub use merge::{
    merge, merge_list, merge_overwrite, merge_recurse, merge_smart, merge_with, update,
};
pub use strategy::{MergeStrategy, UnknownStrategy};
