//! Ergonomic glue for code built on a native frame-processing engine.
//!
//! This crate provides two independent helpers: a family of labeled,
//! colorized error types that report under the standard categories, and
//! typed accessors for reading and merging the metadata ("properties")
//! attached to video/audio frames and the nodes that produce them.
//!
//! The engine itself is external: a binding implements the [`Frame`] and
//! [`Node`] traits for its own types and everything here works on top.
//!
//! ## Usage Example
//!
//! ```rust
//! use frameprops::{PropMap, get_prop, get_prop_or};
//!
//! let mut props = PropMap::new();
//! props.insert("_Matrix", 1i64);
//!
//! let matrix: i64 = get_prop(&props, "_Matrix", None)?;
//! assert_eq!(matrix, 1);
//!
//! // zero/empty defaults are valid fallbacks
//! let range = get_prop_or(&props, "_ColorRange", 0i64)?;
//! assert_eq!(range, 0);
//! # Ok::<(), frameprops::FramePropError>(())
//! ```

pub mod engine;
pub mod error;
pub mod keys;
pub mod map;
pub mod props;
pub mod utils;

mod style;

// Re-exports for public API
pub use engine::{Frame, FrameAccess, FrameModifier, Node, PropSource};
pub use error::{CustomError, ErrorCategory, FramePropError, FramePropErrorKind, Result};
pub use keys::PropKey;
pub use map::{FromPropValue, PropMap, PropValue};
pub use props::{get_prop, get_prop_cast, get_prop_cast_or, get_prop_or, merge_clip_props};
pub use utils::norm_func_name;
