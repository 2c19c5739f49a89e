//! Hashpath - attribute-style traversal of nested mapping/sequence data
//!
//! Decoded documents are usually trees of mappings, sequences and scalars.
//! Walking them with explicit lookups gets noisy fast; this crate wraps a
//! [`Value`] in a borrowed view that adds attribute-style access while
//! leaving every native operation of the value in place:
//!
//! - [`Wrapped::attr`] on a mapping returns the wrapped child, the scalar
//!   unchanged, or [`Wrapped::Absent`] for a missing key (never an error)
//! - sequences hand out wrapped elements from [`WrappedSequence::get`],
//!   `first`, `last` and every iterator combinator
//! - children are wrapped lazily, at the moment they are accessed
//!
//! ```
//! use hashpath::{wrap, Value};
//! use serde_json::json;
//!
//! let data = Value::from(json!({
//!     "posts": [
//!         {"title": "Post 1", "comments": [{"text": "Comment 1"}]}
//!     ]
//! }));
//!
//! let doc = wrap(&data);
//! assert_eq!(doc.attr("posts").first().attr("comments").first().attr("text"), "Comment 1");
//! assert!(doc.attr("dorkboy").is_absent());
//! assert!(doc.is_mapping());
//! ```
//!
//! Beyond the core wrapper the crate provides:
//!
//! - Symbolic and textual keys that are interchangeable for attribute lookup
//! - Dotted paths (`posts.0.title`) and strict RFC 6901 JSON Pointers
//! - Typed extraction of any wrapped subtree through serde
//! - Error types and configurable path limits

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod key;
pub mod limits;
pub mod mapping;
pub mod path;
pub mod sequence;
pub mod value;
pub mod wrap;

// Re-export commonly used types
pub use error::{HashpathError, Result};
pub use key::Key;
pub use limits::PathLimits;
pub use mapping::WrappedMapping;
pub use sequence::{Chunks, Group, Iter, Windows, WrappedSequence};
pub use value::{Mapping, Value};
pub use wrap::{wrap, IntoWrapped, Wrapped};
