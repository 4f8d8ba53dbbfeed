//! Flattening of YAML configuration trees into environment variables.
//!
//! A document such as
//!
//! ```yaml
//! sentry:
//!   logging:
//!     enabled: true
//! ```
//!
//! becomes `SENTRY_LOGGING_ENABLED="true"`. The walk handles:
//! - nested mappings (key paths are joined with `_`)
//! - lists of plain strings (collapsed into one `a, b, c` value)
//! - lists of objects (the index becomes part of the key path)
//! - booleans, numbers, strings and null leaves

mod naming;
mod walker;


pub use naming::{path_to_name, segment_to_name};
pub use walker::flatten;
pub(crate) use walker::kind_of;
