//! # depviz-error
//!
//! Error type shared by the depviz collaborators (manifest discovery,
//! constraint loading, configuration and output).
//!
//! - **ErrorKind**: what went wrong (e.g. FileNotFound, DeserializationFailed)
//! - **Context**: key/value pairs pointing at the offending input
//! - **Source**: the wrapped underlying error, if any
//!
//! ```rust
//! use depviz_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::InvalidFormat, "missing depends block")
//!         .with_operation("emconf::extract")
//!         .with_context("file", "news/ext_emconf.php"))
//! }
//! ```
//!
//! The graph builder itself never fails: references to missing nodes are
//! skipped, not reported through this type.

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using depviz Error
pub type Result<T> = std::result::Result<T, Error>;
