//! Shared types: errors, cell values, data rows and header metadata.
//!
//! These carry no knowledge of a particular DATEV record format; the
//! [`crate::datev`] module binds them to one.

mod error;
mod metadata;
mod value;

pub use error::*;
pub use metadata::*;
pub use value::*;
