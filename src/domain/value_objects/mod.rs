//! Domain Value Objects
//!
//! Immutable value types used by the document model.

mod line;
mod shorthand;

pub use line::{LineKind, HEADER_PREFIX, HEADER_SUFFIX};
pub use shorthand::Shorthand;
