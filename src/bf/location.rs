//! Source positions for diagnostics
//!
//! - `position` - the Position type (1-based line and column)
//! - `source_location` - conversion from byte offsets to positions

pub mod position;
pub mod source_location;

pub use position::{Location, Position};
pub use source_location::SourceLocation;

/// Source name used when the caller does not supply one
pub const DEFAULT_SOURCE_NAME: &str = "<unknown>";
