//! Output formats for generated node graphs
//!
//! - `treeviz` - one line per node, box-drawing connectors
//! - `json` - nested objects, alias children as references to node ids

pub mod json;
pub mod registry;
pub mod treeviz;

pub use json::{to_json_string, JsonFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
