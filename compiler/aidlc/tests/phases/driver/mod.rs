//! Driver scenarios.
//!
//! - `resolution` - declaration and lookup failures (E1xxx)
//! - `legality` - marshalling legality failures (E2xxx)
//! - `batch` - shared and per-file registries, dumps, rendered output

mod batch;
mod legality;
mod resolution;
