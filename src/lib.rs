//! PathSwap - cursor-driven path convention swapping
//!
//! This crate provides the core logic for rewriting quoted Windows and
//! Linux path literals inside a line of text, driven by cursor position:
//! locate the quoted string surrounding the cursor, classify its path
//! convention, and convert it to the other one, consulting a user-supplied
//! table of custom drive ↔ mount-path overrides.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod convert;
pub mod host;
pub mod mapping;
pub mod scan;
pub mod swap;
pub mod tracing;

// Re-export commonly used types
pub use convert::{ConvertError, PathKind};
pub use mapping::{MappingError, MappingTable};
pub use scan::QuotedSpan;
pub use swap::SwapOutcome;
