//! Media information accessors
//!
//! This module turns ffprobe JSON output into `MediaInformation`, with
//! `StreamInformation` and `Chapter` wrappers for the per-stream and
//! per-chapter sections.

pub mod chapter;
pub mod info;
pub mod parser;
pub mod properties;
pub mod stream;

// Re-export commonly used types
pub use chapter::Chapter;
pub use info::MediaInformation;
pub use parser::MediaInformationParser;
pub use properties::{JsonProperties, PropertyScope};
pub use stream::{StreamInformation, StreamType};
