//! Typed, fail-soft accessors over ffprobe JSON output.
//!
//! The JSON document printed by
//! `ffprobe -print_format json -show_format -show_streams -show_chapters`
//! is parsed once into a [`MediaInformation`], which then answers lookups
//! against the container `"format"` object or the whole document, and
//! exposes the `"streams"` and `"chapters"` arrays as ordered lists of
//! [`StreamInformation`] and [`Chapter`] wrappers.
//!
//! Only parsing can fail. Every accessor returns `None` for a missing or
//! mistyped field instead of an error.
//!
//! ## Usage Example
//!
//! ```rust
//! use mediaprobe_core::{JsonProperties, MediaInformationParser, StreamType};
//!
//! let json = r#"{
//!     "streams": [{"index": 0, "codec_type": "audio", "codec_name": "flac"}],
//!     "format": {"format_name": "flac", "duration": "215.200000", "tags": {"title": "x"}}
//! }"#;
//!
//! let info = MediaInformationParser::from_json_with_error(json).unwrap();
//! assert_eq!(info.format().as_deref(), Some("flac"));
//! assert_eq!(info.duration_secs(), Some(215.2));
//!
//! let audio = info.streams_of_type(StreamType::Audio);
//! assert_eq!(audio[0].codec().as_deref(), Some("flac"));
//! assert!(audio[0].tags().is_none());
//! ```

pub mod error;
pub mod media;

// Re-exports for public API
pub use error::{CoreError, CoreResult};
pub use media::{
    Chapter, JsonProperties, MediaInformation, MediaInformationParser, PropertyScope,
    StreamInformation, StreamType,
};
