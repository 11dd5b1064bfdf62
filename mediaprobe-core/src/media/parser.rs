//! Parses ffprobe JSON output into `MediaInformation`
//!
//! Two entry points with different failure handling:
//!
//! - `from_json_with_error` returns the parse error to the caller.
//! - `from_json` logs the error and returns `None`, for callers that have no
//!   way to handle a failure.
//!
//! Neither produces a partial result for malformed input.

use std::io::Read;

use log::{debug, error};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use super::info::MediaInformation;

/// Entry points for building `MediaInformation` from probe output
pub struct MediaInformationParser;

impl MediaInformationParser {
    /// Parses probe output, logging and discarding any failure.
    pub fn from_json(ffprobe_json_output: &str) -> Option<MediaInformation> {
        Self::from_json_bytes(ffprobe_json_output.as_bytes())
    }

    /// Parses probe output, returning the error on failure.
    pub fn from_json_with_error(ffprobe_json_output: &str) -> CoreResult<MediaInformation> {
        Self::from_json_bytes_with_error(ffprobe_json_output.as_bytes())
    }

    /// Lenient parse of raw probe output bytes.
    pub fn from_json_bytes(ffprobe_json_output: &[u8]) -> Option<MediaInformation> {
        match Self::from_json_bytes_with_error(ffprobe_json_output) {
            Ok(info) => Some(info),
            Err(e) => {
                error!("MediaInformation parsing failed: {}", e);
                None
            }
        }
    }

    /// Strict parse of raw probe output bytes. Invalid UTF-8 inside the
    /// document is reported by the JSON parser like any other syntax error.
    pub fn from_json_bytes_with_error(ffprobe_json_output: &[u8]) -> CoreResult<MediaInformation> {
        let document: Value = serde_json::from_slice(ffprobe_json_output)?;
        let info = MediaInformation::from_value(document);

        debug!(
            "Parsed media information: {} stream(s), {} chapter(s)",
            info.streams().len(),
            info.chapters().len()
        );

        Ok(info)
    }

    /// Reads probe output to the end and parses it.
    pub fn from_reader<R: Read>(mut reader: R) -> CoreResult<MediaInformation> {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;
        Self::from_json_bytes_with_error(&buffer)
    }
}
