use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::CoreError;
use super::chapter::Chapter;
use super::parser::MediaInformationParser;
use super::properties::PropertyScope;
use super::stream::{StreamInformation, StreamType};

pub const KEY_FORMAT_PROPERTIES: &str = "format";
pub const KEY_FILENAME: &str = "filename";
pub const KEY_FORMAT: &str = "format_name";
pub const KEY_FORMAT_LONG: &str = "format_long_name";
pub const KEY_START_TIME: &str = "start_time";
pub const KEY_DURATION: &str = "duration";
pub const KEY_SIZE: &str = "size";
pub const KEY_BIT_RATE: &str = "bit_rate";
pub const KEY_STREAMS: &str = "streams";
pub const KEY_CHAPTERS: &str = "chapters";

/// Media information parsed from ffprobe JSON output.
///
/// Holds the parsed document together with the streams and chapters that
/// were sliced out of it at construction time. Lookups come in two scopes:
///
/// - the whole document (`string_property`, `number_property`, `property`)
/// - the `"format"` object (`string_format_property`, ...)
///
/// None of the accessors fail. A missing scope, a missing key, or a scope
/// that is not a JSON object all read as `None`.
///
/// # Examples
///
/// ```
/// use mediaprobe_core::MediaInformation;
///
/// let info: MediaInformation = r#"{"format":{"format_name":"mov,mp4,m4a"}}"#
///     .parse()
///     .unwrap();
///
/// assert_eq!(info.format().as_deref(), Some("mov,mp4,m4a"));
/// assert!(info.duration().is_none());
/// assert!(info.streams().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MediaInformation {
    document: Value,
    streams: Vec<StreamInformation>,
    chapters: Vec<Chapter>,
}

impl MediaInformation {
    /// Builds media information from an already parsed document.
    pub fn from_value(document: Value) -> Self {
        let streams = array_elements(&document, KEY_STREAMS)
            .into_iter()
            .map(StreamInformation::new)
            .collect();
        let chapters = array_elements(&document, KEY_CHAPTERS)
            .into_iter()
            .map(Chapter::new)
            .collect();

        Self {
            document,
            streams,
            chapters,
        }
    }

    pub fn filename(&self) -> Option<String> {
        self.string_format_property(KEY_FILENAME)
    }

    /// Short format name, e.g. `"mov,mp4,m4a,3gp,3g2,mj2"`
    pub fn format(&self) -> Option<String> {
        self.string_format_property(KEY_FORMAT)
    }

    pub fn long_format(&self) -> Option<String> {
        self.string_format_property(KEY_FORMAT_LONG)
    }

    pub fn start_time(&self) -> Option<String> {
        self.string_format_property(KEY_START_TIME)
    }

    /// Duration in seconds, as printed by ffprobe
    pub fn duration(&self) -> Option<String> {
        self.string_format_property(KEY_DURATION)
    }

    /// Size in bytes, as printed by ffprobe
    pub fn size(&self) -> Option<String> {
        self.string_format_property(KEY_SIZE)
    }

    /// Bitrate in bits per second, as printed by ffprobe
    pub fn bitrate(&self) -> Option<String> {
        self.string_format_property(KEY_BIT_RATE)
    }

    /// Duration in seconds. `None` if missing or not a number.
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration()
            .and_then(|d| d.trim().parse::<f64>().ok())
            .filter(|d| d.is_finite())
    }

    /// The `"tags"` object of the format scope
    pub fn tags(&self) -> Option<&Map<String, Value>> {
        self.format_scope().tags()
    }

    pub fn streams(&self) -> &[StreamInformation] {
        &self.streams
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Streams whose `codec_type` matches `stream_type`, in document order
    pub fn streams_of_type(&self, stream_type: StreamType) -> Vec<&StreamInformation> {
        self.streams
            .iter()
            .filter(|s| s.codec_type() == Some(stream_type))
            .collect()
    }

    pub fn string_property(&self, key: &str) -> Option<String> {
        self.all_scope().string_property(key)
    }

    pub fn number_property(&self, key: &str) -> Option<i64> {
        self.all_scope().number_property(key)
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.all_scope().property(key)
    }

    pub fn string_format_property(&self, key: &str) -> Option<String> {
        self.format_scope().string_property(key)
    }

    pub fn number_format_property(&self, key: &str) -> Option<i64> {
        self.format_scope().number_property(key)
    }

    pub fn format_property(&self, key: &str) -> Option<&Value> {
        self.format_scope().property(key)
    }

    /// Lookups against the whole document
    pub fn all_scope(&self) -> PropertyScope<'_> {
        PropertyScope::new(Some(&self.document))
    }

    /// Lookups against the `"format"` object
    pub fn format_scope(&self) -> PropertyScope<'_> {
        PropertyScope::new(self.format_properties())
    }

    /// The `"format"` value of the document, if present
    pub fn format_properties(&self) -> Option<&Value> {
        self.document.get(KEY_FORMAT_PROPERTIES)
    }

    /// The whole parsed document
    pub fn all_properties(&self) -> &Value {
        &self.document
    }

    /// Consumes the wrapper and returns the parsed document.
    pub fn into_value(self) -> Value {
        self.document
    }
}

impl FromStr for MediaInformation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaInformationParser::from_json_with_error(s)
    }
}

impl From<Value> for MediaInformation {
    fn from(document: Value) -> Self {
        Self::from_value(document)
    }
}

// Elements of the array stored under `key`; empty when absent or not an array.
fn array_elements(document: &Value, key: &str) -> Vec<Value> {
    document
        .get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}
