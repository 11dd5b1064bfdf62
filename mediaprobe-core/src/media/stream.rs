use std::fmt;

use serde_json::Value;

use super::properties::JsonProperties;

const KEY_INDEX: &str = "index";
const KEY_TYPE: &str = "codec_type";
const KEY_CODEC: &str = "codec_name";
const KEY_CODEC_LONG: &str = "codec_long_name";
const KEY_FORMAT: &str = "pix_fmt";
const KEY_WIDTH: &str = "width";
const KEY_HEIGHT: &str = "height";
const KEY_BIT_RATE: &str = "bit_rate";
const KEY_SAMPLE_RATE: &str = "sample_rate";
const KEY_SAMPLE_FORMAT: &str = "sample_fmt";
const KEY_CHANNEL_LAYOUT: &str = "channel_layout";
const KEY_SAMPLE_ASPECT_RATIO: &str = "sample_aspect_ratio";
const KEY_DISPLAY_ASPECT_RATIO: &str = "display_aspect_ratio";
const KEY_AVERAGE_FRAME_RATE: &str = "avg_frame_rate";
const KEY_REAL_FRAME_RATE: &str = "r_frame_rate";
const KEY_TIME_BASE: &str = "time_base";
const KEY_CODEC_TIME_BASE: &str = "codec_time_base";

/// Stream kind, from the `codec_type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamType {
    Video,
    Audio,
    Subtitle,
    Attachment,
    Data,
    Unknown,
}

impl StreamType {
    const KNOWN: [StreamType; 5] = [
        StreamType::Video,
        StreamType::Audio,
        StreamType::Subtitle,
        StreamType::Attachment,
        StreamType::Data,
    ];

    /// The `codec_type` text ffprobe uses for this kind
    pub fn as_str(self) -> &'static str {
        match self {
            StreamType::Video => "video",
            StreamType::Audio => "audio",
            StreamType::Subtitle => "subtitle",
            StreamType::Attachment => "attachment",
            StreamType::Data => "data",
            StreamType::Unknown => "unknown",
        }
    }
}

impl From<&str> for StreamType {
    fn from(codec_type: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|t| t.as_str() == codec_type)
            .unwrap_or(StreamType::Unknown)
    }
}

impl fmt::Display for StreamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of the ffprobe `"streams"` array.
///
/// Every accessor returns `None` when the stream object does not carry the
/// field. Numeric fields that ffprobe prints as strings (`bit_rate`,
/// `sample_rate`) are returned as text, the same way ffprobe emits them.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamInformation {
    value: Value,
}

impl StreamInformation {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Stream index within the container
    pub fn index(&self) -> Option<i64> {
        self.number_property(KEY_INDEX)
    }

    /// Raw `codec_type` text, e.g. `"video"`
    pub fn stream_type(&self) -> Option<String> {
        self.string_property(KEY_TYPE)
    }

    /// Typed `codec_type`; unrecognized values map to `StreamType::Unknown`
    pub fn codec_type(&self) -> Option<StreamType> {
        self.stream_type().map(|t| StreamType::from(t.as_str()))
    }

    pub fn codec(&self) -> Option<String> {
        self.string_property(KEY_CODEC)
    }

    pub fn codec_long(&self) -> Option<String> {
        self.string_property(KEY_CODEC_LONG)
    }

    /// Pixel format of a video stream
    pub fn format(&self) -> Option<String> {
        self.string_property(KEY_FORMAT)
    }

    pub fn width(&self) -> Option<i64> {
        self.number_property(KEY_WIDTH)
    }

    pub fn height(&self) -> Option<i64> {
        self.number_property(KEY_HEIGHT)
    }

    pub fn bitrate(&self) -> Option<String> {
        self.string_property(KEY_BIT_RATE)
    }

    pub fn sample_rate(&self) -> Option<String> {
        self.string_property(KEY_SAMPLE_RATE)
    }

    pub fn sample_format(&self) -> Option<String> {
        self.string_property(KEY_SAMPLE_FORMAT)
    }

    pub fn channel_layout(&self) -> Option<String> {
        self.string_property(KEY_CHANNEL_LAYOUT)
    }

    pub fn sample_aspect_ratio(&self) -> Option<String> {
        self.string_property(KEY_SAMPLE_ASPECT_RATIO)
    }

    pub fn display_aspect_ratio(&self) -> Option<String> {
        self.string_property(KEY_DISPLAY_ASPECT_RATIO)
    }

    pub fn average_frame_rate(&self) -> Option<String> {
        self.string_property(KEY_AVERAGE_FRAME_RATE)
    }

    pub fn real_frame_rate(&self) -> Option<String> {
        self.string_property(KEY_REAL_FRAME_RATE)
    }

    pub fn time_base(&self) -> Option<String> {
        self.string_property(KEY_TIME_BASE)
    }

    pub fn codec_time_base(&self) -> Option<String> {
        self.string_property(KEY_CODEC_TIME_BASE)
    }

    /// The whole stream object
    pub fn all_properties(&self) -> &Value {
        &self.value
    }
}

impl JsonProperties for StreamInformation {
    fn properties(&self) -> Option<&Value> {
        Some(&self.value)
    }
}
