use serde_json::Value;

use super::properties::JsonProperties;

const KEY_ID: &str = "id";
const KEY_TIME_BASE: &str = "time_base";
const KEY_START: &str = "start";
const KEY_START_TIME: &str = "start_time";
const KEY_END: &str = "end";
const KEY_END_TIME: &str = "end_time";
const KEY_TITLE: &str = "title";

/// One element of the ffprobe `"chapters"` array.
///
/// `start`/`end` are expressed in `time_base` units; `start_time`/`end_time`
/// are the same positions in seconds, as text.
#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    value: Value,
}

impl Chapter {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn id(&self) -> Option<i64> {
        self.number_property(KEY_ID)
    }

    pub fn time_base(&self) -> Option<String> {
        self.string_property(KEY_TIME_BASE)
    }

    pub fn start(&self) -> Option<i64> {
        self.number_property(KEY_START)
    }

    pub fn start_time(&self) -> Option<String> {
        self.string_property(KEY_START_TIME)
    }

    pub fn end(&self) -> Option<i64> {
        self.number_property(KEY_END)
    }

    pub fn end_time(&self) -> Option<String> {
        self.string_property(KEY_END_TIME)
    }

    /// The `title` tag, which most muxers use for the chapter name
    pub fn title(&self) -> Option<String> {
        self.tag(KEY_TITLE)
    }

    pub fn all_properties(&self) -> &Value {
        &self.value
    }
}

impl JsonProperties for Chapter {
    fn properties(&self) -> Option<&Value> {
        Some(&self.value)
    }
}
