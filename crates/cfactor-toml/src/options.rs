//! Caller-supplied settings for decoding and encoding.

use crate::time::{TimeFormat, TimePattern};

/// Settings for [`decode_with`](crate::decode_with) and friends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Timestamp layouts, tried in order.
    pub time_patterns: Vec<TimePattern>,
    /// Fail on non-comment lines without exactly one `=` instead of skipping them.
    pub strict_lines: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            time_patterns: TimePattern::defaults(),
            strict_lines: false,
        }
    }
}

impl DecodeOptions {
    pub fn with_time_patterns(mut self, patterns: Vec<TimePattern>) -> Self {
        self.time_patterns = patterns;
        self
    }

    pub fn with_strict_lines(mut self, strict: bool) -> Self {
        self.strict_lines = strict;
        self
    }
}

/// Settings for [`encode_with`](crate::encode_with) and friends.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    pub time_format: TimeFormat,
}

impl EncodeOptions {
    pub fn with_time_format(mut self, format: TimeFormat) -> Self {
        self.time_format = format;
        self
    }
}
