use super::{split_on_slash, Dialect, Segments};
use crate::error::MatchResult;

/// MQTT topic filters: `+` matches one level, `#` the rest of the topic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MqttTopic;

pub const SINGLE_LEVEL: &str = "+";
pub const MULTI_LEVEL: &str = "#";

impl Dialect for MqttTopic {
    fn split<'a>(&self, path: &'a str) -> MatchResult<Segments<'a>> {
        split_on_slash(path)
    }

    fn match_param<'a>(&self, segment: &'a str) -> Option<&'a str> {
        (segment == SINGLE_LEVEL).then_some(segment)
    }

    fn match_wildcard<'a>(&self, segment: &'a str) -> Option<&'a str> {
        (segment == MULTI_LEVEL).then_some(segment)
    }
}
