use trie_matcher::{Matcher, MqttTopic, RouterPath};

pub const TOPICS: [&str; 9] = [
    "$fogcloud/+/+/thing/event/+/post_reply",
    "$fogcloud/+/+/thing/event/property/post_reply",
    "$fogcloud/+/+/thing/event/property/set",
    "$fogcloud/+/+/thing/service/+",
    "$fogcloud/+/+/thing/event/property/post",
    "$fogcloud/+/+/thing/event/+/post",
    "$fogcloud/+/+/thing/service/+/reply",
    "$fogcloud/+/+/event/#/hello",
    "$fogcloud/+/+/all/#",
];

pub const ROUTER_PATHS: [&str; 6] = [
    "/projects/:project_id/users",
    "/projects/:project_id/users/:user_id",
    "/projects/:project_id/*Prod",
    "/groups/:group_id/users/:user_id",
    "/groups/:group_id/owner",
    "/groups/:group_id/users",
];

#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every topic registered with its index as priority
#[allow(dead_code)]
pub fn ranked_topic_matcher() -> Matcher<MqttTopic> {
    init_logging();
    let mut matcher = Matcher::mqtt_topic();
    for (i, topic) in TOPICS.iter().enumerate() {
        matcher.add_path_with_priority(topic, i as i32).unwrap();
    }
    matcher
}

#[allow(dead_code)]
pub fn router_matcher() -> Matcher<RouterPath> {
    init_logging();
    let mut matcher = Matcher::router_path();
    for path in ROUTER_PATHS {
        matcher.add_path(path).unwrap();
    }
    matcher
}
