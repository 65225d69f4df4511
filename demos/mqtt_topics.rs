use env_logger::Env;
use trie_matcher::{MatchResult, MatcherBuilder, PatternSet};

const TABLE: &str = r#"{
    "patterns": [
        { "pattern": "$fogcloud/+/+/thing/event/+/post_reply" },
        { "pattern": "$fogcloud/+/+/thing/service/+", "priority": 1 },
        { "pattern": "$fogcloud/+/+/all/#", "priority": 2 }
    ]
}"#;

fn main() -> MatchResult<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let matcher = MatcherBuilder::mqtt_topic()
        .with_pattern_set(PatternSet::from_json(TABLE)?)
        .build()?;

    for topic in [
        "$fogcloud/pk1/dev1/thing/event/alarm/post_reply",
        "$fogcloud/pk2/dev2/thing/service/lightMode",
        "$fogcloud/pk3/dev3/all/a/b/c",
        "$fogcloud/pk3/thing/",
    ] {
        match matcher.find_positional(topic) {
            Some(found) => log::info!(
                "{topic} -> {}",
                serde_json::to_string(&found).unwrap_or_default()
            ),
            None => log::info!("{topic} -> no match"),
        }
    }
    Ok(())
}
