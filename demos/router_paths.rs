use env_logger::Env;
use trie_matcher::{MatchResult, MatcherBuilder};

fn main() -> MatchResult<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let matcher = MatcherBuilder::router_path()
        .with_paths([
            "/projects/:project_id/users",
            "/projects/:project_id/users/:user_id",
            "/projects/:project_id/*Prod",
            "/groups/:group_id/users/:user_id",
            "/groups/:group_id/owner",
            "/groups/:group_id/users",
        ])
        .build()?;

    for path in [
        "/groups/1/users",
        "/groups/windy/users/what",
        "/projects/8/products/ting/1",
        "/nowhere",
    ] {
        match matcher.find(path) {
            Some(found) => log::info!("{path} -> {} {:?}", found.pattern, found.params),
            None => log::info!("{path} -> no match"),
        }
    }
    Ok(())
}
