use super::*;
use crate::config::ServerConfig;

fn state_with(cdn_flag: bool, rss_enabled: bool) -> AppState {
    AppState::new(ServerConfig { cdn_flag, rss_enabled, ..ServerConfig::default() })
}

#[tokio::test]
async fn cdn_flag_reports_one_when_enabled() {
    assert_eq!(cdn_flag(State(state_with(true, false))).await, "1");
}

#[tokio::test]
async fn cdn_flag_reports_zero_when_disabled() {
    let body = cdn_flag(State(state_with(false, false))).await;
    assert_eq!(body, "0");
    assert!(!site_footer::net::cdn::parse_cdn_flag(body));
}

#[tokio::test]
async fn client_config_exposes_rss_flag() {
    let Json(value) = client_config(State(state_with(false, true))).await;
    let parsed = site_footer::state::config::ClientConfig::from_json(&value.to_string());
    assert!(parsed.rss_enabled());
}

#[tokio::test]
async fn count_tracks_unique_visitors() {
    let state = state_with(false, false);
    let visitor = Uuid::new_v4().to_string();

    let params = || CountParams { visitor: Some(visitor.clone()) };
    count(State(state.clone()), Query(params())).await;
    let Json(counts) = count(State(state.clone()), Query(params())).await;
    assert_eq!(counts, SiteCounts { pv: 2, uv: 1 });
}

#[tokio::test]
async fn count_ignores_malformed_visitor() {
    let state = state_with(false, false);
    let Json(counts) = count(State(state), Query(CountParams { visitor: Some("not-a-uuid".to_owned()) })).await;
    assert_eq!(counts, SiteCounts { pv: 1, uv: 0 });
}
