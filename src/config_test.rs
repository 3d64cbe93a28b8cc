#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn viewer_defaults_match_widget_constants() {
    let cfg = ViewerConfig::default();
    assert_eq!(cfg.max_scale, 15.0);
    assert_eq!(cfg.speed, 1.2);
    assert_eq!(cfg.pinch_step, 0.02);
    assert_eq!(cfg.pinch_out_factor, 4.0);
    assert_eq!(cfg.wheel_anchor, WheelAnchor::Cursor);
}

#[test]
fn empty_json_gives_defaults() {
    let cfg = MapConfig::from_json("{}").unwrap();
    assert_eq!(cfg, MapConfig::default());
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let cfg = MapConfig::from_json(r#"{ "project_id": 7, "viewer": { "max_scale": 4 } }"#).unwrap();
    assert_eq!(cfg.project_id, 7);
    assert_eq!(cfg.viewer.max_scale, 4.0);
    assert_eq!(cfg.viewer.speed, 1.2);
    assert_eq!(cfg.container_id, "interactive-map");
}

#[test]
fn wheel_anchor_parses_lowercase() {
    let cfg = MapConfig::from_json(r#"{ "viewer": { "wheel_anchor": "origin" } }"#).unwrap();
    assert_eq!(cfg.viewer.wheel_anchor, WheelAnchor::Origin);
}

#[test]
fn malformed_json_is_config_error() {
    let err = MapConfig::from_json("{ nope").unwrap_err();
    assert!(matches!(err, MapError::Config(_)));
    assert!(err.to_string().starts_with("invalid map config"));
}

#[test]
fn normalized_repairs_bad_values() {
    let cfg = ViewerConfig {
        max_scale: 0.5,
        speed: 0.9,
        pinch_step: -1.0,
        pinch_out_factor: 0.0,
        wheel_anchor: WheelAnchor::Cursor,
    }
    .normalized();
    assert_eq!(cfg.max_scale, 1.0);
    assert_eq!(cfg.speed, 1.2);
    assert_eq!(cfg.pinch_step, 0.02);
    assert_eq!(cfg.pinch_out_factor, 4.0);
}

#[test]
fn normalized_rejects_nan() {
    let cfg = ViewerConfig { max_scale: f64::NAN, ..ViewerConfig::default() }.normalized();
    assert_eq!(cfg.max_scale, 1.0);
}

#[test]
fn urls_follow_project_layout() {
    let cfg = MapConfig::default();
    assert_eq!(cfg.listing_url(), "https://040acc5.netsolhost.com/wp-json/wp/v2/posts/265");
    assert_eq!(cfg.map_file_name(), "projectId_265.svg");
    assert_eq!(
        cfg.asset_url("http://gore-homes", "reserved.svg"),
        "http://gore-homes/games/gore_homes/assets/reserved.svg"
    );
}

#[test]
fn unknown_log_level_falls_back_to_info() {
    let cfg = MapConfig { log_level: "loud".to_string(), ..MapConfig::default() };
    assert_eq!(cfg.level(), log::Level::Info);
    let cfg = MapConfig { log_level: "trace".to_string(), ..MapConfig::default() };
    assert_eq!(cfg.level(), log::Level::Trace);
}
