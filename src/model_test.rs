use super::*;

const LISTING: &str = r#"{
  "id": 265,
  "acf": {
    "phase_group": [
      {
        "statuses_phase": "1",
        "group_houses_phase": [
          { "houses_group": [
              { "house": { "lot_number": "12", "status_hose": "1", "price": "450000", "model": "Aspen" } },
              { "house": { "lot_number": 13, "status_hose": "2" } }
          ] },
          { "houses_group": [
              { "house": { "lot_number": "14", "status_hose": "0", "sqft": 2100 } }
          ] }
        ]
      },
      {
        "statuses_phase": "0",
        "group_houses_phase": [
          { "houses_group": [ { "house": { "lot_number": "99", "status_hose": "1" } } ] }
        ]
      }
    ]
  }
}"#;

#[test]
fn active_lots_skip_inactive_phases() {
    let lots = ProjectPost::from_json(LISTING).unwrap().active_lots();
    let numbers: Vec<&str> = lots.iter().map(|l| l.lot_number.as_str()).collect();
    assert_eq!(numbers, ["12", "13", "14"]);
}

#[test]
fn numeric_lot_number_becomes_string() {
    let lots = ProjectPost::from_json(LISTING).unwrap().active_lots();
    assert_eq!(lots[1].lot_number, "13");
    assert_eq!(lots[1].element_id(), "id13");
}

#[test]
fn statuses_map_from_codes() {
    let lots = ProjectPost::from_json(LISTING).unwrap().active_lots();
    assert_eq!(lots[0].status(), LotStatus::Available);
    assert_eq!(lots[1].status(), LotStatus::Reserved);
    assert_eq!(lots[2].status(), LotStatus::SoldOut);
}

#[test]
fn unknown_code_is_unknown_status() {
    assert_eq!(LotStatus::from_code("7"), LotStatus::Unknown);
    assert_eq!(LotStatus::from_code(""), LotStatus::Unknown);
    assert_eq!(LotStatus::from_code(" 1 "), LotStatus::Available);
}

#[test]
fn extra_fields_are_preserved() {
    let lots = ProjectPost::from_json(LISTING).unwrap().active_lots();
    assert_eq!(lots[0].details.get("model"), Some(&Value::String("Aspen".into())));
    assert!(!lots[0].details.contains_key("lot_number"));
    assert!(!lots[0].details.contains_key("status_hose"));
}

#[test]
fn display_fields_render_scalars_only() {
    let raw = r#"{ "lot_number": "1", "status_hose": "1", "price": "1", "sqft": 2100, "corner": true, "gallery": [1], "note": "" }"#;
    let lot: Lot = serde_json::from_str(raw).unwrap();
    let fields: Vec<(&str, String)> = lot.display_fields().collect();
    assert_eq!(
        fields,
        [("corner", "true".to_string()), ("price", "1".to_string()), ("sqft", "2100".to_string())]
    );
}

#[test]
fn missing_acf_yields_no_lots() {
    let lots = ProjectPost::from_json(r#"{ "id": 1 }"#).unwrap().active_lots();
    assert!(lots.is_empty());
}

#[test]
fn malformed_listing_is_listing_error() {
    let err = ProjectPost::from_json("[").unwrap_err();
    assert!(matches!(err, MapError::Listing(_)));
}

#[test]
fn status_fill_colors() {
    assert_eq!(LotStatus::Reserved.fill_color(), Some("#A7A7A7"));
    assert_eq!(LotStatus::SoldOut.fill_color(), Some("#FF6230"));
    assert_eq!(LotStatus::Available.fill_color(), None);
    assert_eq!(LotStatus::SoldOut.label(), "SOLD OUT");
}

#[test]
fn incomplete_rows_skip_only_themselves() {
    let raw = r#"{ "acf": { "phase_group": [
      { "statuses_phase": "1", "group_houses_phase": [ { "houses_group": [
          { "house": { "lot_number": "21", "status_hose": "1" } },
          { "house": { "lot_number": "22", "status_hose": false } },
          { "house": { "status_hose": "2" } },
          { "house": null }
      ] } ] },
      { "statuses_phase": "0", "group_houses_phase": [ { "houses_group": [
          { "house": { "status_hose": "1" } }
      ] } ] }
    ] } }"#;
    let lots = ProjectPost::from_json(raw).unwrap().active_lots();
    let numbers: Vec<&str> = lots.iter().map(|l| l.lot_number.as_str()).collect();
    assert_eq!(numbers, ["21", "22"]);
    assert_eq!(lots[1].status(), LotStatus::Unknown);
}

#[test]
fn empty_repeaters_sent_as_false_are_empty() {
    let raw = r#"{ "acf": { "phase_group": [
      { "statuses_phase": "1", "group_houses_phase": false },
      { "statuses_phase": "1", "group_houses_phase": [ { "houses_group": "" } ] }
    ] } }"#;
    let lots = ProjectPost::from_json(raw).unwrap().active_lots();
    assert!(lots.is_empty());
}
