//! Persistence tests: the exported record shape and its round-trip
//! through strings and files.

use homecanvas::persist::{export_state, import_state, load_from_file, save_to_file};
use homecanvas::{CanvasRegistry, ItemKind, PlacedItem, Position};

use crate::helpers::{fixed_id, init_tracing, note_widget};

fn sample_registry() -> CanvasRegistry {
    let mut registry = CanvasRegistry::new();
    registry.add_sticker("star", Position::new(25.0, 75.0), 1.5);
    registry.add_widget("weather", Position::new(80.0, 10.0), None);
    let mut data = serde_json::Map::new();
    data.insert("text".to_string(), serde_json::Value::String("milk".into()));
    registry.add_widget("note", Position::new(40.0, 60.0), Some(data));
    registry
}

#[test]
fn test_export_import_round_trip() {
    init_tracing();
    let registry = sample_registry();

    let json = export_state(&registry).unwrap();
    let items = import_state(&json).unwrap();

    assert_eq!(items, registry.items());
}

#[test]
fn test_exported_record_shape() {
    let registry = sample_registry();
    let json = export_state(&registry).unwrap();
    let records: serde_json::Value = serde_json::from_str(&json).unwrap();

    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 3);

    let sticker = &records[0];
    assert_eq!(sticker["kind"], "sticker");
    assert_eq!(sticker["typeId"], "star");
    assert_eq!(sticker["size"], 1.5);
    assert_eq!(sticker["position"]["x"], 25.0);
    assert!(sticker["id"].is_string());
    assert!(sticker.get("data").is_none());

    let weather = &records[1];
    assert_eq!(weather["kind"], "widget");
    // Absent payload is omitted, not serialized as null.
    assert!(weather.get("data").is_none());

    let note = &records[2];
    assert_eq!(note["kind"], "widget");
    assert_eq!(note["data"]["text"], "milk");
}

#[test]
fn test_file_round_trip() {
    init_tracing();
    let registry = sample_registry();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvas.json");

    save_to_file(&registry, &path).unwrap();
    let loaded = load_from_file(&path).unwrap();

    assert_eq!(loaded, registry);
}

#[test]
fn test_load_rejects_malformed_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvas.json");

    std::fs::write(&path, "{ not json").unwrap();
    assert!(load_from_file(&path).is_err());

    assert!(load_from_file(&dir.path().join("missing.json")).is_err());
}

#[test]
fn test_import_tolerates_position_out_of_range() {
    let json = r#"[
        {
            "id": "00000000-0000-0000-0000-000000000001",
            "typeId": "star",
            "position": { "x": 125.5, "y": -20.5 },
            "kind": "sticker",
            "size": 1.5
        }
    ]"#;

    let items = import_state(json).unwrap();
    assert_eq!(items[0].position, Position::new(125.5, -20.5));
}

#[test]
fn snapshot_sticker_record() {
    let item = PlacedItem {
        id: fixed_id(1),
        type_id: "star".to_string(),
        position: Position::new(25.5, 75.5),
        kind: ItemKind::Sticker { size: 1.5 },
    };

    insta::assert_json_snapshot!(item, @r###"
    {
      "id": "00000000-0000-0000-0000-000000000001",
      "typeId": "star",
      "position": {
        "x": 25.5,
        "y": 75.5
      },
      "kind": "sticker",
      "size": 1.5
    }
    "###);
}

#[test]
fn snapshot_widget_record() {
    let item = PlacedItem {
        id: fixed_id(2),
        ..note_widget("milk", 10.5, 20.5)
    };

    insta::assert_json_snapshot!(item, @r###"
    {
      "id": "00000000-0000-0000-0000-000000000002",
      "typeId": "note",
      "position": {
        "x": 10.5,
        "y": 20.5
      },
      "kind": "widget",
      "data": {
        "text": "milk"
      }
    }
    "###);
}
