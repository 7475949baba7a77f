use crate::support::{assert_chained, build_path};
use pathkit_editor::model::{GeneralConfig, Keyframe, PathStore, SegmentKeyframeKey};
use pathkit_editor::serialization::PathFileData;

fn two_segment_store() -> PathStore {
    let mut store = PathStore::new();
    let (path, segments) = build_path(
        &mut store,
        &[
            &[(0.0, 0.0), (10.0, 0.0), (20.0, 10.0), (30.0, 10.0)],
            &[(30.0, 10.0), (40.0, 10.0)],
        ],
    );
    store.path_mut(path).name = "Intake".to_string();
    store
        .segment_mut(segments[0])
        .keyframes_mut(SegmentKeyframeKey::Speed)
        .add(Keyframe::new(0.5, 0.25));
    store
}

#[test]
fn test_round_trip_keeps_identity_and_structure() {
    let store = two_segment_store();
    let data = PathFileData::from_store(&store, &GeneralConfig::default());

    let json = data.to_json().unwrap();
    let loaded = PathFileData::from_json(&json).unwrap();
    assert_eq!(loaded.app_version, data.app_version);
    assert_eq!(loaded.modified, data.modified);
    assert_eq!(loaded.paths[0].segments, data.paths[0].segments);

    let rebuilt = loaded.build_store().unwrap();
    assert_eq!(rebuilt.paths().len(), 1);
    let path = rebuilt.paths()[0];
    let original = store.path(store.paths()[0]);
    assert_eq!(rebuilt.path(path).uid, original.uid);
    assert_eq!(rebuilt.path(path).name, "Intake");
    assert_chained(&rebuilt, path);

    let first = rebuilt.path(path).segments()[0];
    let keyframes = rebuilt.segment(first).keyframes(SegmentKeyframeKey::Speed);
    assert_eq!(keyframes.len(), 1);
    assert_eq!(keyframes.as_slice()[0].x_pos, 0.5);
    assert_eq!(keyframes.as_slice()[0].y_pos, 0.25);
}

#[test]
fn test_shared_knot_is_relinked_once() {
    let store = two_segment_store();
    let data = PathFileData::from_store(&store, &GeneralConfig::default());
    let rebuilt = data.build_store().unwrap();

    // Four controls in the cubic, one more in the linear.
    assert_eq!(rebuilt.control_count(), 5);
    assert_eq!(rebuilt.path_controls(rebuilt.paths()[0]).len(), 5);
}

#[test]
fn test_end_controls_keep_heading() {
    let store = two_segment_store();
    let data = PathFileData::from_store(&store, &GeneralConfig::default());
    let controls = &data.paths[0].segments[0].controls;
    assert_eq!(controls[0].heading, Some(0.0));
    assert_eq!(controls[1].heading, None);
    assert_eq!(controls[3].heading, Some(0.0));
}

#[test]
fn test_missing_optional_fields_use_defaults() {
    let json = r#"{
        "app_version": "0.1.0",
        "general_config": {},
        "paths": [{
            "uid": "p1",
            "name": "Path",
            "pc": {
                "speed_limit": {"min_limit": 0, "max_limit": 127, "step": 1, "from": 20, "to": 100},
                "bent_rate_applicable_range": {"min_limit": 0, "max_limit": 4, "step": 0.01, "from": 1.4, "to": 1.8}
            },
            "segments": [{
                "uid": "s1",
                "controls": [
                    {"uid": "a", "x": 0, "y": 0, "heading": 0},
                    {"uid": "b", "x": 10, "y": 0, "heading": 90}
                ]
            }]
        }]
    }"#;
    let data = PathFileData::from_json(json).unwrap();
    assert!(data.paths[0].visible);
    assert!(!data.paths[0].lock);
    assert_eq!(data.general_config, GeneralConfig::default());

    let store = data.build_store().unwrap();
    let segment = store.path(store.paths()[0]).segments()[0];
    assert!(store.segment(segment).is_linear());
    assert!(store.segment(segment).speed_keyframes.is_empty());
}

#[test]
fn test_rejects_malformed_json() {
    assert!(PathFileData::from_json("{not json").is_err());
}
