use std::io::Write;

use warden_agents::{BehaviorTuning, TuningError};

#[test]
fn partial_yaml_overrides_only_given_fields() {
    let tuning = BehaviorTuning::from_yaml_str(
        r#"
chase:
  speed: 150.0
attack:
  cooldown_seconds: 0.75
"#,
    )
    .unwrap();

    let defaults = BehaviorTuning::default();
    assert_eq!(tuning.chase.speed, 150.0);
    assert_eq!(tuning.chase.give_up_distance, defaults.chase.give_up_distance);
    assert_eq!(tuning.attack.cooldown_seconds, 0.75);
    assert_eq!(tuning.attack.damage, defaults.attack.damage);
    assert_eq!(tuning.patrol, defaults.patrol);
}

#[test]
fn health_threshold_outside_unit_range_is_rejected() {
    let err = BehaviorTuning::from_yaml_str("flee:\n  health_threshold: 1.5\n").unwrap_err();
    assert!(matches!(
        err,
        TuningError::Invalid {
            field: "flee.health_threshold",
            ..
        }
    ));
}

#[test]
fn negative_distances_are_rejected() {
    let err = BehaviorTuning::from_yaml_str("perception:\n  detection_radius: -1.0\n").unwrap_err();
    assert!(matches!(
        err,
        TuningError::Invalid {
            field: "perception.detection_radius",
            ..
        }
    ));
}

#[test]
fn chase_must_stop_where_the_attack_can_land() {
    let err = BehaviorTuning::from_yaml_str("chase:\n  attack_range: 60.0\n").unwrap_err();
    assert!(matches!(
        err,
        TuningError::Invalid {
            field: "chase.attack_range",
            ..
        }
    ));
}

#[test]
fn attack_range_beyond_give_up_distance_is_rejected() {
    let yaml = "chase:\n  give_up_distance: 30.0\n  attack_range: 20.0\n";
    let err = BehaviorTuning::from_yaml_str(yaml).unwrap_err();
    assert!(matches!(
        err,
        TuningError::Invalid {
            field: "attack.range",
            ..
        }
    ));
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let err = BehaviorTuning::from_yaml_str("chase: [1, 2").unwrap_err();
    assert!(matches!(err, TuningError::Yaml(_)));
}

#[test]
fn load_picks_format_from_extension() {
    let dir = tempfile::tempdir().unwrap();

    let yaml_path = dir.path().join("guard.yaml");
    let mut yaml = std::fs::File::create(&yaml_path).unwrap();
    writeln!(yaml, "alert:\n  radius: 123.0").unwrap();
    assert_eq!(BehaviorTuning::load(&yaml_path).unwrap().alert.radius, 123.0);

    let json_path = dir.path().join("guard.json");
    std::fs::write(&json_path, r#"{ "patrol": { "speed": 42.0 } }"#).unwrap();
    assert_eq!(BehaviorTuning::load(&json_path).unwrap().patrol.speed, 42.0);
}

#[test]
fn load_reports_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.yaml");

    let err = BehaviorTuning::load(&missing).unwrap_err();
    match err {
        TuningError::Read { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn yaml_output_loads_back() {
    let mut tuning = BehaviorTuning::default();
    tuning.flee.safe_distance = 512.0;

    let yaml = tuning.to_yaml_string().unwrap();
    assert_eq!(BehaviorTuning::from_yaml_str(&yaml).unwrap(), tuning);
}
