//! Configuration tests: defaults, JSON loading, validation.

use multidrag::{ConfigError, DragController, DraggerConfig, Insets};

#[test]
fn test_defaults() {
    let config = DraggerConfig::default();

    assert!(config.constrain_to_parent);
    assert_eq!(config.permitted_offscreen, Insets::ZERO);
    assert!(!config.axis_lock);
    assert!(config.show_axis_guides);
}

#[test]
fn test_builders_compose() {
    let config = DraggerConfig::new()
        .with_constrain_to_parent(true, Insets::new(0.0, 10.0, 10.0, 0.0))
        .with_axis_lock(true)
        .with_axis_guides(false);

    assert!(config.constrain_to_parent);
    assert_eq!(config.permitted_offscreen.right, 10.0);
    assert_eq!(config.permitted_offscreen.left, 0.0);
    assert!(config.axis_lock);
    assert!(!config.show_axis_guides);
}

#[test]
fn test_from_json_str_full_round_trip() {
    let config = DraggerConfig::new()
        .with_constrain_to_parent(false, Insets::uniform(5.0))
        .with_axis_lock(true);

    let json = config.to_json_string().unwrap();
    let parsed = DraggerConfig::from_json_str(&json).unwrap();

    assert_eq!(parsed, config);
}

#[test]
fn test_from_json_str_fills_missing_fields_with_defaults() {
    let parsed = DraggerConfig::from_json_str(r#"{"axis_lock": true}"#).unwrap();

    assert!(parsed.axis_lock);
    assert!(parsed.constrain_to_parent);
    assert_eq!(parsed.permitted_offscreen, Insets::ZERO);
    assert!(parsed.show_axis_guides);
}

#[test]
fn test_from_json_str_rejects_malformed_input() {
    let err = DraggerConfig::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_validate_rejects_negative_insets() {
    let json = r#"{"permitted_offscreen": {"top": 0.0, "right": -1.0, "bottom": 0.0, "left": 0.0}}"#;
    let err = DraggerConfig::from_json_str(json).unwrap_err();

    match err {
        ConfigError::NegativeInset { side, value } => {
            assert_eq!(side, "right");
            assert_eq!(value, -1.0);
        }
        other => panic!("expected NegativeInset, got {other:?}"),
    }
}

#[test]
fn test_validate_rejects_non_finite_insets() {
    let config =
        DraggerConfig::new().with_constrain_to_parent(true, Insets::uniform(f32::NAN));

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::NonFiniteInset { side: "top", .. }));
}

#[test]
fn test_controller_setters_mirror_builders() {
    let mut dragger = DragController::new(DraggerConfig::default());

    dragger.set_constrain_to_parent(false, Insets::uniform(2.0));
    dragger.set_axis_lock(true);

    assert!(!dragger.config().constrain_to_parent);
    assert_eq!(dragger.config().permitted_offscreen, Insets::uniform(2.0));
    assert!(dragger.config().axis_lock);

    dragger.set_config(DraggerConfig::default());
    assert!(dragger.config().constrain_to_parent);
    assert!(!dragger.config().axis_lock);
}
