//! Snapshot tests using the insta crate.
//!
//! Snapshot testing captures serialized output and makes drift visible in
//! review. Inline snapshots keep the expected JSON next to the assertion.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::TestSceneBuilder;
use multidrag::{DraggerConfig, Insets, Rect};

// ============================================================================
// Configuration Serialization Tests
// ============================================================================

#[test]
fn snapshot_default_config() {
    insta::assert_json_snapshot!(DraggerConfig::default(), @r#"
    {
      "constrain_to_parent": true,
      "permitted_offscreen": {
        "top": 0.0,
        "right": 0.0,
        "bottom": 0.0,
        "left": 0.0
      },
      "axis_lock": false,
      "show_axis_guides": true
    }
    "#);
}

#[test]
fn snapshot_tuned_config() {
    let config = DraggerConfig::new()
        .with_constrain_to_parent(true, Insets::new(0.0, 10.0, 10.0, 0.0))
        .with_axis_lock(true);

    insta::assert_json_snapshot!(config, @r#"
    {
      "constrain_to_parent": true,
      "permitted_offscreen": {
        "top": 0.0,
        "right": 10.0,
        "bottom": 10.0,
        "left": 0.0
      },
      "axis_lock": true,
      "show_axis_guides": true
    }
    "#);
}

// ============================================================================
// Item Serialization Tests
// ============================================================================

#[test]
fn snapshot_managed_item() {
    let scene = TestSceneBuilder::new()
        .with_item(Rect::new(20.0, 20.0, 30.0, 30.0))
        .build();

    let item = scene.items.get(scene.ids[0]).unwrap();
    insta::assert_json_snapshot!(item, @r#"
    {
      "id": 1,
      "container": 1,
      "bounds": {
        "x": 20.0,
        "y": 20.0,
        "width": 30.0,
        "height": 30.0
      }
    }
    "#);
}
