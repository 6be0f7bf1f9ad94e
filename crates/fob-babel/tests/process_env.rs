//! `preset()` reads the real process environment, so it runs in its own test
//! binary where nothing else touches the environment concurrently.

use fob_babel::{PresetOptions, Transform, preset};
use serde_json::json;

#[test]
fn preset_in_test_mode_reads_no_cache() {
    // SAFETY: this binary has a single test, so no other thread reads the environment
    unsafe {
        std::env::remove_var("BABEL_ENV");
        std::env::remove_var("FOB_BUILD_STAGE");
        std::env::set_var("NODE_ENV", "test");
    }

    let config = preset(&PresetOptions::default()).unwrap();

    let value = config.to_json().unwrap();
    assert_eq!(value["presets"][0][1]["targets"], json!({ "node": "current" }));
    assert_eq!(value["presets"][0][1]["modules"], json!("commonjs"));
    assert!(config.has_plugin(Transform::DynamicImportNode));
    assert!(!config.has_plugin(Transform::RemovePropTypes));
}
