// File: crates/graph-core/tests/config.rs
// Purpose: TOML config loading, defaults, validation and the commented template.

use std::io::Write;

use graph_core::{GraphConfig, GraphError, OnEvalError, SessionOptions};

#[test]
fn empty_document_gives_defaults() {
    let cfg = GraphConfig::from_toml_str("").unwrap();
    assert_eq!(cfg, GraphConfig::default());
    assert_eq!(cfg.palette, ["red", "green", "blue"]);
    assert_eq!(cfg.on_eval_error, OnEvalError::Abort);
}

#[test]
fn partial_document_overrides_keys() {
    let cfg = GraphConfig::from_toml_str("palette = [\"orange\"]\non_eval_error = \"break\"\n").unwrap();
    assert_eq!(cfg.palette, ["orange"]);
    assert_eq!(cfg.on_eval_error, OnEvalError::Break);
    assert_eq!(cfg.axis_color, "black");

    let opts = SessionOptions::from_config(&cfg).unwrap();
    assert_eq!(opts.palette.color_for(5), "orange");
    assert_eq!(opts.on_eval_error, OnEvalError::Break);
}

#[test]
fn invalid_values_rejected() {
    assert!(matches!(GraphConfig::from_toml_str("palette = []"), Err(GraphError::Configuration(_))));
    assert!(matches!(GraphConfig::from_toml_str("axis_color = \"nope\""), Err(GraphError::Configuration(_))));
    assert!(matches!(GraphConfig::from_toml_str("on_eval_error = \"retry\""), Err(GraphError::Configuration(_))));
}

#[test]
fn template_round_trips_to_defaults() {
    let cfg = GraphConfig::from_toml_str(&GraphConfig::template()).unwrap();
    assert_eq!(cfg, GraphConfig::default());
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "background = \"#101010\"\ndraw_labels = false").unwrap();
    let cfg = GraphConfig::load(file.path()).unwrap();
    assert_eq!(cfg.background, "#101010");
    assert!(!cfg.draw_labels);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GraphConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, GraphError::Io { .. }));
}
