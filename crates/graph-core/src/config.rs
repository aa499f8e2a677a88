// File: crates/graph-core/src/config.rs
// Summary: Session configuration loaded from TOML (palette, colors, evaluation-failure policy).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::sampler::OnEvalError;
use crate::theme::{parse_color, Palette, AXIS_COLOR, BACKGROUND, PALETTE};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GraphConfig {
    /// Curve colors, cycled per drawn expression.
    pub palette: Vec<String>,
    /// Color of both axes, their ticks and labels.
    pub axis_color: String,
    /// Canvas background.
    pub background: String,
    /// Policy when an expression has no value at a sample.
    pub on_eval_error: OnEvalError,
    /// Render tick labels (surfaces may ignore this).
    pub draw_labels: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            palette: PALETTE.iter().map(|c| c.to_string()).collect(),
            axis_color: AXIS_COLOR.to_string(),
            background: BACKGROUND.to_string(),
            on_eval_error: OnEvalError::default(),
            draw_labels: true,
        }
    }
}

impl GraphConfig {
    /// Parse and validate a TOML document; missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, GraphError> {
        let config: GraphConfig =
            toml::from_str(content).map_err(|e| GraphError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, GraphError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| GraphError::Io { path: path.to_path_buf(), source })?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GraphError> {
        self.palette()?;
        for (key, value) in [("axis_color", &self.axis_color), ("background", &self.background)] {
            if parse_color(value).is_none() {
                return Err(GraphError::Configuration(format!("{key}: unknown color '{value}'")));
            }
        }
        Ok(())
    }

    pub fn palette(&self) -> Result<Palette, GraphError> {
        Palette::new(self.palette.iter().cloned())
    }

    /// Commented TOML document holding the defaults.
    pub fn template() -> String {
        let d = Self::default();
        let palette = d.palette.iter().map(|c| format!("\"{c}\"")).collect::<Vec<_>>().join(", ");
        format!(
            "# Graphing calculator configuration\n\
             \n\
             # Curve colors, cycled per drawn expression (names or #rrggbb)\n\
             palette = [{palette}]\n\
             \n\
             # Axis and tick color\n\
             axis_color = \"{}\"\n\
             \n\
             # Canvas background\n\
             background = \"{}\"\n\
             \n\
             # On an undefined sample: \"abort\" drops the curve, \"break\" skips the sample\n\
             on_eval_error = \"abort\"\n\
             \n\
             # Render tick labels\n\
             draw_labels = {}\n",
            d.axis_color, d.background, d.draw_labels,
        )
    }
}
