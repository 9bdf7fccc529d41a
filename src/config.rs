use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::geometry::Bounds;
use crate::layout::{CoolingSchedule, LayoutConfig};

/// Area nodes are scattered into and confined to: a 980x860 box with a 50px
/// margin, leaving room for the control column.
pub const DEFAULT_CONFINEMENT: Bounds = Bounds::new(50.0, 50.0, 1030.0, 910.0);

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewportConfig {
    pub initial_scale: f64,
    pub base_scale: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Scale factor per wheel notch.
    pub zoom_step: f64,
    /// Screen units moved per pan key press.
    pub pan_step: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            initial_scale: 30.0,
            base_scale: 50.0,
            min_scale: 20.0,
            max_scale: 200.0,
            zoom_step: 1.1,
            pan_step: 10.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub layout: LayoutConfig,
    pub confinement: Bounds,
    /// Maximum number of iterations kept, iteration 0 included.
    pub capacity: usize,
    pub temperature: f64,
    pub cooling: CoolingSchedule,
    pub tick_interval_ms: u64,
    pub node_radius: f64,
    pub viewport: ViewportConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            confinement: DEFAULT_CONFINEMENT,
            capacity: 201,
            temperature: 40.0,
            cooling: CoolingSchedule::Constant,
            tick_interval_ms: 16,
            node_radius: 7.0,
            viewport: ViewportConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |message: &str| Err(ConfigError::Invalid(message.to_owned()));

        if self.capacity == 0 {
            return invalid("capacity must be at least 1");
        }
        if !self.confinement.is_well_formed() {
            return invalid("confinement must be finite with left <= right and top <= bottom");
        }
        if !self.layout.repulsion.is_finite() {
            return invalid("layout.repulsion must be finite");
        }
        if !self.layout.attraction.is_finite() || self.layout.attraction == 0.0 {
            return invalid("layout.attraction must be finite and non-zero");
        }
        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return invalid("temperature must be finite and non-negative");
        }
        if let CoolingSchedule::Geometric { factor, floor } = self.cooling
            && (!factor.is_finite() || factor <= 0.0 || !floor.is_finite() || floor < 0.0)
        {
            return invalid("cooling factor must be positive and floor non-negative");
        }
        if !self.node_radius.is_finite() || self.node_radius < 0.0 {
            return invalid("node_radius must be finite and non-negative");
        }

        let viewport = &self.viewport;
        let scales = [
            viewport.initial_scale,
            viewport.base_scale,
            viewport.min_scale,
            viewport.max_scale,
            viewport.zoom_step,
        ];
        if scales.iter().any(|scale| !scale.is_finite() || *scale <= 0.0) {
            return invalid("viewport scales and zoom_step must be finite and positive");
        }
        if viewport.min_scale > viewport.max_scale {
            return invalid("viewport.min_scale must not exceed viewport.max_scale");
        }
        if !viewport.pan_step.is_finite() {
            return invalid("viewport.pan_step must be finite");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SessionConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SessionConfig::from_json(
            r#"{
                "capacity": 50,
                "cooling": { "kind": "geometric", "factor": 0.95 },
                "viewport": { "max_scale": 120 }
            }"#,
        )
        .expect("valid config");

        assert_eq!(config.capacity, 50);
        assert_eq!(config.cooling, CoolingSchedule::geometric(0.95));
        assert_eq!(config.viewport.max_scale, 120.0);
        assert_eq!(config.viewport.min_scale, 20.0);
        assert_eq!(config.layout, LayoutConfig::default());
        assert_eq!(config.confinement, DEFAULT_CONFINEMENT);
    }

    #[test]
    fn inconsistent_values_are_rejected() {
        for text in [
            r#"{ "capacity": 0 }"#,
            r#"{ "layout": { "attraction": 0 } }"#,
            r#"{ "temperature": -1 }"#,
            r#"{ "confinement": { "left": 10, "top": 0, "right": 0, "bottom": 10 } }"#,
            r#"{ "viewport": { "min_scale": 300 } }"#,
        ] {
            assert!(
                matches!(SessionConfig::from_json(text), Err(ConfigError::Invalid(_))),
                "accepted {text}"
            );
        }
    }

    #[test]
    fn unknown_fields_are_parse_errors() {
        assert!(matches!(
            SessionConfig::from_json(r#"{ "iterations": 10 }"#),
            Err(ConfigError::Parse(_))
        ));
    }
}
