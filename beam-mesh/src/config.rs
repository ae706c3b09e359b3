//! Display options for generated beam geometry

use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

/// Options controlling how sections and deflected shapes are generated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Points along the deflected shape
    pub deflection_points: usize,
    /// Visual exaggeration of vertical deflection
    pub vertical_deflection_scale: f64,
    /// Points inside each rounded HSS corner
    pub hss_curve_points: u32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            deflection_points: 11,
            vertical_deflection_scale: 50.0,
            hss_curve_points: 3,
        }
    }
}

impl DisplayOptions {
    /// Parse options from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> MeshResult<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Set the number of deflection curve points
    pub fn with_deflection_points(mut self, points: usize) -> Self {
        self.deflection_points = points;
        self
    }

    /// Set the vertical deflection exaggeration
    pub fn with_vertical_scale(mut self, scale: f64) -> Self {
        self.vertical_deflection_scale = scale;
        self
    }

    /// Set the HSS corner resolution
    pub fn with_hss_curve_points(mut self, points: u32) -> Self {
        self.hss_curve_points = points;
        self
    }

    pub fn validate(&self) -> MeshResult<()> {
        if self.deflection_points < 2 {
            return Err(MeshError::InvalidInput(format!(
                "deflection_points must be at least 2, got {}",
                self.deflection_points
            )));
        }
        if !self.vertical_deflection_scale.is_finite() {
            return Err(MeshError::InvalidInput(format!(
                "vertical_deflection_scale must be finite, got {}",
                self.vertical_deflection_scale
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DisplayOptions::default();
        assert_eq!(options.deflection_points, 11);
        assert_eq!(options.vertical_deflection_scale, 50.0);
        assert_eq!(options.hss_curve_points, 3);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let options = DisplayOptions::from_json_str(r#"{"hss_curve_points": 6}"#).unwrap();
        assert_eq!(options.hss_curve_points, 6);
        assert_eq!(options.deflection_points, 11);
    }

    #[test]
    fn test_invalid_json_values() {
        let result = DisplayOptions::from_json_str(r#"{"deflection_points": 1}"#);
        assert!(matches!(result, Err(MeshError::InvalidInput(_))));

        let result = DisplayOptions::from_json_str("not json");
        assert!(matches!(result, Err(MeshError::SerializationError(_))));
    }

    #[test]
    fn test_builders() {
        let options = DisplayOptions::default()
            .with_deflection_points(21)
            .with_vertical_scale(10.0)
            .with_hss_curve_points(1);
        assert_eq!(options.deflection_points, 21);
        assert_eq!(options.vertical_deflection_scale, 10.0);
        assert_eq!(options.hss_curve_points, 1);
    }
}
