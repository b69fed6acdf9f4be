use serde::{Deserialize, Serialize};
use crate::error::{ensure_positive, ensure_range, ConfigError};

/// How scattered-state drift rotation is integrated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DriftIntegration {
    /// Add `drift_speed` once per update call, whatever the frame delta
    PerFrame,
    /// Add `drift_speed * delta * reference_frame_rate`
    #[default]
    TimeScaled,
}

/// Timing and amplitude constants for item motion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationParams {
    /// Position time constant while heading to the scattered cloud
    pub scatter_time_constant: f32,
    /// Position time constant while reassembling
    pub assemble_time_constant: f32,
    /// Rotation time constant toward the rest orientation
    pub rotation_time_constant: f32,
    pub bob_vertical_amplitude: f32,
    pub bob_vertical_frequency: f32,
    pub bob_horizontal_amplitude: f32,
    pub bob_horizontal_frequency: f32,
    /// Foliage z-rotation sway while assembled
    pub sway_amplitude: f32,
    pub sway_frequency: f32,
    /// Star emissive intensity is `pulse_base + pulse_amplitude * sin(pulse_frequency * t)`
    pub pulse_base: f32,
    pub pulse_amplitude: f32,
    pub pulse_frequency: f32,
    pub drift_integration: DriftIntegration,
    /// Frame rate drift speeds were tuned at
    pub reference_frame_rate: f32,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            scatter_time_constant: 3.0,
            assemble_time_constant: 1.5,
            rotation_time_constant: 0.5,
            bob_vertical_amplitude: 0.01,
            bob_vertical_frequency: 0.5,
            bob_horizontal_amplitude: 0.005,
            bob_horizontal_frequency: 0.3,
            sway_amplitude: 0.05,
            sway_frequency: 2.0,
            pulse_base: 2.0,
            pulse_amplitude: 1.0,
            pulse_frequency: 3.0,
            drift_integration: DriftIntegration::TimeScaled,
            reference_frame_rate: 60.0,
        }
    }
}

impl AnimationParams {
    /// Position time constant for the state being approached
    pub fn position_time_constant(&self, assembled: bool) -> f32 {
        if assembled {
            self.assemble_time_constant
        } else {
            self.scatter_time_constant
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("scatter_time_constant", self.scatter_time_constant)?;
        ensure_positive("assemble_time_constant", self.assemble_time_constant)?;
        ensure_positive("rotation_time_constant", self.rotation_time_constant)?;
        ensure_positive("reference_frame_rate", self.reference_frame_rate)?;
        for (field, value) in [
            ("bob_vertical_amplitude", self.bob_vertical_amplitude),
            ("bob_horizontal_amplitude", self.bob_horizontal_amplitude),
            ("sway_amplitude", self.sway_amplitude),
            ("pulse_amplitude", self.pulse_amplitude),
            ("pulse_base", self.pulse_base),
        ] {
            ensure_range(field, 0.0, value)?;
        }
        for (field, value) in [
            ("bob_vertical_frequency", self.bob_vertical_frequency),
            ("bob_horizontal_frequency", self.bob_horizontal_frequency),
            ("sway_frequency", self.sway_frequency),
            ("pulse_frequency", self.pulse_frequency),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(AnimationParams::default().validate().is_ok());
    }

    #[test]
    fn test_time_constant_by_state() {
        let params = AnimationParams::default();
        assert_eq!(params.position_time_constant(true), 1.5);
        assert_eq!(params.position_time_constant(false), 3.0);
    }

    #[test]
    fn test_zero_time_constant_rejected() {
        let params = AnimationParams {
            rotation_time_constant: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::NonPositive { field: "rotation_time_constant", .. })
        ));
    }

    #[test]
    fn test_yaml_override() {
        let params: AnimationParams =
            serde_yaml::from_str("drift_integration: PerFrame\nscatter_time_constant: 2.0\n").unwrap();
        assert_eq!(params.drift_integration, DriftIntegration::PerFrame);
        assert_eq!(params.scatter_time_constant, 2.0);
        assert_eq!(params.assemble_time_constant, 1.5);
    }
}
