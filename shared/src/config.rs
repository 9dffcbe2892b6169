use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::WheelError;
use crate::probability::SectorProbabilityMatrix;

/// Tunables for one wheel. Missing fields take the defaults from `constants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub free_spins: u32,
    pub initial_velocity: f64,
    pub decay_factor: f64,
    pub stop_threshold: f64,
    pub min_spin_ms: u64,
    pub max_spin_ms: u64,
    pub reveal_delay_ms: u64,
    pub controls_reset_delay_ms: u64,
    pub probabilities: SectorProbabilityMatrix,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            free_spins: INITIAL_FREE_SPINS,
            initial_velocity: INITIAL_ANGULAR_VELOCITY,
            decay_factor: VELOCITY_DECAY_FACTOR,
            stop_threshold: STOP_VELOCITY_THRESHOLD,
            min_spin_ms: MIN_SPIN_DURATION_MS,
            max_spin_ms: MAX_SPIN_DURATION_MS,
            reveal_delay_ms: RESULT_REVEAL_DELAY_MS,
            controls_reset_delay_ms: CONTROLS_RESET_DELAY_MS,
            probabilities: SectorProbabilityMatrix::default(),
        }
    }
}

impl WheelConfig {
    /// A decay factor in (0, 1) and a positive threshold below the initial
    /// velocity guarantee that every stop finishes in finitely many ticks.
    pub fn validate(&self) -> Result<(), WheelError> {
        if !(self.decay_factor > 0.0 && self.decay_factor < 1.0) {
            return Err(WheelError::InvalidDecayFactor(self.decay_factor));
        }
        if !(self.stop_threshold > 0.0
            && self.initial_velocity.is_finite()
            && self.initial_velocity > self.stop_threshold)
        {
            return Err(WheelError::InvalidVelocity {
                initial: self.initial_velocity,
                threshold: self.stop_threshold,
            });
        }
        if self.min_spin_ms > self.max_spin_ms {
            return Err(WheelError::InvalidSpinWindow {
                min_ms: self.min_spin_ms,
                max_ms: self.max_spin_ms,
            });
        }
        self.probabilities.validate()
    }

    /// Upper bound on the ticks a stop takes to fall under the threshold.
    pub fn max_stopping_ticks(&self) -> u32 {
        let ratio = self.stop_threshold / self.initial_velocity;
        (ratio.ln() / self.decay_factor.ln()).ceil().max(1.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(WheelConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_stop_is_bounded() {
        // 20 * 0.95^n < 0.5 first holds at n = 72
        assert_eq!(WheelConfig::default().max_stopping_ticks(), 72);
    }

    #[test]
    fn test_rejects_non_contracting_decay() {
        for decay_factor in [0.0, 1.0, 1.5, f64::NAN] {
            let config = WheelConfig { decay_factor, ..WheelConfig::default() };
            assert!(matches!(config.validate(), Err(WheelError::InvalidDecayFactor(_))));
        }
    }

    #[test]
    fn test_rejects_velocity_below_threshold() {
        let config = WheelConfig { initial_velocity: 0.4, ..WheelConfig::default() };
        assert_eq!(
            config.validate(),
            Err(WheelError::InvalidVelocity { initial: 0.4, threshold: 0.5 })
        );
    }

    #[test]
    fn test_rejects_inverted_spin_window() {
        let config = WheelConfig { min_spin_ms: 12_000, ..WheelConfig::default() };
        assert_eq!(
            config.validate(),
            Err(WheelError::InvalidSpinWindow { min_ms: 12_000, max_ms: 10_000 })
        );
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: WheelConfig =
            serde_json::from_str(r#"{ "free_spins": 5, "max_spin_ms": 8000 }"#).unwrap();
        assert_eq!(config.free_spins, 5);
        assert_eq!(config.max_spin_ms, 8000);
        assert_eq!(config.decay_factor, VELOCITY_DECAY_FACTOR);
        assert_eq!(config.probabilities, SectorProbabilityMatrix::default());
    }

    #[test]
    fn test_probabilities_deserialize_as_nested_arrays() {
        let config: WheelConfig = serde_json::from_str(
            r#"{ "probabilities": [[1,0,0,0],[0,1,0,0],[0,0,1,0],[0,0,0,1]] }"#,
        )
        .unwrap();
        assert_eq!(config.validate(), Ok(()));
    }
}
