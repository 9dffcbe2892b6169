use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum WheelError {
    InvalidDecayFactor(f64),
    InvalidVelocity { initial: f64, threshold: f64 },
    InvalidSpinWindow { min_ms: u64, max_ms: u64 },
    InvalidProbabilityRow { sector: usize, sum: f64 },
    NegativeProbability { sector: usize, prize: usize },
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelError::InvalidDecayFactor(factor) => {
                write!(f, "decay factor must be in (0, 1), got {}", factor)
            }
            WheelError::InvalidVelocity { initial, threshold } => write!(
                f,
                "initial velocity {} must be finite and above the stop threshold {} (> 0)",
                initial, threshold
            ),
            WheelError::InvalidSpinWindow { min_ms, max_ms } => write!(
                f,
                "minimum spin time {}ms must not exceed the forced stop at {}ms",
                min_ms, max_ms
            ),
            WheelError::InvalidProbabilityRow { sector, sum } => {
                write!(f, "probabilities for sector {} sum to {}, expected 1.0", sector, sum)
            }
            WheelError::NegativeProbability { sector, prize } => write!(
                f,
                "probability of prize {} in sector {} is negative or not a number",
                prize, sector
            ),
        }
    }
}

impl std::error::Error for WheelError {}
