use serde::{Deserialize, Serialize};

use crate::constants::{PRIZE_COUNT, PROBABILITY_TOLERANCE, SECTOR_COUNT};
use crate::error::WheelError;
use crate::prize_table::{prize_at, Prize};
use crate::sector::{sector_for_angle, Sector};

/// Chance of each prize, by prize-table position, for one sector.
pub type SectorProbabilityRow = [f64; PRIZE_COUNT];

/// Later sectors shift weight towards the bigger prizes.
pub const DEFAULT_SECTOR_PROBABILITIES: [SectorProbabilityRow; SECTOR_COUNT] = [
    [0.6, 0.25, 0.1, 0.05],
    [0.4, 0.35, 0.2, 0.05],
    [0.3, 0.3, 0.3, 0.1],
    [0.2, 0.3, 0.35, 0.15],
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectorProbabilityMatrix {
    rows: [SectorProbabilityRow; SECTOR_COUNT],
}

impl Default for SectorProbabilityMatrix {
    fn default() -> Self {
        Self::new(DEFAULT_SECTOR_PROBABILITIES)
    }
}

impl SectorProbabilityMatrix {
    pub const fn new(rows: [SectorProbabilityRow; SECTOR_COUNT]) -> Self {
        Self { rows }
    }

    pub fn row(&self, sector: Sector) -> &SectorProbabilityRow {
        &self.rows[sector.index()]
    }

    /// Every entry must be a non-negative number and every row must sum to 1.
    pub fn validate(&self) -> Result<(), WheelError> {
        for (sector, row) in self.rows.iter().enumerate() {
            if let Some(prize) = row.iter().position(|p| !(*p >= 0.0)) {
                return Err(WheelError::NegativeProbability { sector, prize });
            }
            let sum: f64 = row.iter().sum();
            if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
                return Err(WheelError::InvalidProbabilityRow { sector, sum });
            }
        }
        Ok(())
    }

    /// Resolves the prize for a final wheel angle and a uniform draw `r` in `[0, 1)`.
    pub fn resolve(&self, angle: f64, r: f64) -> &'static Prize {
        let row = self.row(sector_for_angle(angle));
        prize_at(pick_index(row, r))
    }
}

/// Walks the cumulative probabilities and returns the first position whose
/// running sum reaches `r`. Zero-probability entries are never picked. Falls
/// back to position 0 when rounding leaves `r` above the final sum.
pub fn pick_index(row: &SectorProbabilityRow, r: f64) -> usize {
    let mut cumulative = 0.0;
    for (index, probability) in row.iter().enumerate() {
        cumulative += probability;
        if *probability > 0.0 && r <= cumulative {
            return index;
        }
    }
    0
}

/// Resolves against the default matrix.
pub fn resolve_prize(angle: f64, r: f64) -> &'static Prize {
    SectorProbabilityMatrix::default().resolve(angle, r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prize_table::PRIZE_TABLE;
    use proptest::prelude::*;

    #[test]
    fn test_default_rows_sum_to_one() {
        let matrix = SectorProbabilityMatrix::default();
        assert_eq!(matrix.validate(), Ok(()));
        for sector in Sector::ALL {
            let cumulative: f64 = matrix.row(sector).iter().sum();
            assert!((cumulative - 1.0).abs() < PROBABILITY_TOLERANCE);
        }
    }

    #[test]
    fn test_high_draw_in_first_sector_gives_top_prize() {
        // cumulative [0.6, 0.85, 0.95, 1.0]: 0.95 < 0.99 <= 1.0
        let prize = resolve_prize(45.0, 0.99);
        assert_eq!(prize, &PRIZE_TABLE[3]);
    }

    #[test]
    fn test_draw_on_boundary_stays_in_lower_bucket() {
        assert_eq!(pick_index(&DEFAULT_SECTOR_PROBABILITIES[0], 0.6), 0);
        assert_eq!(pick_index(&DEFAULT_SECTOR_PROBABILITIES[0], 0.61), 1);
    }

    #[test]
    fn test_zero_draw_gives_first_reachable_prize() {
        for row in DEFAULT_SECTOR_PROBABILITIES.iter() {
            assert_eq!(pick_index(row, 0.0), 0);
        }
        assert_eq!(pick_index(&[0.0, 0.5, 0.5, 0.0], 0.0), 1);
    }

    #[test]
    fn test_draw_near_one_gives_last_reachable_prize() {
        let just_below_one = 1.0 - f64::EPSILON;
        for row in DEFAULT_SECTOR_PROBABILITIES.iter() {
            assert_eq!(pick_index(row, just_below_one), 3);
        }
        assert_eq!(pick_index(&[0.5, 0.5, 0.0, 0.0], just_below_one), 1);
    }

    #[test]
    fn test_draw_above_total_falls_back_to_first() {
        assert_eq!(pick_index(&[0.25, 0.25, 0.25, 0.2], 0.99), 0);
    }

    #[test]
    fn test_resolution_uses_sector_of_final_angle() {
        assert_eq!(resolve_prize(10.0, 0.55), &PRIZE_TABLE[0]);
        assert_eq!(resolve_prize(100.0, 0.55), &PRIZE_TABLE[1]);
        assert_eq!(resolve_prize(200.0, 0.55), &PRIZE_TABLE[1]);
        assert_eq!(resolve_prize(300.0, 0.55), &PRIZE_TABLE[2]);
        assert_eq!(resolve_prize(300.0 + 720.0, 0.55), &PRIZE_TABLE[2]);
    }

    #[test]
    fn test_validate_rejects_bad_rows() {
        let mut rows = DEFAULT_SECTOR_PROBABILITIES;
        rows[2] = [0.5, 0.5, 0.5, 0.0];
        assert!(matches!(
            SectorProbabilityMatrix::new(rows).validate(),
            Err(WheelError::InvalidProbabilityRow { sector: 2, .. })
        ));

        let mut rows = DEFAULT_SECTOR_PROBABILITIES;
        rows[1] = [1.2, -0.2, 0.0, 0.0];
        assert_eq!(
            SectorProbabilityMatrix::new(rows).validate(),
            Err(WheelError::NegativeProbability { sector: 1, prize: 1 })
        );
    }

    proptest! {
        #[test]
        fn resolution_is_deterministic(angle in -1.0e6f64..1.0e6f64, r in 0.0f64..1.0) {
            prop_assert_eq!(resolve_prize(angle, r), resolve_prize(angle, r));
        }

        #[test]
        fn picked_prize_has_nonzero_probability(sector in 0usize..SECTOR_COUNT, r in 0.0f64..1.0) {
            let row = &DEFAULT_SECTOR_PROBABILITIES[sector];
            prop_assert!(row[pick_index(row, r)] > 0.0);
        }
    }
}
