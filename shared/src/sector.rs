use serde::{Deserialize, Serialize};

use crate::constants::SECTOR_SPAN_DEGREES;

/// One of the four equal 90° partitions of the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    First,
    Second,
    Third,
    Fourth,
}

impl Sector {
    pub const ALL: [Sector; 4] = [Sector::First, Sector::Second, Sector::Third, Sector::Fourth];

    pub fn index(self) -> usize {
        match self {
            Sector::First => 0,
            Sector::Second => 1,
            Sector::Third => 2,
            Sector::Fourth => 3,
        }
    }

    /// Start of the sector in degrees; the sector spans `[start, start + 90)`.
    pub fn start_degrees(self) -> f64 {
        self.index() as f64 * SECTOR_SPAN_DEGREES
    }
}

/// Folds an accumulated angle into `[0, 360)`. Non-finite angles map to 0.
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let normalized = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

pub fn sector_for_angle(angle: f64) -> Sector {
    let normalized = normalize_angle(angle);
    if normalized < 90.0 {
        Sector::First
    } else if normalized < 180.0 {
        Sector::Second
    } else if normalized < 270.0 {
        Sector::Third
    } else {
        Sector::Fourth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sector_boundaries() {
        assert_eq!(sector_for_angle(0.0), Sector::First);
        assert_eq!(sector_for_angle(89.999), Sector::First);
        assert_eq!(sector_for_angle(90.0), Sector::Second);
        assert_eq!(sector_for_angle(180.0), Sector::Third);
        assert_eq!(sector_for_angle(270.0), Sector::Fourth);
        assert_eq!(sector_for_angle(359.999), Sector::Fourth);
        assert_eq!(sector_for_angle(360.0), Sector::First);
    }

    #[test]
    fn test_accumulated_and_negative_angles() {
        assert_eq!(sector_for_angle(3.0 * 360.0 + 100.0), Sector::Second);
        assert_eq!(sector_for_angle(-10.0), Sector::Fourth);
        assert_eq!(normalize_angle(-1e-20), 0.0);
    }

    #[test]
    fn test_non_finite_angles_land_in_first_sector() {
        assert_eq!(normalize_angle(f64::NAN), 0.0);
        assert_eq!(sector_for_angle(f64::INFINITY), Sector::First);
    }

    #[test]
    fn test_start_degrees_match_index() {
        for sector in Sector::ALL {
            assert_eq!(sector_for_angle(sector.start_degrees()), sector);
        }
    }

    proptest! {
        #[test]
        fn normalized_angle_stays_in_range(angle in -1.0e12f64..1.0e12f64) {
            let normalized = normalize_angle(angle);
            prop_assert!((0.0..360.0).contains(&normalized));
        }

        #[test]
        fn sector_contains_normalized_angle(angle in -1.0e6f64..1.0e6f64) {
            let sector = sector_for_angle(angle);
            let normalized = normalize_angle(angle);
            prop_assert!(normalized >= sector.start_degrees());
            prop_assert!(normalized < sector.start_degrees() + SECTOR_SPAN_DEGREES);
        }
    }
}
