use serde::Serialize;

use crate::constants::PRIZE_COUNT;

/// A possible spin outcome.
///
/// Selection odds live in the sector probability rows, which index this table
/// by position. Prizes carry no weight of their own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prize {
    pub value: f64,
    pub label: &'static str,
}

impl Prize {
    pub fn is_win(&self) -> bool {
        self.value > 0.0
    }
}

pub const PRIZE_TABLE: [Prize; PRIZE_COUNT] = [
    Prize { value: 0.0, label: "Try again!" },
    Prize { value: 25.0, label: "R$ 25,00" },
    Prize { value: 50.0, label: "R$ 50,00" },
    Prize { value: 75.0, label: "R$ 75,00" },
];

/// Returns the prize at `index`, or the first prize when out of range.
pub fn prize_at(index: usize) -> &'static Prize {
    PRIZE_TABLE.get(index).unwrap_or(&PRIZE_TABLE[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_non_negative() {
        assert!(PRIZE_TABLE.iter().all(|prize| prize.value >= 0.0));
    }

    #[test]
    fn test_only_first_prize_is_a_miss() {
        assert!(!PRIZE_TABLE[0].is_win());
        assert!(PRIZE_TABLE[1..].iter().all(Prize::is_win));
    }

    #[test]
    fn test_out_of_range_falls_back_to_first() {
        assert_eq!(prize_at(3).value, 75.0);
        assert_eq!(prize_at(PRIZE_COUNT), &PRIZE_TABLE[0]);
    }
}
