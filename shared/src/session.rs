use serde::{Deserialize, Serialize};

use crate::shared_wheel_game::SpinState;

/// Free spins left and winnings so far. Lives as long as the wheel that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    remaining_spins: u32,
    balance: f64,
}

impl SessionState {
    pub fn new(free_spins: u32) -> Self {
        Self {
            remaining_spins: free_spins,
            balance: 0.0,
        }
    }

    pub fn remaining_spins(&self) -> u32 {
        self.remaining_spins
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining_spins == 0
    }

    pub fn can_spin(&self, state: SpinState) -> bool {
        self.remaining_spins > 0 && state == SpinState::Idle
    }

    /// Uses up one spin. Returns false without touching the counter when
    /// `can_spin` does not hold.
    pub fn consume_spin(&mut self, state: SpinState) -> bool {
        if !self.can_spin(state) {
            return false;
        }
        self.remaining_spins -= 1;
        true
    }

    /// Adds winnings to the balance. Negative and non-finite amounts are ignored.
    pub fn credit(&mut self, amount: f64) -> bool {
        if !amount.is_finite() || amount < 0.0 {
            log::debug!("Ignoring credit of {}", amount);
            return false;
        }
        self.balance += amount;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = SessionState::new(3);
        assert_eq!(session.remaining_spins(), 3);
        assert_eq!(session.balance(), 0.0);
        assert!(session.can_spin(SpinState::Idle));
    }

    #[test]
    fn test_cannot_spin_outside_idle() {
        let session = SessionState::new(3);
        for state in [SpinState::Spinning, SpinState::Stopping, SpinState::Stopped] {
            assert!(!session.can_spin(state));
        }
    }

    #[test]
    fn test_cannot_spin_when_exhausted_in_any_state() {
        let session = SessionState::new(0);
        assert!(session.is_exhausted());
        for state in [SpinState::Idle, SpinState::Spinning, SpinState::Stopping, SpinState::Stopped] {
            assert!(!session.can_spin(state));
        }
    }

    #[test]
    fn test_consume_spin_is_gated() {
        let mut session = SessionState::new(1);
        assert!(!session.consume_spin(SpinState::Spinning));
        assert_eq!(session.remaining_spins(), 1);

        assert!(session.consume_spin(SpinState::Idle));
        assert_eq!(session.remaining_spins(), 0);

        assert!(!session.consume_spin(SpinState::Idle));
        assert_eq!(session.remaining_spins(), 0);
    }

    #[test]
    fn test_credit_rejects_negative_and_non_finite() {
        let mut session = SessionState::new(3);
        assert!(session.credit(25.0));
        assert!(!session.credit(-10.0));
        assert!(!session.credit(f64::NAN));
        assert!(!session.credit(f64::INFINITY));
        assert!(session.credit(0.0));
        assert_eq!(session.balance(), 25.0);
    }
}
