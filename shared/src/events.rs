use serde::Serialize;

use crate::notifier::Toast;
use crate::prize_table::Prize;

/// Outbound notifications from the wheel to whatever renders it.
///
/// Every method defaults to a no-op so a renderer only implements what it draws.
pub trait WheelEvents {
    fn on_spin_started(&mut self) {}

    fn on_angle_changed(&mut self, _angle: f64) {}

    /// The minimum spin time has passed and the stop control may be offered.
    fn on_stop_enabled(&mut self) {}

    fn on_stopping(&mut self) {}

    fn on_spin_finished(&mut self, _prize: &Prize, _new_balance: f64) {}

    /// The result has been on screen long enough to put the spin control back.
    fn on_controls_reset(&mut self) {}

    fn on_spins_exhausted(&mut self) {}

    fn on_toast(&mut self, _toast: &Toast) {}

    /// A winning prize was revealed.
    fn on_celebrate(&mut self) {}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WheelEvent {
    SpinStarted,
    AngleChanged { angle: f64 },
    StopEnabled,
    Stopping,
    SpinFinished { prize: Prize, new_balance: f64 },
    ControlsReset,
    SpinsExhausted,
    Toast(Toast),
    Celebrate,
}

/// Records every notification in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<WheelEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[WheelEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<WheelEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn contains(&self, event: &WheelEvent) -> bool {
        self.events.contains(event)
    }

    pub fn count(&self, predicate: impl Fn(&WheelEvent) -> bool) -> usize {
        self.events.iter().filter(|event| predicate(event)).count()
    }
}

impl WheelEvents for EventLog {
    fn on_spin_started(&mut self) {
        self.events.push(WheelEvent::SpinStarted);
    }

    fn on_angle_changed(&mut self, angle: f64) {
        self.events.push(WheelEvent::AngleChanged { angle });
    }

    fn on_stop_enabled(&mut self) {
        self.events.push(WheelEvent::StopEnabled);
    }

    fn on_stopping(&mut self) {
        self.events.push(WheelEvent::Stopping);
    }

    fn on_spin_finished(&mut self, prize: &Prize, new_balance: f64) {
        self.events.push(WheelEvent::SpinFinished {
            prize: *prize,
            new_balance,
        });
    }

    fn on_controls_reset(&mut self) {
        self.events.push(WheelEvent::ControlsReset);
    }

    fn on_spins_exhausted(&mut self) {
        self.events.push(WheelEvent::SpinsExhausted);
    }

    fn on_toast(&mut self, toast: &Toast) {
        self.events.push(WheelEvent::Toast(toast.clone()));
    }

    fn on_celebrate(&mut self) {
        self.events.push(WheelEvent::Celebrate);
    }
}
