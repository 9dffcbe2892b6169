use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::WheelConfig;
use crate::constants::*;
use crate::error::WheelError;
use crate::events::WheelEvents;
use crate::notifier::{announce_result, Toast, ToastKind};
use crate::prize_table::Prize;
use crate::session::SessionState;
use crate::timers::{TimerId, TimerKind, TimerQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinState {
    Idle,
    Spinning,
    Stopping,
    Stopped,
}

impl SpinState {
    /// Only these states advance the angle.
    pub fn is_animating(self) -> bool {
        matches!(self, SpinState::Spinning | SpinState::Stopping)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelKinematics {
    /// Degrees, accumulated over the spin without wrapping.
    pub angle: f64,
    /// Degrees per tick.
    pub angular_velocity: f64,
}

/// Pending timer handles, kept so a transition can cancel what it supersedes.
#[derive(Debug, Clone, Default)]
struct SpinTimers {
    enable_stop: Option<TimerId>,
    force_stop: Option<TimerId>,
    reveal_result: Option<TimerId>,
    reset_controls: Option<TimerId>,
}

/// The prize wheel: spin state machine, kinematics, session and timers.
///
/// Time is never read from a clock. Every inbound call takes `now` in
/// milliseconds, and `step` is called once per rendered frame.
pub struct WheelGame<R: Rng = StdRng> {
    config: WheelConfig,
    state: SpinState,
    kinematics: WheelKinematics,
    session: SessionState,
    timers: TimerQueue,
    handles: SpinTimers,
    spin_started_at: Option<u64>,
    stop_enabled: bool,
    last_prize: Option<Prize>,
    result_revealed: bool,
    exhausted_notified: bool,
    rng: R,
}

impl WheelGame<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> WheelGame<R> {
    pub fn new(rng: R) -> Self {
        Self::build(WheelConfig::default(), rng)
    }

    pub fn with_config(config: WheelConfig, rng: R) -> Result<Self, WheelError> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: WheelConfig, rng: R) -> Self {
        Self {
            session: SessionState::new(config.free_spins),
            config,
            state: SpinState::Idle,
            kinematics: WheelKinematics {
                angle: 0.0,
                angular_velocity: 0.0,
            },
            timers: TimerQueue::new(),
            handles: SpinTimers::default(),
            spin_started_at: None,
            stop_enabled: false,
            last_prize: None,
            result_revealed: false,
            exhausted_notified: false,
            rng,
        }
    }

    pub fn state(&self) -> SpinState {
        self.state
    }

    pub fn kinematics(&self) -> WheelKinematics {
        self.kinematics
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn can_spin(&self) -> bool {
        self.session.can_spin(self.state)
    }

    /// Whether the stop control should be offered to the player.
    pub fn stop_enabled(&self) -> bool {
        self.stop_enabled
    }

    pub fn spin_started_at(&self) -> Option<u64> {
        self.spin_started_at
    }

    pub fn last_prize(&self) -> Option<&Prize> {
        self.last_prize.as_ref()
    }

    pub fn result_revealed(&self) -> bool {
        self.result_revealed
    }

    /// True while the wheel needs frames: it is animating or a timer is pending.
    pub fn is_active(&self) -> bool {
        self.state.is_animating() || !self.timers.is_empty()
    }

    /// Idle → Spinning. Ignored unless idle with spins left.
    pub fn request_start_spin<E: WheelEvents + ?Sized>(&mut self, now: u64, events: &mut E) -> bool {
        if !self.session.consume_spin(self.state) {
            log::debug!(
                "Start request ignored in {:?} with {} spins left",
                self.state,
                self.session.remaining_spins()
            );
            return false;
        }

        self.cancel_timer(TimerKind::ResetControls);
        self.cancel_timer(TimerKind::RevealResult);

        self.state = SpinState::Spinning;
        self.spin_started_at = Some(now);
        self.kinematics = WheelKinematics {
            angle: 0.0,
            angular_velocity: self.config.initial_velocity,
        };
        self.stop_enabled = false;
        self.last_prize = None;
        self.result_revealed = false;

        self.handles.enable_stop = Some(
            self.timers
                .schedule_in(TimerKind::EnableStop, now, self.config.min_spin_ms),
        );
        self.handles.force_stop = Some(
            self.timers
                .schedule_in(TimerKind::ForceStop, now, self.config.max_spin_ms),
        );

        log::info!(
            "Spin started at {}ms, {} spins left",
            now,
            self.session.remaining_spins()
        );
        events.on_spin_started();
        events.on_toast(&Toast::new(SPIN_STARTED_MESSAGE, ToastKind::Info));
        true
    }

    /// Spinning → Stopping. Does not check the minimum spin time; the stop
    /// control is only offered once `on_stop_enabled` has fired.
    pub fn request_stop_spin<E: WheelEvents + ?Sized>(&mut self, now: u64, events: &mut E) -> bool {
        if self.state != SpinState::Spinning {
            log::debug!("Stop request ignored in {:?}", self.state);
            return false;
        }
        log::info!("Stop requested at {}ms", now);
        self.begin_stopping(events);
        true
    }

    /// Closes the result. Goes back to idle while spins remain; otherwise the
    /// wheel stays stopped for good and reports exhaustion once.
    pub fn acknowledge_result<E: WheelEvents + ?Sized>(&mut self, now: u64, events: &mut E) -> bool {
        if self.state != SpinState::Stopped || !self.result_revealed {
            log::debug!("Acknowledge ignored in {:?} at {}ms", self.state, now);
            return false;
        }

        if self.session.is_exhausted() {
            if !self.exhausted_notified {
                self.exhausted_notified = true;
                log::info!("Free spins exhausted");
                events.on_spins_exhausted();
                events.on_toast(&Toast::new(SPINS_EXHAUSTED_MESSAGE, ToastKind::Warning));
            }
            return false;
        }

        self.state = SpinState::Idle;
        true
    }

    /// Advances one frame: fires due timers, then integrates the angle.
    pub fn step<E: WheelEvents + ?Sized>(&mut self, now: u64, events: &mut E) {
        for (id, kind) in self.timers.take_due(now) {
            // Skip timers cancelled by an earlier handler in this batch
            if self.take_handle(kind, id) {
                self.fire_timer(kind, now, events);
            }
        }

        if !self.state.is_animating() {
            return;
        }

        self.kinematics.angle += self.kinematics.angular_velocity;
        events.on_angle_changed(self.kinematics.angle);

        if self.state == SpinState::Stopping {
            self.kinematics.angular_velocity *= self.config.decay_factor;
            if self.kinematics.angular_velocity < self.config.stop_threshold {
                self.finalize(now);
            }
        }
    }

    fn fire_timer<E: WheelEvents + ?Sized>(&mut self, kind: TimerKind, now: u64, events: &mut E) {
        log::debug!("Timer {:?} fired at {}ms in {:?}", kind, now, self.state);
        match kind {
            TimerKind::EnableStop => {
                if self.state == SpinState::Spinning {
                    self.stop_enabled = true;
                    events.on_stop_enabled();
                    events.on_toast(&Toast::new(STOP_ENABLED_MESSAGE, ToastKind::Success));
                }
            }
            TimerKind::ForceStop => {
                if self.state == SpinState::Spinning {
                    log::info!("No stop request after {}ms, forcing stop", self.config.max_spin_ms);
                    self.begin_stopping(events);
                }
            }
            TimerKind::RevealResult => {
                if let Some(prize) = self.last_prize {
                    self.result_revealed = true;
                    announce_result(&prize, self.session.balance(), events);
                    self.handles.reset_controls = Some(self.timers.schedule_in(
                        TimerKind::ResetControls,
                        now,
                        self.config.controls_reset_delay_ms,
                    ));
                }
            }
            TimerKind::ResetControls => events.on_controls_reset(),
        }
    }

    fn begin_stopping<E: WheelEvents + ?Sized>(&mut self, events: &mut E) {
        self.cancel_timer(TimerKind::EnableStop);
        self.cancel_timer(TimerKind::ForceStop);
        self.state = SpinState::Stopping;
        self.stop_enabled = false;
        events.on_stopping();
        events.on_toast(&Toast::new(STOPPING_MESSAGE, ToastKind::Warning));
    }

    fn finalize(&mut self, now: u64) {
        self.state = SpinState::Stopped;

        let draw: f64 = self.rng.gen();
        let prize = *self
            .config
            .probabilities
            .resolve(self.kinematics.angle, draw);
        self.session.credit(prize.value);
        self.last_prize = Some(prize);

        log::info!(
            "Wheel stopped at {:.1}°, won {} (balance {:.2})",
            self.kinematics.angle,
            prize.label,
            self.session.balance()
        );

        self.handles.reveal_result = Some(
            self.timers
                .schedule_in(TimerKind::RevealResult, now, self.config.reveal_delay_ms),
        );
    }

    fn handle_slot(&mut self, kind: TimerKind) -> &mut Option<TimerId> {
        match kind {
            TimerKind::EnableStop => &mut self.handles.enable_stop,
            TimerKind::ForceStop => &mut self.handles.force_stop,
            TimerKind::RevealResult => &mut self.handles.reveal_result,
            TimerKind::ResetControls => &mut self.handles.reset_controls,
        }
    }

    fn cancel_timer(&mut self, kind: TimerKind) {
        if let Some(id) = self.handle_slot(kind).take() {
            self.timers.cancel(id);
        }
    }

    fn take_handle(&mut self, kind: TimerKind, id: TimerId) -> bool {
        let slot = self.handle_slot(kind);
        if *slot == Some(id) {
            *slot = None;
            true
        } else {
            false
        }
    }
}
