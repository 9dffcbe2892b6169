pub mod wheel_canvas;
pub mod wheel_utils;

use yew::prelude::*;
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use log::{debug, error, info, trace};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::constants::{CONFETTI_LIFETIME_MS, TOAST_LIFETIME_MS};
use shared::notifier::{result_summary, ResultSummary};
use shared::{EventLog, SpinState, WheelEvent, WheelGame};

use crate::components::confetti::burst;
use crate::components::{ActiveToast, Confetti, ConfettiPiece, ResultModal, SpinsExhausted, ToastStack};
use crate::config::{wheel_config, FrameClock};
use crate::styles;
use wheel_canvas::WheelCanvas;
use wheel_utils::{spins_label, SessionStats, SpinButton, StopButton};

pub enum Msg {
    Spin,
    Stop,
    Continue,
    Frame,
    DismissToast(u32),
    ClearConfetti(u32),
}

/// A revealed result waiting for the player to acknowledge it.
struct RevealedResult {
    summary: ResultSummary,
    balance: f64,
}

pub struct FrontendWheelGame {
    game: WheelGame<SmallRng>,
    events: EventLog,
    clock: FrameClock,
    effects_rng: SmallRng,
    angle: f64,
    controls_ready: bool,
    revealed: Option<RevealedResult>,
    exhausted: bool,
    toasts: Vec<ActiveToast>,
    next_toast_id: u32,
    confetti: Vec<ConfettiPiece>,
    confetti_burst: u32,
    frame: Option<AnimationFrame>,
}

impl FrontendWheelGame {
    fn ensure_frame(&mut self, ctx: &Context<Self>) {
        if self.frame.is_some() || !self.game.is_active() {
            return;
        }
        let link = ctx.link().clone();
        self.frame = Some(request_animation_frame(move |_| link.send_message(Msg::Frame)));
    }

    fn push_toast(&mut self, ctx: &Context<Self>, toast: shared::notifier::Toast) {
        let id = self.next_toast_id;
        self.next_toast_id = self.next_toast_id.wrapping_add(1);
        self.toasts.push(ActiveToast { id, toast });

        let link = ctx.link().clone();
        Timeout::new(TOAST_LIFETIME_MS, move || link.send_message(Msg::DismissToast(id))).forget();
    }

    fn celebrate(&mut self, ctx: &Context<Self>) {
        self.confetti_burst = self.confetti_burst.wrapping_add(1);
        self.confetti = burst(&mut self.effects_rng);

        let burst_id = self.confetti_burst;
        let link = ctx.link().clone();
        Timeout::new(CONFETTI_LIFETIME_MS, move || link.send_message(Msg::ClearConfetti(burst_id))).forget();
    }

    /// Folds the notifications the wheel emitted into view state.
    fn apply_events(&mut self, ctx: &Context<Self>) {
        for event in self.events.drain() {
            // Angle updates arrive every frame, keep them out of debug output
            match &event {
                WheelEvent::AngleChanged { angle } => {
                    trace!("angle {:.2}", angle);
                    self.angle = *angle;
                    continue;
                }
                _ => debug!(
                    "wheel event: {}",
                    serde_json::to_string(&event).unwrap_or_else(|_| format!("{:?}", event))
                ),
            }

            match event {
                WheelEvent::SpinStarted => {
                    self.controls_ready = false;
                    self.angle = self.game.kinematics().angle;
                }
                WheelEvent::SpinFinished { prize, new_balance } => {
                    info!("Spin landed on {} (balance {:.2})", prize.label, new_balance);
                    self.revealed = Some(RevealedResult {
                        summary: result_summary(&prize),
                        balance: new_balance,
                    });
                }
                WheelEvent::ControlsReset => self.controls_ready = true,
                WheelEvent::SpinsExhausted => self.exhausted = true,
                WheelEvent::Toast(toast) => self.push_toast(ctx, toast),
                WheelEvent::Celebrate => self.celebrate(ctx),
                WheelEvent::StopEnabled | WheelEvent::Stopping | WheelEvent::AngleChanged { .. } => {}
            }
        }
    }

    fn view_controls(&self, ctx: &Context<Self>) -> Html {
        if self.exhausted {
            return html! { <SpinsExhausted /> };
        }

        // Spin stays hidden until the controls-reset timer has fired
        let state = self.game.state();
        let show_spin = state == SpinState::Idle || (state == SpinState::Stopped && self.controls_ready);

        if show_spin {
            html! {
                <SpinButton
                    disabled={!self.game.can_spin()}
                    onclick={ctx.link().callback(|_| Msg::Spin)}
                />
            }
        } else {
            html! {
                <StopButton
                    stop_enabled={self.game.stop_enabled()}
                    stopping={state == SpinState::Stopping || state == SpinState::Stopped}
                    onclick={ctx.link().callback(|_| Msg::Stop)}
                />
            }
        }
    }
}

impl Component for FrontendWheelGame {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let game = match WheelGame::with_config(wheel_config(), SmallRng::from_entropy()) {
            Ok(game) => game,
            Err(e) => {
                error!("Invalid wheel config, using defaults: {}", e);
                WheelGame::new(SmallRng::from_entropy())
            }
        };
        let exhausted = game.session().is_exhausted();

        Self {
            game,
            events: EventLog::new(),
            clock: FrameClock::default(),
            effects_rng: SmallRng::from_entropy(),
            angle: 0.0,
            controls_ready: true,
            revealed: None,
            exhausted,
            toasts: Vec::new(),
            next_toast_id: 0,
            confetti: Vec::new(),
            confetti_burst: 0,
            frame: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let now = self.clock.now();
        let rerender = match msg {
            Msg::Spin => self.game.request_start_spin(now, &mut self.events),
            Msg::Stop => self.game.request_stop_spin(now, &mut self.events),
            // Closes the modal even when the session is exhausted
            Msg::Continue => {
                if !self.game.acknowledge_result(now, &mut self.events) {
                    debug!("Result acknowledged without returning to idle");
                }
                self.revealed = None;
                true
            }
            Msg::Frame => {
                // The handle is spent once the callback runs
                self.frame = None;
                self.game.step(now, &mut self.events);
                true
            }
            Msg::DismissToast(id) => {
                let before = self.toasts.len();
                self.toasts.retain(|t| t.id != id);
                self.toasts.len() != before
            }
            // A newer burst owns the pieces now
            Msg::ClearConfetti(burst_id) => {
                if burst_id == self.confetti_burst && !self.confetti.is_empty() {
                    self.confetti.clear();
                    true
                } else {
                    false
                }
            }
        };

        self.apply_events(ctx);
        self.ensure_frame(ctx);
        rerender
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let session = self.game.session();
        let state = self.game.state();

        html! {
            <div class={styles::CONTAINER}>
                // Overlays
                <ToastStack
                    toasts={self.toasts.clone()}
                    on_dismiss={ctx.link().callback(Msg::DismissToast)}
                />
                <Confetti pieces={self.confetti.clone()} />

                <div class={styles::CARD}>
                    <h1 class={styles::TITLE}>
                        <span class={styles::TITLE_GRADIENT}>{"Prize Wheel"}</span>
                    </h1>

                    // Spins left and balance
                    <SessionStats
                        remaining_spins={session.remaining_spins()}
                        balance={session.balance()}
                    />

                    // Wheel
                    <div class="flex justify-center mb-8">
                        <WheelCanvas angle={self.angle} is_spinning={state.is_animating()} />
                    </div>

                    // Spin / stop, or the deposit panel once spins run out
                    <div class="max-w-xs mx-auto">
                        { self.view_controls(ctx) }
                    </div>

                    if !self.exhausted {
                        <p class={classes!(styles::TEXT_SMALL, "text-center", "mt-4")}>
                            {spins_label(session.remaining_spins())}
                        </p>
                    }
                </div>

                if let Some(revealed) = &self.revealed {
                    <ResultModal
                        summary={revealed.summary.clone()}
                        balance={revealed.balance}
                        remaining_spins={session.remaining_spins()}
                        on_continue={ctx.link().callback(|_| Msg::Continue)}
                    />
                }
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // Dropping the handle cancels the pending frame
        self.frame = None;
    }
}
