use rand::Rng;
use yew::prelude::*;
use shared::constants::CONFETTI_PIECES;

pub const CONFETTI_COLORS: [&str; 5] = ["#ffd700", "#ff6b6b", "#4ecdc4", "#9b59b6", "#ff9f43"];

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub size_px: f64,
    pub color: &'static str,
    pub left_percent: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub round: bool,
}

impl ConfettiPiece {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_px: rng.gen_range(4.0..12.0),
            color: CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())],
            left_percent: rng.gen_range(0.0..100.0),
            duration_s: rng.gen_range(2.0..5.0),
            delay_s: rng.gen_range(0.0..2.0),
            round: rng.gen_bool(0.5),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {size:.1}px; height: {size:.1}px; background: {color}; \
             left: {left:.2}%; top: -10px; pointer-events: none; \
             animation: confetti-fall {duration:.2}s ease-out forwards; animation-delay: {delay:.2}s; \
             border-radius: {radius};",
            size = self.size_px,
            color = self.color,
            left = self.left_percent,
            duration = self.duration_s,
            delay = self.delay_s,
            radius = if self.round { "50%" } else { "0" },
        )
    }
}

/// One celebration's worth of pieces.
pub fn burst<R: Rng + ?Sized>(rng: &mut R) -> Vec<ConfettiPiece> {
    (0..CONFETTI_PIECES).map(|_| ConfettiPiece::random(rng)).collect()
}

#[derive(Properties, PartialEq)]
pub struct ConfettiProps {
    pub pieces: Vec<ConfettiPiece>,
}

#[function_component(Confetti)]
pub fn confetti(props: &ConfettiProps) -> Html {
    if props.pieces.is_empty() {
        return html! {};
    }

    html! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none z-30">
            { for props.pieces.iter().map(|piece| html! { <div style={piece.style()}></div> }) }
        </div>
    }
}
