pub mod gradient_background;
pub mod spins_exhausted;
pub mod toast_stack;
pub mod result_modal;
pub mod confetti;

pub use gradient_background::GradientBackground;
pub use spins_exhausted::SpinsExhausted;
pub use toast_stack::{ActiveToast, ToastStack};
pub use result_modal::ResultModal;
pub use confetti::{Confetti, ConfettiPiece};
