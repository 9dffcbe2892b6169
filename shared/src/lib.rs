//! Core of the prize wheel: the spin state machine, prize resolution and the
//! free-spin session. Nothing in this crate touches the DOM; renderers plug in
//! through [`events::WheelEvents`].

pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod notifier;
pub mod prize_table;
pub mod probability;
pub mod sector;
pub mod session;
pub mod shared_wheel_game;
pub mod timers;

pub use config::WheelConfig;
pub use error::WheelError;
pub use events::{EventLog, WheelEvent, WheelEvents};
pub use prize_table::{Prize, PRIZE_TABLE};
pub use shared_wheel_game::{SpinState, WheelGame, WheelKinematics};
