pub const INITIAL_FREE_SPINS: u32 = 3;

pub const INITIAL_ANGULAR_VELOCITY: f64 = 20.0; // degrees per tick
pub const VELOCITY_DECAY_FACTOR: f64 = 0.95;
pub const STOP_VELOCITY_THRESHOLD: f64 = 0.5;

pub const MIN_SPIN_DURATION_MS: u64 = 2000;
pub const MAX_SPIN_DURATION_MS: u64 = 10000;
pub const RESULT_REVEAL_DELAY_MS: u64 = 500;
pub const CONTROLS_RESET_DELAY_MS: u64 = 1000;

pub const TOAST_LIFETIME_MS: u32 = 4000;
pub const CONFETTI_PIECES: usize = 30;
pub const CONFETTI_LIFETIME_MS: u32 = 6000;

pub const SECTOR_COUNT: usize = 4;
pub const SECTOR_SPAN_DEGREES: f64 = 360.0 / SECTOR_COUNT as f64;
pub const PRIZE_COUNT: usize = 4;

pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

pub const SPIN_STARTED_MESSAGE: &str = "The wheel is spinning! Hold on before you can stop it...";
pub const STOP_ENABLED_MESSAGE: &str = "You can stop the wheel now!";
pub const STOPPING_MESSAGE: &str = "Stopping the wheel...";
pub const NO_WIN_MESSAGE: &str = "Not this time! Try again.";
pub const SPINS_EXHAUSTED_MESSAGE: &str = "Free spins used up! Make a deposit to keep playing.";

pub const WIN_TITLE: &str = "Congratulations!";
pub const WIN_DESCRIPTION: &str = "You won a prize!";
pub const MISS_TITLE: &str = "Too bad!";
pub const MISS_DESCRIPTION: &str = "Not this time, but keep trying!";
