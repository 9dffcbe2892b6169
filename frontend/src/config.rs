use shared::WheelConfig;
use web_sys::window;

/// Debug logging on a local dev server, info everywhere else.
pub fn log_level() -> log::Level {
    if let Some(window) = window() {
        if let Ok(host) = window.location().hostname() {
            if host == "localhost" || host == "127.0.0.1" {
                return log::Level::Debug;
            }
        }
    }
    log::Level::Info
}

/// Id of an optional `<script type="application/json">` element holding
/// wheel overrides. Omitted fields keep their defaults.
pub const WHEEL_CONFIG_ELEMENT_ID: &str = "wheel-config";

pub fn parse_wheel_config(raw: &str) -> Result<WheelConfig, serde_json::Error> {
    serde_json::from_str(raw)
}

pub fn wheel_config() -> WheelConfig {
    let raw = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(WHEEL_CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) => parse_wheel_config(&raw).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed wheel config: {}", e);
            WheelConfig::default()
        }),
        None => WheelConfig::default(),
    }
}

/// Milliseconds since page load from `performance.now()`, falling back to the
/// wall clock where the Performance API is missing.
pub fn now_ms() -> u64 {
    window()
        .and_then(|w| w.performance())
        .map(|performance| performance.now() as u64)
        .unwrap_or_else(|| js_sys::Date::now() as u64)
}

/// Time base handed to the wheel. Never moves backwards, even if the
/// underlying clock does.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last: u64,
}

impl FrameClock {
    pub fn observe(&mut self, sample: u64) -> u64 {
        self.last = self.last.max(sample);
        self.last
    }

    pub fn now(&mut self) -> u64 {
        self.observe(now_ms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides_free_spins() {
        let config = parse_wheel_config(r#"{ "free_spins": 1 }"#).unwrap();
        assert_eq!(config.free_spins, 1);
        assert_eq!(config.min_spin_ms, WheelConfig::default().min_spin_ms);
    }

    #[test]
    fn test_frame_clock_never_goes_backwards() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.observe(5_000), 5_000);
        // Clock stepped back by a second
        assert_eq!(clock.observe(4_000), 5_000);
        assert_eq!(clock.observe(5_016), 5_016);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_wheel_config("free_spins = 1").is_err());
    }
}
