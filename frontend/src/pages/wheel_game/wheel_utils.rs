use yew::prelude::*;
use crate::styles;

/// Balance as shown in the stats tiles and the result modal.
pub fn format_balance(balance: f64) -> String {
    format!("R$ {:.2}", balance)
}

pub fn stop_button_label(stop_enabled: bool, stopping: bool) -> &'static str {
    if stopping {
        "Stopping..."
    } else if stop_enabled {
        "Stop"
    } else {
        "Wait..."
    }
}

pub fn spins_label(remaining: u32) -> String {
    match remaining {
        1 => "1 free spin left".to_string(),
        n => format!("{} free spins left", n),
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_class = if props.disabled { styles::BUTTON_DISABLED } else { styles::BUTTON_SPIN };
    let animation_class = if props.disabled { "" } else { "animate-pulse-subtle" };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-full", "w-full", button_class, animation_class)}>
            <button
                onclick={props.onclick.clone()}
                disabled={props.disabled}
                class="relative w-full px-8 py-4 font-bold text-lg transition-all duration-300 border-2 border-transparent hover:border-white focus:outline-none focus:ring-4 focus:ring-yellow-300 focus:ring-opacity-50 bg-transparent"
            >
                <div class="flex items-center justify-center relative z-10">
                    <svg class="inline-block mr-2" xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="currentColor">
                        <path d="M8 5v14l11-7z" />
                    </svg>
                    <span>{"Spin"}</span>
                </div>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StopButtonProps {
    pub stop_enabled: bool,
    pub stopping: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(StopButton)]
pub fn stop_button(props: &StopButtonProps) -> Html {
    let disabled = !props.stop_enabled || props.stopping;
    let button_class = if disabled { styles::BUTTON_DISABLED } else { styles::BUTTON_STOP };
    let icon_class = if props.stopping { "inline-block mr-2 animate-spin" } else { "inline-block mr-2" };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-full", "w-full", button_class)}>
            <button
                onclick={props.onclick.clone()}
                {disabled}
                class="relative w-full px-8 py-4 font-bold text-lg transition-all duration-300 border-2 border-transparent hover:border-white focus:outline-none bg-transparent"
            >
                <div class="flex items-center justify-center relative z-10">
                    <svg class={icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <rect x="6" y="6" width="12" height="12" />
                    </svg>
                    <span>{stop_button_label(props.stop_enabled, props.stopping)}</span>
                </div>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionStatsProps {
    pub remaining_spins: u32,
    pub balance: f64,
}

#[function_component(SessionStats)]
pub fn session_stats(props: &SessionStatsProps) -> Html {
    html! {
        <div class="grid grid-cols-2 gap-4 mb-6">
            <div class={classes!(styles::STAT_TILE, styles::STAT_TILE_SPINS)}>
                <div class={styles::TEXT_SMALL}>{"Free spins"}</div>
                <div class="text-2xl font-bold text-blue-700 dark:text-blue-300">{props.remaining_spins}</div>
            </div>
            <div class={classes!(styles::STAT_TILE, styles::STAT_TILE_BALANCE)}>
                <div class={styles::TEXT_SMALL}>{"Balance"}</div>
                <div class="text-2xl font-bold text-amber-700 dark:text-amber-300">{format_balance(props.balance)}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_balance_two_decimals() {
        assert_eq!(format_balance(0.0), "R$ 0.00");
        assert_eq!(format_balance(125.0), "R$ 125.00");
    }

    #[test]
    fn test_stop_button_label() {
        assert_eq!(stop_button_label(false, false), "Wait...");
        assert_eq!(stop_button_label(true, false), "Stop");
        assert_eq!(stop_button_label(false, true), "Stopping...");
    }

    #[test]
    fn test_spins_label() {
        assert_eq!(spins_label(1), "1 free spin left");
        assert_eq!(spins_label(0), "0 free spins left");
    }
}
