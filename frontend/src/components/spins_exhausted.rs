use yew::prelude::*;
use crate::styles;

pub const DEPOSIT_ANCHOR: &str = "#deposit";

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or(DEPOSIT_ANCHOR.to_string())]
    pub deposit_href: String,
}

/// Replaces the spin controls once every free spin has been used.
#[function_component(SpinsExhausted)]
pub fn spins_exhausted(props: &Props) -> Html {
    html! {
        <div class={styles::ALERT_WARNING}>
            <div class="text-center mb-4">
                <span class="inline-flex items-center px-3 py-1 rounded-full text-sm font-medium bg-amber-100 text-amber-800 dark:bg-amber-800 dark:text-amber-100">
                    <svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5 mr-1.5" viewBox="0 0 20 20" fill="currentColor">
                        <path fill-rule="evenodd" d="M8.257 3.099c.765-1.36 2.722-1.36 3.486 0l5.58 9.92c.75 1.334-.213 2.98-1.742 2.98H4.42c-1.53 0-2.493-1.646-1.743-2.98l5.58-9.92zM11 13a1 1 0 11-2 0 1 1 0 012 0zm-1-8a1 1 0 00-1 1v3a1 1 0 002 0V6a1 1 0 00-1-1z" clip-rule="evenodd" />
                    </svg>
                    {"No spins left"}
                </span>
            </div>

            <h3 class="text-xl font-bold mb-2 text-gray-900 dark:text-white">
                {"Free spins used up"}
            </h3>

            <p class={classes!(styles::TEXT_BODY, "mb-6", "text-center")}>
                {"You have used all of your free spins! Make a deposit to keep playing at the premium tables."}
            </p>

            <a href={props.deposit_href.clone()} class={styles::BUTTON_PRIMARY}>
                {"Make a Deposit"}
            </a>
        </div>
    }
}
