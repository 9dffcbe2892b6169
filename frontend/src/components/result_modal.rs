use yew::prelude::*;
use shared::notifier::{ResultIcon, ResultSummary};
use crate::pages::wheel_game::wheel_utils::format_balance;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ResultModalProps {
    pub summary: ResultSummary,
    pub balance: f64,
    pub remaining_spins: u32,
    pub on_continue: Callback<()>,
}

fn icon(icon: ResultIcon) -> Html {
    match icon {
        ResultIcon::Trophy => html! {
            <div class="mx-auto mb-4 flex items-center justify-center w-16 h-16 rounded-full bg-gradient-to-br from-yellow-300 to-amber-500 text-white text-3xl animate-bounce">
                {"🏆"}
            </div>
        },
        ResultIcon::BrokenHeart => html! {
            <div class="mx-auto mb-4 flex items-center justify-center w-16 h-16 rounded-full bg-gradient-to-br from-gray-300 to-gray-500 text-white text-3xl">
                {"💔"}
            </div>
        },
    }
}

/// Shows a revealed result. Both the button and the backdrop acknowledge it.
#[function_component(ResultModal)]
pub fn result_modal(props: &ResultModalProps) -> Html {
    let on_backdrop = {
        let on_continue = props.on_continue.clone();
        Callback::from(move |_: MouseEvent| on_continue.emit(()))
    };
    let on_button = {
        let on_continue = props.on_continue.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_continue.emit(());
        })
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class={styles::MODAL_BACKDROP} onclick={on_backdrop}>
            <div class={styles::MODAL_PANEL} onclick={swallow}>
                { icon(props.summary.icon) }
                <h2 class={classes!("text-2xl", "font-bold", "mb-2", styles::TITLE_GRADIENT)}>
                    {props.summary.title}
                </h2>
                <p class={classes!(styles::TEXT_BODY, "mb-4")}>{props.summary.description}</p>
                <div class="text-3xl font-extrabold text-gray-900 dark:text-white mb-4">
                    {props.summary.prize_label}
                </div>
                <div class="flex justify-between mb-6 text-sm">
                    <span class={styles::TEXT_SMALL}>
                        {"New balance: "}<strong>{format_balance(props.balance)}</strong>
                    </span>
                    <span class={styles::TEXT_SMALL}>
                        {"Spins left: "}<strong>{props.remaining_spins}</strong>
                    </span>
                </div>
                <button class={classes!(styles::BUTTON_PRIMARY, "w-full")} onclick={on_button}>
                    {"Continue"}
                </button>
            </div>
        </div>
    }
}
