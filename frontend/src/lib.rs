pub mod styles;
pub mod components;
pub mod pages;
pub mod config;

use yew::prelude::*;
use web_sys::window;
use crate::components::GradientBackground;
use crate::pages::wheel_game::FrontendWheelGame;

// Keyframes the utility classes can't express
const CUSTOM_CSS: &str = r#"
@keyframes confetti-fall {
    0% {
        transform: translateY(0) rotate(0deg);
        opacity: 1;
    }
    100% {
        transform: translateY(100vh) rotate(720deg);
        opacity: 0;
    }
}

@keyframes toast-in {
    from { transform: translateX(100%); }
    to { transform: translateX(0); }
}

.animate-toast-in {
    animation: toast-in 0.3s ease-out forwards;
}

@keyframes pulse-subtle {
    0% {
        transform: scale(1);
        box-shadow: 0 0 0 0 rgba(255, 215, 0, 0.4);
    }
    70% {
        transform: scale(1.02);
        box-shadow: 0 0 0 10px rgba(255, 215, 0, 0);
    }
    100% {
        transform: scale(1);
        box-shadow: 0 0 0 0 rgba(255, 215, 0, 0);
    }
}

.animate-pulse-subtle {
    animation: pulse-subtle 2s infinite;
}
"#;

#[function_component(App)]
pub fn app() -> Html {
    // Inject the custom keyframes once, remove them on unmount
    {
        use_effect_with((), move |_| {
            let style_element = window()
                .and_then(|w| w.document())
                .and_then(|document| {
                    let head = document.head()?;
                    let style = document.create_element("style").ok()?;
                    style.set_text_content(Some(CUSTOM_CSS));
                    head.append_child(&style).ok()?;
                    Some(style)
                });

            move || {
                if let Some(style) = style_element {
                    if let Some(parent) = style.parent_node() {
                        let _ = parent.remove_child(&style);
                    }
                }
            }
        });
    }

    html! {
        <GradientBackground>
            <div class="min-h-screen w-full">
                <div class="mx-auto">
                    <FrontendWheelGame />
                </div>
            </div>
        </GradientBackground>
    }
}
