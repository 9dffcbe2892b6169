use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GradientBackgroundProps {
    #[prop_or_default]
    pub children: Html,
}

/// Page backdrop for the wheel: a warm radial wash behind the content.
#[function_component(GradientBackground)]
pub fn gradient_background(props: &GradientBackgroundProps) -> Html {
    html! {
        <div class="relative min-h-screen overflow-hidden">
            <div class="fixed inset-0 bg-white dark:bg-gray-950 -z-50"></div>
            <div class="fixed inset-0 -z-40 bg-[radial-gradient(ellipse_at_top,_rgba(251,191,36,0.18),_transparent_60%)] dark:bg-[radial-gradient(ellipse_at_top,_rgba(139,92,246,0.22),_transparent_60%)]"></div>
            <div class="fixed -bottom-32 -right-32 w-96 h-96 rounded-full bg-orange-300/20 dark:bg-violet-700/20 blur-3xl -z-40"></div>

            <div class="relative z-0">
                {props.children.clone()}
            </div>
        </div>
    }
}
