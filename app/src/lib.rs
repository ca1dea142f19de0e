use leptos::*;

mod components;
mod step;

pub use components::*;
pub use step::{StepEvent, StepState, FIRST_STEP};

#[component]
pub fn App(cx: Scope) -> impl IntoView {
    view! { cx,
        <StepCounter initial_step=1 />
    }
}
