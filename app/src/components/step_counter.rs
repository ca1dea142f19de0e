use leptos::*;
use web_sys::console;

use crate::step::{StepEvent, StepState};

/// A linear step counter.
///
/// Shows the current step as a heading and a "Next" control that
/// advances it by one, with no upper bound.
#[component]
pub fn StepCounter(
    cx: Scope,
    /// The step the counter starts at.
    initial_step: u32,
) -> impl IntoView {
    let (state, set_state) = create_signal(cx, StepState::starting_at(initial_step));

    view! { cx,
        <div style="background-color:#111827;color:#f9fafb;padding:1rem;">
            <h1>{move || state.get().heading()}</h1>
            <button on:click=move |_| set_state.update(|state| {
                *state = state.apply(StepEvent::Advance);
                console::log_2(&"Advance".into(), &state.step().to_string().into());
            })>"Next"</button>
        </div>
    }
}
