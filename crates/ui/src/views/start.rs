use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{DayOptionVm, map_day_options};

#[component]
pub fn StartView() -> Element {
    let ctx = use_context::<AppContext>();
    let word_banks = ctx.word_banks();
    let quiz_loop = ctx.quiz_loop();

    let resource = use_resource(move || {
        let word_banks = word_banks.clone();
        let quiz_loop = quiz_loop.clone();
        async move {
            let bank = word_banks
                .word_bank()
                .await
                .map_err(|err| ViewError::from(&err))?;
            Ok::<_, ViewError>(map_day_options(&quiz_loop.day_overviews(&bank)))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page start-screen",
            h2 { "Choose a day" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading words..." }
                },
                ViewState::Ready(days) => rsx! {
                    DayPicker { days }
                },
                // A failed load leaves no way to start; there is no second source to try.
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn DayPicker(days: Vec<DayOptionVm>) -> Element {
    let navigator = use_navigator();
    let first = days.first().map_or(0, |d| d.index);
    let mut selected = use_signal(move || first);
    let current = selected();

    rsx! {
        div { class: "day-picker",
            select {
                id: "day-select",
                value: "{current}",
                onchange: move |evt: FormEvent| {
                    if let Ok(index) = evt.value().parse::<usize>() {
                        selected.set(index);
                    }
                },
                for day in days.iter() {
                    option {
                        key: "{day.index}",
                        value: "{day.index}",
                        selected: day.index == current,
                        "{day.text}"
                    }
                }
            }
            button {
                id: "start-button",
                onclick: move |_| {
                    navigator.push(Route::Quiz { index: selected() });
                },
                "Start"
            }
        }
    }
}
