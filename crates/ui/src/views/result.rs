use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::ResultVm;

#[component]
pub fn ResultView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let results = ctx.results();
    let profile = ctx.profile();

    let resource = use_resource(move || {
        let results = results.clone();
        let profile = profile.clone();
        async move {
            let summary = results.summary().await.map_err(|_| ViewError::Unknown)?;
            let age_group = profile.age_group().await.map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(ResultVm::new(summary, age_group))
        }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page result-page",
            button {
                class: "btn-back",
                onclick: move |_| {
                    if let Some(back) = (Route::Result {}).predecessor() {
                        let _ = navigator.push(back);
                    }
                },
                "Back"
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(vm) => rsx! {
                    ResultBody { vm }
                },
            }
        }
    }
}

#[component]
fn ResultBody(vm: ResultVm) -> Element {
    let (before, emphasis, after) = vm.headline_parts();
    let rotation = vm.needle_rotation_deg();
    let recommendation = vm.recommendation().label();
    let age_note = vm
        .age_group()
        .map(|group| format!("Based on your answers, age group {}", group.label()));

    rsx! {
        h1 { class: "result-title",
            "{before}"
            strong { "{emphasis}" }
            "{after}"
        }
        div { class: "result-gauge",
            p { class: "result-gauge__label", "Average" }
            div { class: "result-gauge__segments",
                for active in vm.segments() {
                    span {
                        class: if active {
                            "result-gauge__segment result-gauge__segment--active"
                        } else {
                            "result-gauge__segment"
                        },
                    }
                }
            }
            div {
                class: "result-gauge__needle",
                style: "transform: translateX(-50%) rotate({rotation}deg)",
            }
            p { class: "result-gauge__score", "Your result: {vm.average()}" }
        }
        if let Some(note) = age_note {
            p { class: "result-age-note", "{note}" }
        }
        div { class: "result-card",
            p { class: "result-card__label", "Recommended for you" }
            h2 { class: "result-card__title", "{recommendation}" }
            if vm.show_cta() {
                button { class: "btn btn-primary", id: "result-cta", "{recommendation}" }
            }
        }
    }
}
