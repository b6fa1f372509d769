use dioxus::prelude::*;
use dioxus_router::use_navigator;

use earcheck_core::model::Stage;

use crate::routes::Route;

const INSTRUCTIONS: [&str; 3] = [
    "Find a quiet place",
    "Use headphones",
    "Set your device volume to 100%",
];

#[component]
pub fn InstructionsView() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "page instructions-page",
            button {
                class: "btn-back",
                onclick: move |_| {
                    if let Some(back) = (Route::Instructions {}).predecessor() {
                        let _ = navigator.push(back);
                    }
                },
                "Back"
            }
            h1 { class: "instructions-title", "Before you start" }
            ul { class: "instruction-list",
                for item in INSTRUCTIONS {
                    li { class: "instruction-item", "{item}" }
                }
            }
            button {
                class: "btn btn-primary",
                id: "instructions-ready",
                onclick: move |_| {
                    let _ = navigator.push(Route::test(Stage::Restaurant));
                },
                "I'm ready"
            }
        }
    }
}
