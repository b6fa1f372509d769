use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

#[component]
pub fn WelcomeView() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "page welcome-page",
            div { class: "welcome-content",
                h1 { class: "welcome-title", "Your hearing matters" }
                p { class: "welcome-description",
                    strong { "3 quick steps" }
                    " to see how your hearing is doing"
                }
                p { class: "welcome-cta-text", "Check it today" }
            }
            button {
                class: "btn btn-primary",
                id: "welcome-start",
                onclick: move |_| {
                    let _ = navigator.push(Route::Instructions {});
                },
                "Start"
            }
        }
    }
}
