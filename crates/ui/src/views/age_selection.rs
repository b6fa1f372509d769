use dioxus::prelude::*;
use dioxus_router::use_navigator;

use earcheck_core::model::AgeGroup;
use services::audio::SoundEffect;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn AgeSelectionView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let profile = ctx.profile();
    let audio = ctx.audio();

    let on_select = use_callback(move |group: AgeGroup| {
        let profile = profile.clone();
        audio.play_effect(SoundEffect::Click);
        spawn(async move {
            // Personalization only; a failed write must not block the result.
            let _ = profile.select_age_group(group).await;
            let _ = navigator.push(Route::Result {});
        });
    });

    rsx! {
        div { class: "page age-page",
            button {
                class: "btn-back",
                onclick: move |_| {
                    if let Some(back) = (Route::AgeSelection {}).predecessor() {
                        let _ = navigator.push(back);
                    }
                },
                "Back"
            }
            p { class: "age-label", "One more thing" }
            h1 { class: "age-title",
                "For a more "
                strong { "personalized result," }
                " please select your age group"
            }
            div { class: "age-buttons",
                for group in AgeGroup::ALL {
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_select.call(group),
                        "{group.label()}"
                    }
                }
            }
        }
    }
}
