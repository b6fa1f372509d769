use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use earcheck_core::model::Stage;

use crate::views::{AgeSelectionView, InstructionsView, ResultView, TestView, WelcomeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", WelcomeView)] Welcome {},
        #[route("/instructions", InstructionsView)] Instructions {},
        #[route("/test/:stage", TestView)] Test { stage: String },
        #[route("/age-selection", AgeSelectionView)] AgeSelection {},
        #[route("/result", ResultView)] Result {},
}

impl Route {
    /// The statically defined single-step back target.
    ///
    /// The flow is linear; back never walks a history stack, it mirrors the
    /// forward path. An unparseable test stage falls back to instructions.
    #[must_use]
    pub fn predecessor(&self) -> Option<Route> {
        match self {
            Route::Welcome {} => None,
            Route::Instructions {} => Some(Route::Welcome {}),
            Route::Test { stage } => match stage.parse::<Stage>() {
                Ok(Stage::Restaurant) | Err(_) => Some(Route::Instructions {}),
                Ok(stage) => {
                    let previous = Stage::ALL[stage.index() - 1];
                    Some(Route::Test {
                        stage: previous.to_string(),
                    })
                }
            },
            Route::AgeSelection {} => Some(Route::Test {
                stage: Stage::Music.to_string(),
            }),
            Route::Result {} => Some(Route::AgeSelection {}),
        }
    }

    /// Route for a given stage's test view.
    #[must_use]
    pub fn test(stage: Stage) -> Route {
        Route::Test {
            stage: stage.to_string(),
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "brand", "EarCheck" }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_path_mirrors_forward_path() {
        assert_eq!(Route::Welcome {}.predecessor(), None);
        assert_eq!(
            Route::Instructions {}.predecessor(),
            Some(Route::Welcome {})
        );
        assert_eq!(
            Route::test(Stage::Restaurant).predecessor(),
            Some(Route::Instructions {})
        );
        assert_eq!(
            Route::test(Stage::Street).predecessor(),
            Some(Route::test(Stage::Restaurant))
        );
        assert_eq!(
            Route::test(Stage::Music).predecessor(),
            Some(Route::test(Stage::Street))
        );
        assert_eq!(
            Route::AgeSelection {}.predecessor(),
            Some(Route::test(Stage::Music))
        );
        assert_eq!(
            Route::Result {}.predecessor(),
            Some(Route::AgeSelection {})
        );
    }

    #[test]
    fn unknown_stage_backs_out_to_instructions() {
        let route = Route::Test {
            stage: "kitchen".to_string(),
        };
        assert_eq!(route.predecessor(), Some(Route::Instructions {}));
    }
}
