use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use earcheck_core::time::fixed_clock;
use earcheck_core::tuning::TestTuning;
use services::audio::{AudioPlayer, NullAudio};
use services::{ProfileService, ResultService, ScreeningService};
use storage::repository::SessionStore;

use crate::context::{UiApp, build_app_context};
use crate::views::{AgeSelectionView, InstructionsView, ResultView, TestView, WelcomeView};

struct TestApp {
    screening: Arc<ScreeningService>,
    results: Arc<ResultService>,
    profile: Arc<ProfileService>,
    audio: Arc<dyn AudioPlayer>,
}

impl UiApp for TestApp {
    fn screening(&self) -> Arc<ScreeningService> {
        Arc::clone(&self.screening)
    }

    fn results(&self) -> Arc<ResultService> {
        Arc::clone(&self.results)
    }

    fn profile(&self) -> Arc<ProfileService> {
        Arc::clone(&self.profile)
    }

    fn audio(&self) -> Arc<dyn AudioPlayer> {
        Arc::clone(&self.audio)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Welcome,
    Instructions,
    Test(String),
    AgeSelection,
    Result,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Welcome => rsx! { WelcomeView {} },
        ViewKind::Instructions => rsx! { InstructionsView {} },
        ViewKind::Test(stage) => rsx! { TestView { stage } },
        ViewKind::AgeSelection => rsx! { AgeSelectionView {} },
        ViewKind::Result => rsx! { ResultView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub store: SessionStore,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let tuning = TestTuning::default();
    let store = SessionStore::in_memory();
    let clock = fixed_clock();
    let screening = Arc::new(ScreeningService::new(clock, store.clone(), tuning));
    let results = Arc::new(ResultService::new(store.clone(), tuning));
    let profile = Arc::new(ProfileService::new(store.clone()));

    let app = Arc::new(TestApp {
        screening,
        results,
        profile,
        audio: Arc::new(NullAudio),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, store }
}
