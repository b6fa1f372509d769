//! SSR smoke tests: each view is rendered through the router harness and
//! checked for its load-bearing copy.

use earcheck_core::model::{AgeGroup, Stage};

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn welcome_shows_the_opening_copy() {
    let mut harness = setup_view_harness(ViewKind::Welcome);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Your hearing matters"), "html: {html}");
    assert!(html.contains("3 quick steps"));
    assert!(html.contains("welcome-start"));
}

#[tokio::test(flavor = "current_thread")]
async fn instructions_list_the_preparations() {
    let mut harness = setup_view_harness(ViewKind::Instructions);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Before you start"), "html: {html}");
    assert!(html.contains("Find a quiet place"));
    assert!(html.contains("Use headphones"));
    assert!(html.contains("Set your device volume to 100%"));
    assert!(html.contains("instructions-ready"));
}

#[tokio::test(flavor = "current_thread")]
async fn test_intro_highlights_the_stage_keyword() {
    let mut harness = setup_view_harness(ViewKind::Test("street".into()));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("<strong>street</strong>"), "html: {html}");
    assert!(html.contains("Stage 2 of 3"));
    assert!(html.contains("test-start"));
    assert!(html.contains("as soon as you hear it"));
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_stage_renders_the_fallback() {
    let mut harness = setup_view_harness(ViewKind::Test("kitchen".into()));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Invalid stage"), "html: {html}");
    assert!(html.contains("Back to instructions"));
    assert!(!html.contains("test-start"));
}

#[tokio::test(flavor = "current_thread")]
async fn age_selection_offers_every_group() {
    let mut harness = setup_view_harness(ViewKind::AgeSelection);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("personalized result"), "html: {html}");
    for group in AgeGroup::ALL {
        assert!(html.contains(group.label()), "missing {}", group.label());
    }
}

#[tokio::test(flavor = "current_thread")]
async fn result_summarises_the_recorded_scores() {
    let mut harness = setup_view_harness(ViewKind::Result);
    let store = harness.store.clone();
    store.set_stage_score(Stage::Restaurant, 80).await.unwrap();
    store.set_stage_score(Stage::Street, 60).await.unwrap();
    store.set_stage_score(Stage::Music, 40).await.unwrap();
    store.set_age_group(AgeGroup::From51To70).await.unwrap();

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    // (80 + 60 + 40) / 3 = 60, the middle of the five tiers.
    let html = harness.render();
    assert!(html.contains("Your result: 60"), "html: {html}");
    assert!(html.contains("<strong>average</strong>"));
    assert!(html.contains("Get a full hearing check"));
    assert!(html.contains("age group 51-70"));
    assert!(html.contains("rotate(0deg)"));
}

#[tokio::test(flavor = "current_thread")]
async fn empty_session_still_renders_a_result() {
    let mut harness = setup_view_harness(ViewKind::Result);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Your result: 0"), "html: {html}");
    assert!(html.contains("<strong>limited</strong>"));
    assert!(html.contains("Book an appointment"));
}
