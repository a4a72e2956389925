use deepdive_core::model::{ExportMode, catalog};

use super::test_harness::{ViewHarness, setup_wizard_harness};
use crate::vm::WizardIntent;

/// Begin with "Isaiah 6" and advance through every question, answering the
/// LEARN prompt along the way.
fn complete_session(harness: &mut ViewHarness, learn_answer: &str) {
    harness.dispatch(WizardIntent::Begin("Isaiah 6".to_string()));
    for question in catalog() {
        if question.title() == "LEARN" {
            harness.dispatch(WizardIntent::EditAnswer(learn_answer.to_string()));
        }
        harness.dispatch(WizardIntent::Advance);
    }
}

#[tokio::test(flavor = "current_thread")]
async fn intro_smoke_renders_invitation_and_disabled_begin() {
    let mut harness = setup_wizard_harness();
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Deep Dive into His Word"), "missing invitation in {html}");
    assert!(html.contains("Begin"), "missing begin action in {html}");
    assert!(html.contains("disabled"), "begin should start disabled in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn a_blank_reference_does_not_begin() {
    let mut harness = setup_wizard_harness();
    harness.rebuild();
    harness.dispatch(WizardIntent::Begin("   ".to_string()));
    let html = harness.render();
    assert!(html.contains("Deep Dive into His Word"), "should stay on intro in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn begin_walks_into_the_first_question() {
    let mut harness = setup_wizard_harness();
    harness.rebuild();
    harness.dispatch(WizardIntent::Begin("Isaiah 6".to_string()));
    let html = harness.render();
    assert!(html.contains("SEE"), "missing first question title in {html}");
    let progress = format!("1 / {}", catalog().len());
    assert!(html.contains(&progress), "missing {progress} in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn back_from_the_first_question_returns_to_the_intro() {
    let mut harness = setup_wizard_harness();
    harness.rebuild();
    harness.dispatch(WizardIntent::Begin("Isaiah 6".to_string()));
    harness.dispatch(WizardIntent::Retreat);
    let html = harness.render();
    assert!(html.contains("Deep Dive into His Word"), "expected intro in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn the_last_question_relabels_next_as_complete() {
    let mut harness = setup_wizard_harness();
    harness.rebuild();
    harness.dispatch(WizardIntent::Begin("Isaiah 6".to_string()));
    for _ in 0..catalog().len() - 1 {
        harness.dispatch(WizardIntent::Advance);
    }
    let html = harness.render();
    assert!(html.contains("CONFIRM"), "missing last question in {html}");
    assert!(html.contains("Complete"), "missing relabeled action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn completing_shows_the_reference_and_export_actions() {
    let mut harness = setup_wizard_harness();
    harness.rebuild();
    complete_session(&mut harness, "God is holy");

    let html = harness.render();
    assert!(html.contains("Deep Dive Complete"), "missing completion title in {html}");
    assert!(html.contains("Isaiah 6"), "missing reference in {html}");
    assert!(html.contains("Download Summary PDF"), "missing summary action in {html}");
    assert!(html.contains("Download Full PDF"), "missing full action in {html}");
    assert!(
        html.contains("isaiah-6-full-2023-11-14.pdf"),
        "missing filename preview in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn summary_export_saves_the_file_and_reports_it() {
    let mut harness = setup_wizard_harness();
    harness.rebuild();
    complete_session(&mut harness, "God is holy");
    harness.dispatch(WizardIntent::Export(ExportMode::Summary));

    let html = harness.render();
    assert!(
        html.contains("Saved isaiah-6-summary-2023-11-14.pdf"),
        "missing saved status in {html}"
    );

    let path = harness.out_dir.path().join("isaiah-6-summary-2023-11-14.pdf");
    let bytes = std::fs::read(&path).expect("exported file on disk");
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test(flavor = "current_thread")]
async fn start_over_resets_back_to_a_blank_intro() {
    let mut harness = setup_wizard_harness();
    harness.rebuild();
    complete_session(&mut harness, "God is holy");
    harness.dispatch(WizardIntent::StartOver);

    let html = harness.render();
    assert!(html.contains("Deep Dive into His Word"), "expected intro in {html}");
    assert!(!html.contains("Isaiah 6"), "reference should be cleared in {html}");
}
