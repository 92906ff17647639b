use std::sync::Arc;

use storage::repository::{LoadError, Storage, WordBankSource};
use vocab_core::model::WordBank;

use crate::vm::{QuizIntent, QuizVm};

use super::test_harness::{
    ViewHarness, ViewKind, build_bank, build_day, drive_dom, setup_view_harness,
    setup_view_harness_with_storage,
};

fn correct_index(harness: &ViewHarness) -> usize {
    let vm = harness.quiz_handles.as_ref().expect("quiz handles").vm();
    harness
        .dom
        .in_runtime(|| vm.read().as_ref().and_then(QuizVm::correct_choice_index))
        .expect("current question has a correct choice")
}

fn dispatch(harness: &mut ViewHarness, intent: QuizIntent) {
    let dispatch = harness.quiz_handles.as_ref().expect("quiz handles").dispatch();
    harness.dom.in_runtime(|| dispatch.call(intent));
    drive_dom(&mut harness.dom);
}

#[tokio::test(flavor = "current_thread")]
async fn start_view_smoke_lists_days_with_counts() {
    let bank = build_bank(vec![build_day("Day29", 12), build_day("Day30", 3)]);
    let mut harness = setup_view_harness(ViewKind::Start, bank);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Choose a day"), "missing heading in {html}");
    assert!(html.contains("Day29 (12 words)"), "missing Day29 in {html}");
    assert!(html.contains("Day30 (3 words)"), "missing Day30 in {html}");
    assert!(html.contains("Start"), "missing start button in {html}");
}

struct FailingSource;

#[async_trait::async_trait]
impl WordBankSource for FailingSource {
    async fn load(&self) -> Result<WordBank, LoadError> {
        Err(LoadError::Unreachable("offline".to_string()))
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}

#[tokio::test(flavor = "current_thread")]
async fn start_view_smoke_renders_load_failure() {
    let storage = Storage {
        word_bank: Arc::new(FailingSource),
    };
    let mut harness = setup_view_harness_with_storage(ViewKind::Start, &storage);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Could not load the word data"), "missing error in {html}");
    assert!(!html.contains("day-select"), "unexpected picker in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let bank = build_bank(vec![build_day("Day1", 4)]);
    let mut harness = setup_view_harness(ViewKind::Quiz(0), bank);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Day1 meaning"), "missing definition in {html}");
    assert!(html.contains("Score: 0 / 4"), "missing score in {html}");
    assert!(html.contains("Question 1 of 4"), "missing progress in {html}");
    assert!(!html.contains("Next"), "next shown before answering in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_rejects_small_day() {
    let bank = build_bank(vec![build_day("Day1", 4), build_day("Day2", 3)]);
    let mut harness = setup_view_harness(ViewKind::Quiz(1), bank);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("at least 4 required"), "missing error in {html}");
    assert!(html.contains("Choose another day"), "missing link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_rejects_unknown_day() {
    let bank = build_bank(vec![build_day("Day1", 4)]);
    let mut harness = setup_view_harness(ViewKind::Quiz(9), bank);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("not in the word list"), "missing error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_plays_day_with_slash_in_label() {
    let bank = build_bank(vec![build_day("Day1", 4), build_day("Day29/30", 5)]);
    let mut start = setup_view_harness(ViewKind::Start, bank.clone());
    start.settle().await;
    let html = start.render();
    assert!(html.contains("Day29/30 (5 words)"), "missing option in {html}");

    let mut harness = setup_view_harness(ViewKind::Quiz(1), bank);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Day29/30"), "missing day title in {html}");
    assert!(html.contains("Day29/30 meaning"), "missing definition in {html}");
    assert!(html.contains("Score: 0 / 5"), "missing score in {html}");

    let correct = correct_index(&harness);
    dispatch(&mut harness, QuizIntent::Choose(correct));
    let html = harness.render();
    assert!(html.contains("Correct!"), "missing feedback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_feedback_for_wrong_answer() {
    let bank = build_bank(vec![build_day("Day1", 4)]);
    let mut harness = setup_view_harness(ViewKind::Quiz(0), bank);
    harness.settle().await;

    let wrong = (correct_index(&harness) + 1) % 4;
    dispatch(&mut harness, QuizIntent::Choose(wrong));

    let html = harness.render();
    assert!(html.contains("Wrong. Answer: Day1-word"), "missing feedback in {html}");
    assert!(html.contains("Score: 0 / 4"), "score changed in {html}");
    assert!(html.contains("Next"), "missing next button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_plays_to_final_score_and_again() {
    let bank = build_bank(vec![build_day("Day1", 4)]);
    let mut harness = setup_view_harness(ViewKind::Quiz(0), bank);
    harness.settle().await;

    for round in 1..=4 {
        let correct = correct_index(&harness);
        dispatch(&mut harness, QuizIntent::Choose(correct));
        let html = harness.render();
        assert!(html.contains("Correct!"), "missing feedback in {html}");
        let expected = format!("Score: {round} / 4");
        assert!(html.contains(&expected), "missing {expected} in {html}");
        dispatch(&mut harness, QuizIntent::Next);
    }

    let html = harness.render();
    assert!(html.contains("Final score: 4 / 4"), "missing final score in {html}");
    assert!(html.contains("Play again"), "missing play again in {html}");
    assert!(html.contains("Restart"), "missing restart in {html}");

    dispatch(&mut harness, QuizIntent::PlayAgain);
    let html = harness.render();
    assert!(html.contains("Score: 0 / 4"), "missing reset score in {html}");
    assert!(html.contains("Question 1 of 4"), "missing progress in {html}");
}
