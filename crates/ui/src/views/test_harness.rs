use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, QuizLoopService, WordBankService};
use storage::repository::Storage;
use vocab_core::Randomness;
use vocab_core::model::{DayLabel, DayWords, QuizSettings, WordBank, WordEntry};

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::QuizTestHandles;
use crate::views::{QuizView, StartView};

#[derive(Clone)]
struct TestApp {
    word_banks: Arc<WordBankService>,
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn word_banks(&self) -> Arc<WordBankService> {
        Arc::clone(&self.word_banks)
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Start,
    Quiz(usize),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: Option<QuizTestHandles>,
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
    use_context_provider(|| props.view);
    if let Some(handles) = props.quiz_handles.clone() {
        use_context_provider(|| handles);
    }
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
        ViewKind::Start => rsx! { StartView {} },
        ViewKind::Quiz(index) => rsx! { QuizView { index } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub quiz_handles: Option<QuizTestHandles>,
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

    /// Rebuild, then let the load resource finish and the view re-render.
    pub async fn settle(&mut self) {
        self.rebuild();
        self.drive_async().await;
        self.drive_async().await;
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

pub fn build_day(label: &str, words: usize) -> DayWords {
    let entries = (0..words)
        .map(|i| WordEntry::new(format!("{label}-word{i}"), format!("{label} meaning {i}")))
        .collect();
    DayWords::new(DayLabel::new(label), entries)
}

pub fn build_bank(days: Vec<DayWords>) -> WordBank {
    WordBank::new(days).expect("non-empty bank")
}

pub fn setup_view_harness(view: ViewKind, bank: WordBank) -> ViewHarness {
    setup_view_harness_with_storage(view, &Storage::in_memory(bank))
}

pub fn setup_view_harness_with_storage(view: ViewKind, storage: &Storage) -> ViewHarness {
    let services = AppServices::new(storage, QuizSettings::standard(), Randomness::seeded(11));
    let app = Arc::new(TestApp {
        word_banks: services.word_banks(),
        quiz_loop: services.quiz_loop(),
    });

    let quiz_handles = match view {
        ViewKind::Quiz(_) => Some(QuizTestHandles::default()),
        ViewKind::Start => None,
    };

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz_handles: quiz_handles.clone(),
        },
    );

    ViewHarness { dom, quiz_handles }
}
