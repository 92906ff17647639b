use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{EndScreenVm, GameScreenVm, QuizIntent, QuizScreenVm, QuizVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView(index: usize) -> Element {
    let ctx = use_context::<AppContext>();
    let word_banks = ctx.word_banks();
    let quiz_loop = ctx.quiz_loop();

    let vm = use_signal(|| None::<QuizVm>);
    let error = use_signal(|| None::<ViewError>);

    let resource = use_resource(move || {
        let word_banks = word_banks.clone();
        let quiz_loop = quiz_loop.clone();
        let mut vm = vm;

        async move {
            let bank = word_banks
                .word_bank()
                .await
                .map_err(|err| ViewError::from(&err))?;
            let started = QuizVm::start(quiz_loop, bank, index)?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut error = error;
        let result = match vm.write().as_mut() {
            Some(current) => current.apply(intent),
            None => Err(ViewError::Unknown),
        };
        error.set(result.err());
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let state = view_state_from_resource(&resource);
    let screen = vm.read().as_ref().map(QuizVm::screen);
    let action_error = error();

    let body = match (state, screen) {
        (ViewState::Error(err), _) => rsx! {
            QuizUnavailable { error: err }
        },
        (ViewState::Ready(()), Some(QuizScreenVm::Game(game))) => rsx! {
            GameScreen { game, on_intent: dispatch_intent }
        },
        (ViewState::Ready(()), Some(QuizScreenVm::End(end))) => rsx! {
            EndScreen { end, on_intent: dispatch_intent }
        },
        _ => rsx! {
            p { "Loading..." }
        },
    };

    rsx! {
        div { class: "page quiz",
            {body}
            if let Some(err) = action_error {
                p { class: "error", "{err.message()}" }
            }
        }
    }
}

#[component]
fn QuizUnavailable(error: ViewError) -> Element {
    rsx! {
        div { class: "quiz-unavailable",
            p { class: "error", "{error.message()}" }
            if error.is_day_selection() {
                Link { to: Route::Home {}, "Choose another day" }
            }
        }
    }
}

#[component]
fn GameScreen(game: GameScreenVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let feedback_class = match &game.feedback {
        Some(feedback) if feedback.is_correct => "feedback correct",
        Some(_) => "feedback wrong",
        None => "feedback",
    };
    let feedback_text = game
        .feedback
        .as_ref()
        .map(|feedback| feedback.text.clone())
        .unwrap_or_default();

    rsx! {
        section { id: "game-screen",
            h2 { id: "day-title", "{game.day_title}" }
            p { class: "progress", "{game.progress_line}" }
            p { id: "definition", "{game.definition}" }
            div { id: "choices-container",
                {game.choices.iter().map(|choice| {
                    let index = choice.index;
                    rsx! {
                        button {
                            key: "{index}",
                            class: choice.class(),
                            disabled: choice.disabled,
                            onclick: move |_| on_intent.call(QuizIntent::Choose(index)),
                            "{choice.word}"
                        }
                    }
                })}
            }
            p { id: "feedback", class: feedback_class, "{feedback_text}" }
            p { id: "score", "{game.score_line}" }
            if game.can_advance {
                button {
                    id: "next-button",
                    onclick: move |_| on_intent.call(QuizIntent::Next),
                    "Next"
                }
            }
        }
    }
}

#[component]
fn EndScreen(end: EndScreenVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let navigator = use_navigator();

    rsx! {
        section { id: "end-screen",
            h2 { "{end.day_title}" }
            p { id: "final-score", "{end.final_line}" }
            button {
                id: "play-again-button",
                onclick: move |_| on_intent.call(QuizIntent::PlayAgain),
                "Play again"
            }
            button {
                id: "restart-button",
                onclick: move |_| {
                    navigator.push(Route::Home {});
                },
                "Restart"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<QuizVm>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<Option<QuizVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<QuizVm>> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
