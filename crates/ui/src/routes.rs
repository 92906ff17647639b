use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{QuizView, StartView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", StartView)] Home {},
        #[route("/quiz/:index", QuizView)] Quiz { index: usize },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { "Vocabulary Quiz" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
