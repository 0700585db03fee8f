use dioxus::prelude::*;
use registry::{RollcallConfig, Roster};
use views::Register;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Register {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(Roster::default()));
    use_context_provider(|| Signal::new(RollcallConfig::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        Router::<Route> {}
    }
}
