use dioxus::prelude::*;

#[component]
pub fn Register() -> Element {
    rsx! {
        ui::views::RegisterView {}
    }
}
