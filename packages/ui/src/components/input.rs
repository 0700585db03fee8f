use dioxus::prelude::*;

/// Styled input wrapper over the native element.
#[component]
pub fn Input(
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let class = match class {
        Some(extra) => format!("input {extra}"),
        None => "input".to_string(),
    };

    rsx! {
        input {
            id: id,
            class: "{class}",
            r#type: r#type,
            placeholder: placeholder,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}
