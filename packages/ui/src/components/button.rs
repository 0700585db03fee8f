use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Outline,
}

/// Styled button. Extra classes are appended after the variant classes so
/// callers can override spacing and width.
#[component]
pub fn Button(
    #[props(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<String>,
    #[props(default)] disabled: Option<bool>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = match variant {
        ButtonVariant::Primary => "btn btn-primary",
        ButtonVariant::Outline => "btn btn-outline",
    };
    let class = match class {
        Some(extra) => format!("{variant_class} {extra}"),
        None => variant_class.to_string(),
    };

    rsx! {
        button {
            class: "{class}",
            r#type: r#type,
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
