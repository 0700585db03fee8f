use chrono::Local;
use dioxus::prelude::*;
use registry::{Draft, Field, Person};

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::icons::FaUserPlus;
use crate::Icon;

/// Personal details form.
///
/// Owns the in-progress [`Draft`] and reports each finalized [`Person`]
/// through `on_register`. Fields are accepted as typed; there is no
/// validation, matching a plain sign-in sheet.
#[component]
pub fn RegistrationForm(on_register: EventHandler<Person>) -> Element {
    let mut draft = use_signal(Draft::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let person = draft.write().submit();
        on_register.call(person);
    };

    rsx! {
        form {
            onsubmit: handle_submit,
            class: "register-form",

            Input {
                class: "w-full",
                r#type: "text",
                placeholder: "First name",
                value: draft().given_name,
                oninput: move |evt: FormEvent| draft.write().set_field(Field::GivenName, evt.value()),
            }

            Input {
                class: "w-full",
                r#type: "text",
                placeholder: "Last name",
                value: draft().family_name,
                oninput: move |evt: FormEvent| draft.write().set_field(Field::FamilyName, evt.value()),
            }

            Input {
                class: "w-full",
                r#type: "text",
                placeholder: "Phone",
                value: draft().phone,
                oninput: move |evt: FormEvent| draft.write().set_field(Field::Phone, evt.value()),
            }

            Input {
                class: "w-full",
                r#type: "email",
                placeholder: "Email",
                value: draft().email,
                oninput: move |evt: FormEvent| draft.write().set_field(Field::Email, evt.value()),
            }

            div {
                Label { html_for: "birth-date", "Birth date" }
                Input {
                    id: "birth-date",
                    class: "w-full mt-1.5",
                    r#type: "date",
                    value: draft().birth_date,
                    oninput: move |evt: FormEvent| {
                        draft.write().set_birth_date(evt.value(), Local::now().date_naive());
                    },
                }
            }

            if let Some(age) = draft().derived_age() {
                p { class: "register-age", "Age: {age} years" }
            } else {
                p { class: "register-age register-age-unset", "Select a birth date" }
            }

            Button {
                variant: ButtonVariant::Primary,
                class: "w-full",
                r#type: "submit",
                Icon { icon: FaUserPlus, width: 14, height: 14 }
                "Register"
            }
        }
    }
}
