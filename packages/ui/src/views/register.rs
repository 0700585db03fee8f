//! Registration page view: personal details form plus the roster table.

use dioxus::prelude::*;
use registry::Person;

use crate::icons::FaUsers;
use crate::state::use_roster;
use crate::Icon;
use crate::{RecordsTable, RegistrationForm};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared registration view.
#[component]
pub fn RegisterView() -> Element {
    let mut roster = use_roster();

    let handle_register = move |person: Person| {
        let total = {
            let mut roster = roster.write();
            roster.add(person);
            roster.len()
        };
        tracing::info!(total, "person added to roster");
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",

            h1 { class: "view-title", "Person Registration" }

            RegistrationForm { on_register: handle_register }

            h2 {
                class: "view-section-title",
                Icon { icon: FaUsers, width: 16, height: 16 }
                "Registered People"
            }

            RecordsTable {}
        }
    }
}
