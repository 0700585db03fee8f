use dioxus::prelude::*;
use registry::models::format_short_date;

use crate::state::{use_config, use_roster};

/// Read-only table of registered people, oldest first.
///
/// Rows are keyed by position; the roster never reorders or removes entries.
#[component]
pub fn RecordsTable() -> Element {
    let roster = use_roster();
    let config = use_config();
    let date_format = config().display.date_format;

    rsx! {
        div {
            class: "records-wrap",
            table {
                class: "records-table",
                thead {
                    tr {
                        th { "First name" }
                        th { "Last name" }
                        th { "Phone" }
                        th { "Email" }
                        th { "Birth date" }
                        th { "Age" }
                    }
                }
                tbody {
                    for (i, person) in roster().people().iter().enumerate() {
                        tr {
                            key: "{i}",
                            td { "{person.given_name}" }
                            td { "{person.family_name}" }
                            td { "{person.phone}" }
                            td { "{person.email}" }
                            td {
                                if let Some(date) = person.birth_date {
                                    {format_short_date(date, &date_format)}
                                }
                            }
                            td { "{person.age}" }
                        }
                    }
                }
            }
        }
    }
}
