//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod state;
pub use state::{use_config, use_roster};

mod registration_form;
pub use registration_form::RegistrationForm;

mod records_table;
pub use records_table::RecordsTable;
