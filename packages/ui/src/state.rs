//! Shared application state, provided as context signals.
//!
//! Platform `App` components install the providers; views and components
//! read and mutate the signals through these hooks. All state is transient
//! and lost on reload.

use dioxus::prelude::*;
use registry::{RollcallConfig, Roster};

/// The roster of registered people for this session.
pub fn use_roster() -> Signal<Roster> {
    use_context::<Signal<Roster>>()
}

/// Display configuration for this session.
pub fn use_config() -> Signal<RollcallConfig> {
    use_context::<Signal<RollcallConfig>>()
}
