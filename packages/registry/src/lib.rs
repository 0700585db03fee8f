pub mod config;
pub mod models;

mod age;
pub use age::age_in_years;

mod draft;
pub use draft::{Draft, Field};

mod roster;
pub use roster::Roster;

pub use config::RollcallConfig;
pub use models::Person;
