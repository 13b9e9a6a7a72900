//! Game setup and scoring.
//!
//! - [`settings::GameSettings`]: validated player choices for one game
//! - [`distribution::allocate`]: split a question count across sub-categories
//! - [`fetch_plan::plan_fetches`]: turn settings into fetch descriptors
//! - [`stats::SessionStats`]: running score of one playthrough

pub mod distribution;
pub mod fetch_plan;
pub mod settings;
pub mod stats;
