//! Game rules acting on `GameState`: counters, wing unlocks, tasks and the flask.

pub mod economy;
pub mod flask;
pub mod tasks;
pub mod wings;
