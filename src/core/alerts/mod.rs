// Roll notification module.
//
// Architecture:
// - model.rs: Match reasons, match results and notifications
// - triggers.rs: Preference matching for a classified roll
// - engine.rs: Decision step and the full per-message pipeline

pub mod engine;
pub mod model;
pub mod triggers;
