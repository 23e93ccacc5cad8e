use crate::config::EngineConfig;
use crate::domain::complexity::Complexity;
use crate::domain::project::ProjectScale;
use crate::domain::schedule::{PhaseInstance, Schedule};
use crate::services::schedule_engine::generate_schedule;

pub fn build_schedule(
    area_sq_ft: f64,
    floors: u32,
    complexity: Complexity,
    requested_days: u32,
) -> Schedule {
    let scale = ProjectScale::new(area_sq_ft, floors, complexity, requested_days);
    generate_schedule(&scale, &EngineConfig::default()).unwrap()
}

/// Phase with the same id and display name and no prerequisites.
pub fn build_phase(name: &str, start_day: u32, duration_days: u32) -> PhaseInstance {
    PhaseInstance::new(name, name, start_day, duration_days, vec![])
}
