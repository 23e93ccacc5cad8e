use crate::domain::phase::{
    ELECTRICAL_PLUMBING, EXCAVATION_FOUNDATION, PAINTING_FINISHING, ROOFING, STRUCTURE_MASONRY,
};
use crate::domain::schedule::{Milestone, PhaseInstance};
use crate::services::schedule_engine::ScheduleError;

/// Checkpoints in report order, each reached when the named phase ends.
pub const MILESTONE_PHASES: [(&str, &str); 5] = [
    ("Foundation Complete", EXCAVATION_FOUNDATION),
    ("Structure Complete", STRUCTURE_MASONRY),
    ("Roofing Complete", ROOFING),
    ("MEP Work Complete", ELECTRICAL_PLUMBING),
    ("Project Completion", PAINTING_FINISHING),
];

pub fn derive_milestones(phases: &[PhaseInstance]) -> Result<Vec<Milestone>, ScheduleError> {
    MILESTONE_PHASES
        .iter()
        .map(|(name, phase_id)| -> Result<Milestone, ScheduleError> {
            let phase = phases
                .iter()
                .find(|phase| phase.id == *phase_id)
                .ok_or_else(|| ScheduleError::MissingPhase(phase_id.to_string()))?;
            Ok(Milestone {
                name: name.to_string(),
                day: phase.end_day,
                week: phase.end_week,
            })
        })
        .collect()
}
