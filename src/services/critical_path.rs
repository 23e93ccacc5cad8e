use crate::config::PlacementPolicy;
use crate::domain::phase::{
    ELECTRICAL_PLUMBING, EXCAVATION_FOUNDATION, PAINTING_FINISHING, PLASTERING, ROOFING,
    STRUCTURE_MASONRY,
};
use crate::domain::schedule::PhaseInstance;
use crate::services::schedule_engine::ScheduleError;

/// Load-bearing chain of a sequential build, in schedule order.
pub const DESIGNATED_CRITICAL_PHASES: [&str; 6] = [
    EXCAVATION_FOUNDATION,
    STRUCTURE_MASONRY,
    ROOFING,
    PLASTERING,
    ELECTRICAL_PLUMBING,
    PAINTING_FINISHING,
];

/// Display names of the phases that determine the overall project length.
pub fn identify_critical_path(
    phases: &[PhaseInstance],
    placement: PlacementPolicy,
) -> Result<Vec<String>, ScheduleError> {
    match placement {
        PlacementPolicy::Sequential => designated_path(phases),
        PlacementPolicy::DependencyAware => Ok(longest_chain(phases)),
    }
}

fn designated_path(phases: &[PhaseInstance]) -> Result<Vec<String>, ScheduleError> {
    let mut critical: Vec<&PhaseInstance> = DESIGNATED_CRITICAL_PHASES
        .iter()
        .map(|id| {
            phases
                .iter()
                .find(|phase| phase.id == *id)
                .ok_or_else(|| ScheduleError::MissingPhase(id.to_string()))
        })
        .collect::<Result<_, _>>()?;

    critical.sort_by_key(|phase| phase.start_day);
    Ok(critical.into_iter().map(|phase| phase.name.clone()).collect())
}

/// Walks back from the latest-finishing phase through the prerequisite that gates
/// each start. Ties go to the earlier catalog entry.
fn longest_chain(phases: &[PhaseInstance]) -> Vec<String> {
    let Some(mut current) = phases
        .iter()
        .rev()
        .max_by_key(|phase| phase.end_day)
    else {
        return Vec::new();
    };

    let mut chain = vec![current];
    loop {
        let gating = phases.iter().find(|phase| {
            current.dependencies.contains(&phase.id) && phase.end_day == current.start_day
        });
        match gating {
            Some(phase) => {
                chain.push(phase);
                current = phase;
            }
            None => break,
        }
    }

    chain.reverse();
    chain.into_iter().map(|phase| phase.name.clone()).collect()
}
