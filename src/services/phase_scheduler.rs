use tracing::debug;

use crate::config::{CompressionMode, EngineConfig, PlacementPolicy};
use crate::domain::phase::PhaseCatalog;
use crate::domain::schedule::PhaseInstance;
use crate::services::schedule_engine::ScheduleError;

/// Phase timeline for one target duration.
#[derive(Debug, Clone, PartialEq)]
pub struct PhasePlan {
    pub phases: Vec<PhaseInstance>,
    pub target_days: u32,
    pub compression_factor: f64,
}

/// Target duration and compression factor for a requested timeline.
///
/// A requested duration of zero, or one at least as long as the base duration,
/// leaves the base duration untouched.
pub fn resolve_target(base_days: u32, requested_days: u32) -> (u32, f64) {
    if requested_days == 0 || requested_days >= base_days {
        (base_days, 1.0)
    } else {
        (
            requested_days,
            base_days as f64 / requested_days as f64,
        )
    }
}

/// Allocates the target duration across the catalog's phases and places them on the
/// timeline according to the configured placement policy.
pub fn schedule_phases(
    catalog: &PhaseCatalog,
    base_days: u32,
    requested_days: u32,
    config: &EngineConfig,
) -> Result<PhasePlan, ScheduleError> {
    catalog.validate(config.placement == PlacementPolicy::Sequential)?;

    let (target_days, compression_factor) = resolve_target(base_days, requested_days);
    let durations: Vec<u32> = catalog
        .phases
        .iter()
        .map(|phase| phase_duration(target_days, phase.duration_share, compression_factor, config))
        .collect();

    let phases = match config.placement {
        PlacementPolicy::Sequential => place_sequential(catalog, &durations),
        PlacementPolicy::DependencyAware => place_dependency_aware(catalog, &durations)?,
    };

    debug!(
        base_days,
        requested_days,
        target_days,
        compression_factor,
        placement = ?config.placement,
        "scheduled {} phases",
        phases.len()
    );

    Ok(PhasePlan {
        phases,
        target_days,
        compression_factor,
    })
}

fn phase_duration(
    target_days: u32,
    duration_share: f64,
    compression_factor: f64,
    config: &EngineConfig,
) -> u32 {
    let share_days = (target_days as f64 * duration_share).floor().max(0.0) as u32;
    if compression_factor <= 1.0 {
        return share_days;
    }

    match config.compression {
        CompressionMode::TargetShare => share_days.max(config.min_phase_days),
        CompressionMode::Rescale => {
            let rescaled = (share_days as f64 / compression_factor).floor() as u32;
            rescaled.max(config.min_phase_days)
        }
    }
}

fn place_sequential(catalog: &PhaseCatalog, durations: &[u32]) -> Vec<PhaseInstance> {
    let mut current_day = 0;
    let mut phases = Vec::with_capacity(catalog.len());

    for (template, duration) in catalog.phases.iter().zip(durations) {
        let phase = PhaseInstance::new(
            &template.id,
            &template.display_name(),
            current_day,
            *duration,
            template.dependencies.clone(),
        );
        current_day = phase.end_day;
        phases.push(phase);
    }

    phases
}

fn place_dependency_aware(
    catalog: &PhaseCatalog,
    durations: &[u32],
) -> Result<Vec<PhaseInstance>, ScheduleError> {
    let order = catalog.topological_order()?;
    let mut placed: Vec<Option<PhaseInstance>> = vec![None; catalog.len()];

    for idx in order {
        let template = &catalog.phases[idx];
        let start_day = template
            .dependencies
            .iter()
            .filter_map(|dep| placed.iter().flatten().find(|phase| &phase.id == dep))
            .map(|phase| phase.end_day)
            .max()
            .unwrap_or(0);

        placed[idx] = Some(PhaseInstance::new(
            &template.id,
            &template.display_name(),
            start_day,
            durations[idx],
            template.dependencies.clone(),
        ));
    }

    Ok(placed.into_iter().flatten().collect())
}
