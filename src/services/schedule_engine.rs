use thiserror::Error;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::domain::phase::CatalogError;
use crate::domain::project::{Project, ProjectScale};
use crate::domain::schedule::Schedule;
use crate::services::critical_path::identify_critical_path;
use crate::services::duration_estimator::estimate_base_duration;
use crate::services::milestones::derive_milestones;
use crate::services::phase_scheduler::schedule_phases;
use crate::services::project_yaml::{ProjectYamlError, load_project_from_yaml_file};
use crate::services::weekly_progress::project_weeks;

/// Configuration-integrity faults. The phase catalog cannot produce a schedule.
#[derive(Error, Debug, PartialEq)]
pub enum ScheduleError {
    #[error("invalid phase catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("phase catalog is missing required phase {0}")]
    MissingPhase(String),
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error(transparent)]
    Project(#[from] ProjectYamlError),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// Loads a project file and schedules it.
pub fn generate_schedule_from_yaml_file(
    path: &str,
    config: &EngineConfig,
) -> Result<(Project, Schedule), PlanError> {
    let project = load_project_from_yaml_file(path)?;
    let schedule = generate_schedule(&project.scale, config)?;
    info!(
        project = %project.name,
        total_days = schedule.total_days,
        phases = schedule.phases.len(),
        "scheduled project"
    );
    Ok((project, schedule))
}

/// Builds the full schedule document for one project.
pub fn generate_schedule(
    scale: &ProjectScale,
    config: &EngineConfig,
) -> Result<Schedule, ScheduleError> {
    let base_duration =
        estimate_base_duration(scale.area_sq_ft, scale.floors, scale.complexity, config);
    let catalog = config.catalog();
    let plan = schedule_phases(&catalog, base_duration, scale.requested_days, config)?;

    let milestones = derive_milestones(&plan.phases)?;
    let critical_path = identify_critical_path(&plan.phases, config.placement)?;

    let finish_day = plan
        .phases
        .iter()
        .map(|phase| phase.end_day)
        .max()
        .unwrap_or(0);
    let horizon_days = plan.target_days.max(finish_day);
    let weekly_schedule = project_weeks(&plan.phases, horizon_days);

    let is_aggressive = plan.compression_factor > config.aggressive_threshold;
    debug!(
        base_duration,
        target_days = plan.target_days,
        finish_day,
        is_aggressive,
        "generated schedule"
    );

    Ok(Schedule {
        total_weeks: plan.target_days / 7,
        total_days: plan.target_days,
        base_duration,
        compression_factor: round_to_hundredth(plan.compression_factor),
        phases: plan.phases,
        weekly_schedule,
        milestones,
        critical_path,
        is_aggressive,
    })
}

fn round_to_hundredth(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
