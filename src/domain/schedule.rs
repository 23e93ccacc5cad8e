use serde::{Deserialize, Serialize};

/// Status of a generated phase. Every generated schedule is a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    #[default]
    Planned,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseInstance {
    pub id: String,
    pub name: String,
    pub start_day: u32,
    pub end_day: u32,
    pub duration_days: u32,
    pub start_week: u32,
    pub end_week: u32,
    pub dependencies: Vec<String>,
    pub status: PhaseStatus,
}

impl PhaseInstance {
    pub fn new(
        id: &str,
        name: &str,
        start_day: u32,
        duration_days: u32,
        dependencies: Vec<String>,
    ) -> Self {
        let end_day = start_day.saturating_add(duration_days);
        Self {
            id: id.to_string(),
            name: name.to_string(),
            start_day,
            end_day,
            duration_days,
            start_week: week_of_day(start_day),
            end_week: week_of_day(end_day),
            dependencies,
            status: PhaseStatus::Planned,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub day: u32,
    pub week: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseProgress {
    pub name: String,
    /// Share of the phase's duration that falls inside the week, 0-100.
    pub progress: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekBucket {
    pub week: u32,
    pub start_day: u32,
    pub end_day: u32,
    pub active_phases: Vec<PhaseProgress>,
    pub phase_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub total_weeks: u32,
    pub total_days: u32,
    pub base_duration: u32,
    pub compression_factor: f64,
    pub phases: Vec<PhaseInstance>,
    pub weekly_schedule: Vec<WeekBucket>,
    pub milestones: Vec<Milestone>,
    pub critical_path: Vec<String>,
    pub is_aggressive: bool,
}

impl Schedule {
    /// Day on which the last phase ends.
    pub fn finish_day(&self) -> u32 {
        self.phases
            .iter()
            .map(|phase| phase.end_day)
            .max()
            .unwrap_or(0)
    }
}

/// 1-based week number containing `day`.
pub fn week_of_day(day: u32) -> u32 {
    day / 7 + 1
}
