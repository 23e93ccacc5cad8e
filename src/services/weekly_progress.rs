use crate::domain::schedule::{PhaseInstance, PhaseProgress, WeekBucket};

/// Splits `[0, horizon_days)` into 7-day windows and reports, per window, the phases
/// running in it and the share of each phase's duration that falls inside.
///
/// There are `horizon_days / 7 + 1` weeks. The last week ends at `horizon_days`.
/// Phases without any day inside a window are not listed for it.
pub fn project_weeks(phases: &[PhaseInstance], horizon_days: u32) -> Vec<WeekBucket> {
    let total_weeks = horizon_days / 7 + 1;

    (1..=total_weeks)
        .map(|week| {
            let (week_start, week_end) = week_window(week);

            let active_phases: Vec<PhaseProgress> = phases
                .iter()
                .filter(|phase| overlap_days(phase, week_start, week_end) > 0)
                .map(|phase| PhaseProgress {
                    name: phase.name.clone(),
                    progress: phase_progress(phase, week_start, week_end),
                })
                .collect();

            WeekBucket {
                week,
                start_day: week_start,
                end_day: week_end.min(horizon_days),
                phase_count: active_phases.len(),
                active_phases,
            }
        })
        .collect()
}

/// Day range `[start, end)` of the 1-based `week`, saturating at `u32::MAX`.
pub fn week_window(week: u32) -> (u32, u32) {
    let week_start = week.saturating_sub(1).saturating_mul(7);
    (week_start, week.saturating_mul(7))
}

/// Days of `phase` inside `[window_start, window_end)`.
pub fn overlap_days(phase: &PhaseInstance, window_start: u32, window_end: u32) -> u32 {
    let overlap_start = phase.start_day.max(window_start);
    let overlap_end = phase.end_day.min(window_end);
    overlap_end.saturating_sub(overlap_start)
}

/// Percentage of the phase completed inside the window, rounded to one decimal.
/// Zero-length phases report 0.
pub fn phase_progress(phase: &PhaseInstance, window_start: u32, window_end: u32) -> f64 {
    if phase.duration_days == 0 {
        return 0.0;
    }
    let overlap = overlap_days(phase, window_start, window_end) as f64;
    let progress = overlap / phase.duration_days as f64 * 100.0;
    round_to_tenth(progress.clamp(0.0, 100.0))
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
