use chrono::{Days, NaiveDate};
use thiserror::Error;

use crate::domain::schedule::Schedule;

#[derive(Error, Debug)]
pub enum GanttDiagramError {
    #[error("schedule has no phases")]
    EmptySchedule,
    #[error("day {day} after {start_date} is outside the supported calendar range")]
    DateOutOfRange { start_date: NaiveDate, day: u32 },
}

/// Renders the schedule as a Mermaid gantt chart anchored at `start_date`.
///
/// Phases on the critical path are tagged `crit`; milestones become zero-length
/// `milestone` rows.
pub fn generate_gantt_diagram(
    project_name: &str,
    schedule: &Schedule,
    start_date: NaiveDate,
) -> Result<String, GanttDiagramError> {
    if schedule.phases.is_empty() {
        return Err(GanttDiagramError::EmptySchedule);
    }

    let mut lines = Vec::new();
    lines.push("".to_string());
    lines.push(format!("# {project_name} Timeline"));
    lines.push("```mermaid".to_string());
    lines.push("gantt".to_string());
    lines.push("    dateFormat  DD-MM-YYYY".to_string());
    lines.push("    section Phases".to_string());

    for phase in &schedule.phases {
        let tag = if schedule.critical_path.contains(&phase.name) {
            "crit, "
        } else {
            ""
        };
        let start = add_days(start_date, phase.start_day)?;
        let end = add_days(start_date, phase.end_day)?;
        lines.push(format!(
            "    {} :{tag}{}, {}, {}",
            phase.name,
            phase.id,
            start.format("%d-%m-%Y"),
            end.format("%d-%m-%Y")
        ));
    }

    if !schedule.milestones.is_empty() {
        lines.push("    section Milestones".to_string());
        for (idx, milestone) in schedule.milestones.iter().enumerate() {
            let day = add_days(start_date, milestone.day)?;
            lines.push(format!(
                "    {} :milestone, m{}, {}, 0d",
                milestone.name,
                idx + 1,
                day.format("%d-%m-%Y")
            ));
        }
    }
    lines.push("```".to_string());

    Ok(lines.join("\n"))
}

fn add_days(start_date: NaiveDate, day: u32) -> Result<NaiveDate, GanttDiagramError> {
    start_date
        .checked_add_days(Days::new(u64::from(day)))
        .ok_or(GanttDiagramError::DateOutOfRange { start_date, day })
}
