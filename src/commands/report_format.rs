use crate::domain::schedule::{PhaseInstance, Schedule};

pub fn format_schedule_report(project_name: &str, schedule: &Schedule) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Schedule Report: {project_name}"));
    lines.push(format!("Base duration: {} days", schedule.base_duration));
    lines.push(format!(
        "Target duration: {} days ({} weeks)",
        schedule.total_days, schedule.total_weeks
    ));
    lines.push(format!(
        "Compression factor: {:.2}{}",
        schedule.compression_factor,
        if schedule.is_aggressive {
            " (aggressive)"
        } else {
            ""
        }
    ));
    lines.push(String::new());
    lines.push("Phases:".to_string());
    lines.push("Phase | Start | End | Days | Weeks".to_string());
    lines.push("------|-------|-----|------|------".to_string());
    lines.extend(schedule.phases.iter().map(format_phase_row));
    lines.push(String::new());
    lines.push("Milestones:".to_string());
    for milestone in &schedule.milestones {
        lines.push(format!(
            "- {}: day {} (week {})",
            milestone.name, milestone.day, milestone.week
        ));
    }
    lines.push(String::new());
    lines.push(format!("Critical path: {}", schedule.critical_path.join(" -> ")));

    lines.join("\n")
}

fn format_phase_row(phase: &PhaseInstance) -> String {
    format!(
        "{} | {} | {} | {} | {}-{}",
        phase.name,
        phase.start_day,
        phase.end_day,
        phase.duration_days,
        phase.start_week,
        phase.end_week
    )
}
