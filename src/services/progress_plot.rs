use plotters::prelude::*;
use thiserror::Error;

use crate::domain::schedule::Schedule;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("schedule has no weeks to plot")]
    EmptySchedule,
    #[error("failed to render weekly load chart: {0}")]
    Render(String),
}

/// Writes a bar chart with one bar per week showing how many phases are active.
pub fn write_weekly_load_png(output_path: &str, schedule: &Schedule) -> Result<(), PlotError> {
    let counts: Vec<(u32, usize)> = schedule
        .weekly_schedule
        .iter()
        .map(|week| (week.week, week.phase_count))
        .collect();
    if counts.is_empty() {
        return Err(PlotError::EmptySchedule);
    }
    render_weekly_load_png(output_path, &counts)
}

fn render_weekly_load_png(output_path: &str, counts: &[(u32, usize)]) -> Result<(), PlotError> {
    let max_week = counts.iter().map(|(week, _)| *week).max().unwrap_or(1);
    let max_count = counts.iter().map(|(_, count)| *count).max().unwrap_or(1);

    let root = BitMapBackend::new(output_path, (1000, 500)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Active Phases per Week", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(1..(max_week + 1), 0..(max_count + 1))
        .map_err(|e| PlotError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Week")
        .y_desc("Active phases")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .draw()
        .map_err(|e| PlotError::Render(e.to_string()))?;

    let bar_color = RGBColor(204, 122, 30);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(counts.iter().map(|(week, count)| {
            Rectangle::new([(*week, 0), (*week + 1, *count)], bar_style)
        }))
        .map_err(|e| PlotError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Render(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_without_weeks_is_rejected() {
        let schedule = Schedule {
            total_weeks: 0,
            total_days: 0,
            base_duration: 0,
            compression_factor: 1.0,
            phases: vec![],
            weekly_schedule: vec![],
            milestones: vec![],
            critical_path: vec![],
            is_aggressive: false,
        };
        let error = write_weekly_load_png("unused.png", &schedule).unwrap_err();
        assert!(matches!(error, PlotError::EmptySchedule));
    }
}
