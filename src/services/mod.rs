pub mod advisory;
pub mod critical_path;
pub mod duration_estimator;
pub mod gantt_diagram;
pub mod milestones;
pub mod phase_flow_diagram;
pub mod phase_scheduler;
pub mod progress_plot;
pub mod project_yaml;
pub mod schedule_engine;
pub mod schedule_yaml;
pub mod weekly_progress;
