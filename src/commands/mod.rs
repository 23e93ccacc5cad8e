pub mod advise_cmd;
pub mod base_commands;
pub mod completions_cmd;
pub mod plot_phases_cmd;
pub mod plot_progress_cmd;
pub mod plot_schedule_cmd;
pub mod report_cmd;
pub mod report_format;
pub mod schedule_cmd;
