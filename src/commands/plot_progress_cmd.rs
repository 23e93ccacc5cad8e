use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::config::EngineConfig;
use crate::services::progress_plot::write_weekly_load_png;
use crate::services::schedule_engine::generate_schedule_from_yaml_file;

pub fn plot_progress_command(cmd: Commands, config: &EngineConfig) -> ExitCode {
    if let Commands::PlotProgress { input, output } = cmd {
        let (_, schedule) = match generate_schedule_from_yaml_file(&input, config) {
            Ok(plan) => plan,
            Err(e) => {
                eprintln!("Failed to generate schedule: {e}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = write_weekly_load_png(&output, &schedule) {
            eprintln!("Failed to write weekly load chart: {e}");
            return ExitCode::FAILURE;
        }
        println!("Weekly load chart written to {output}");
    }
    ExitCode::SUCCESS
}
