use std::process::ExitCode;

use chrono::NaiveDate;

use crate::commands::base_commands::Commands;
use crate::config::EngineConfig;
use crate::services::gantt_diagram::generate_gantt_diagram;
use crate::services::schedule_engine::generate_schedule_from_yaml_file;

pub fn plot_schedule_command(cmd: Commands, config: &EngineConfig) -> ExitCode {
    if let Commands::PlotSchedule {
        input,
        output,
        start_date,
    } = cmd
    {
        let start_date = match NaiveDate::parse_from_str(&start_date, "%Y-%m-%d") {
            Ok(date) => date,
            Err(e) => {
                eprintln!("Failed to parse start date {start_date}: {e}");
                return ExitCode::FAILURE;
            }
        };
        let (project, schedule) = match generate_schedule_from_yaml_file(&input, config) {
            Ok(plan) => plan,
            Err(e) => {
                eprintln!("Failed to generate schedule: {e}");
                return ExitCode::FAILURE;
            }
        };

        let diagram = match generate_gantt_diagram(&project.name, &schedule, start_date) {
            Ok(diagram) => diagram,
            Err(e) => {
                eprintln!("Failed to generate gantt diagram: {e}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = std::fs::write(&output, diagram) {
            eprintln!("Failed to write gantt diagram: {e}");
            return ExitCode::FAILURE;
        }
        println!("Gantt diagram written to {output}");
    }
    ExitCode::SUCCESS
}
