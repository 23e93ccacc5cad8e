use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_schedule_report;
use crate::config::EngineConfig;
use crate::services::schedule_engine::generate_schedule_from_yaml_file;

pub fn report_command(cmd: Commands, config: &EngineConfig) -> ExitCode {
    if let Commands::Report { input } = cmd {
        match generate_schedule_from_yaml_file(&input, config) {
            Ok((project, schedule)) => {
                println!("{}", format_schedule_report(&project.name, &schedule));
            }
            Err(e) => {
                eprintln!("Failed to generate schedule: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
