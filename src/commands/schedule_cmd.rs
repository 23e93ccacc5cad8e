use std::fs::File;
use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::config::EngineConfig;
use crate::services::schedule_engine::generate_schedule_from_yaml_file;
use crate::services::schedule_yaml::serialize_schedule;

pub fn schedule_command(cmd: Commands, config: &EngineConfig) -> ExitCode {
    if let Commands::Schedule {
        input,
        output,
        format,
    } = cmd
    {
        let (_, schedule) = match generate_schedule_from_yaml_file(&input, config) {
            Ok(plan) => plan,
            Err(e) => {
                eprintln!("Failed to generate schedule: {e}");
                return ExitCode::FAILURE;
            }
        };

        let mut file = match File::create(&output) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Failed to create output file: {e}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = serialize_schedule(&mut file, &schedule, format) {
            eprintln!("Failed to write schedule: {e}");
            return ExitCode::FAILURE;
        }

        println!(
            "Schedule of {} days ({} phases) written to {output}",
            schedule.total_days,
            schedule.phases.len()
        );
        if schedule.is_aggressive {
            println!(
                "Warning: requested timeline compresses the base duration by a factor of {:.2}",
                schedule.compression_factor
            );
        }
    }
    ExitCode::SUCCESS
}
