use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::config::EngineConfig;
use crate::services::phase_flow_diagram::generate_phase_markdown;

pub fn plot_phases_command(cmd: Commands, config: &EngineConfig) -> ExitCode {
    if let Commands::PlotPhases { output } = cmd {
        let catalog = config.catalog();
        if let Err(e) = catalog.validate(false) {
            eprintln!("Failed to validate phase catalog: {e}");
            return ExitCode::FAILURE;
        }
        if let Err(e) = std::fs::write(&output, generate_phase_markdown(&catalog)) {
            eprintln!("Failed to write phase diagram: {e}");
            return ExitCode::FAILURE;
        }
        println!("Phase diagram written to {output}");
    }
    ExitCode::SUCCESS
}
