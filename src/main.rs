use std::process::ExitCode;

use buildplan::commands::advise_cmd::advise_command;
use buildplan::commands::base_commands::{CliArgs, Commands};
use buildplan::commands::completions_cmd::completions_command;
use buildplan::commands::plot_phases_cmd::plot_phases_command;
use buildplan::commands::plot_progress_cmd::plot_progress_command;
use buildplan::commands::plot_schedule_cmd::plot_schedule_command;
use buildplan::commands::report_cmd::report_command;
use buildplan::commands::schedule_cmd::schedule_command;
use buildplan::config::load_config_if_provided;
use buildplan::logging::init_tracing;
use clap::Parser;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    if let Commands::Completions { .. } = args.command {
        completions_command(args.command);
        return ExitCode::SUCCESS;
    }

    let config = match load_config_if_provided(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load engine config: {e}");
            return ExitCode::FAILURE;
        }
    };

    match args.command {
        cmd @ Commands::Schedule { .. } => schedule_command(cmd, &config),
        cmd @ Commands::Report { .. } => report_command(cmd, &config),
        cmd @ Commands::PlotSchedule { .. } => plot_schedule_command(cmd, &config),
        cmd @ Commands::PlotPhases { .. } => plot_phases_command(cmd, &config),
        cmd @ Commands::PlotProgress { .. } => plot_progress_command(cmd, &config),
        cmd @ Commands::Advise { .. } => advise_command(cmd, &config),
        Commands::Completions { .. } => ExitCode::SUCCESS,
    }
}
