use std::io;

use clap::CommandFactory;
use clap_complete::generate;

use crate::commands::base_commands::{CliArgs, Commands};

pub fn completions_command(cmd: Commands) {
    if let Commands::Completions { shell } = cmd {
        let mut command = CliArgs::command();
        generate(shell, &mut command, "buildplan", &mut io::stdout());
    }
}
