use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::config::EngineConfig;
use crate::services::advisory::{
    Advisor, AdvisoryContext, FALLBACK_ANALYSIS, OllamaAdvisor, StaticAdvisor, analyze_plan,
};
use crate::services::schedule_engine::generate_schedule_from_yaml_file;

pub fn advise_command(cmd: Commands, config: &EngineConfig) -> ExitCode {
    if let Commands::Advise {
        input,
        output,
        advisor_url,
        model,
        offline,
    } = cmd
    {
        let (project, schedule) = match generate_schedule_from_yaml_file(&input, config) {
            Ok(plan) => plan,
            Err(e) => {
                eprintln!("Failed to generate schedule: {e}");
                return ExitCode::FAILURE;
            }
        };

        let advisor: Box<dyn Advisor> = if offline {
            Box::new(StaticAdvisor {
                text: FALLBACK_ANALYSIS.to_string(),
            })
        } else {
            let mut advisor_config = config.advisor.clone();
            if let Some(url) = advisor_url {
                advisor_config.base_url = url;
            }
            if let Some(model) = model {
                advisor_config.model = model;
            }
            match OllamaAdvisor::new(advisor_config) {
                Ok(advisor) => Box::new(advisor),
                Err(e) => {
                    eprintln!("Failed to create advisor client: {e}");
                    return ExitCode::FAILURE;
                }
            }
        };

        let context = AdvisoryContext::from_plan(&project, &schedule);
        let mut report = analyze_plan(advisor.as_ref(), &context);
        if offline {
            report.ai_available = false;
        }

        let yaml = match serde_yaml::to_string(&report) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize advisory report: {e}");
                return ExitCode::FAILURE;
            }
        };

        match output {
            Some(path) => {
                if let Err(e) = std::fs::write(&path, yaml) {
                    eprintln!("Failed to write advisory report: {e}");
                    return ExitCode::FAILURE;
                }
                println!("Advisory report written to {path}");
            }
            None => print!("{yaml}"),
        }
    }
    ExitCode::SUCCESS
}
