use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::AdvisorConfig;
use crate::domain::project::Project;
use crate::domain::schedule::Schedule;

pub const FALLBACK_ANALYSIS: &str =
    "AI analysis unavailable. Proceeding with standard estimation.";

const SYSTEM_PROMPT: &str = "You are an expert construction project manager and civil engineer \
with 25+ years of experience in residential construction. Give practical, specific advice in \
plain language, structured as short bullet points.";

#[derive(Error, Debug)]
pub enum AdvisoryError {
    #[error("failed to build http client: {0}")]
    Client(reqwest::Error),
    #[error("text generation request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("text generation service returned status {0}")]
    Status(u16),
}

/// Inputs forwarded to the text-generation service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisoryContext {
    pub project_name: String,
    pub area_sq_ft: f64,
    pub floors: u32,
    pub complexity: String,
    pub budget: f64,
    pub estimated_cost: f64,
    pub requested_days: u32,
    pub recommended_weeks: u32,
    pub is_aggressive: bool,
}

impl AdvisoryContext {
    pub fn from_plan(project: &Project, schedule: &Schedule) -> Self {
        Self {
            project_name: project.name.clone(),
            area_sq_ft: project.scale.area_sq_ft,
            floors: project.scale.floors,
            complexity: project.scale.complexity.to_string(),
            budget: project.budget,
            estimated_cost: project.estimated_cost,
            requested_days: project.scale.requested_days,
            recommended_weeks: schedule.total_weeks,
            is_aggressive: schedule.is_aggressive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineStatus {
    NotSpecified,
    Relaxed,
    Realistic,
    Aggressive,
    Unrealistic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    NotSpecified,
    Comfortable,
    Adequate,
    Tight,
    Insufficient,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisoryReport {
    pub analysis: String,
    pub ai_available: bool,
    pub feasibility_score: u32,
    pub budget_status: BudgetStatus,
    pub timeline_status: TimelineStatus,
}

/// Turns a prompt into narrative text.
pub trait Advisor {
    fn advise(&self, system: &str, prompt: &str) -> Result<String, AdvisoryError>;
}

/// Ollama-compatible `/api/generate` client.
pub struct OllamaAdvisor {
    config: AdvisorConfig,
    client: Client,
}

impl OllamaAdvisor {
    pub fn new(config: AdvisorConfig) -> Result<Self, AdvisoryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(AdvisoryError::Client)?;
        Ok(Self { config, client })
    }
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
    top_p: f32,
    top_k: u32,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl Advisor for OllamaAdvisor {
    fn advise(&self, system: &str, prompt: &str) -> Result<String, AdvisoryError> {
        let url = format!("{}/api/generate", self.config.base_url.trim_end_matches('/'));
        let body = GenerateRequest {
            model: &self.config.model,
            prompt,
            system,
            stream: false,
            options: GenerateOptions {
                temperature: self.config.temperature,
                top_p: 0.9,
                top_k: 40,
            },
        };

        debug!(%url, model = %self.config.model, "requesting plan analysis");
        let response = self.client.post(&url).json(&body).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(AdvisoryError::Status(status.as_u16()));
        }
        let payload: GenerateResponse = response.json()?;
        Ok(payload.response.trim().to_string())
    }
}

/// Returns the same text for every prompt.
pub struct StaticAdvisor {
    pub text: String,
}

impl Advisor for StaticAdvisor {
    fn advise(&self, _system: &str, _prompt: &str) -> Result<String, AdvisoryError> {
        Ok(self.text.clone())
    }
}

pub fn build_plan_prompt(context: &AdvisoryContext) -> String {
    let requested_weeks = context.requested_days as f64 / 7.0;
    let budget_line = if context.budget > 0.0 {
        format!("{:.0}", context.budget)
    } else {
        "not specified".to_string()
    };
    let cost_line = if context.estimated_cost > 0.0 {
        format!("{:.0}", context.estimated_cost)
    } else {
        "not available".to_string()
    };
    let timeline_line = if context.requested_days > 0 {
        format!("{} days ({requested_weeks:.0} weeks)", context.requested_days)
    } else {
        "not specified".to_string()
    };

    let mut lines = vec![
        format!(
            "You're reviewing the construction plan \"{}\". Provide a concise, friendly analysis.",
            context.project_name
        ),
        String::new(),
        "PROJECT OVERVIEW:".to_string(),
        format!(
            "- Area: {:.0} sq ft across {} floor(s)",
            context.area_sq_ft, context.floors
        ),
        format!("- Complexity level: {}", context.complexity.to_uppercase()),
        format!("- Estimated cost: {cost_line}"),
        format!("- Client budget: {budget_line}"),
        format!("- Target timeline: {timeline_line}"),
        format!("- Recommended duration: {} weeks", context.recommended_weeks),
    ];
    if context.is_aggressive {
        lines.push("- The requested timeline compresses the schedule aggressively.".to_string());
    }
    lines.extend([
        String::new(),
        "Cover: feasibility verdict, timeline assessment, top 3 risks and 3-5 recommendations."
            .to_string(),
        "Keep it practical and under 350 words.".to_string(),
    ]);
    lines.join("\n")
}

/// Compares a requested timeline with the recommended one.
pub fn assess_timeline(requested_days: u32, recommended_weeks: u32) -> TimelineStatus {
    if requested_days == 0 {
        return TimelineStatus::NotSpecified;
    }
    let recommended_days = f64::from(recommended_weeks) * 7.0;
    if recommended_days <= 0.0 {
        return TimelineStatus::Relaxed;
    }

    let ratio = f64::from(requested_days) / recommended_days;
    if ratio >= 1.2 {
        TimelineStatus::Relaxed
    } else if ratio >= 0.9 {
        TimelineStatus::Realistic
    } else if ratio >= 0.7 {
        TimelineStatus::Aggressive
    } else {
        TimelineStatus::Unrealistic
    }
}

/// Budget over estimated cost, when both are known.
fn budget_ratio(budget: f64, estimated_cost: f64) -> Option<f64> {
    (budget > 0.0 && estimated_cost > 0.0).then(|| budget / estimated_cost)
}

/// Compares the client budget with the estimated cost. Without an estimate the
/// budget cannot be judged and counts as not specified.
pub fn assess_budget(budget: f64, estimated_cost: f64) -> BudgetStatus {
    match budget_ratio(budget, estimated_cost) {
        None => BudgetStatus::NotSpecified,
        Some(ratio) if ratio >= 1.2 => BudgetStatus::Comfortable,
        Some(ratio) if ratio >= 1.0 => BudgetStatus::Adequate,
        Some(ratio) if ratio >= 0.9 => BudgetStatus::Tight,
        Some(_) => BudgetStatus::Insufficient,
    }
}

fn budget_penalty(budget: f64, estimated_cost: f64) -> u32 {
    match budget_ratio(budget, estimated_cost) {
        Some(ratio) if ratio < 0.9 => 30,
        Some(ratio) if ratio < 1.0 => 15,
        _ => 0,
    }
}

fn timeline_penalty(requested_days: u32, recommended_weeks: u32) -> u32 {
    if requested_days == 0 || recommended_weeks == 0 {
        return 0;
    }
    let ratio = (f64::from(requested_days) / 7.0) / f64::from(recommended_weeks);
    if ratio < 0.7 {
        25
    } else if ratio < 0.9 {
        10
    } else {
        0
    }
}

/// Feasibility score, 0-100: budget shortfall costs up to 30 points, a compressed
/// timeline up to 25.
pub fn feasibility_score(context: &AdvisoryContext) -> u32 {
    let penalty = budget_penalty(context.budget, context.estimated_cost)
        + timeline_penalty(context.requested_days, context.recommended_weeks);
    100u32.saturating_sub(penalty)
}

/// Asks the advisor for narrative commentary. Never fails: an unreachable or
/// misbehaving service yields the fallback text.
pub fn analyze_plan(advisor: &dyn Advisor, context: &AdvisoryContext) -> AdvisoryReport {
    let prompt = build_plan_prompt(context);
    let (analysis, ai_available) = match advisor.advise(SYSTEM_PROMPT, &prompt) {
        Ok(text) if !text.trim().is_empty() => (text, true),
        Ok(_) => {
            warn!("text generation service returned an empty analysis");
            (FALLBACK_ANALYSIS.to_string(), false)
        }
        Err(e) => {
            warn!(error = %e, "plan analysis failed, using fallback");
            (FALLBACK_ANALYSIS.to_string(), false)
        }
    };

    AdvisoryReport {
        analysis,
        ai_available,
        feasibility_score: feasibility_score(context),
        budget_status: assess_budget(context.budget, context.estimated_cost),
        timeline_status: assess_timeline(context.requested_days, context.recommended_weeks),
    }
}
