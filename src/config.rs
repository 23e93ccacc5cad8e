use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::complexity::Complexity;
use crate::domain::phase::{PhaseCatalog, PhaseTemplate};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
}

/// How phases are placed on the timeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementPolicy {
    /// One phase at a time, in catalog order.
    #[default]
    Sequential,
    /// Each phase starts as soon as all of its prerequisites have ended.
    DependencyAware,
}

/// How phase durations shrink when the requested timeline is shorter than the base duration.
///
/// Both modes keep every compressed phase at `min_phase_days` or longer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompressionMode {
    /// Phases take their share of the requested duration, so the durations add up to
    /// the requested target.
    #[default]
    TargetShare,
    /// Legacy estimator rule: phases take their share of the requested duration,
    /// divided once more by the compression factor. Compressed schedules then finish well
    /// ahead of the requested target.
    Rescale,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexityFactors {
    pub simple: f64,
    pub medium: f64,
    pub complex: f64,
    pub luxury: f64,
}

impl Default for ComplexityFactors {
    fn default() -> Self {
        Self {
            simple: 0.4,
            medium: 0.5,
            complex: 0.65,
            luxury: 0.85,
        }
    }
}

impl ComplexityFactors {
    /// Days of work per square foot per floor.
    pub fn factor(&self, complexity: Complexity) -> f64 {
        match complexity {
            Complexity::Simple => self.simple,
            Complexity::Medium => self.medium,
            Complexity::Complex => self.complex,
            Complexity::Luxury => self.luxury,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub temperature: f32,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "granite3.1-dense:2b".to_string(),
            timeout_secs: 30,
            temperature: 0.7,
        }
    }
}

/// Constants and policies for one engine run. Passed explicitly into every
/// scheduling function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub min_project_days: u32,
    pub min_phase_days: u32,
    /// Extra duration per floor above the first, as a fraction.
    pub floor_increment: f64,
    pub aggressive_threshold: f64,
    pub complexity_factors: ComplexityFactors,
    pub placement: PlacementPolicy,
    pub compression: CompressionMode,
    pub phases: Option<Vec<PhaseTemplate>>,
    pub advisor: AdvisorConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_project_days: 90,
            min_phase_days: 5,
            floor_increment: 0.15,
            aggressive_threshold: 1.2,
            complexity_factors: ComplexityFactors::default(),
            placement: PlacementPolicy::default(),
            compression: CompressionMode::default(),
            phases: None,
            advisor: AdvisorConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// The configured phase catalog, or the standard one.
    pub fn catalog(&self) -> PhaseCatalog {
        match &self.phases {
            Some(phases) => PhaseCatalog::new(phases.clone()),
            None => PhaseCatalog::standard(),
        }
    }
}

pub fn load_config_if_provided(path: Option<&str>) -> Result<EngineConfig, ConfigError> {
    match path {
        Some(path) => EngineConfig::from_yaml_file(path),
        None => Ok(EngineConfig::default()),
    }
}
