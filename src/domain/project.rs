use serde::{Deserialize, Serialize};

use crate::domain::complexity::Complexity;

const SQ_FT_PER_SQ_YARD: f64 = 9.0;
const SQ_FT_PER_SQ_METER: f64 = 10.7639;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    #[serde(rename = "sq_ft")]
    SquareFeet,
    #[default]
    #[serde(rename = "sq_yards")]
    SquareYards,
    #[serde(rename = "sq_m")]
    SquareMeters,
}

impl AreaUnit {
    pub fn to_square_feet(&self, value: f64) -> f64 {
        match self {
            AreaUnit::SquareFeet => value,
            AreaUnit::SquareYards => value * SQ_FT_PER_SQ_YARD,
            AreaUnit::SquareMeters => value * SQ_FT_PER_SQ_METER,
        }
    }
}

/// Scale parameters of a single build. Input to the scheduling engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectScale {
    pub area_sq_ft: f64,
    pub floors: u32,
    pub complexity: Complexity,
    /// Requested total duration in days. Zero means unconstrained.
    pub requested_days: u32,
}

impl ProjectScale {
    pub fn new(area_sq_ft: f64, floors: u32, complexity: Complexity, requested_days: u32) -> Self {
        Self {
            area_sq_ft,
            floors,
            complexity,
            requested_days,
        }
    }
}

/// A project as described by the caller, with the scale and the fields that are only
/// forwarded to the advisory text service.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub name: String,
    pub scale: ProjectScale,
    /// Area as the caller entered it, before unit conversion.
    pub area_input: f64,
    pub area_unit: AreaUnit,
    pub budget: f64,
    pub estimated_cost: f64,
}
