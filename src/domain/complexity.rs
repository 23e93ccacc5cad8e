use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Finish level of a build. Drives the per-square-foot day factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    #[default]
    Medium,
    Complex,
    Luxury,
}

impl Complexity {
    /// Parses a complexity label. Unknown labels fall back to [`Complexity::Medium`].
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "simple" => Complexity::Simple,
            "medium" => Complexity::Medium,
            "complex" => Complexity::Complex,
            "luxury" => Complexity::Luxury,
            _ => Complexity::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Medium => "medium",
            Complexity::Complex => "complex",
            Complexity::Luxury => "luxury",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Complexity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(Complexity::from_label(&label))
    }
}
