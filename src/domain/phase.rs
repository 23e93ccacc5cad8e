use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EXCAVATION_FOUNDATION: &str = "excavation_foundation";
pub const STRUCTURE_MASONRY: &str = "structure_masonry";
pub const ROOFING: &str = "roofing";
pub const PLASTERING: &str = "plastering";
pub const ELECTRICAL_PLUMBING: &str = "electrical_plumbing";
pub const FLOORING_TILING: &str = "flooring_tiling";
pub const CARPENTRY_DOORS_WINDOWS: &str = "carpentry_doors_windows";
pub const PAINTING_FINISHING: &str = "painting_finishing";

const SHARE_TOLERANCE: f64 = 1e-3;

#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("phase catalog is empty")]
    Empty,
    #[error("duplicate phase id: {0}")]
    DuplicatePhase(String),
    #[error("dependency {dependency} not found for phase {phase}")]
    UnknownDependency { phase: String, dependency: String },
    #[error("phase {phase} is declared before its prerequisite {dependency}")]
    DependencyOutOfOrder { phase: String, dependency: String },
    #[error("phase dependency graph has a cycle")]
    CyclicDependencies,
    #[error("phase {phase} has invalid duration share {share}")]
    InvalidShare { phase: String, share: f64 },
    #[error("phase duration shares sum to {0:.4}, expected 1.0")]
    InvalidShares(f64),
}

/// A static catalog entry: one kind of construction work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseTemplate {
    pub id: String,
    /// Display name. Derived from the id when left empty.
    #[serde(default)]
    pub name: String,
    /// Fraction of the total project duration.
    pub duration_share: f64,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl PhaseTemplate {
    pub fn new(id: &str, duration_share: f64, dependencies: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: format_phase_name(id),
            duration_share,
            dependencies: dependencies.iter().map(|dep| (*dep).to_string()).collect(),
        }
    }

    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            format_phase_name(&self.id)
        } else {
            self.name.clone()
        }
    }
}

/// Ordered set of phase templates. Declaration order is the sequential build order.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseCatalog {
    pub phases: Vec<PhaseTemplate>,
}

impl PhaseCatalog {
    pub fn new(phases: Vec<PhaseTemplate>) -> Self {
        Self { phases }
    }

    /// The residential build sequence used when no custom catalog is configured.
    pub fn standard() -> Self {
        Self::new(vec![
            PhaseTemplate::new(EXCAVATION_FOUNDATION, 0.15, &[]),
            PhaseTemplate::new(STRUCTURE_MASONRY, 0.25, &[EXCAVATION_FOUNDATION]),
            PhaseTemplate::new(ROOFING, 0.10, &[STRUCTURE_MASONRY]),
            PhaseTemplate::new(PLASTERING, 0.15, &[ROOFING]),
            PhaseTemplate::new(ELECTRICAL_PLUMBING, 0.12, &[PLASTERING]),
            PhaseTemplate::new(FLOORING_TILING, 0.10, &[ELECTRICAL_PLUMBING]),
            PhaseTemplate::new(CARPENTRY_DOORS_WINDOWS, 0.08, &[PLASTERING]),
            PhaseTemplate::new(
                PAINTING_FINISHING,
                0.05,
                &[FLOORING_TILING, CARPENTRY_DOORS_WINDOWS],
            ),
        ])
    }

    pub fn get(&self, id: &str) -> Option<&PhaseTemplate> {
        self.phases.iter().find(|phase| phase.id == id)
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Checks the structural integrity of the catalog.
    ///
    /// With `require_declaration_order`, every prerequisite must be declared before
    /// its dependent so that laying phases out in declaration order never starts a
    /// phase ahead of its prerequisites.
    pub fn validate(&self, require_declaration_order: bool) -> Result<(), CatalogError> {
        if self.phases.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut position: HashMap<&str, usize> = HashMap::new();
        for (idx, phase) in self.phases.iter().enumerate() {
            if !phase.duration_share.is_finite() || phase.duration_share < 0.0 {
                return Err(CatalogError::InvalidShare {
                    phase: phase.id.clone(),
                    share: phase.duration_share,
                });
            }
            if position.insert(phase.id.as_str(), idx).is_some() {
                return Err(CatalogError::DuplicatePhase(phase.id.clone()));
            }
        }

        for (idx, phase) in self.phases.iter().enumerate() {
            for dep in &phase.dependencies {
                let dep_idx = position.get(dep.as_str()).ok_or_else(|| {
                    CatalogError::UnknownDependency {
                        phase: phase.id.clone(),
                        dependency: dep.clone(),
                    }
                })?;
                if require_declaration_order && *dep_idx >= idx {
                    return Err(CatalogError::DependencyOutOfOrder {
                        phase: phase.id.clone(),
                        dependency: dep.clone(),
                    });
                }
            }
        }

        self.topological_order()?;

        let share_sum: f64 = self.phases.iter().map(|phase| phase.duration_share).sum();
        if (share_sum - 1.0).abs() > SHARE_TOLERANCE {
            return Err(CatalogError::InvalidShares(share_sum));
        }

        Ok(())
    }

    /// Phase indices ordered so that every prerequisite precedes its dependents.
    pub fn topological_order(&self) -> Result<Vec<usize>, CatalogError> {
        let mut graph: DiGraph<usize, ()> = DiGraph::new();
        let mut indices: HashMap<&str, NodeIndex> = HashMap::new();

        for (idx, phase) in self.phases.iter().enumerate() {
            indices.insert(phase.id.as_str(), graph.add_node(idx));
        }

        for phase in &self.phases {
            let phase_idx = indices[phase.id.as_str()];
            for dep in &phase.dependencies {
                let dep_idx = *indices.get(dep.as_str()).ok_or_else(|| {
                    CatalogError::UnknownDependency {
                        phase: phase.id.clone(),
                        dependency: dep.clone(),
                    }
                })?;
                graph.add_edge(dep_idx, phase_idx, ());
            }
        }

        let sorted = toposort(&graph, None).map_err(|_| CatalogError::CyclicDependencies)?;
        Ok(sorted.into_iter().map(|node| graph[node]).collect())
    }
}

/// Turns a phase id into a display name: `structure_masonry` -> `Structure Masonry`.
pub fn format_phase_name(id: &str) -> String {
    id.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_is_valid_for_sequential_placement() {
        let catalog = PhaseCatalog::standard();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.validate(true), Ok(()));
    }

    #[test]
    fn standard_catalog_shares_sum_to_one() {
        let sum: f64 = PhaseCatalog::standard()
            .phases
            .iter()
            .map(|phase| phase.duration_share)
            .sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn format_phase_name_title_cases_words() {
        assert_eq!(format_phase_name("excavation_foundation"), "Excavation Foundation");
        assert_eq!(
            format_phase_name("carpentry_doors_windows"),
            "Carpentry Doors Windows"
        );
        assert_eq!(format_phase_name("roofing"), "Roofing");
    }

    #[test]
    fn display_name_falls_back_to_formatted_id() {
        let template = PhaseTemplate {
            id: "site_clearing".to_string(),
            name: String::new(),
            duration_share: 1.0,
            dependencies: vec![],
        };
        assert_eq!(template.display_name(), "Site Clearing");
    }

    #[test]
    fn validate_rejects_unknown_dependency() {
        let catalog = PhaseCatalog::new(vec![
            PhaseTemplate::new("a", 0.5, &[]),
            PhaseTemplate::new("b", 0.5, &["missing"]),
        ]);
        assert_eq!(
            catalog.validate(false),
            Err(CatalogError::UnknownDependency {
                phase: "b".to_string(),
                dependency: "missing".to_string(),
            })
        );
    }

    #[test]
    fn validate_rejects_cycles() {
        let catalog = PhaseCatalog::new(vec![
            PhaseTemplate::new("a", 0.5, &["b"]),
            PhaseTemplate::new("b", 0.5, &["a"]),
        ]);
        assert_eq!(catalog.validate(false), Err(CatalogError::CyclicDependencies));
    }

    #[test]
    fn validate_rejects_prerequisite_declared_later_when_order_is_required() {
        let catalog = PhaseCatalog::new(vec![
            PhaseTemplate::new("b", 0.5, &["a"]),
            PhaseTemplate::new("a", 0.5, &[]),
        ]);
        assert!(matches!(
            catalog.validate(true),
            Err(CatalogError::DependencyOutOfOrder { .. })
        ));
        assert_eq!(catalog.validate(false), Ok(()));
    }

    #[test]
    fn validate_rejects_duplicates_empty_and_bad_shares() {
        let duplicate = PhaseCatalog::new(vec![
            PhaseTemplate::new("a", 0.5, &[]),
            PhaseTemplate::new("a", 0.5, &[]),
        ]);
        assert_eq!(
            duplicate.validate(true),
            Err(CatalogError::DuplicatePhase("a".to_string()))
        );

        assert_eq!(PhaseCatalog::new(vec![]).validate(true), Err(CatalogError::Empty));

        let shares = PhaseCatalog::new(vec![
            PhaseTemplate::new("a", 0.5, &[]),
            PhaseTemplate::new("b", 0.2, &["a"]),
        ]);
        assert!(matches!(
            shares.validate(true),
            Err(CatalogError::InvalidShares(_))
        ));
    }

    #[test]
    fn validate_rejects_non_finite_and_negative_shares() {
        for share in [f64::NAN, f64::INFINITY, -0.25] {
            let catalog = PhaseCatalog::new(vec![
                PhaseTemplate::new("a", 1.0, &[]),
                PhaseTemplate::new("b", share, &["a"]),
            ]);
            let error = catalog.validate(true).unwrap_err();
            assert!(
                matches!(&error, CatalogError::InvalidShare { phase, .. } if phase == "b"),
                "share {share} gave {error:?}"
            );
        }
    }

    #[test]
    fn topological_order_places_prerequisites_first() {
        let catalog = PhaseCatalog::new(vec![
            PhaseTemplate::new("finish", 0.2, &["walls", "roof"]),
            PhaseTemplate::new("roof", 0.3, &["walls"]),
            PhaseTemplate::new("walls", 0.5, &[]),
        ]);
        let order = catalog.topological_order().unwrap();
        let pos = |idx: usize| order.iter().position(|value| *value == idx).unwrap();
        assert!(pos(2) < pos(1));
        assert!(pos(1) < pos(0));
    }
}
