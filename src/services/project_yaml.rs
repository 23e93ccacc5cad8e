use std::io;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::complexity::Complexity;
use crate::domain::project::{AreaUnit, Project, ProjectScale};

/// Largest floor area per storey accepted, in square feet.
pub const MAX_AREA_SQ_FT: f64 = 100_000.0;
pub const MAX_FLOORS: u32 = 20;

#[derive(Error, Debug)]
pub enum ProjectYamlError {
    #[error("failed to read project yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse project yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("area must be positive, got {0}")]
    InvalidArea(f64),
    #[error("area of {0} sq ft exceeds the supported maximum of {max} sq ft", max = MAX_AREA_SQ_FT)]
    AreaTooLarge(f64),
    #[error("floors must be positive")]
    InvalidFloors,
    #[error("{0} floors exceed the supported maximum of {max}", max = MAX_FLOORS)]
    TooManyFloors(u32),
    #[error("timeline must not be negative, got {0}")]
    InvalidTimeline(i64),
}

#[derive(Deserialize)]
struct ProjectRecord {
    name: Option<String>,
    area: Option<f64>,
    #[serde(default)]
    area_unit: AreaUnit,
    floors: Option<u32>,
    complexity: Option<Complexity>,
    timeline: Option<i64>,
    budget: Option<f64>,
    estimated_cost: Option<f64>,
}

pub fn load_project_from_yaml_file(path: &str) -> Result<Project, ProjectYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_project_from_yaml_str(&contents)
}

pub fn deserialize_project_from_yaml_str(input: &str) -> Result<Project, ProjectYamlError> {
    let record: ProjectRecord = serde_yaml::from_str(input)?;

    let area = record.area.ok_or(ProjectYamlError::MissingField("area"))?;
    if !area.is_finite() || area <= 0.0 {
        return Err(ProjectYamlError::InvalidArea(area));
    }
    let area_sq_ft = record.area_unit.to_square_feet(area);
    if area_sq_ft > MAX_AREA_SQ_FT {
        return Err(ProjectYamlError::AreaTooLarge(area_sq_ft));
    }
    let floors = record.floors.ok_or(ProjectYamlError::MissingField("floors"))?;
    if floors == 0 {
        return Err(ProjectYamlError::InvalidFloors);
    }
    if floors > MAX_FLOORS {
        return Err(ProjectYamlError::TooManyFloors(floors));
    }
    let timeline = record.timeline.unwrap_or(0);
    let requested_days =
        u32::try_from(timeline).map_err(|_| ProjectYamlError::InvalidTimeline(timeline))?;

    let scale = ProjectScale::new(
        area_sq_ft,
        floors,
        record.complexity.unwrap_or_default(),
        requested_days,
    );

    Ok(Project {
        name: record.name.unwrap_or_else(|| "Project".to_string()),
        scale,
        area_input: area,
        area_unit: record.area_unit,
        budget: record.budget.unwrap_or(0.0).max(0.0),
        estimated_cost: record.estimated_cost.unwrap_or(0.0).max(0.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_record_is_parsed() {
        let yaml = r#"
name: Villa
area: 2000
area_unit: sq_ft
floors: 2
complexity: luxury
timeline: 180
budget: 4500000
estimated_cost: 5000000
"#;
        let project = deserialize_project_from_yaml_str(yaml).unwrap();
        assert_eq!(project.name, "Villa");
        assert_eq!(project.scale.area_sq_ft, 2000.0);
        assert_eq!(project.scale.floors, 2);
        assert_eq!(project.scale.complexity, Complexity::Luxury);
        assert_eq!(project.scale.requested_days, 180);
        assert_eq!(project.budget, 4_500_000.0);
        assert_eq!(project.estimated_cost, 5_000_000.0);
    }

    #[test]
    fn defaults_apply_to_optional_fields() {
        let project = deserialize_project_from_yaml_str("area: 200\nfloors: 1\n").unwrap();
        assert_eq!(project.name, "Project");
        assert_eq!(project.area_unit, AreaUnit::SquareYards);
        assert_eq!(project.area_input, 200.0);
        assert_eq!(project.scale.area_sq_ft, 1800.0);
        assert_eq!(project.scale.complexity, Complexity::Medium);
        assert_eq!(project.scale.requested_days, 0);
        assert_eq!(project.budget, 0.0);
    }

    #[test]
    fn unknown_complexity_falls_back_to_medium() {
        let yaml = "area: 100\nfloors: 1\ncomplexity: palace\n";
        let project = deserialize_project_from_yaml_str(yaml).unwrap();
        assert_eq!(project.scale.complexity, Complexity::Medium);
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let error = deserialize_project_from_yaml_str("floors: 1\n").unwrap_err();
        assert!(matches!(error, ProjectYamlError::MissingField("area")));

        let error = deserialize_project_from_yaml_str("area: 100\n").unwrap_err();
        assert!(matches!(error, ProjectYamlError::MissingField("floors")));
    }

    #[test]
    fn non_positive_values_are_rejected() {
        let error = deserialize_project_from_yaml_str("area: 0\nfloors: 1\n").unwrap_err();
        assert!(matches!(error, ProjectYamlError::InvalidArea(_)));

        let error = deserialize_project_from_yaml_str("area: 10\nfloors: 0\n").unwrap_err();
        assert!(matches!(error, ProjectYamlError::InvalidFloors));

        let error =
            deserialize_project_from_yaml_str("area: 10\nfloors: 1\ntimeline: -3\n").unwrap_err();
        assert!(matches!(error, ProjectYamlError::InvalidTimeline(-3)));
    }

    #[test]
    fn non_finite_areas_are_rejected() {
        for yaml in ["area: .inf\nfloors: 1\n", "area: .nan\nfloors: 1\n", "area: -.inf\nfloors: 1\n"] {
            let error = deserialize_project_from_yaml_str(yaml).unwrap_err();
            assert!(matches!(error, ProjectYamlError::InvalidArea(_)), "{yaml}");
        }
    }

    #[test]
    fn oversized_projects_are_rejected() {
        let error =
            deserialize_project_from_yaml_str("area: 1e12\narea_unit: sq_ft\nfloors: 1\n")
                .unwrap_err();
        assert!(matches!(error, ProjectYamlError::AreaTooLarge(_)));

        // 20000 sq yards is 180000 sq ft
        let error = deserialize_project_from_yaml_str("area: 20000\nfloors: 1\n").unwrap_err();
        assert!(matches!(error, ProjectYamlError::AreaTooLarge(area) if area == 180_000.0));

        let error =
            deserialize_project_from_yaml_str("area: 100\nfloors: 500\n").unwrap_err();
        assert!(matches!(error, ProjectYamlError::TooManyFloors(500)));

        let project = deserialize_project_from_yaml_str(
            "area: 100000\narea_unit: sq_ft\nfloors: 20\n",
        )
        .unwrap();
        assert_eq!(project.scale.floors, 20);
    }
}
