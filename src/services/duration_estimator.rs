use tracing::debug;

use crate::config::EngineConfig;
use crate::domain::complexity::Complexity;

/// Realistic, unconstrained build duration in days.
///
/// `floor(area * floors * factor)`, scaled by `1 + (floors - 1) * floor_increment`,
/// never below `min_project_days`. Negative or NaN areas count as zero.
pub fn estimate_base_duration(
    area_sq_ft: f64,
    floors: u32,
    complexity: Complexity,
    config: &EngineConfig,
) -> u32 {
    let area = area_sq_ft.max(0.0);
    let floors = floors as f64;
    let factor = config.complexity_factors.factor(complexity);

    let base_days = (area * floors * factor).floor();
    let floor_multiplier = 1.0 + (floors - 1.0) * config.floor_increment;
    let total_days = (base_days * floor_multiplier).floor().max(0.0) as u32;
    let duration = total_days.max(config.min_project_days);

    debug!(
        area,
        floors,
        %complexity,
        base_days,
        floor_multiplier,
        duration,
        "estimated base duration"
    );
    duration
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medium_two_floor_house_matches_formula() {
        // 2000 * 2 * 0.5 = 2000 days, * 1.15 for the second floor
        let days = estimate_base_duration(2000.0, 2, Complexity::Medium, &EngineConfig::default());
        assert_eq!(days, 2300);
    }

    #[test]
    fn small_builds_are_clamped_to_minimum() {
        let config = EngineConfig::default();
        assert_eq!(estimate_base_duration(100.0, 1, Complexity::Simple, &config), 90);
        assert_eq!(estimate_base_duration(0.0, 1, Complexity::Luxury, &config), 90);
        assert_eq!(estimate_base_duration(500.0, 0, Complexity::Medium, &config), 90);
    }

    #[test]
    fn degenerate_inputs_do_not_panic() {
        let config = EngineConfig::default();
        assert_eq!(estimate_base_duration(-250.0, 3, Complexity::Medium, &config), 90);
        assert_eq!(estimate_base_duration(f64::NAN, 2, Complexity::Medium, &config), 90);
    }

    #[test]
    fn duration_grows_with_complexity() {
        let config = EngineConfig::default();
        let test_cases = vec![
            (Complexity::Simple, 1200),
            (Complexity::Medium, 1500),
            (Complexity::Complex, 1950),
            (Complexity::Luxury, 2550),
        ];

        for (complexity, expected) in test_cases {
            let days = estimate_base_duration(3000.0, 1, complexity, &config);
            assert_eq!(days, expected, "complexity {complexity}");
        }
    }

    #[test]
    fn each_additional_floor_adds_fifteen_percent() {
        let config = EngineConfig::default();
        // 1000 * 3 * 0.4 = 1200, * 1.3 = 1560
        assert_eq!(estimate_base_duration(1000.0, 3, Complexity::Simple, &config), 1560);
    }

    #[test]
    fn minimum_is_configurable() {
        let config = EngineConfig {
            min_project_days: 30,
            ..EngineConfig::default()
        };
        assert_eq!(estimate_base_duration(100.0, 1, Complexity::Simple, &config), 40);
    }
}
