use crate::domain::phase::PhaseCatalog;

pub fn generate_phase_markdown(catalog: &PhaseCatalog) -> String {
    let diagram = generate_flow_diagram(catalog);
    let shares = generate_share_table(catalog);
    format!("# Construction Phase Dependencies\n```mermaid\n{diagram}\n```\n\n{shares}\n")
}

/// Mermaid flowchart of the catalog's prerequisite graph.
pub fn generate_flow_diagram(catalog: &PhaseCatalog) -> String {
    let mut lines = Vec::new();
    lines.push("flowchart TD".to_string());

    for phase in &catalog.phases {
        lines.push(format!("    {}[{}]", phase.id, phase.display_name()));
    }

    for phase in &catalog.phases {
        for dep in &phase.dependencies {
            lines.push(format!("    {dep} --> {}", phase.id));
        }
    }

    lines.join("\n")
}

pub fn generate_share_table(catalog: &PhaseCatalog) -> String {
    let mut lines = vec![
        "| Phase | Share | Prerequisites |".to_string(),
        "|-------|-------|---------------|".to_string(),
    ];
    for phase in &catalog.phases {
        let prerequisites = if phase.dependencies.is_empty() {
            "-".to_string()
        } else {
            phase.dependencies.join(", ")
        };
        lines.push(format!(
            "| {} | {:.0}% | {prerequisites} |",
            phase.display_name(),
            phase.duration_share * 100.0
        ));
    }
    lines.join("\n")
}
