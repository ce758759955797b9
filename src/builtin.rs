//! The built-in diagram datasets.
//!
//! Both diagrams describe the smart helpdesk triage system. Every
//! coordinate, category, and color below is a hand-authored literal; nothing
//! is computed or read from external input. The constructors only assemble
//! data, they never draw.

use crate::{
    canvas::CanvasConfig,
    color::Color,
    diagram::{Annotation, Diagram, Entity, MarkerShape, SubStep},
    geometry::Point,
};

/// Parses a literal palette color.
///
/// Only called with the hex literals below, which are all valid.
fn palette(color: &str) -> Color {
    Color::new(color).expect("builtin palette colors are valid")
}

/// The system architecture diagram: components, data flows, and zone
/// groupings, with a sub-step cluster on the agentic engine.
pub fn architecture() -> Diagram {
    let frontend = palette("#1FB8CD");
    let backend = palette("#DB4545");
    let ai = palette("#2E8B57");
    let storage = palette("#5D878F");
    let communication = palette("#D2BA4C");
    let integrations = palette("#B4413C");

    let canvas = CanvasConfig::new(
        (0.0, 7.0),
        (-1.0, 5.25),
        1000,
        760,
        "smart_helpdesk_architecture.png",
    );
    let mut diagram = Diagram::new("Smart Helpdesk Agentic Triage System", canvas);

    let components = [
        ("User Interface", 1.0, 3.0, "Frontend", frontend),
        ("API Gateway", 2.5, 4.0, "Backend", backend),
        ("Auth Service", 2.5, 2.0, "Backend", backend),
        ("Agentic Engine", 4.0, 3.5, "AI System", ai),
        ("Knowledge Base", 5.5, 4.5, "Storage", storage),
        ("Database", 5.5, 2.5, "Storage", storage),
        ("Real-time Hub", 2.5, 0.5, "Communication", communication),
        ("External APIs", 6.5, 3.5, "Integrations", integrations),
    ];

    for (name, x, y, category, color) in components {
        diagram.add_entity(Entity::new(
            name,
            Point::new(x, y),
            category,
            MarkerShape::Circle,
            color,
        ));
    }

    let connections = [
        ("User Interface", "API Gateway", "Requests"),
        ("User Interface", "Auth Service", "Login"),
        ("API Gateway", "Agentic Engine", "Tickets"),
        ("API Gateway", "Database", "Data"),
        ("Agentic Engine", "Knowledge Base", "Search"),
        ("Agentic Engine", "External APIs", "AI Calls"),
        ("Agentic Engine", "Database", "Suggestions"),
        ("Real-time Hub", "User Interface", "Updates"),
        ("API Gateway", "Real-time Hub", "Events"),
    ];

    for (source, target, label) in connections {
        diagram.connect(source, target, label);
    }

    // The agentic engine's internal loop, drawn as a small marker cluster
    // around its node.
    diagram.annotate(Annotation::SubSteps {
        color: ai,
        steps: vec![
            SubStep::new(Point::new(4.0, 3.2), "Plan"),
            SubStep::new(Point::new(4.1, 3.1), "Classify"),
            SubStep::new(Point::new(4.2, 3.3), "Retrieve"),
            SubStep::new(Point::new(4.1, 3.7), "Draft"),
            SubStep::new(Point::new(4.0, 3.8), "Decide"),
        ],
    });

    // Zone rectangles grouping related components; each borrows the color of
    // its representative entity.
    let zones = [
        (0.5, -0.5, 1.5, 3.5, frontend),
        (2.0, -0.5, 3.0, 4.5, backend),
        (3.5, 2.8, 4.5, 4.2, ai),
        (5.0, 2.0, 6.0, 5.0, storage),
    ];

    for (min_x, min_y, max_x, max_y, color) in zones {
        diagram.annotate(Annotation::Zone {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
            color,
        });
    }

    diagram
}

/// The triage workflow diagram: the linear process chain, the confidence
/// decision diamond, and both branch paths converging on the audit log.
pub fn workflow() -> Diagram {
    let process = palette("#1FB8CD");
    let decision = palette("#DB4545");

    let canvas = CanvasConfig::new(
        (0.0, 11.0),
        (3.0, 7.0),
        1200,
        600,
        "agentic_triage_workflow.png",
    );
    let mut diagram = Diagram::new("Smart Helpdesk Agentic Triage Workflow", canvas);

    let process_steps = [
        ("Ticket Creation", 1.0, 5.0),
        ("Agent Planning", 2.0, 5.0),
        ("Classification", 3.0, 5.0),
        ("KB Retrieval", 4.0, 5.0),
        ("Reply Drafting", 5.0, 5.0),
        ("Confidence Scoring", 6.0, 5.0),
    ];

    for (name, x, y) in process_steps {
        diagram.add_entity(Entity::new(
            name,
            Point::new(x, y),
            "Process",
            MarkerShape::Square,
            process,
        ));
    }

    diagram.add_entity(Entity::new(
        "Auto-close Check",
        Point::new(7.0, 5.0),
        "Decision",
        MarkerShape::Diamond,
        decision,
    ));

    let tail_steps = [
        ("Auto-resolve", 8.5, 6.0),
        ("Assign to Human", 8.5, 4.0),
        ("Audit Log", 10.0, 5.0),
    ];

    for (name, x, y) in tail_steps {
        diagram.add_entity(Entity::new(
            name,
            Point::new(x, y),
            "Process",
            MarkerShape::Square,
            process,
        ));
    }

    let connections = [
        ("Ticket Creation", "Agent Planning", "Plan"),
        ("Agent Planning", "Classification", "Classify"),
        ("Classification", "KB Retrieval", "Search KB"),
        ("KB Retrieval", "Reply Drafting", "Draft"),
        ("Reply Drafting", "Confidence Scoring", "Score"),
        ("Confidence Scoring", "Auto-close Check", "Check threshold"),
        ("Auto-close Check", "Auto-resolve", "High confidence"),
        ("Auto-close Check", "Assign to Human", "Low confidence"),
        ("Auto-resolve", "Audit Log", "Log"),
        ("Assign to Human", "Audit Log", "Log"),
    ];

    for (source, target, label) in connections {
        diagram.connect(source, target, label);
    }

    diagram.annotate(Annotation::BranchLabel {
        position: Point::new(7.7, 5.5),
        lines: vec!["YES".to_string(), "(\u{2265}0.78)".to_string()],
    });

    diagram.annotate(Annotation::BranchLabel {
        position: Point::new(7.7, 4.5),
        lines: vec!["NO".to_string(), "(<0.78)".to_string()],
    });

    diagram
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::MarkerShape;

    #[test]
    fn architecture_diagram_is_valid() {
        architecture().validate().unwrap();
    }

    #[test]
    fn workflow_diagram_is_valid() {
        workflow().validate().unwrap();
    }

    #[test]
    fn architecture_dataset_shape() {
        let diagram = architecture();
        assert_eq!(diagram.entities().len(), 8);
        assert_eq!(diagram.connections().len(), 9);
        // One sub-step cluster plus four zones.
        assert_eq!(diagram.annotations().len(), 5);
    }

    #[test]
    fn architecture_legend_has_one_entry_per_category() {
        let legend = architecture().legend();
        let labels: Vec<&str> = legend.iter().map(|entry| entry.label.as_str()).collect();

        assert_eq!(
            labels,
            [
                "Frontend",
                "Backend",
                "AI System",
                "Storage",
                "Communication",
                "Integrations"
            ]
        );
    }

    #[test]
    fn workflow_legend_is_process_then_decision() {
        let legend = workflow().legend();

        assert_eq!(legend.len(), 2);
        assert_eq!(legend[0].label, "Process");
        assert_eq!(legend[0].marker, MarkerShape::Square);
        assert_eq!(legend[1].label, "Decision");
        assert_eq!(legend[1].marker, MarkerShape::Diamond);
    }

    #[test]
    fn workflow_branches_converge_on_audit_log() {
        let diagram = workflow();

        let into_audit: Vec<&str> = diagram
            .connections()
            .iter()
            .filter(|c| c.target() == "Audit Log")
            .map(|c| c.source())
            .collect();

        assert_eq!(into_audit, ["Auto-resolve", "Assign to Human"]);
    }

    #[test]
    fn output_file_names_are_distinct() {
        assert_ne!(
            architecture().canvas().file_name(),
            workflow().canvas().file_name()
        );
    }
}
