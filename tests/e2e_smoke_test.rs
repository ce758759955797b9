use std::fs;

use tempfile::tempdir;

use drafter::Args;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

fn args_for(diagram: Option<&str>, output_dir: &str) -> Args {
    Args {
        diagram: diagram.map(str::to_string),
        output_dir: output_dir.to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_renders_both_diagrams_by_default() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().to_string_lossy().to_string();

    drafter::run(&args_for(None, &output_dir)).expect("default run should succeed");

    for file_name in [
        "smart_helpdesk_architecture.png",
        "agentic_triage_workflow.png",
    ] {
        let path = temp_dir.path().join(file_name);
        let bytes = fs::read(&path)
            .unwrap_or_else(|_| panic!("missing output file {}", path.display()));
        assert!(
            bytes.starts_with(PNG_SIGNATURE),
            "{file_name} does not start with the PNG signature"
        );
    }
}

#[test]
fn e2e_renders_single_selected_diagram() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().to_string_lossy().to_string();

    drafter::run(&args_for(Some("workflow"), &output_dir)).expect("workflow run should succeed");

    assert!(temp_dir.path().join("agentic_triage_workflow.png").exists());
    assert!(!temp_dir.path().join("smart_helpdesk_architecture.png").exists());
}

#[test]
fn e2e_repeated_runs_produce_identical_bytes() {
    let first_dir = tempdir().expect("Failed to create temp directory");
    let second_dir = tempdir().expect("Failed to create temp directory");

    drafter::run(&args_for(
        Some("architecture"),
        &first_dir.path().to_string_lossy(),
    ))
    .expect("first run should succeed");
    drafter::run(&args_for(
        Some("architecture"),
        &second_dir.path().to_string_lossy(),
    ))
    .expect("second run should succeed");

    let first = fs::read(first_dir.path().join("smart_helpdesk_architecture.png")).unwrap();
    let second = fs::read(second_dir.path().join("smart_helpdesk_architecture.png")).unwrap();

    assert_eq!(first, second, "identical inputs must produce identical PNGs");
}

#[test]
fn e2e_unknown_diagram_selector_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().to_string_lossy().to_string();

    let result = drafter::run(&args_for(Some("sequence"), &output_dir));
    assert!(result.is_err());
}

#[test]
fn e2e_unwritable_output_path_fails() {
    let result = drafter::run(&args_for(
        Some("workflow"),
        "/nonexistent/path/that/does/not/exist",
    ));
    assert!(result.is_err());
}

#[test]
fn e2e_respects_style_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().to_string_lossy().to_string();

    let config_path = temp_dir.path().join("drafter.toml");
    fs::write(
        &config_path,
        "[style]\nbackground_color = \"#f0f0f0\"\n\n[raster]\nscale = 1.0\n",
    )
    .unwrap();

    let args = Args {
        diagram: Some("workflow".to_string()),
        output_dir,
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };

    drafter::run(&args).expect("configured run should succeed");
    assert!(temp_dir.path().join("agentic_triage_workflow.png").exists());
}
