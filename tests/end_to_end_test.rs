use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_command(args: &[&str]) -> Output {
    Command::new("cargo")
        .arg("run")
        .arg("--")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_full_deck_generation() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out_dir = temp_dir.path().join("slides");

    let output = run_command(&[out_dir.to_str().unwrap()]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    // One artifact per module plus the combined deck
    let odp_files: Vec<String> = fs::read_dir(&out_dir)
        .expect("Output directory missing")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| name.ends_with(".odp"))
        .collect();

    assert!(odp_files.contains(&"podman-course.odp".to_string()));
    assert!(odp_files.contains(&"intro.odp".to_string()));
    assert!(odp_files.contains(&"00-setup.odp".to_string()));
    assert!(odp_files.contains(&"closing.odp".to_string()));
    assert!(odp_files.len() > 3, "expected several module decks");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Saved "), "missing per-artifact save lines");
    assert!(
        stdout.contains("module files + 1 combined deck"),
        "missing final summary line"
    );
}
