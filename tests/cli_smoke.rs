use std::process::Command;

#[test]
fn help_displays_overview() {
    let binary = env!("CARGO_BIN_EXE_park-board");
    let output = Command::new(binary)
        .arg("--help")
        .output()
        .expect("invoke park-board --help");

    assert!(output.status.success(), "help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Parking lot occupancy board client"),
        "expected overview text in help output"
    );
    for subcommand in ["watch", "status", "park"] {
        assert!(stdout.contains(subcommand), "missing {subcommand} in help");
    }
}

#[test]
fn park_without_slot_fails_before_any_request() {
    let binary = env!("CARGO_BIN_EXE_park-board");
    // Nothing listens on this port; validation must fail first.
    let output = Command::new(binary)
        .args(["--url", "http://127.0.0.1:9", "park", "--plate", "XYZ-123"])
        .output()
        .expect("invoke park-board park");

    assert!(!output.status.success(), "park without slot should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Please select a slot!"),
        "unexpected stderr: {stderr}"
    );
}
