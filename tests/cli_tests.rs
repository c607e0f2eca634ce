use std::process::Command;

/// Helper to run the winconfig binary and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_winconfig"))
        .args(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

const EXPECTED_ARGS: [&str; 9] = [
    "..",
    "-G",
    "Visual Studio 16 2019",
    "-A",
    "x64",
    "-DCMAKE_CXX_FLAGS=/D_SILENCE_TR1_NAMESPACE_DEPRECATION_WARNING",
    "-DCMAKE_BUILD_TYPE=Release",
    "-DCMAKE_CROSSCOMPILING=FALSE",
    "-DPLATFORM=win-X86_64",
];

const RENDERED_COMMAND: &str = "cmake .. -G \"Visual Studio 16 2019\" -A x64 \
     -DCMAKE_CXX_FLAGS=/D_SILENCE_TR1_NAMESPACE_DEPRECATION_WARNING \
     -DCMAKE_BUILD_TYPE=Release -DCMAKE_CROSSCOMPILING=FALSE -DPLATFORM=win-X86_64";

#[test]
fn test_help_command() {
    let (code, stdout, _stderr) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Configures the Windows x86_64 build"));
    assert!(stdout.contains("show"));
    assert!(stdout.contains("--dry-run"));
}

#[test]
fn test_show_prints_command_without_running() {
    let (code, stdout, _stderr) = run_cli(&["show"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), RENDERED_COMMAND);
}

#[test]
fn test_dry_run_prints_command_without_running() {
    let (code, stdout, _stderr) = run_cli(&["--dry-run"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), RENDERED_COMMAND);
}

/// End-to-end tests driving the binary against a stub `cmake`.
///
/// The stub is a shell script placed at the front of PATH; it records
/// its argv to a file named by RECORD_FILE and exits with a scripted
/// status. winconfig itself reads no environment - the variables below
/// only reach the stub by inheritance.
#[cfg(unix)]
mod stub {
    use super::EXPECTED_ARGS;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use std::process::Command;
    use tempfile::TempDir;

    fn install_stub(dir: &Path, exit_code: i32) {
        let stub = dir.join("cmake");
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > \"$RECORD_FILE\"\nexit {exit_code}\n"
        );
        fs::write(&stub, script).expect("write stub");
        fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).expect("chmod stub");
    }

    fn run_with_stub(dir: &Path, record: &Path) -> (i32, Vec<String>) {
        let path = format!(
            "{}:{}",
            dir.display(),
            std::env::var("PATH").unwrap_or_default()
        );
        let output = Command::new(env!("CARGO_BIN_EXE_winconfig"))
            .env("PATH", path)
            .env("RECORD_FILE", record)
            .output()
            .expect("Failed to execute command");

        let code = output.status.code().unwrap_or(-1);
        let recorded = fs::read_to_string(record)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default();
        (code, recorded)
    }

    #[test]
    fn test_stub_receives_exact_argument_vector() {
        let dir = TempDir::new().expect("tempdir");
        install_stub(dir.path(), 0);
        let record = dir.path().join("recorded.txt");

        let (code, recorded) = run_with_stub(dir.path(), &record);
        assert_eq!(code, 0);
        assert_eq!(recorded, EXPECTED_ARGS);
    }

    #[test]
    fn test_two_runs_record_identical_vectors() {
        let dir = TempDir::new().expect("tempdir");
        install_stub(dir.path(), 0);

        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        let (code_a, recorded_a) = run_with_stub(dir.path(), &first);
        let (code_b, recorded_b) = run_with_stub(dir.path(), &second);

        assert_eq!(code_a, 0);
        assert_eq!(code_b, 0);
        assert_eq!(recorded_a, recorded_b);
    }

    #[test]
    fn test_tool_failure_is_reflected_in_exit_status() {
        let dir = TempDir::new().expect("tempdir");
        install_stub(dir.path(), 7);
        let record = dir.path().join("recorded.txt");

        let (code, recorded) = run_with_stub(dir.path(), &record);
        assert_eq!(code, 7);
        // The stub still ran with the full vector before failing.
        assert_eq!(recorded, EXPECTED_ARGS);
    }

    #[test]
    fn test_tool_not_found_exits_nonzero() {
        // An empty directory as the entire PATH: no cmake anywhere.
        let dir = TempDir::new().expect("tempdir");
        let output = Command::new(env!("CARGO_BIN_EXE_winconfig"))
            .env("PATH", dir.path())
            .output()
            .expect("Failed to execute command");

        assert!(!output.status.success());
        let combined = format!(
            "{}{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        assert!(combined.contains("not found"));
    }
}
