/// End-to-end tests for the CLI
///
/// Every invocation runs inside its own temporary directory so a config file
/// in the repository can never leak into a test.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

fn write_build_info(dir: &Path, name: &str) -> std::path::PathBuf {
    let path = dir.join("build.json");
    fs::write(
        &path,
        format!(
            r#"{{"name": "{}", "number": "42", "started": "2024-01-01T00:00:00.000+0000"}}"#,
            name
        ),
    )
    .unwrap();
    path
}

fn write_graph(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("graph.json");
    fs::write(
        &path,
        r#"{"component_id": "gav://g:a:1.0", "nodes": [{"component_id": "gav://g:b:2.0"}]}"#,
    )
    .unwrap();
    path
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("artifact-scan")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("scan"))
            .stdout(predicate::str::contains("publish-build"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("artifact-scan")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("artifact-scan")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Missing required --graph
    #[test]
    fn test_exit_code_missing_graph() {
        cargo_bin_cmd!("artifact-scan").arg("scan").assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("artifact-scan")
            .args(["scan", "--graph", "g.json", "-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 3: No scanner URL configured
    #[test]
    fn test_exit_code_missing_xray_url() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("artifact-scan")
            .current_dir(dir.path())
            .args(["scan", "--graph", "graph.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Missing configuration: xray_url"));
    }

    /// Exit code 3: Graph file does not exist
    #[test]
    fn test_exit_code_missing_graph_file() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("artifact-scan")
            .current_dir(dir.path())
            .args(["--xray-url", UNREACHABLE_URL, "scan", "--graph", "missing.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("missing.json"));
    }

    /// Exit code 3: Scanner unreachable
    #[test]
    fn test_exit_code_scanner_unreachable() {
        let dir = TempDir::new().unwrap();
        write_graph(dir.path());
        cargo_bin_cmd!("artifact-scan")
            .current_dir(dir.path())
            .args(["--xray-url", UNREACHABLE_URL, "scan", "--graph", "graph.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("An error occurred"));
    }
}

mod publish_build_tests {
    use super::*;

    #[test]
    fn test_dry_run_prints_document() {
        let dir = TempDir::new().unwrap();
        write_build_info(dir.path(), "my-build");

        cargo_bin_cmd!("artifact-scan")
            .current_dir(dir.path())
            .args([
                "--artifactory-url",
                UNREACHABLE_URL,
                "publish-build",
                "--build-info",
                "build.json",
                "--dry-run",
            ])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("\"name\": \"my-build\""))
            .stdout(predicate::str::contains("\"number\": \"42\""))
            .stderr(predicate::str::contains("Dry run"));
    }

    #[test]
    fn test_invalid_build_info_rejected() {
        let dir = TempDir::new().unwrap();
        write_build_info(dir.path(), "");

        cargo_bin_cmd!("artifact-scan")
            .current_dir(dir.path())
            .args([
                "--artifactory-url",
                UNREACHABLE_URL,
                "publish-build",
                "--build-info",
                "build.json",
                "--dry-run",
            ])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("'name' must not be empty"));
    }

    #[test]
    fn test_publish_unreachable_repository() {
        let dir = TempDir::new().unwrap();
        write_build_info(dir.path(), "my-build");

        cargo_bin_cmd!("artifact-scan")
            .current_dir(dir.path())
            .args([
                "--artifactory-url",
                UNREACHABLE_URL,
                "publish-build",
                "--build-info",
                "build.json",
            ])
            .assert()
            .code(3);
    }
}

mod config_file_tests {
    use super::*;

    #[test]
    fn test_config_discovered_in_working_directory() {
        let dir = TempDir::new().unwrap();
        write_build_info(dir.path(), "from-config");
        fs::write(
            dir.path().join("artifact-scan.config.yml"),
            format!("artifactory_url: {}\nlog_format: json\n", UNREACHABLE_URL),
        )
        .unwrap();

        cargo_bin_cmd!("artifact-scan")
            .current_dir(dir.path())
            .args(["publish-build", "--build-info", "build.json", "--dry-run"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("\"name\": \"from-config\""));
    }

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        write_build_info(dir.path(), "explicit");
        let config_path = dir.path().join("custom.yml");
        fs::write(&config_path, format!("artifactory_url: {}\n", UNREACHABLE_URL)).unwrap();

        cargo_bin_cmd!("artifact-scan")
            .current_dir(dir.path())
            .args(["--config", "custom.yml"])
            .args(["publish-build", "--build-info", "build.json", "--dry-run"])
            .assert()
            .code(0);
    }

    #[test]
    fn test_unknown_field_warns() {
        let dir = TempDir::new().unwrap();
        write_build_info(dir.path(), "b");
        fs::write(
            dir.path().join("artifact-scan.config.yml"),
            format!("artifactory_url: {}\nfavorite_color: blue\n", UNREACHABLE_URL),
        )
        .unwrap();

        cargo_bin_cmd!("artifact-scan")
            .current_dir(dir.path())
            .args(["publish-build", "--build-info", "build.json", "--dry-run"])
            .assert()
            .code(0)
            .stderr(predicate::str::contains(
                "Unknown config field 'favorite_color'",
            ));
    }

    #[test]
    fn test_invalid_config_value() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("artifact-scan.config.yml"),
            "max_wait_minutes: 0\n",
        )
        .unwrap();

        cargo_bin_cmd!("artifact-scan")
            .current_dir(dir.path())
            .args(["scan", "--graph", "graph.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("max_wait_minutes must be greater than 0"));
    }

    #[test]
    fn test_invalid_config_url_rejected_before_overrides() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("artifact-scan.config.yml"),
            "xray_url: not-a-url\n",
        )
        .unwrap();

        cargo_bin_cmd!("artifact-scan")
            .current_dir(dir.path())
            .args(["--xray-url", UNREACHABLE_URL, "scan", "--graph", "graph.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("not an HTTP URL"));
    }
}
