/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(relative: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(relative)
        .to_string_lossy()
        .into_owned()
}

const NETTY_PATCHES: &str = "io.netty@netty-handler@4.1.100.Final \
                             io.netty@netty-codec-http2@4.1.118.Final \
                             com.example@lib1@2.0.0 \
                             com.example@lib2@2.0.0";

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("pombump")
            .args(["analyze", &fixture("bom-project/pom.xml")])
            .assert()
            .code(0);
    }

    /// Exit code 0: conflicts are recommendations, not failures
    #[test]
    fn test_exit_code_success_with_conflicts() {
        cargo_bin_cmd!("pombump")
            .args([
                "analyze",
                &fixture("bom-project/pom.xml"),
                "--patches",
                "com.example@lib1@2.0.0 com.example@lib2@3.0.0",
            ])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("pombump").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("pombump").arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("pombump")
            .args(["analyze", "pom.xml", "--invalid-option"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid output format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("pombump")
            .args(["analyze", &fixture("bom-project/pom.xml"), "-o", "xml"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("unsupported output format: xml"));
    }

    /// Exit code 3: Application error - non-existent POM file
    #[test]
    fn test_exit_code_application_error_missing_pom() {
        cargo_bin_cmd!("pombump")
            .args(["analyze", "/nonexistent/path/pom.xml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("POM file not found"));
    }

    /// Exit code 3: Application error - malformed POM file
    #[test]
    fn test_exit_code_application_error_invalid_pom() {
        cargo_bin_cmd!("pombump")
            .args(["analyze", &fixture("invalid/pom.xml")])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("failed to parse POM file"));
    }

    /// Exit code 3: Application error - malformed patch spec
    #[test]
    fn test_exit_code_application_error_invalid_patch() {
        cargo_bin_cmd!("pombump")
            .args([
                "analyze",
                &fixture("bom-project/pom.xml"),
                "--patches",
                "io.netty@netty-handler",
            ])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("invalid patch 'io.netty@netty-handler'"));
    }
}

#[test]
fn test_e2e_human_format() {
    cargo_bin_cmd!("pombump")
        .args(["analyze", &fixture("bom-project/pom.xml"), "--patches", NETTY_PATCHES])
        .assert()
        .success()
        .stdout(predicate::str::contains("POM Analysis:"))
        .stdout(predicate::str::contains("Dependencies Summary:"))
        .stdout(predicate::str::contains("Total dependencies: 7"))
        .stdout(predicate::str::contains("BOM Imports: 1"))
        .stdout(predicate::str::contains(
            "io.netty:netty-bom -> 4.1.118.Final (type=pom, scope=import)",
        ))
        .stdout(predicate::str::contains("shared.version: 2.0.0"))
        .stdout(predicate::str::contains("Warnings:"));
}

#[test]
fn test_e2e_json_format() {
    let output = cargo_bin_cmd!("pombump")
        .args([
            "analyze",
            &fixture("bom-project/pom.xml"),
            "--patches",
            NETTY_PATCHES,
            "--output",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["dependencies"]["total"], 7);
    assert_eq!(json["dependencies"]["using_properties"], 3);
    assert_eq!(json["boms"].as_array().unwrap().len(), 1);

    let patches = json["patches"].as_array().unwrap();
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0]["groupId"], "io.netty");
    assert_eq!(patches[0]["artifactId"], "netty-bom");
    assert_eq!(patches[0]["version"], "4.1.118.Final");
    assert_eq!(patches[0]["scope"], "import");

    assert_eq!(json["property_updates"]["shared.version"], "2.0.0");
    assert_eq!(json["conflicts"].as_array().unwrap().len(), 1);
    assert!(json["issues"].as_array().unwrap().is_empty());
    assert!(json["cannot_fix"].as_array().unwrap().is_empty());
}

#[test]
fn test_e2e_bom_patch_keeps_import_coordinates() {
    let output = cargo_bin_cmd!("pombump")
        .args([
            "analyze",
            &fixture("bom-project/pom.xml"),
            "--patches",
            "io.netty@netty-bom@4.1.118.Final org.slf4j@slf4j-api@1.7.36",
            "-o",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let patches = json["patches"].as_array().unwrap();
    assert_eq!(patches.len(), 2);
    assert_eq!(patches[0]["artifactId"], "netty-bom");
    assert_eq!(patches[0]["type"], "pom");
    assert_eq!(patches[0]["scope"], "import");
    assert_eq!(patches[1]["artifactId"], "slf4j-api");
    assert!(patches[1].get("scope").is_none());
}

#[test]
fn test_e2e_bom_override_warning() {
    cargo_bin_cmd!("pombump")
        .args([
            "analyze",
            &fixture("bom-project/pom.xml"),
            "--patches",
            "io.netty@netty-transport@4.1.118.Final",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "BOM netty-bom may override patches for io.netty:netty-transport",
        ));
}

#[test]
fn test_e2e_yaml_format_to_report_file() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("report.yaml");

    cargo_bin_cmd!("pombump")
        .args([
            "analyze",
            &fixture("bom-project/pom.xml"),
            "--output",
            "yml",
            "--report-file",
            report.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Report written to"));

    let content = fs::read_to_string(&report).unwrap();
    assert!(content.contains("pom_file:"));
    assert!(content.contains("netty-bom"));
}

#[test]
fn test_e2e_patch_file_input() {
    let dir = TempDir::new().unwrap();
    let patch_file = dir.path().join("patches.yaml");
    fs::write(
        &patch_file,
        r#"patches:
  - groupId: org.slf4j
    artifactId: slf4j-api
    version: 1.7.36
"#,
    )
    .unwrap();

    cargo_bin_cmd!("pombump")
        .args([
            "analyze",
            &fixture("bom-project/pom.xml"),
            "--patch-file",
            patch_file.to_str().unwrap(),
            "--patches",
            "com.fasterxml.jackson.core@jackson-databind@2.15.3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("org.slf4j:slf4j-api -> 1.7.36"))
        .stdout(predicate::str::contains("jackson.version: 2.15.3"));
}

#[test]
fn test_e2e_output_patch_files_merge() {
    let dir = TempDir::new().unwrap();
    let deps = dir.path().join("deps.yaml");
    let props = dir.path().join("props.yaml");
    fs::write(
        &deps,
        r#"patches:
  - groupId: io.netty
    artifactId: netty-bom
    version: 4.1.100.Final
    type: pom
    scope: import
  - groupId: junit
    artifactId: junit
    version: 4.13.2
"#,
    )
    .unwrap();

    cargo_bin_cmd!("pombump")
        .args([
            "analyze",
            &fixture("bom-project/pom.xml"),
            "--patches",
            NETTY_PATCHES,
            "--output-deps",
            deps.to_str().unwrap(),
            "--output-properties",
            props.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Dependency patches written to"))
        .stderr(predicate::str::contains("Property updates written to"));

    let deps_content = fs::read_to_string(&deps).unwrap();
    assert!(deps_content.contains("4.1.118.Final"));
    assert!(!deps_content.contains("4.1.100.Final"));
    assert!(deps_content.contains("junit"));

    let props_content = fs::read_to_string(&props).unwrap();
    assert!(props_content.contains("property: shared.version"));
    assert!(props_content.contains("value: 2.0.0"));
}

#[test]
fn test_e2e_no_patch_files_when_nothing_to_write() {
    let dir = TempDir::new().unwrap();
    let deps = dir.path().join("deps.yaml");

    cargo_bin_cmd!("pombump")
        .args([
            "analyze",
            &fixture("bom-project/pom.xml"),
            "--output-deps",
            deps.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No patches recommended."));

    assert!(!deps.exists());
}

#[test]
fn test_e2e_search_properties() {
    cargo_bin_cmd!("pombump")
        .args([
            "analyze",
            &fixture("multi-module/module1/pom.xml"),
            "--search-properties",
            "--patches",
            "io.netty@netty-handler@4.1.118.Final",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("netty.version = 4.1.94.Final"))
        .stdout(predicate::str::contains("jackson.version = 2.15.2"))
        .stdout(predicate::str::contains("netty.version: 4.1.118.Final"))
        .stdout(predicate::str::contains("Warnings:").not());
}

#[test]
fn test_e2e_missing_properties_warn_without_search() {
    cargo_bin_cmd!("pombump")
        .args(["analyze", &fixture("multi-module/module1/pom.xml")])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Property netty.version is referenced but not found in project",
        ))
        .stdout(predicate::str::contains("netty.version = <undefined>"));
}

#[test]
fn test_e2e_no_dependency_management() {
    let output = cargo_bin_cmd!("pombump")
        .args([
            "analyze",
            &fixture("bom-project/pom.xml"),
            "--no-dependency-management",
            "-o",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["dependencies"]["total"], 5);
    assert_eq!(json["boms"].as_array().unwrap().len(), 1);
}
