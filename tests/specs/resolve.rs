//! Behavioral specs for `testmap resolve`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// INPUT NORMALIZATION
// =============================================================================

/// > A given test module is selected as-is
#[test]
fn given_test_module_is_selected() {
    let temp = Project::python();
    resolve()
        .pwd(temp.path())
        .args(&["tests/unit/app/modules/test_pkg.py"])
        .passes()
        .stdout_eq("tests/unit/app/modules/test_pkg.py\n");
}

/// > Paths that do not exist are dropped silently
#[test]
fn nonexistent_paths_are_dropped() {
    let temp = Project::python();
    resolve()
        .pwd(temp.path())
        .args(&["src/app/gone.py,tests/unit/app/modules/test_gone.py"])
        .passes()
        .stdout_eq("");
}

/// > Comma-separated entries are trimmed, empty entries skipped
#[test]
fn comma_separated_entries_are_trimmed() {
    let temp = Project::python();
    resolve()
        .pwd(temp.path())
        .args(&[" tests/unit/app/states/test_pkg.py ,, ./tests/unit/app/test_utils_files.py"])
        .passes()
        .stdout_eq("tests/unit/app/states/test_pkg.py\ntests/unit/app/test_utils_files.py\n");
}

/// > An absolute path to a file is read as a newline-separated list
#[test]
fn absolute_list_file_is_expanded() {
    let temp = Project::python();
    temp.file(
        "changed.txt",
        "src/app/utils/files.py\ntests/unit/app/states/test_pkg.py\n",
    );
    let list = temp.path().join("changed.txt");

    resolve()
        .pwd(temp.path())
        .args(&[list.to_str().unwrap()])
        .passes()
        .stdout_eq("tests/unit/app/states/test_pkg.py\n");
}

// =============================================================================
// CONVENTION MATCHING
// =============================================================================

/// > A source file selects its test module in every category that has one,
/// > plus the sibling tree for files under `modules/`
#[test]
fn source_file_selects_convention_tests() {
    let temp = Project::python();
    resolve()
        .pwd(temp.path())
        .args(&["src/app/modules/pkg.py"])
        .passes()
        .stdout_eq(
            "tests/unit/app/modules/test_pkg.py\n\
             tests/integration/app/modules/test_pkg.py\n\
             tests/unit/app/states/test_pkg.py\n",
        );
}

/// > A package init file selects the matching test package directory
#[test]
fn package_init_selects_test_package() {
    let temp = Project::python();
    temp.file("tests/unit/test_app/test_cli.py", "");
    resolve()
        .pwd(temp.path())
        .args(&["src/app/__init__.py"])
        .passes()
        .stdout_eq("tests/unit/test_app\n");
}

/// > Source files without a matching test module select nothing
#[test]
fn source_without_tests_selects_nothing() {
    let temp = Project::python();
    resolve()
        .pwd(temp.path())
        .args(&["src/app/utils/files.py"])
        .passes()
        .stdout_eq("");
}

#[test]
fn verbose_shows_origins_and_summary() {
    let temp = Project::python();
    resolve()
        .pwd(temp.path())
        .args(&["-v", "--no-color", "src/app/modules/pkg.py"])
        .passes()
        .stdout_has("tests/unit/app/modules/test_pkg.py  (convention: src/app/modules/pkg.py)")
        .stdout_has("3 test modules from 1 source path (no filename map)");
}

#[test]
fn verbose_reports_empty_selection() {
    let temp = Project::python();
    resolve()
        .pwd(temp.path())
        .args(&["-v", "--no-color", "src/app/utils/files.py"])
        .passes()
        .stdout_eq("no test modules selected (no filename map)\n");
}

// =============================================================================
// FILENAME MAP
// =============================================================================

const FILENAME_MAP: &str = "\
src/app/utils/*.py:
  - unit.app.test_utils_files
  - unit.app.test_missing
'src/app/modules/*':
  - unit.app.test_utils_files
";

/// > Map rules add their existing targets for matching sources
#[test]
fn filename_map_adds_targets() {
    let temp = Project::python();
    temp.file("tests/filename_map.yml", FILENAME_MAP);
    resolve()
        .pwd(temp.path())
        .args(&["src/app/utils/files.py"])
        .passes()
        .stdout_eq("tests/unit/app/test_utils_files.py\n");
}

/// > The map adds to convention results rather than replacing them
#[test]
fn filename_map_extends_convention_results() {
    let temp = Project::python();
    temp.file("tests/filename_map.yml", FILENAME_MAP);
    let json = resolve()
        .json()
        .pwd(temp.path())
        .args(&["src/app/modules/pkg.py"])
        .passes();

    assert_eq!(
        json.tests(),
        vec![
            "tests/unit/app/modules/test_pkg.py",
            "tests/integration/app/modules/test_pkg.py",
            "tests/unit/app/states/test_pkg.py",
            "tests/unit/app/test_utils_files.py",
        ]
    );
    assert_eq!(
        json.origin("tests/unit/app/test_utils_files.py")["kind"],
        "filename_map"
    );
    assert_eq!(
        json.origin("tests/unit/app/test_utils_files.py")["pattern"],
        "src/app/modules/*"
    );
    assert_eq!(json.map_status(), "loaded");
    assert_eq!(json.value()["filename_map"]["rules"], 2);
}

/// > An undecodable map is skipped and convention results still apply
#[test]
fn broken_filename_map_is_skipped() {
    let temp = Project::python();
    temp.file("tests/filename_map.yml", "- just\n- a list\n");
    let json = resolve()
        .json()
        .pwd(temp.path())
        .args(&["src/app/modules/pkg.py"])
        .passes();

    assert_eq!(json.tests().len(), 3);
    assert_eq!(json.map_status(), "unavailable");
}

#[test]
fn custom_filename_map_path() {
    let temp = Project::python();
    temp.config("[filename_map]\npath = \"ci/map.yaml\"\n");
    temp.file("ci/map.yaml", FILENAME_MAP);
    resolve()
        .pwd(temp.path())
        .args(&["src/app/utils/files.py"])
        .passes()
        .stdout_eq("tests/unit/app/test_utils_files.py\n");
}

// =============================================================================
// JSON OUTPUT
// =============================================================================

#[test]
fn json_output_has_expected_shape() {
    let temp = Project::python();
    let json = resolve()
        .json()
        .pwd(temp.path())
        .args(&["tests/unit/app/states/test_pkg.py,src/app/utils/files.py"])
        .passes();
    let value = json.value();

    assert!(value["timestamp"].is_string());
    assert_eq!(json.tests(), vec!["tests/unit/app/states/test_pkg.py"]);
    assert_eq!(
        json.origin("tests/unit/app/states/test_pkg.py")["kind"],
        "given"
    );
    assert_eq!(value["sources"], serde_json::json!(["src/app/utils/files.py"]));
    assert_eq!(json.map_status(), "missing");
}

/// > Each path appears once even when several sources select it
#[test]
fn shared_test_module_listed_once() {
    let temp = Project::python();
    let json = resolve()
        .json()
        .pwd(temp.path())
        .args(&["tests/unit/app/modules/test_pkg.py,src/app/modules/pkg.py"])
        .passes();

    assert_eq!(json.tests().len(), 3);
    assert_eq!(
        json.origin("tests/unit/app/modules/test_pkg.py")["kind"],
        "given"
    );
}
