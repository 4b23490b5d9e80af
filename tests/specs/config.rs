//! Behavioral specs for testmap.toml handling.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Without a config file the default layout applies
#[test]
fn missing_config_uses_defaults() {
    let temp = Project::empty();
    temp.file("src/pkg/mod.py", "");
    temp.file("tests/unit/pkg/test_mod.py", "");
    resolve()
        .pwd(temp.path())
        .args(&["src/pkg/mod.py"])
        .passes()
        .stdout_eq("tests/unit/pkg/test_mod.py\n");
}

/// > Config is discovered from a parent directory, which becomes the root
#[test]
fn config_discovered_from_subdirectory() {
    let temp = Project::python();
    temp.file("docs/readme.txt", "");
    resolve()
        .pwd(temp.path().join("docs"))
        .args(&["src/app/modules/pkg.py"])
        .passes()
        .stdout_has("tests/unit/app/modules/test_pkg.py");
}

#[test]
fn custom_layout_is_honored() {
    let temp = Project::empty();
    temp.config(
        r#"
[layout]
source_root = "lib"
test_root = "spec"
categories = ["fast"]
test_prefix = "check_"
extension = "rb"
package_init = "init.rb"
cross_category = []
"#,
    );
    temp.file("lib/net/http.rb", "");
    temp.file("spec/fast/net/check_http.rb", "");
    resolve()
        .pwd(temp.path())
        .args(&["lib/net/http.rb"])
        .passes()
        .stdout_eq("spec/fast/net/check_http.rb\n");
}

/// > Unsupported config versions are rejected (exit 2)
#[test]
fn unsupported_version_fails() {
    let temp = Project::python();
    temp.config("version = 2\n");
    resolve()
        .pwd(temp.path())
        .args(&["src/app/modules/pkg.py"])
        .exits(2)
        .stderr_has("unsupported config version 2");
}

#[test]
fn invalid_toml_fails() {
    let temp = Project::python();
    temp.config("version = 1\n[layout\n");
    resolve()
        .pwd(temp.path())
        .args(&["src/app/modules/pkg.py"])
        .exits(2)
        .stderr_has("testmap: config error");
}

#[test]
fn empty_categories_fail_validation() {
    let temp = Project::python();
    temp.config("[layout]\ncategories = []\n");
    resolve()
        .pwd(temp.path())
        .args(&["src/app/modules/pkg.py"])
        .exits(2)
        .stderr_has("categories");
}

/// > Unknown keys produce a warning but do not fail
#[test]
fn unknown_keys_warn() {
    let temp = Project::python();
    temp.config("[layout]\nflavour = \"x\"\n[extras]\n");
    resolve()
        .pwd(temp.path())
        .args(&["src/app/modules/pkg.py"])
        .passes()
        .stderr_has("unrecognized field `layout.flavour` (ignored)")
        .stderr_has("unrecognized field `extras` (ignored)")
        .stdout_has("tests/unit/app/modules/test_pkg.py");
}

/// > An explicit config path that does not exist is an error
#[test]
fn explicit_missing_config_fails() {
    let temp = Project::python();
    resolve()
        .pwd(temp.path())
        .args(&["-C", "nope.toml", "src/app/modules/pkg.py"])
        .exits(2)
        .stderr_has("config file not found");
}

#[test]
fn explicit_root_overrides_config_directory() {
    let temp = Project::python();
    temp.file("other/src/x.py", "");
    temp.file("other/tests/unit/test_x.py", "");
    resolve()
        .pwd(temp.path())
        .args(&["--root", "other", "src/x.py"])
        .passes()
        .stdout_eq("tests/unit/test_x.py\n");
}
