//! Behavioral specs for `testmap args`.
//!
//! The runner argument list comes after `--`; the rewritten list is
//! printed one argument per line.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

fn args_cmd(temp: &Project, extra: &[&str]) -> assert_cmd::assert::Assert {
    testmap_cmd()
        .arg("args")
        .args(extra)
        .current_dir(temp.path())
        .env_remove("TESTMAP_CONFIG")
        .assert()
}

/// > `--from-filenames=<value>` is removed and replaced by the selection
#[test]
fn inline_option_is_replaced() {
    let temp = Project::python();
    args_cmd(
        &temp,
        &["--", "-x", "--from-filenames=src/app/modules/pkg.py"],
    )
    .success()
    .stdout(
        "-x\n\
         tests/unit/app/modules/test_pkg.py\n\
         tests/integration/app/modules/test_pkg.py\n\
         tests/unit/app/states/test_pkg.py\n",
    );
}

/// > The option value may also be the following argument
#[test]
fn separate_option_value_is_consumed() {
    let temp = Project::python();
    args_cmd(
        &temp,
        &["--", "--from-filenames", "src/app/__init__.py", "-q"],
    )
    .success()
    .stdout("-q\n");
}

/// > Paths already present in the runner arguments are not added twice
#[test]
fn existing_runner_paths_are_not_duplicated() {
    let temp = Project::python();
    args_cmd(
        &temp,
        &[
            "--",
            "tests/unit/app/states/test_pkg.py",
            "--from-filenames=src/app/modules/pkg.py",
        ],
    )
    .success()
    .stdout(
        "tests/unit/app/states/test_pkg.py\n\
         tests/unit/app/modules/test_pkg.py\n\
         tests/integration/app/modules/test_pkg.py\n",
    );
}

/// > Without the option the arguments pass through unchanged
#[test]
fn arguments_without_option_pass_through() {
    let temp = Project::python();
    args_cmd(&temp, &["--", "-x", "tests/unit"])
        .success()
        .stdout("-x\ntests/unit\n");
}

#[test]
fn custom_option_name_from_flag() {
    let temp = Project::python();
    args_cmd(
        &temp,
        &["--option", "--changed", "--", "--changed=src/app/modules/pkg.py"],
    )
    .success()
    .stdout(predicates::str::contains("tests/unit/app/modules/test_pkg.py"));
}

#[test]
fn custom_option_name_from_config() {
    let temp = Project::python();
    temp.config("[runner]\noption = \"--changed\"\n");
    args_cmd(&temp, &["--", "--changed", "src/app/modules/pkg.py"])
        .success()
        .stdout(predicates::str::contains("tests/unit/app/states/test_pkg.py"))
        .stdout(predicates::str::contains("--changed").not());
}

/// > A trailing option with no value is dropped
#[test]
fn trailing_option_without_value_is_dropped() {
    let temp = Project::python();
    args_cmd(&temp, &["--", "-x", "--from-filenames"])
        .success()
        .stdout("-x\n");
}
