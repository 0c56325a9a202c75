// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2020 Tobias Hunger <tobias.hunger@gmail.com>

//! Run the `pkgdesc-build` binary and check exit codes and output.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const CONFIG: &str = r#"
name = "sssd.testlib"
version = "0.1-14"
description = "System Services Security Daemon python test suite"
author = "SSSD QE Team"
url = "https://github.com/SSSD/sssd"
packages = ["sssd", "sssd.testlib", "sssd.testlib.ipa", "sssd.testlib.common"]
install_requires = ["paramiko", "PyYAML", "pytest"]
license = "GNU GPL v3.0"
classifiers = ["Programming Language :: Python", "Programming Language :: Python :: 3,6"]

[package_data]
"" = ["LICENSE"]
"#;

fn tempdir() -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix("pkgdesc-cli-")
        .rand_bytes(8)
        .tempdir()
        .expect("Failed to create temporary directory")
}

fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("setup.toml");
    std::fs::write(&path, contents).expect("Failed to write config");
    path
}

fn write_readme(dir: &Path) {
    std::fs::write(dir.join("README.rst"), "Test suite").expect("Failed to write README");
}

fn run(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pkgdesc-build"))
        .env_remove("PKGDESC_LOG")
        .env("PKGDESC_LOG_FORMAT", "compact")
        .args(args)
        .output()
        .expect("Failed to run pkgdesc-build")
}

#[test]
fn writes_manifest_to_stdout() {
    let tmp = tempdir();
    let config = write_config(tmp.path(), CONFIG);
    write_readme(tmp.path());

    let output = run(&[config.as_os_str()]);
    assert!(output.status.success(), "{:?}", output);

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not a JSON manifest");
    assert_eq!(json["name"], "sssd.testlib");
    assert_eq!(json["version"], "0.1-14");
    assert_eq!(json["long_description"], "Test suite");
    assert_eq!(json["packages"].as_array().map(Vec::len), Some(4));
    assert_eq!(
        json["classifiers"][1],
        "Programming Language :: Python :: 3,6"
    );
}

#[test]
fn writes_manifest_to_file() {
    let tmp = tempdir();
    let config = write_config(tmp.path(), CONFIG);
    write_readme(tmp.path());
    let manifest = tmp.path().join("manifest.json");

    let output = run(&[
        config.as_os_str(),
        OsStr::new("--output"),
        manifest.as_os_str(),
    ]);
    assert!(output.status.success(), "{:?}", output);
    assert!(output.stdout.is_empty());

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&manifest).unwrap()).unwrap();
    assert_eq!(json["install_requires"][2], "pytest");
}

#[test]
fn duplicate_packages_fail() {
    let tmp = tempdir();
    let config = write_config(
        tmp.path(),
        "name = \"sssd.testlib\"\nversion = \"0.1-14\"\npackages = [\"sssd.testlib\", \"sssd.testlib\"]\n",
    );
    write_readme(tmp.path());

    let output = run(&[config.as_os_str()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("`packages`"), "{}", stderr);
}

#[test]
fn missing_readme_fails() {
    let tmp = tempdir();
    let config = write_config(tmp.path(), CONFIG);

    let output = run(&[config.as_os_str()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("README.rst"), "{}", stderr);
}

#[test]
fn readme_override() {
    let tmp = tempdir();
    let config = write_config(tmp.path(), CONFIG);
    let readme = tmp.path().join("DESCRIPTION.txt");
    std::fs::write(&readme, "Other text").unwrap();

    let output = run(&[config.as_os_str(), OsStr::new("--readme"), readme.as_os_str()]);
    assert!(output.status.success(), "{:?}", output);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["long_description"], "Other text");
}

#[test]
fn unknown_option_fails() {
    let tmp = tempdir();
    let config = write_config(tmp.path(), "name = \"x\"\nversion = \"1\"\nlicence = \"MIT\"\n");
    write_readme(tmp.path());

    let output = run(&[config.as_os_str()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("licence"), "{}", stderr);
}

#[test]
fn deny_warnings_fails_on_findings() {
    let tmp = tempdir();
    let config = write_config(tmp.path(), CONFIG);
    write_readme(tmp.path());

    let output = run(&[config.as_os_str(), OsStr::new("--check")]);
    assert!(output.status.success(), "{:?}", output);
    assert!(output.stdout.is_empty());

    let output = run(&[config.as_os_str(), OsStr::new("--check"), OsStr::new("--deny-warnings")]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("GNU GPL v3.0"), "{}", stderr);
}
