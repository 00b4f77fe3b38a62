mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_no_arguments_prints_usage() {
    GeoddTest::new()
        .assert_success()
        .stdout(predicate::str::starts_with("Usage: geodd"));
}

#[test]
fn test_help_lists_commands() {
    GeoddTest::new().arg("--help").assert_success_contains_all(&[
        "parse",
        "distance",
        "geojson",
        "convert",
        "--format=<format>",
    ]);
}

#[test]
fn test_command_help() {
    GeoddTest::new()
        .args(["help", "distance"])
        .assert_success_contains_all(&["--unit=<unit>", "--decimals=<n>", "--precise"]);
    GeoddTest::new()
        .args(["help", "convert"])
        .assert_success_contains("--from=<unit>");
    GeoddTest::new()
        .args(["help", "nope"])
        .assert_success_contains("Unknown command: nope");
}

#[test]
fn test_version_shows_build_info() {
    GeoddTest::new()
        .arg("--version")
        .assert_success()
        .stdout(predicate::str::starts_with("geodd "))
        .stdout(predicate::str::contains("Build:"))
        .stdout(predicate::str::contains("Features:"));
}

#[test]
fn test_unknown_option() {
    GeoddTest::new()
        .args(["1, 2", "parse", "--frobnicate"])
        .assert_error("Unknown option: --frobnicate");
}

#[test]
fn test_option_requires_value() {
    GeoddTest::new()
        .args(["1, 2", "parse", "--format"])
        .assert_error("Option --format requires a value");
}

#[test]
fn test_flag_rejects_value() {
    GeoddTest::new()
        .args(["1", "2", "3", "4", "distance", "--precise=yes"])
        .assert_error("Option --precise does not take a value");
}

#[test]
fn test_missing_command() {
    GeoddTest::new()
        .args(["52.5", "13.4"])
        .assert_error("No command found");
}

#[test]
fn test_missing_data_arguments() {
    GeoddTest::new()
        .arg("parse")
        .assert_error("Need at least command and one argument");
}

#[test]
fn test_wrong_argument_count() {
    GeoddTest::new()
        .args(["1", "2", "3", "distance"])
        .assert_error("Expected <from> <to>, <lat1> <lon1> <lat2> <lon2>, or @file");
    GeoddTest::new()
        .args(["1", "2", "3", "parse"])
        .assert_error("Expected <coordinate>, <lat> <lon>, or @file");
}

#[test]
fn test_invalid_format() {
    GeoddTest::new()
        .args(["--format=xml", "1, 2", "parse"])
        .assert_error("Invalid format: xml");
}

#[test]
fn test_options_are_command_specific() {
    GeoddTest::new()
        .args(["1, 2", "parse", "--decimals=2"])
        .assert_error("Option --decimals not valid for parse command");
    GeoddTest::new()
        .args(["10", "convert", "--from=m", "--to=km", "--unit=mi"])
        .assert_error("Option --unit not valid for convert command");
}

#[test]
fn test_invalid_unit() {
    GeoddTest::new()
        .args(["1", "2", "3", "4", "distance", "--unit=furlong"])
        .assert_error("Invalid unit: furlong");
}

#[test]
fn test_options_may_precede_arguments() {
    GeoddTest::new()
        .args(["--format=csv", "--no-headers", "52.5", "13.4", "parse"])
        .assert_success()
        .stdout("52.5,13.4\n");
}
